//! What a `create_package` run did

use crate::runtime::ToolOutcome;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One performed scaffolding step, in execution order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Directory(PathBuf),
    Repository(ToolOutcome),
    IgnoreFile(PathBuf),
    Environment { path: PathBuf, outcome: ToolOutcome },
    SubPackage(PathBuf),
    Tests(PathBuf),
    License { path: PathBuf, name: String },
}

impl Step {
    /// Outcome of the external tool behind this step, if any
    pub fn tool_outcome(&self) -> Option<(&'static str, &ToolOutcome)> {
        match self {
            Step::Repository(outcome) => Some(("git", outcome)),
            Step::Environment { outcome, .. } => Some(("virtualenv", outcome)),
            _ => None,
        }
    }
}

/// Result of a successful `create_package` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReport {
    pub root: PathBuf,
    pub steps: Vec<Step>,
}

impl PackageReport {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self {
            steps: vec![Step::Directory(root.clone())],
            root,
        }
    }

    /// Directory of the provisioned environment, if one was requested
    pub fn environment(&self) -> Option<&Path> {
        self.steps.iter().find_map(|step| match step {
            Step::Environment { path, .. } => Some(path.as_path()),
            _ => None,
        })
    }

    /// External tools that ran but did not succeed
    pub fn tool_failures(&self) -> Vec<(&'static str, &ToolOutcome)> {
        self.steps
            .iter()
            .filter_map(Step::tool_outcome)
            .filter(|(_, outcome)| !outcome.is_success())
            .collect()
    }

    /// Number of files under the project root
    ///
    /// `.git` and the environment directory are skipped since their
    /// contents belong to the external tools.
    pub fn file_count(&self) -> usize {
        let git_dir = self.root.join(".git");
        let env_dir = self.environment();

        WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|entry| {
                entry.path() != git_dir && Some(entry.path()) != env_dir
            })
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .count()
    }
}
