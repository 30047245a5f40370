//! Package creation
//!
//! [`create_package`] composes the individual steps in a fixed order:
//! project root, git repository and `.gitignore`, environment,
//! sub-package, tests, license. Each optional step is driven by
//! [`PackageOptions`].
//!
//! Nothing is rolled back. If a step fails the error is returned as-is
//! and whatever the earlier steps created stays on disk.

pub mod layout;
pub mod report;

use crate::error::{require_dir_name, require_text, Result};
use crate::runtime::{Toolchain, DEFAULT_ENV_NAME};
use crate::templates::{create_license_file, write_ignore_file};
use std::path::PathBuf;

pub use layout::{create_sub_package, create_test_directory, make_project_root, INITIAL_VERSION};
pub use report::{PackageReport, Step};

/// Whether and where to provision an isolated environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Skip,
    /// Provision under [`DEFAULT_ENV_NAME`]
    Default,
    Named(String),
}

impl Environment {
    /// An environment with the given directory name; an empty name skips it
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.is_empty() {
            Environment::Skip
        } else {
            Environment::Named(name)
        }
    }

    /// Directory name to provision, or `None` to skip
    pub fn name(&self) -> Option<&str> {
        match self {
            Environment::Skip => None,
            Environment::Default => Some(DEFAULT_ENV_NAME),
            Environment::Named(name) if name.is_empty() => None,
            Environment::Named(name) => Some(name),
        }
    }
}

impl From<bool> for Environment {
    fn from(enabled: bool) -> Self {
        if enabled {
            Environment::Default
        } else {
            Environment::Skip
        }
    }
}

/// Inputs to [`create_package`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageOptions {
    /// Package name; also the project root and sub-package directory name
    pub package: String,

    /// Directory the project root is created in
    pub location: PathBuf,

    /// Initialize a git repository and write a `.gitignore`
    pub git: bool,

    pub env: Environment,

    /// Written into `__init__.py` and the license
    pub author: Option<String>,

    /// Create a `tests` directory
    pub test: bool,

    /// License template name; `None` or empty skips the license
    pub license: Option<String>,
}

impl PackageOptions {
    /// Options with the defaults: git on, no environment, tests on, MIT license
    pub fn new(package: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            package: package.into(),
            location: location.into(),
            git: true,
            env: Environment::Skip,
            author: None,
            test: true,
            license: Some("mit".to_string()),
        }
    }

    pub fn git(mut self, git: bool) -> Self {
        self.git = git;
        self
    }

    pub fn env(mut self, env: impl Into<Environment>) -> Self {
        self.env = env.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn test(mut self, test: bool) -> Self {
        self.test = test;
        self
    }

    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    pub fn without_license(mut self) -> Self {
        self.license = None;
        self
    }

    /// Path of the project root these options describe
    pub fn project_root(&self) -> PathBuf {
        self.location.join(&self.package)
    }

    /// Check the inputs before anything touches the filesystem
    pub fn validate(&self) -> Result<()> {
        require_dir_name("package name", &self.package)?;
        require_text("location", &self.location)?;
        if let Some(name) = self.env.name() {
            require_dir_name("environment name", name)?;
        }
        Ok(())
    }
}

/// Scaffold a new package at `options.location/options.package`
///
/// Inputs are validated before any directory is created. External tool
/// failures are recorded in the report; every other failure aborts the
/// remaining steps.
pub fn create_package<T>(options: &PackageOptions, tools: &T) -> Result<PackageReport>
where
    T: Toolchain + ?Sized,
{
    options.validate()?;

    let root = make_project_root(&options.location, &options.package)?;
    let mut report = PackageReport::new(root.clone());

    if options.git {
        let outcome = tools.init_repository(&root)?;
        report.steps.push(Step::Repository(outcome));
        let ignore = write_ignore_file::<&str>(&root, &[])?;
        report.steps.push(Step::IgnoreFile(ignore));
    }

    if let Some(name) = options.env.name() {
        let outcome = tools.provision_environment(&root, name);
        report.steps.push(Step::Environment {
            path: root.join(name),
            outcome,
        });
    }

    let sub_package = create_sub_package(&root, &options.package, options.author.as_deref())?;
    report.steps.push(Step::SubPackage(sub_package));

    if options.test {
        let tests = create_test_directory(&root)?;
        report.steps.push(Step::Tests(tests));
    }

    if let Some(name) = options.license.as_deref().filter(|name| !name.is_empty()) {
        let author = options.author.as_deref().unwrap_or("");
        let path = create_license_file(&root, name, author)?;
        report.steps.push(Step::License {
            path,
            name: name.to_string(),
        });
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScaffoldError;
    use crate::runtime::ToolOutcome;
    use chrono::Datelike;
    use std::cell::RefCell;
    use std::fs;
    use std::io;
    use std::path::Path;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Eq)]
    enum Call {
        Init(PathBuf),
        Provision(PathBuf, String),
    }

    /// Records calls and creates `.git` the way `git init` would
    #[derive(Default)]
    struct RecordingToolchain {
        calls: RefCell<Vec<Call>>,
    }

    impl Toolchain for RecordingToolchain {
        fn init_repository(&self, path: &Path) -> Result<ToolOutcome> {
            fs::create_dir(path.join(".git"))?;
            self.calls.borrow_mut().push(Call::Init(path.to_path_buf()));
            Ok(ToolOutcome::Succeeded)
        }

        fn provision_environment(&self, path: &Path, name: &str) -> ToolOutcome {
            self.calls
                .borrow_mut()
                .push(Call::Provision(path.to_path_buf(), name.to_string()));
            ToolOutcome::NotLaunched("not installed".to_string())
        }
    }

    #[test]
    fn test_default_layout() {
        let tmp = TempDir::new().unwrap();
        let tools = RecordingToolchain::default();
        let loc = tmp.path().join("loc");

        let report = create_package(&PackageOptions::new("p", &loc), &tools).unwrap();

        let root = loc.join("p");
        assert_eq!(report.root, root);
        assert!(root.join(".git").is_dir());
        assert!(root.join(".gitignore").is_file());
        assert_eq!(
            fs::read_to_string(root.join("p").join("__init__.py")).unwrap(),
            "version = \"0.1.0\"\n"
        );
        assert!(root.join("tests").join("__init__.py").is_file());

        let license = fs::read_to_string(root.join("LICENSE")).unwrap();
        let year = chrono::Local::now().year();
        assert!(license.contains("MIT"));
        assert!(license.contains(&format!("Copyright (c) {} \n", year)));

        assert_eq!(*tools.calls.borrow(), vec![Call::Init(root.clone())]);
        assert!(!root.join("env").exists());
    }

    #[test]
    fn test_report_lists_steps_in_order() {
        let tmp = TempDir::new().unwrap();
        let tools = RecordingToolchain::default();
        let options = PackageOptions::new("p", tmp.path()).env(true).author("Sam");

        let report = create_package(&options, &tools).unwrap();
        let root = tmp.path().join("p");
        assert_eq!(
            report.steps,
            vec![
                Step::Directory(root.clone()),
                Step::Repository(ToolOutcome::Succeeded),
                Step::IgnoreFile(root.join(".gitignore")),
                Step::Environment {
                    path: root.join("env"),
                    outcome: ToolOutcome::NotLaunched("not installed".to_string()),
                },
                Step::SubPackage(root.join("p")),
                Step::Tests(root.join("tests")),
                Step::License {
                    path: root.join("LICENSE"),
                    name: "mit".to_string(),
                },
            ]
        );
        assert_eq!(report.tool_failures().len(), 1);
    }

    #[test]
    fn test_without_git_skips_repository() {
        let tmp = TempDir::new().unwrap();
        let tools = RecordingToolchain::default();

        create_package(&PackageOptions::new("p", tmp.path()).git(false), &tools).unwrap();

        let root = tmp.path().join("p");
        assert!(!root.join(".git").exists());
        assert!(!root.join(".gitignore").exists());
        assert!(tools.calls.borrow().is_empty());
    }

    #[test]
    fn test_env_default_and_named() {
        let tmp = TempDir::new().unwrap();
        let tools = RecordingToolchain::default();

        let options = PackageOptions::new("a", tmp.path()).git(false).env(true);
        create_package(&options, &tools).unwrap();
        let options = PackageOptions::new("b", tmp.path())
            .git(false)
            .env(Environment::named("x"));
        create_package(&options, &tools).unwrap();
        let options = PackageOptions::new("c", tmp.path())
            .git(false)
            .env(Environment::named(""));
        create_package(&options, &tools).unwrap();

        assert_eq!(
            *tools.calls.borrow(),
            vec![
                Call::Provision(tmp.path().join("a"), "env".to_string()),
                Call::Provision(tmp.path().join("b"), "x".to_string()),
            ]
        );
    }

    #[test]
    fn test_author_reaches_metadata_and_license() {
        let tmp = TempDir::new().unwrap();
        let tools = RecordingToolchain::default();
        let options = PackageOptions::new("p", tmp.path())
            .git(false)
            .author("Sam")
            .license("apache");

        create_package(&options, &tools).unwrap();

        let root = tmp.path().join("p");
        let init = fs::read_to_string(root.join("p").join("__init__.py")).unwrap();
        assert_eq!(init, "version = \"0.1.0\"\nauthor = \"Sam\"");
        let license = fs::read_to_string(root.join("LICENSE")).unwrap();
        let year = chrono::Local::now().year();
        assert!(license.starts_with(&format!("Copyright {} Sam\n", year)));
        assert!(license.contains("Apache License"));
    }

    #[test]
    fn test_optional_artifacts_can_be_skipped() {
        let tmp = TempDir::new().unwrap();
        let tools = RecordingToolchain::default();
        let options = PackageOptions::new("p", tmp.path())
            .git(false)
            .test(false)
            .without_license();

        let report = create_package(&options, &tools).unwrap();

        let root = tmp.path().join("p");
        assert!(root.join("p").is_dir());
        assert!(!root.join("tests").exists());
        assert!(!root.join("LICENSE").exists());
        assert_eq!(report.steps.len(), 2);

        let options = PackageOptions::new("q", tmp.path()).git(false).license("");
        create_package(&options, &tools).unwrap();
        assert!(!tmp.path().join("q").join("LICENSE").exists());
    }

    #[test]
    fn test_invalid_package_names_fail_before_mutation() {
        let tmp = TempDir::new().unwrap();
        let tools = RecordingToolchain::default();
        let loc = tmp.path().join("loc");

        for name in ["", ".", "..", "a/b", "/abs"] {
            let err = create_package(&PackageOptions::new(name, &loc), &tools).unwrap_err();
            assert!(
                matches!(err, ScaffoldError::InvalidArgument { name: "package name", .. }),
                "{:?}",
                name
            );
        }
        assert!(!loc.exists());
        assert!(tools.calls.borrow().is_empty());
    }

    #[test]
    fn test_env_names_outside_root_fail_before_mutation() {
        let tmp = TempDir::new().unwrap();
        let tools = RecordingToolchain::default();
        let loc = tmp.path().join("loc");

        for name in ["/abs", "..", ".", "a/b"] {
            let options = PackageOptions::new("p", &loc).env(Environment::named(name));
            let err = create_package(&options, &tools).unwrap_err();
            assert!(
                matches!(err, ScaffoldError::InvalidArgument { name: "environment name", .. }),
                "{:?}",
                name
            );
        }
        assert!(!loc.exists());
        assert!(tools.calls.borrow().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_text_location_fails_before_mutation() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = TempDir::new().unwrap();
        let tools = RecordingToolchain::default();
        let loc = tmp.path().join(OsStr::from_bytes(b"loc\xff"));

        let err = create_package(&PackageOptions::new("p", &loc), &tools).unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidArgument { name: "location", .. }));
        assert!(!loc.exists());
    }

    #[test]
    fn test_second_run_fails_with_already_exists() {
        let tmp = TempDir::new().unwrap();
        let tools = RecordingToolchain::default();
        let options = PackageOptions::new("p", tmp.path());

        create_package(&options, &tools).unwrap();
        let err = create_package(&options, &tools).unwrap_err();

        assert!(matches!(err, ScaffoldError::Io(ref e) if e.kind() == io::ErrorKind::AlreadyExists));
        assert_eq!(tools.calls.borrow().len(), 1);
    }

    #[test]
    fn test_unknown_license_keeps_earlier_artifacts() {
        let tmp = TempDir::new().unwrap();
        let tools = RecordingToolchain::default();
        let options = PackageOptions::new("p", tmp.path()).license("wrong");

        let err = create_package(&options, &tools).unwrap_err();

        assert!(matches!(err, ScaffoldError::UnknownLicense(_)));
        let root = tmp.path().join("p");
        assert!(root.join(".gitignore").is_file());
        assert!(root.join("p").join("__init__.py").is_file());
        assert!(root.join("tests").is_dir());
        assert!(!root.join("LICENSE").exists());
    }

    #[test]
    fn test_system_git_creates_repository() {
        let tools = crate::runtime::SystemToolchain::from_env();
        if !tools.tools()[0].is_installed() {
            return;
        }
        let tmp = TempDir::new().unwrap();

        let report = create_package(&PackageOptions::new("p", tmp.path()), &tools).unwrap();

        assert!(tmp.path().join("p").join(".git").is_dir());
        assert!(report.tool_failures().is_empty());
    }
}
