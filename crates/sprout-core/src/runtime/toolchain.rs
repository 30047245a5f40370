//! Repository initialization and environment provisioning

use super::tool::{git_tool, python_tool, virtualenv_tool, ExternalTool, ToolOutcome};
use crate::config::Settings;
use crate::error::{require_dir_name, require_text, Result};
use std::ffi::OsStr;
use std::path::Path;

/// Name of the environment directory when none is given
pub const DEFAULT_ENV_NAME: &str = "env";

/// The external collaborators `create_package` delegates to
///
/// [`SystemToolchain`] launches the real programs. Anything else (a dry
/// run, a test double) only has to report an outcome.
pub trait Toolchain {
    /// Turn `path` into a git repository
    fn init_repository(&self, path: &Path) -> Result<ToolOutcome>;

    /// Create an isolated environment at `path/name`
    fn provision_environment(&self, path: &Path, name: &str) -> ToolOutcome;
}

/// Toolchain backed by the programs installed on this machine
#[derive(Debug, Clone)]
pub struct SystemToolchain {
    git: ExternalTool,
    virtualenv: ExternalTool,
    settings: Settings,
}

impl SystemToolchain {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            git: git_tool(settings.git.clone()),
            virtualenv: virtualenv_tool(settings.virtualenv.clone()),
            settings: settings.clone(),
        }
    }

    /// Interpreter for `virtualenv -p`, detected on demand unless overridden
    fn python(&self) -> ExternalTool {
        python_tool(self.settings.resolve_python())
    }

    /// Toolchain configured from `SPROUT_*` environment variables
    pub fn from_env() -> Self {
        Self::from_settings(&Settings::from_env())
    }

    /// Every tool this toolchain may launch, for diagnostics
    pub fn tools(&self) -> [ExternalTool; 3] {
        [self.git.clone(), self.virtualenv.clone(), self.python()]
    }
}

impl Toolchain for SystemToolchain {
    /// Runs `git init -- <path>`
    fn init_repository(&self, path: &Path) -> Result<ToolOutcome> {
        let path = require_text("repository path", path)?;
        Ok(self.git.run(["init", "--", path]))
    }

    /// Runs `virtualenv -p <python> <path/name>`
    ///
    /// A `name` that is not a single directory name would land outside
    /// `path`, so virtualenv is not launched for it.
    fn provision_environment(&self, path: &Path, name: &str) -> ToolOutcome {
        if let Err(e) = require_dir_name("environment name", name) {
            return ToolOutcome::NotLaunched(e.to_string());
        }

        let target = path.join(name);
        let python = self.python();
        self.virtualenv.run([
            OsStr::new("-p"),
            OsStr::new(&python.config().program),
            target.as_os_str(),
        ])
    }
}

/// Initialize a git repository at `path` with the system toolchain
pub fn init_repository(path: &Path) -> Result<ToolOutcome> {
    SystemToolchain::from_env().init_repository(path)
}

/// Provision a virtualenv at `path/name` with the system toolchain
pub fn provision_environment(path: &Path, name: &str) -> ToolOutcome {
    SystemToolchain::from_env().provision_environment(path, name)
}
