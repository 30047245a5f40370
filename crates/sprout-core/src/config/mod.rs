//! Tool settings
//!
//! There are no configuration files. Each external program can be swapped
//! through an environment variable, which is mostly useful for pointing at
//! a specific git or virtualenv install.

mod interpreter;

pub use interpreter::detect_python;

/// Overrides the git binary
pub const GIT_ENV: &str = "SPROUT_GIT";
/// Overrides the virtualenv binary
pub const VIRTUALENV_ENV: &str = "SPROUT_VIRTUALENV";
/// Overrides the interpreter passed to `virtualenv -p`
pub const PYTHON_ENV: &str = "SPROUT_PYTHON";

/// Programs used by the system toolchain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub git: String,
    pub virtualenv: String,
    /// Interpreter override; `None` detects one when an environment is provisioned
    pub python: Option<String>,
}

impl Settings {
    /// Read overrides from the environment, falling back to the defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] with an explicit variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            git: get(GIT_ENV).unwrap_or_else(|| "git".to_string()),
            virtualenv: get(VIRTUALENV_ENV).unwrap_or_else(|| "virtualenv".to_string()),
            python: get(PYTHON_ENV),
        }
    }

    /// The interpreter override, or the detected interpreter
    ///
    /// Detection launches `python3 --version` (then `python --version`), so
    /// it only happens here and never while reading the settings.
    pub fn resolve_python(&self) -> String {
        self.python
            .clone()
            .unwrap_or_else(|| detect_python().to_string())
    }
}
