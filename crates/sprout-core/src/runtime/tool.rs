//! Generic wrapper around an external CLI tool
//!
//! Scaffolding treats git and virtualenv as best-effort collaborators:
//! they are launched with stdout discarded and whatever happens is
//! reported back as a [`ToolOutcome`] instead of an error.

use std::ffi::OsStr;
use std::fmt;
use std::process::{Command, Stdio};

/// Configuration for a CLI tool
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Display name for user-facing messages
    pub display_name: &'static str,
    /// Program to launch (a bare name resolved through PATH, or a full path)
    pub program: String,
    /// URL with installation instructions
    pub docs_url: &'static str,
}

/// What happened when an external tool was launched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    /// Ran and exited with status 0
    Succeeded,
    /// Ran and exited unsuccessfully; `None` when killed by a signal
    Exited(Option<i32>),
    /// Could not be started at all (usually not installed)
    NotLaunched(String),
}

impl ToolOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ToolOutcome::Succeeded)
    }
}

impl fmt::Display for ToolOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolOutcome::Succeeded => write!(f, "succeeded"),
            ToolOutcome::Exited(Some(code)) => write!(f, "exited with code {}", code),
            ToolOutcome::Exited(None) => write!(f, "terminated by signal"),
            ToolOutcome::NotLaunched(reason) => write!(f, "could not be started: {}", reason),
        }
    }
}

/// Handle for launching and probing one external tool
#[derive(Debug, Clone)]
pub struct ExternalTool {
    config: ToolConfig,
}

impl ExternalTool {
    /// Create a new tool with the given configuration
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    /// Get the tool configuration
    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Check if the tool is installed and available in PATH
    pub fn is_installed(&self) -> bool {
        Command::new("which")
            .arg(&self.config.program)
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    /// Get the installed tool version (if available)
    pub fn version(&self) -> Option<String> {
        Command::new(&self.config.program)
            .arg("--version")
            .output()
            .ok()
            .and_then(|output| {
                if output.status.success() {
                    String::from_utf8(output.stdout)
                        .ok()
                        .map(|s| s.trim().to_string())
                } else {
                    None
                }
            })
    }

    /// Run the tool to completion with stdout discarded
    ///
    /// Stderr stays attached to the terminal. There is no timeout: a tool
    /// that hangs blocks the caller.
    pub fn run<I, S>(&self, args: I) -> ToolOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let status = Command::new(&self.config.program)
            .args(args)
            .stdout(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => ToolOutcome::Succeeded,
            Ok(status) => ToolOutcome::Exited(status.code()),
            Err(e) => ToolOutcome::NotLaunched(e.to_string()),
        }
    }
}

/// Tool manager for git
pub fn git_tool(program: impl Into<String>) -> ExternalTool {
    ExternalTool::new(ToolConfig {
        display_name: "git",
        program: program.into(),
        docs_url: "https://git-scm.com/downloads",
    })
}

/// Tool manager for virtualenv
pub fn virtualenv_tool(program: impl Into<String>) -> ExternalTool {
    ExternalTool::new(ToolConfig {
        display_name: "virtualenv",
        program: program.into(),
        docs_url: "https://virtualenv.pypa.io/en/latest/installation.html",
    })
}

/// Tool manager for the Python interpreter
pub fn python_tool(program: impl Into<String>) -> ExternalTool {
    ExternalTool::new(ToolConfig {
        display_name: "Python",
        program: program.into(),
        docs_url: "https://www.python.org/downloads/",
    })
}
