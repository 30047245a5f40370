//! External tools
//!
//! This module provides:
//! - A generic wrapper for launching CLI tools and probing their install
//! - The `Toolchain` seam for git and virtualenv

pub mod tool;
pub mod toolchain;

pub use tool::{ExternalTool, ToolConfig, ToolOutcome};
pub use toolchain::{
    init_repository, provision_environment, SystemToolchain, Toolchain, DEFAULT_ENV_NAME,
};
