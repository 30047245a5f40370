//! Sprout Core - Shared library for scaffolding Python packages
//!
//! This library creates the skeleton of a new Python package: a project
//! root, an optional git repository with a `.gitignore`, an optional
//! virtualenv, the importable sub-package, a `tests` directory and a
//! license file.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - One function per artifact (`templates`, `package::layout`)
//!   plus the external tools behind `runtime::Toolchain`
//! - **Layer 2: Orchestration** - `PackageOptions` and `create_package`
//! - **Layer 3: CLI Output** - Optional cliclack-based narration (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based output module
//!
//! # Example Usage (without TUI)
//!
//! ```no_run
//! use sprout_core::{create_package, Environment, PackageOptions, SystemToolchain};
//!
//! let options = PackageOptions::new("geometry", "projects")
//!     .author("Sam")
//!     .env(Environment::named("venv"))
//!     .license("apache");
//! let report = create_package(&options, &SystemToolchain::from_env())?;
//! println!("created {}", report.root.display());
//! # Ok::<(), sprout_core::ScaffoldError>(())
//! ```

pub mod config;
pub mod error;
pub mod package;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::Settings;
pub use error::{Result, ScaffoldError};
pub use package::{
    create_package, create_sub_package, create_test_directory, make_project_root, Environment,
    PackageOptions, PackageReport, Step,
};
pub use runtime::{
    init_repository, provision_environment, SystemToolchain, ToolOutcome, Toolchain,
};
pub use templates::{create_license_file, write_ignore_file, License};

#[cfg(feature = "tui")]
pub use tui::run;
