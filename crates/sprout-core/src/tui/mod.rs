//! Charm-style progress output using cliclack
//!
//! This module is optional and only available when the `tui` feature is
//! enabled. It never prompts; every decision comes from `PackageOptions`.

use crate::error::Result;
use crate::package::{create_package, PackageOptions, PackageReport, Step};
use crate::runtime::{ToolOutcome, Toolchain};
use crate::templates::License;
use std::path::Path;

/// Scaffold a package and narrate each step
pub fn run<T: Toolchain + ?Sized>(options: &PackageOptions, tools: &T) -> Result<PackageReport> {
    cliclack::intro(format!("sprout {}", options.package))?;

    let root = options.project_root();
    let existed = root.exists();

    let report = match create_package(options, tools) {
        Ok(report) => report,
        Err(e) => {
            cliclack::log::error(e.to_string())?;
            cliclack::outro_cancel(failure_hint(&root, existed))?;
            return Err(e);
        }
    };

    render_report(&report)?;
    print_next_steps(&report)?;
    cliclack::outro("Happy coding!")?;

    Ok(report)
}

/// Closing line after a failed run
///
/// Only a project root this run created can hold partial output; an
/// existing root belongs to the user and is left out of the advice.
fn failure_hint(root: &Path, existed: bool) -> String {
    if !existed && root.exists() {
        format!(
            "Nothing was rolled back; remove the partial project at {} before retrying.",
            root.display()
        )
    } else {
        "No package was created.".to_string()
    }
}

/// Log every step in `report`, warning about external tools that failed
pub fn render_report(report: &PackageReport) -> Result<()> {
    for step in &report.steps {
        let rel = |path: &Path| relative(&report.root, path);

        match step {
            Step::Directory(path) => {
                cliclack::log::success(format!("Created {}", path.display()))?;
            }
            Step::Repository(outcome) => {
                tool_step("Initialized git repository", "git init", outcome)?;
            }
            Step::IgnoreFile(path) => {
                cliclack::log::success(format!("Wrote {}", rel(path)))?;
            }
            Step::Environment { path, outcome } => {
                let done = format!("Provisioned environment in {}", rel(path));
                tool_step(&done, "virtualenv", outcome)?;
            }
            Step::SubPackage(path) => {
                cliclack::log::success(format!("Created package {}", rel(path)))?;
            }
            Step::Tests(path) => {
                cliclack::log::success(format!("Created {}", rel(path)))?;
            }
            Step::License { path, name } => {
                let kind = name
                    .parse::<License>()
                    .map(|license| license.display_name())
                    .unwrap_or(name.as_str());
                cliclack::log::success(format!("Wrote {} ({})", rel(path), kind))?;
            }
        }
    }

    cliclack::log::info(format!(
        "{} files in {}",
        report.file_count(),
        report.root.display()
    ))?;

    Ok(())
}

fn tool_step(done: &str, command: &str, outcome: &ToolOutcome) -> Result<()> {
    if outcome.is_success() {
        cliclack::log::success(done)?;
    } else {
        cliclack::log::warning(format!("{} {}; continuing without it", command, outcome))?;
    }
    Ok(())
}

fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

fn print_next_steps(report: &PackageReport) -> Result<()> {
    let steps = next_steps(report);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }
    println!();

    Ok(())
}

/// Shell hints shown after a successful run
pub fn next_steps(report: &PackageReport) -> Vec<String> {
    let mut steps = Vec::new();
    let current = std::env::current_dir().ok();

    if current.as_deref() != Some(report.root.as_path()) {
        steps.push(format!("cd {}", report.root.display()));
    }

    if let Some(env) = report.environment() {
        steps.push(format!("source {}/bin/activate", relative(&report.root, env)));
    }

    let package = report.steps.iter().find_map(|step| match step {
        Step::SubPackage(path) => Some(relative(&report.root, path)),
        _ => None,
    });
    if let Some(package) = package {
        steps.push(format!("Start writing code in {}/", package));
    }

    steps
}
