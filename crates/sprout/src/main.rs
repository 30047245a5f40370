//! Sprout CLI - Scaffolding for new Python packages

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use sprout_core::{Environment, License, PackageOptions, SystemToolchain};
use std::path::PathBuf;

/// License value that skips the LICENSE file
const NO_LICENSE: &str = "none";

#[derive(Parser, Debug)]
#[command(name = "sprout")]
#[command(about = "CLI for scaffolding Python packages")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Python package
    New(NewArgs),
    /// List the bundled license templates
    Licenses,
    /// Show which external tools are available
    Tools,
}

#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Package name, used for the project directory and the importable package
    pub package: String,

    /// Directory to create the project in
    #[arg(short, long, default_value = ".")]
    pub location: PathBuf,

    /// Skip `git init` and the .gitignore
    #[arg(long = "no-git")]
    pub no_git: bool,

    /// Provision a virtualenv, optionally under a custom directory name
    #[arg(long, value_name = "NAME", num_args = 0..=1, default_missing_value = "env")]
    pub env: Option<String>,

    /// Package author, written to __init__.py and the license
    #[arg(short, long)]
    pub author: Option<String>,

    /// Skip the tests directory
    #[arg(long = "no-tests")]
    pub no_tests: bool,

    /// License template (mit, apache, gnu) or "none"
    #[arg(long, default_value = "mit")]
    pub license: String,
}

impl From<NewArgs> for PackageOptions {
    fn from(args: NewArgs) -> Self {
        let mut options = PackageOptions::new(args.package, args.location)
            .git(!args.no_git)
            .test(!args.no_tests);

        if let Some(name) = args.env {
            options = options.env(Environment::named(name));
        }
        if let Some(author) = args.author {
            options = options.author(author);
        }

        if args.license == NO_LICENSE {
            options.without_license()
        } else {
            options.license(args.license)
        }
    }
}

fn list_licenses() {
    println!("{}", "Bundled licenses:".cyan().bold());
    for license in License::ALL {
        println!("  {:<8} {}", license.name().green(), license.display_name());
    }
    println!("  {:<8} {}", NO_LICENSE.dimmed(), "skip the LICENSE file".dimmed());
}

fn show_tools(tools: &SystemToolchain) {
    for tool in tools.tools() {
        let config = tool.config();
        if tool.is_installed() {
            let version = tool.version().unwrap_or_else(|| "unknown".to_string());
            println!("{} {} ({})", "ok".green(), config.display_name, version);
        } else {
            println!(
                "{} {} not found as '{}'; see {}",
                "missing".yellow(),
                config.display_name,
                config.program,
                config.docs_url
            );
        }
    }
}

fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    match args.command {
        Command::New(new_args) => {
            let options = PackageOptions::from(new_args);
            let tools = SystemToolchain::from_env();

            let result = sprout_core::run(&options, &tools)
                .with_context(|| format!("Failed to create package '{}'", options.package));

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result.map(|_| ())
        }
        Command::Licenses => {
            list_licenses();
            Ok(())
        }
        Command::Tools => {
            show_tools(&SystemToolchain::from_env());
            Ok(())
        }
    }
}
