//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

use crate::error::{CliError, Result};

/// Gather the usage rules your dependencies ship into one file
///
/// Examples:
///   usage-rules AGENTS.md serde tokio   # Merge two packages' rules
///   usage-rules AGENTS.md --all         # Merge every package that has rules
///   usage-rules --list                  # Show packages with rules
///   usage-rules --list AGENTS.md        # ...and whether AGENTS.md is current
#[derive(Parser, Debug)]
#[command(name = "usage-rules")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// File to write the combined rules into
    pub file: Option<PathBuf>,

    /// Packages whose rules should be combined into FILE
    pub packages: Vec<String>,

    /// Combine rules from every dependency that has them
    #[arg(long, conflicts_with = "list")]
    pub all: bool,

    /// List dependencies with usage rules (with FILE, show their status in it)
    #[arg(long)]
    pub list: bool,

    /// Print the list as JSON
    #[arg(long)]
    pub json: bool,

    /// Show the changes without writing FILE
    #[arg(long)]
    pub dry_run: bool,

    /// Read dependencies from the subdirectories of DIR instead of cargo metadata
    #[arg(long, value_name = "DIR", env = "USAGE_RULES_DEPS_DIR")]
    pub deps_dir: Option<PathBuf>,

    /// Cargo manifest to resolve dependencies from
    #[arg(long, value_name = "PATH")]
    pub manifest_path: Option<PathBuf>,
}

/// What the invocation asks for, after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Merge the named packages into `file`
    Combine {
        file: PathBuf,
        packages: Vec<String>,
        dry_run: bool,
    },
    /// Merge every package with rules into `file`
    All { file: PathBuf, dry_run: bool },
    /// List packages with rules, with their status in `file` if given
    List { file: Option<PathBuf>, json: bool },
}

impl Cli {
    /// Check flag combinations and decide the mode.
    ///
    /// Runs before anything is read, so a usage error has no side effects.
    pub fn mode(&self) -> Result<Mode> {
        if self.all && !self.packages.is_empty() {
            return Err(CliError::user(
                "--all cannot be combined with a list of packages",
            ));
        }
        if self.list && !self.packages.is_empty() {
            return Err(CliError::user(
                "--list cannot be combined with a list of packages",
            ));
        }

        let listing = self.list || self.file.is_none();
        if self.json && (self.all || !listing) {
            return Err(CliError::user("--json is only supported with --list"));
        }
        if self.dry_run && (self.list || (!self.all && self.file.is_none())) {
            return Err(CliError::user(
                "--dry-run is only supported when writing a file",
            ));
        }

        if self.all {
            return match &self.file {
                Some(file) => Ok(Mode::All {
                    file: file.clone(),
                    dry_run: self.dry_run,
                }),
                None => Err(CliError::user("--all requires a target file")),
            };
        }

        match &self.file {
            None => Ok(Mode::List {
                file: None,
                json: self.json,
            }),
            Some(file) if self.list => Ok(Mode::List {
                file: Some(file.clone()),
                json: self.json,
            }),
            Some(_) if self.packages.is_empty() => Err(CliError::user(
                "No packages specified. Pass package names, --all, or --list",
            )),
            Some(file) => Ok(Mode::Combine {
                file: file.clone(),
                packages: self.packages.clone(),
                dry_run: self.dry_run,
            }),
        }
    }
}
