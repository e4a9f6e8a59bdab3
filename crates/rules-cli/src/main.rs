//! usage-rules CLI
//!
//! Gathers the `usage-rules.md` files shipped by a project's dependencies into
//! one file, or lists which dependencies have them.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Mode};
use context::ProjectContext;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    // Usage errors are reported before anything is read
    let mode = cli.mode()?;

    let cwd = std::env::current_dir()?;
    let ctx = ProjectContext::new(&cwd, cli.deps_dir.as_deref(), cli.manifest_path.as_deref())?;

    execute(&ctx, mode)
}

fn execute(ctx: &ProjectContext, mode: Mode) -> Result<()> {
    match mode {
        Mode::Combine {
            file,
            packages,
            dry_run,
        } => commands::run_combine(ctx, &file, &packages, dry_run),
        Mode::All { file, dry_run } => commands::run_all(ctx, &file, dry_run),
        Mode::List { file, json } => commands::run_list(ctx, file.as_deref(), json),
    }
}
