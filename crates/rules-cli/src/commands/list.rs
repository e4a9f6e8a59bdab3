//! List command: which dependencies ship usage rules
//!
//! With a target file, each dependency's block in that file is classified as
//! present, stale, or missing. Never writes.

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use rules_blocks::Status;
use rules_deps::{Dependency, load_rules, scan};
use rules_fs::{FileStore, NormalizedPath, read_or_empty};

use crate::context::ProjectContext;
use crate::error::Result;

/// One dependency in the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub name: String,
    pub path: NormalizedPath,
    /// Only set when a target file was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

/// Dependencies with usage rules, classified against `file` if given.
pub fn list_rules<S: FileStore + ?Sized>(
    dependencies: &[Dependency],
    file: Option<&NormalizedPath>,
    store: &S,
) -> Result<Vec<ListEntry>> {
    let found = scan(dependencies, None, store);

    let Some(file) = file else {
        return Ok(found
            .into_iter()
            .map(|dep| ListEntry {
                name: dep.name,
                path: dep.path,
                status: None,
            })
            .collect());
    };

    let blocks = load_rules(&found, store)?;
    let file_content = read_or_empty(store, file);

    Ok(found
        .into_iter()
        .zip(blocks)
        .map(|(dep, block)| ListEntry {
            status: Some(block.status_in(&file_content)),
            name: dep.name,
            path: dep.path,
        })
        .collect())
}

/// Run the list command
pub fn run_list(ctx: &ProjectContext, file: Option<&Path>, json: bool) -> Result<()> {
    let dependencies = ctx.dependencies()?;
    let target = file.map(|f| ctx.target(f));
    let entries = list_rules(&dependencies, target.as_ref(), ctx.store())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No dependencies with usage rules found.");
        return Ok(());
    }

    match &target {
        Some(target) => println!(
            "{} Dependencies with usage rules ({}):",
            "=>".blue().bold(),
            target.to_string().dimmed()
        ),
        None => println!("{} Dependencies with usage rules:", "=>".blue().bold()),
    }

    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    for entry in &entries {
        let name = format!("{:<width$}", entry.name, width = width);
        match entry.status {
            Some(status) => println!("   {} {}  {}", "-".cyan(), name.green(), colorize(status)),
            None => println!("   {} {}  {}", "-".cyan(), name.green(), "has usage rules".dimmed()),
        }
    }

    if entries
        .iter()
        .any(|e| matches!(e.status, Some(Status::Stale | Status::Missing)))
    {
        println!();
        println!(
            "Run {} to bring the file up to date.",
            "usage-rules <file> --all".cyan()
        );
    }

    Ok(())
}

fn colorize(status: Status) -> colored::ColoredString {
    match status {
        Status::Present => status.as_str().green(),
        Status::Stale => status.as_str().yellow(),
        Status::Missing => status.as_str().red(),
    }
}
