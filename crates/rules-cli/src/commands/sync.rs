//! Combine and all command implementations
//!
//! Both merge dependency rules into a target file; combine restricts the merge
//! to the packages named on the command line.

use std::path::Path;

use colored::Colorize;
use similar::{ChangeTag, TextDiff};

use rules_blocks::merge;
use rules_deps::{Dependency, load_rules, scan};
use rules_fs::{FileStore, NormalizedPath, read_or_empty};

use crate::context::ProjectContext;
use crate::error::Result;

/// What happened to the target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No dependency had rules; the file was not touched.
    NothingFound,
    /// The file did not exist and was created.
    Created,
    /// The file existed and its content changed.
    Updated,
    /// The merged content equals the current content; nothing written.
    Unchanged,
    /// Dry run: the unified diff that would have been applied.
    DryRun {
        diff: String,
        added: usize,
        removed: usize,
    },
}

/// Result of merging rules into a target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub file: NormalizedPath,
    /// Names of the merged dependencies, in merge order.
    pub merged: Vec<String>,
    pub outcome: SyncOutcome,
}

/// Merge the rules of `dependencies` (optionally filtered) into `target`.
pub fn sync_rules<S: FileStore + ?Sized>(
    dependencies: &[Dependency],
    filter: Option<&[String]>,
    target: &NormalizedPath,
    store: &S,
    dry_run: bool,
) -> Result<SyncReport> {
    let found = scan(dependencies, filter, store);
    let merged: Vec<String> = found.iter().map(|dep| dep.name.clone()).collect();

    if found.is_empty() {
        return Ok(SyncReport {
            file: target.clone(),
            merged,
            outcome: SyncOutcome::NothingFound,
        });
    }

    // Every read happens before the merge is computed
    let blocks = load_rules(&found, store)?;
    let existed = store.exists(target);
    let current = read_or_empty(store, target);
    let updated = merge(&current, &blocks);

    let outcome = if dry_run {
        let (added, removed) = change_counts(&current, &updated);
        SyncOutcome::DryRun {
            diff: unified_diff(&current, &updated, target),
            added,
            removed,
        }
    } else if existed && updated == current {
        SyncOutcome::Unchanged
    } else {
        store.write(target, &updated)?;
        if existed {
            SyncOutcome::Updated
        } else {
            SyncOutcome::Created
        }
    };

    Ok(SyncReport {
        file: target.clone(),
        merged,
        outcome,
    })
}

fn unified_diff(old: &str, new: &str, target: &NormalizedPath) -> String {
    let label = target.to_string();
    TextDiff::from_lines(old, new)
        .unified_diff()
        .header(&label, &label)
        .to_string()
}

/// Run the combine command
pub fn run_combine(
    ctx: &ProjectContext,
    file: &Path,
    packages: &[String],
    dry_run: bool,
) -> Result<()> {
    println!(
        "{} Combining usage rules for: {}",
        "=>".blue().bold(),
        packages.join(", ").cyan()
    );
    let dependencies = ctx.dependencies()?;
    let report = sync_rules(
        &dependencies,
        Some(packages),
        &ctx.target(file),
        ctx.store(),
        dry_run,
    )?;
    print_report(&report);
    Ok(())
}

/// Run the all command
pub fn run_all(ctx: &ProjectContext, file: &Path, dry_run: bool) -> Result<()> {
    println!(
        "{} Combining usage rules from all dependencies...",
        "=>".blue().bold()
    );
    let dependencies = ctx.dependencies()?;
    let report = sync_rules(&dependencies, None, &ctx.target(file), ctx.store(), dry_run)?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &SyncReport) {
    println!(
        "{} Found {} {} with usage rules",
        "=>".blue().bold(),
        report.merged.len(),
        if report.merged.len() == 1 { "dependency" } else { "dependencies" }
    );
    for name in &report.merged {
        println!("   {} {}", "+".green(), name.cyan());
    }

    match &report.outcome {
        SyncOutcome::NothingFound => {
            println!("{} Nothing to write.", "WARN".yellow().bold());
        }
        SyncOutcome::Created => {
            println!("{} Created {}", "OK".green().bold(), report.file);
        }
        SyncOutcome::Updated => {
            println!("{} Updated {}", "OK".green().bold(), report.file);
        }
        SyncOutcome::Unchanged => {
            println!("{} {} is already up to date.", "OK".green().bold(), report.file);
        }
        SyncOutcome::DryRun {
            diff,
            added,
            removed,
        } => {
            println!(
                "{} Dry run, {} not written ({} added, {} removed):",
                "=>".blue().bold(),
                report.file,
                format!("{added} lines").green(),
                format!("{removed} lines").red()
            );
            for line in diff.lines() {
                match line.chars().next() {
                    Some('+') => println!("{}", line.green()),
                    Some('-') => println!("{}", line.red()),
                    Some('@') => println!("{}", line.cyan()),
                    _ => println!("{}", line),
                }
            }
        }
    }
}

/// Count of inserted and deleted lines between two texts.
fn change_counts(old: &str, new: &str) -> (usize, usize) {
    TextDiff::from_lines(old, new)
        .iter_all_changes()
        .fold((0, 0), |(ins, del), change| match change.tag() {
            ChangeTag::Insert => (ins + 1, del),
            ChangeTag::Delete => (ins, del + 1),
            ChangeTag::Equal => (ins, del),
        })
}
