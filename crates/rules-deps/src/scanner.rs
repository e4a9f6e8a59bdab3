//! Finding dependencies that ship usage rules.

use rules_blocks::RuleBlock;
use rules_fs::FileStore;

use crate::{Dependency, Error, Result};

/// Keep the dependencies that have a `usage-rules.md`.
///
/// Order follows `dependencies`. With a `filter`, names outside it are dropped
/// before the existence check; names in the filter that have no rules file,
/// or are not dependencies at all, are dropped without error.
pub fn scan<S: FileStore + ?Sized>(
    dependencies: &[Dependency],
    filter: Option<&[String]>,
    store: &S,
) -> Vec<Dependency> {
    let found: Vec<Dependency> = dependencies
        .iter()
        .filter(|dep| filter.is_none_or(|names| names.contains(&dep.name)))
        .filter(|dep| {
            let has_rules = store.exists(&dep.rules_path());
            if !has_rules {
                tracing::debug!(name = %dep.name, path = %dep.path, "no usage rules");
            }
            has_rules
        })
        .cloned()
        .collect();

    if let Some(names) = filter {
        for name in names {
            if !found.iter().any(|dep| &dep.name == name) {
                tracing::debug!(name = %name, "requested package has no usage rules");
            }
        }
    }

    found
}

/// Read each dependency's rules file.
///
/// Meant for the output of [`scan`]: the files are known to exist, so a read
/// failure here is an environment problem and aborts the whole run.
pub fn load_rules<S: FileStore + ?Sized>(
    dependencies: &[Dependency],
    store: &S,
) -> Result<Vec<RuleBlock>> {
    dependencies
        .iter()
        .map(|dep| {
            let path = dep.rules_path();
            store
                .read(&path)
                .map(|content| RuleBlock::new(dep.name.as_str(), content))
                .map_err(|source| Error::RulesRead {
                    name: dep.name.clone(),
                    path: path.to_native(),
                    source,
                })
        })
        .collect()
}
