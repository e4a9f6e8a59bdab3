//! Dependency resolution and usage-rules discovery.
//!
//! A [`DependencyResolver`] produces the project's dependencies as
//! `(name, directory)` pairs. The [`scanner`] keeps the ones that ship a
//! `usage-rules.md` and loads their contents as [`rules_blocks::RuleBlock`]s.

pub mod config;
pub mod dependency;
pub mod error;
pub mod resolver;
pub mod scanner;

pub use config::{DependencySource, DepsConfig, ProjectConfig, ResolverOverrides, resolver_for};
pub use dependency::Dependency;
pub use error::{Error, Result};
pub use resolver::{CargoMetadataResolver, DependencyResolver, DirectoryResolver, StaticResolver};
pub use scanner::{load_rules, scan};
