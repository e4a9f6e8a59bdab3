//! Filesystem abstraction for usage-rules
//!
//! Provides normalized paths, atomic I/O, the [`FileStore`] seam used by the
//! scanner and the sync commands, and optional project config loading.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;
pub mod store;

pub use config::ConfigStore;
pub use constants::RulesPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use store::{DiskStore, FileStore, MemoryStore, read_or_empty};
