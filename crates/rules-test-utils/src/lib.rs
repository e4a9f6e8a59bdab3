//! Shared test utilities for the usage-rules workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`project`]: [`TestProject`] builder: a temporary project with a
//!   dependency directory

pub mod project;

pub use project::TestProject;
