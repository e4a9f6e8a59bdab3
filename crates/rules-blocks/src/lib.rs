//! Marker-delimited usage-rules blocks.
//!
//! A target file collects every dependency's rules inside one wrapper region,
//! one block per dependency:
//!
//! ```text
//! <-- package-rules-start -->
//! <-- serde-start -->
//! ## serde usage
//! (contents of serde's usage-rules.md)
//! <-- serde-end -->
//! <-- package-rules-end -->
//! ```
//!
//! Everything in this crate is a pure function over `&str`. Reading the
//! dependency files and writing the result back is left to the caller.
//!
//! Markers are matched as literal substrings. A dependency name that itself
//! contains marker fragments such as `-start -->` produces ambiguous markers;
//! names are assumed to be plain identifiers and are not validated here.

pub mod markers;
pub mod merger;
pub mod status;

pub use markers::{Regions, split_regions};
pub use merger::{RuleBlock, merge};
pub use status::{Status, classify};
