//! # revet - lightweight source review assistant
//!
//! Three composable units behind one CLI:
//!
//! - **scan**: walks a file tree and applies a fixed set of regex red-flag
//!   rules line-by-line (TODO markers, probable secrets, force-unwrap
//!   patterns, leftover debug logging).
//! - **diff**: runs `git diff --numstat` and aggregates per-file added and
//!   deleted counts into a churn-sorted summary.
//! - **report**: stitches both into a Markdown review report with a static
//!   reviewer checklist.
//!
//! The display caps (first 400 findings, top 25 / top 15 files) are
//! presentation truncations; the library API always returns complete
//! results.

pub mod cli;
pub mod diff;
pub mod report;
pub mod scan;

pub use cli::{Cli, Output};

/// Result type alias for revet operations
pub type Result<T> = anyhow::Result<T>;
