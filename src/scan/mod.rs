//! Heuristic red-flag scanner: fixed regex rules applied line-by-line over a
//! file tree, producing findings and per-rule counts.

pub mod core;
pub mod rules;
pub mod types;

pub use self::core::{SKIP_DIRS, Scanner, TEXT_EXTENSIONS};
pub use self::rules::{RULES, Rule, RuleKind};
pub use self::types::{Finding, MAX_FINDING_TEXT, ScanReport};
