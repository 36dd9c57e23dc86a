//! Command implementations for the revet CLI.
//!
//! Each subcommand lives in its own module with an `Args` struct and an
//! `execute` function; argument parsing stays in `cli`, behavior lives in
//! the `scan`, `diff` and `report` library modules.

pub mod diff;
pub mod report;
pub mod scan;
