//! Route finder CLI library.
//!
//! Holds the pieces of the `routefinder` binary that are worth testing in
//! isolation: logging setup, output formats, and subcommand handlers.

pub mod commands;
pub mod logging;
pub mod output;
