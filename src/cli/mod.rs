//! Command-line interface module.
//!
//! Provides argument parsing for the single query command.

pub mod args;
