//! Command handlers for the sizechart CLI
//!
//! This module contains all command implementations, organized by functionality.
//! Each submodule handles a specific CLI command.

pub mod completions;
pub mod report;

// Re-export command functions for convenient access
pub use completions::cmd_completions;
pub use report::cmd_report;
