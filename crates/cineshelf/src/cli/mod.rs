//! Command-line interface module.
//!
//! This module provides the CLI structure and the interactive menu loop for
//! the cineshelf binary.

mod commands;
mod prompt;
mod run;

pub use commands::{Cli, StorageFormat};
pub use run::run_menu;
