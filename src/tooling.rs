//! Tooling & Integration Layer
//!
//! The command-line front end over the library pipeline.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, CommandOutput, Commands};
