//! Command line interface for the `roam-alma` binary

pub mod commands;
pub mod error;
pub mod logging;

pub use error::CliError;
