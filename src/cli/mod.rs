//! CLI command implementations.

pub mod args;
pub mod output;

pub mod clear;
pub mod generate;
pub mod list;
pub mod toggle;

pub use args::{Cli, Commands};
pub use output::Output;
