//! Stratum - scoped deploy environment resolution
//!
//! Command line front end wiring the file-backed store and secret backend
//! into the resolution use cases.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Command};
pub use commands::{Config, execute, render, run};
