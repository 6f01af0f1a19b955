//! Command-line interface
//!
//! Argument parsing for inspecting and checking the deployment profile.

pub mod commands;

pub use commands::{Command, Opt, OutputFormatArg};
