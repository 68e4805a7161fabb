//! nbio CLI library
//!
//! This library provides the command-line interface for rendering OS
//! failure codes with nbio-core.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod output;

pub use error::{CliError, CliResult};
