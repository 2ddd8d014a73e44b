//! Work-hours reporter CLI library.
//!
//! This crate provides the CLI interface for the work-hours reporter.

mod cli;
pub mod commands;
mod config;

pub use cli::Cli;
pub use config::Config;
