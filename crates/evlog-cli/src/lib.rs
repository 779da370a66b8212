//! Event log CLI library.
//!
//! This crate provides the command-line interface for evlog.

mod cli;
mod config;
pub mod summary;

pub use cli::Cli;
pub use config::Config;
