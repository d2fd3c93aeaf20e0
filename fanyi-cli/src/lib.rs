//! Fanyi CLI library
//!
//! This library provides the command-line interface around the fanyi
//! classification and reply-parsing core.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod route;

pub use error::CliError;
