//! Configuration for the geosphere viewer.
//!
//! Settings persist to disk as RON, can be overridden from the command line
//! via clap, and are validated before a planet is built from them.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, GlobeConfig, WindowConfig};
pub use error::ConfigError;
