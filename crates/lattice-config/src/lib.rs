//! Configuration for the lattice noise tool.
//!
//! Settings persist to disk as a RON file and can be overridden per run from
//! the command line. Missing fields fall back to their defaults, so older and
//! newer config files both load.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, SampleConfig, SampleShape, default_config_dir};
pub use error::ConfigError;
