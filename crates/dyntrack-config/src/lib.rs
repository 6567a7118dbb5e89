//! Runtime configuration for the dynamic-track tools.
//!
//! Settings persist to disk as `config.ron` and can be overridden from the command line.
//! Every section is `#[serde(default)]`, so older or partial files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, RouteConfig, ViewConfig, default_config_dir};
pub use error::ConfigError;
