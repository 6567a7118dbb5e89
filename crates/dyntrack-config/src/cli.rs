//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "dyntrack", about = "Dynamic track mesh builder")]
pub struct CliArgs {
    /// Track profile file (`.ron` or `.json`).
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Route file listing the track sections to lay.
    #[arg(long)]
    pub route: Option<PathBuf>,

    /// Upper bound on every LOD cutoff radius, in meters.
    #[arg(long)]
    pub viewing_distance: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref path) = args.profile {
            self.route.profile_path = Some(path.clone());
        }
        if let Some(ref path) = args.route {
            self.route.route_path = Some(path.clone());
        }
        if let Some(distance) = args.viewing_distance {
            self.view.viewing_distance = Some(distance);
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
