//! Command-line argument parsing for the geosphere viewer.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Geosphere command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "geosphere", about = "Rotating geodesic planet viewer")]
pub struct CliArgs {
    /// Canvas width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Subdivision passes.
    #[arg(long)]
    pub detail: Option<u32>,

    /// Sphere radius.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Number of land centers.
    #[arg(long)]
    pub land_centers: Option<u32>,

    /// Seed for land placement.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Draw mesh edges.
    #[arg(long)]
    pub wireframe: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 120)]
    pub frames: u32,

    /// Write the last frame to this PNG file.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(detail) = args.detail {
            self.globe.detail = detail;
        }
        if let Some(radius) = args.radius {
            self.globe.radius = radius;
        }
        if let Some(count) = args.land_centers {
            self.globe.land_center_count = count;
        }
        if let Some(seed) = args.seed {
            self.globe.seed = Some(seed);
        }
        if let Some(wireframe) = args.wireframe {
            self.globe.show_wireframe = wireframe;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(1920),
            detail: Some(5),
            seed: Some(99),
            wireframe: Some(true),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.window.width, 1920);
        assert_eq!(config.globe.detail, 5);
        assert_eq!(config.globe.seed, Some(99));
        assert!(config.globe.show_wireframe);
        // Non-overridden fields retain defaults
        assert_eq!(config.window.height, 600);
        assert_eq!(config.globe.radius, 180.0);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from([
            "geosphere",
            "--detail",
            "2",
            "--wireframe",
            "true",
            "--output",
            "frame.png",
        ]);
        assert_eq!(args.detail, Some(2));
        assert_eq!(args.wireframe, Some(true));
        assert_eq!(args.frames, 120);
        assert_eq!(args.output, Some(PathBuf::from("frame.png")));
    }
}
