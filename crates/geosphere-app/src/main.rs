//! Geosphere entry point.
//!
//! Spins a procedurally colored geodesic planet for a number of simulated
//! frames and optionally writes the last frame to a PNG file.
//!
//! Run with: `cargo run -p geosphere-app -- --detail 4 --output globe.png`

use clap::Parser;
use geosphere_app::{AppError, Viewer};
use geosphere_config::{CliArgs, Config};
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();
    if let Err(err) = run(&args) {
        error!("{err}");
        eprintln!("geosphere: {err}");
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), AppError> {
    // Only touch the disk when a config directory is given explicitly.
    let mut config = match &args.config {
        Some(dir) => Config::load_or_create(dir)?,
        None => Config::default(),
    };
    config.apply_cli_overrides(args);

    geosphere_log::init_logging(args.config.as_deref(), cfg!(debug_assertions), Some(&config));

    info!(
        "Canvas: {}x{} | detail={} radius={} land_centers={}",
        config.window.width,
        config.window.height,
        config.globe.detail,
        config.globe.radius,
        config.globe.land_center_count,
    );

    let mut viewer = Viewer::new(&config)?;
    let report = viewer.run(args.frames);
    info!(
        "Simulated {:.2}s over {} frames, ending on {:?}",
        report.sim_time, report.frames, report.final_screen
    );

    if let Some(path) = &args.output {
        viewer.save_frame(path)?;
    }
    Ok(())
}
