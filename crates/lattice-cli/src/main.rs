//! `lattice-noise`: sample a noise field from the command line.
//!
//! Loads `config.ron` (creating it on first run), applies CLI overrides, runs
//! the configured bulk request and optionally writes the samples to disk.

mod sample;

use std::process::ExitCode;

use clap::Parser;
use lattice_config::{CliArgs, Config, default_config_dir};
use lattice_noise::NoiseEngine;

use crate::sample::{SampleError, Summary};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    lattice_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), SampleError> {
    let mut engine = NoiseEngine::new(config.noise)?;
    tracing::info!(
        seed = engine.seed(),
        frequency = engine.frequency(),
        interp = ?engine.interp(),
        fractal_type = ?engine.fractal_type(),
        octaves = engine.fractal_octaves(),
        "Engine ready"
    );

    let request = &config.sample;
    let values = sample::run(&mut engine, request)?;

    if let Some(summary) = Summary::of(values) {
        tracing::info!(
            shape = ?request.shape,
            source = ?request.source(),
            count = summary.count,
            min = summary.min,
            max = summary.max,
            mean = summary.mean,
            "Sampled noise field"
        );
    }

    if let Some(path) = &request.output {
        sample::write_samples(path, values)?;
        tracing::info!("Wrote {} samples to {}", values.len(), path.display());
    }

    Ok(())
}
