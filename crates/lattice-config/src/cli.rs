//! Command-line argument parsing for the lattice noise tool.

use std::path::PathBuf;

use clap::Parser;
use lattice_noise::{FractalType, Interp, NoiseError, NoiseKind, SquarePlane, StripDirection};

use crate::{Config, SampleShape};

/// Lattice noise command-line arguments.
///
/// CLI values override settings loaded from `config.ron`. Enumerated
/// settings take the same integer codes the engine API uses
/// (`--interp 0|1|2`, `--axis 0|1|2|3`, ...).
#[derive(Parser, Debug, Default)]
#[command(name = "lattice-noise", about = "Deterministic procedural noise sampler")]
pub struct CliArgs {
    /// Lattice hash seed.
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i32>,

    /// Coordinate multiplier applied before lattice lookup.
    #[arg(long)]
    pub frequency: Option<f32>,

    /// Interpolation: 0 = Linear, 1 = Hermite, 2 = Quintic.
    #[arg(long, value_parser = parse_selector::<Interp>)]
    pub interp: Option<Interp>,

    /// Fractal type: 0 = FBM, 1 = Billow, 2 = RidgedMulti.
    #[arg(long, value_parser = parse_selector::<FractalType>)]
    pub fractal_type: Option<FractalType>,

    /// Fractal octave count (at least 1).
    #[arg(long)]
    pub octaves: Option<u32>,

    /// Frequency multiplier between octaves.
    #[arg(long)]
    pub lacunarity: Option<f32>,

    /// Amplitude multiplier between octaves.
    #[arg(long)]
    pub gain: Option<f32>,

    /// Base noise: perlin or simplex.
    #[arg(long, value_parser = parse_kind)]
    pub kind: Option<NoiseKind>,

    /// Compose the base noise as a fractal.
    #[arg(long)]
    pub fractal: Option<bool>,

    /// Bulk request shape.
    #[arg(long, value_enum)]
    pub shape: Option<SampleShape>,

    /// Origin X coordinate.
    #[arg(long, allow_negative_numbers = true)]
    pub x: Option<f32>,

    /// Origin Y coordinate.
    #[arg(long, allow_negative_numbers = true)]
    pub y: Option<f32>,

    /// Origin Z coordinate.
    #[arg(long, allow_negative_numbers = true)]
    pub z: Option<f32>,

    /// Strip length.
    #[arg(long)]
    pub length: Option<u32>,

    /// Square/cube width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Square/cube height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Cube depth.
    #[arg(long)]
    pub depth: Option<u32>,

    /// Strip direction: 0 = X, 1 = Y, 2 = Z, 3 = W (reserved).
    #[arg(long, value_parser = parse_selector::<StripDirection>)]
    pub axis: Option<StripDirection>,

    /// 3D square plane: 0 = XY, 1 = XZ, 2 = ZY.
    #[arg(long, value_parser = parse_selector::<SquarePlane>)]
    pub plane: Option<SquarePlane>,

    /// Write raw little-endian f32 samples to this file.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Parse an integer selector through the engine's range check.
fn parse_selector<T>(s: &str) -> Result<T, String>
where
    T: TryFrom<i32, Error = NoiseError>,
{
    let value: i32 = s.parse().map_err(|e| format!("{s:?} is not an integer: {e}"))?;
    T::try_from(value).map_err(|e| e.to_string())
}

fn parse_kind(s: &str) -> Result<NoiseKind, String> {
    match s.to_ascii_lowercase().as_str() {
        "perlin" => Ok(NoiseKind::Perlin),
        "simplex" => Ok(NoiseKind::Simplex),
        _ => Err(format!("unknown noise kind {s:?} (expected perlin or simplex)")),
    }
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        let noise = &mut self.noise;
        if let Some(seed) = args.seed {
            noise.seed = seed;
        }
        if let Some(f) = args.frequency {
            noise.frequency = f;
        }
        if let Some(interp) = args.interp {
            noise.interp = interp;
        }
        if let Some(ty) = args.fractal_type {
            noise.fractal_type = ty;
        }
        if let Some(octaves) = args.octaves {
            noise.octaves = octaves;
        }
        if let Some(l) = args.lacunarity {
            noise.lacunarity = l;
        }
        if let Some(g) = args.gain {
            noise.gain = g;
        }

        let sample = &mut self.sample;
        if let Some(kind) = args.kind {
            sample.kind = kind;
        }
        if let Some(fractal) = args.fractal {
            sample.fractal = fractal;
        }
        if let Some(shape) = args.shape {
            sample.shape = shape;
        }
        for (slot, value) in sample.origin.iter_mut().zip([args.x, args.y, args.z]) {
            if let Some(v) = value {
                *slot = v;
            }
        }
        if let Some(length) = args.length {
            sample.length = length;
        }
        if let Some(w) = args.width {
            sample.width = w;
        }
        if let Some(h) = args.height {
            sample.height = h;
        }
        if let Some(d) = args.depth {
            sample.depth = d;
        }
        if let Some(axis) = args.axis {
            sample.axis = axis;
        }
        if let Some(plane) = args.plane {
            sample.plane = plane;
        }
        if let Some(ref path) = args.output {
            sample.output = Some(path.clone());
        }

        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
