//! Runs the configured bulk request and writes the result.

use std::io::Write;
use std::path::Path;

use lattice_config::{SampleConfig, SampleShape};
use lattice_noise::{NoiseEngine, NoiseError, Vec2, Vec3};

/// Errors surfaced by a sampling run.
#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    #[error("noise request rejected: {0}")]
    Noise(#[from] NoiseError),

    #[error("failed to write samples: {0}")]
    Write(#[from] std::io::Error),
}

/// Summary statistics of one bulk result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub min: f32,
    pub max: f32,
    pub mean: f32,
}

impl Summary {
    /// `None` for an empty slice.
    pub fn of(values: &[f32]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let (min, max, sum) = values.iter().fold(
            (f32::INFINITY, f32::NEG_INFINITY, 0.0f64),
            |(min, max, sum), &v| (min.min(v), max.max(v), sum + f64::from(v)),
        );
        Some(Self {
            count: values.len(),
            min,
            max,
            mean: (sum / values.len() as f64) as f32,
        })
    }
}

/// Dispatch `sample` to the matching bulk query.
pub fn run<'a>(engine: &'a mut NoiseEngine, sample: &SampleConfig) -> Result<&'a [f32], NoiseError> {
    let source = sample.source();
    let [x, y, z] = sample.origin;
    match sample.shape {
        SampleShape::Strip2D => engine.strip_2d(source, Vec2::new(x, y), sample.length, sample.axis),
        SampleShape::Square2D => {
            engine.square_2d(source, Vec2::new(x, y), sample.width, sample.height)
        }
        SampleShape::Strip3D => {
            engine.strip_3d(source, Vec3::new(x, y, z), sample.length, sample.axis)
        }
        SampleShape::Square3D => engine.square_3d(
            source,
            Vec3::new(x, y, z),
            sample.width,
            sample.height,
            sample.plane,
        ),
        SampleShape::Cube => engine.cube_3d(
            source,
            Vec3::new(x, y, z),
            sample.width,
            sample.height,
            sample.depth,
        ),
    }
}

/// Write `values` as consecutive little-endian `f32`s.
pub fn write_samples(path: &Path, values: &[f32]) -> std::io::Result<()> {
    let mut writer = std::io::BufWriter::new(std::fs::File::create(path)?);
    for v in values {
        writer.write_all(&v.to_le_bytes())?;
    }
    writer.flush()
}
