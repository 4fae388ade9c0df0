//! The noise engine: configuration, point queries and bulk queries.
//!
//! A [`NoiseEngine`] owns its [`NoiseConfig`] and one [`OutputBuffer`]. Bulk
//! queries return a slice borrowed from that buffer, so the borrow checker
//! rejects any attempt to keep a result alive across the next mutating call.
//! Give each concurrent caller its own engine, or share an [`Evaluator`]
//! snapshot, which is `Copy` and holds no buffer.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::buffer::OutputBuffer;
use crate::config::NoiseConfig;
use crate::error::NoiseError;
use crate::fractal::{FractalType, fractal};
use crate::interp::Interp;
use crate::perlin::{perlin_2d, perlin_3d};
use crate::sampling::{Region2D, Region3D, SquarePlane, StripDirection};
use crate::simplex::{simplex_2d, simplex_3d};

/// Base noise algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoiseKind {
    /// Gradient noise on the square lattice, blended with the configured [`Interp`].
    #[default]
    Perlin,
    /// Gradient noise on the simplex lattice. Ignores the interpolation setting.
    Simplex,
}

/// Which evaluator a query runs: a base algorithm, optionally composed as a fractal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NoiseSource {
    /// Base algorithm sampled at each point.
    pub kind: NoiseKind,
    /// Sum octaves of `kind` using the configured fractal settings.
    pub fractal: bool,
}

impl NoiseSource {
    /// Single-octave Perlin.
    pub const PERLIN: Self = Self {
        kind: NoiseKind::Perlin,
        fractal: false,
    };
    /// Perlin composed with the configured fractal.
    pub const PERLIN_FRACTAL: Self = Self {
        kind: NoiseKind::Perlin,
        fractal: true,
    };
    /// Single-octave simplex.
    pub const SIMPLEX: Self = Self {
        kind: NoiseKind::Simplex,
        fractal: false,
    };
    /// Simplex composed with the configured fractal.
    pub const SIMPLEX_FRACTAL: Self = Self {
        kind: NoiseKind::Simplex,
        fractal: true,
    };
}

/// An immutable snapshot of an engine's configuration that evaluates points.
///
/// Engines route every point and bulk query through this type, which is what
/// makes bulk results identical to point results.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluator {
    config: NoiseConfig,
    bounding: f32,
}

impl Evaluator {
    /// Build a snapshot from a validated configuration.
    pub fn new(config: NoiseConfig) -> Result<Self, NoiseError> {
        config.validate()?;
        Ok(Self {
            bounding: config.fractal_params().bounding(),
            config,
        })
    }

    /// The configuration this snapshot evaluates with.
    pub fn config(&self) -> &NoiseConfig {
        &self.config
    }

    /// Evaluate `source` at an unscaled 2D coordinate.
    pub fn sample_2d(&self, source: NoiseSource, p: Vec2) -> f32 {
        let seed = self.config.seed;
        let interp = self.config.interp;
        let p = p * self.config.frequency;
        match (source.kind, source.fractal) {
            (NoiseKind::Perlin, false) => perlin_2d(seed, interp, p),
            (NoiseKind::Simplex, false) => simplex_2d(seed, p),
            (NoiseKind::Perlin, true) => fractal(
                &self.config.fractal_params(),
                self.bounding,
                p,
                |q| perlin_2d(seed, interp, q),
            ),
            (NoiseKind::Simplex, true) => fractal(
                &self.config.fractal_params(),
                self.bounding,
                p,
                |q| simplex_2d(seed, q),
            ),
        }
    }

    /// Evaluate `source` at an unscaled 3D coordinate.
    pub fn sample_3d(&self, source: NoiseSource, p: Vec3) -> f32 {
        let seed = self.config.seed;
        let interp = self.config.interp;
        let p = p * self.config.frequency;
        match (source.kind, source.fractal) {
            (NoiseKind::Perlin, false) => perlin_3d(seed, interp, p),
            (NoiseKind::Simplex, false) => simplex_3d(seed, p),
            (NoiseKind::Perlin, true) => fractal(
                &self.config.fractal_params(),
                self.bounding,
                p,
                |q| perlin_3d(seed, interp, q),
            ),
            (NoiseKind::Simplex, true) => fractal(
                &self.config.fractal_params(),
                self.bounding,
                p,
                |q| simplex_3d(seed, q),
            ),
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        let config = NoiseConfig::default();
        Self {
            bounding: config.fractal_params().bounding(),
            config,
        }
    }
}

/// A configured noise generator with a reusable output buffer.
#[derive(Debug, Default, Clone)]
pub struct NoiseEngine {
    evaluator: Evaluator,
    output: OutputBuffer,
}

impl NoiseEngine {
    /// Create an engine, rejecting configurations it cannot evaluate.
    pub fn new(config: NoiseConfig) -> Result<Self, NoiseError> {
        Ok(Self {
            evaluator: Evaluator::new(config)?,
            output: OutputBuffer::new(),
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &NoiseConfig {
        self.evaluator.config()
    }

    /// A copy of the active configuration that can be moved to other threads.
    pub fn evaluator(&self) -> Evaluator {
        self.evaluator
    }

    /// Replace the whole configuration at once.
    pub fn set_config(&mut self, config: NoiseConfig) -> Result<(), NoiseError> {
        self.evaluator = Evaluator::new(config).inspect_err(|e| {
            tracing::warn!("Rejected noise config: {e}");
        })?;
        tracing::debug!(?config, "Noise config replaced");
        Ok(())
    }

    // Octave changes rebuild the evaluator so validation and the cached bounding stay in step.
    fn update(&mut self, edit: impl FnOnce(&mut NoiseConfig)) -> Result<(), NoiseError> {
        let mut config = *self.config();
        edit(&mut config);
        self.evaluator = Evaluator::new(config)?;
        Ok(())
    }

    /// Set the lattice hash seed.
    pub fn set_seed(&mut self, seed: i32) {
        self.evaluator.config.seed = seed;
        tracing::debug!(seed, "Seed changed");
    }

    /// The lattice hash seed.
    pub fn seed(&self) -> i32 {
        self.config().seed
    }

    /// Set the multiplier applied to coordinates before lattice lookup.
    pub fn set_frequency(&mut self, frequency: f32) {
        self.evaluator.config.frequency = frequency;
        tracing::debug!(frequency, "Frequency changed");
    }

    /// The coordinate multiplier.
    pub fn frequency(&self) -> f32 {
        self.config().frequency
    }

    /// Set the Perlin blending curve. Simplex queries ignore it.
    pub fn set_interp(&mut self, interp: Interp) {
        self.evaluator.config.interp = interp;
        tracing::debug!(?interp, "Interpolation changed");
    }

    /// The Perlin blending curve.
    pub fn interp(&self) -> Interp {
        self.config().interp
    }

    /// Set how fractal queries combine octaves.
    pub fn set_fractal_type(&mut self, fractal_type: FractalType) {
        self.evaluator.config.fractal_type = fractal_type;
        tracing::debug!(?fractal_type, "Fractal type changed");
    }

    /// How fractal queries combine octaves.
    pub fn fractal_type(&self) -> FractalType {
        self.config().fractal_type
    }

    /// Set the octave count. Zero is rejected and leaves the engine unchanged.
    pub fn set_fractal_octaves(&mut self, octaves: u32) -> Result<(), NoiseError> {
        self.update(|c| c.octaves = octaves).inspect_err(|e| {
            tracing::warn!("Rejected octave count {octaves}: {e}");
        })?;
        tracing::debug!(octaves, "Fractal octaves changed");
        Ok(())
    }

    /// Octaves summed by fractal queries.
    pub fn fractal_octaves(&self) -> u32 {
        self.config().octaves
    }

    /// Set the frequency multiplier between octaves.
    pub fn set_fractal_lacunarity(&mut self, lacunarity: f32) {
        self.evaluator.config.lacunarity = lacunarity;
        tracing::debug!(lacunarity, "Fractal lacunarity changed");
    }

    /// Frequency multiplier between octaves.
    pub fn fractal_lacunarity(&self) -> f32 {
        self.config().lacunarity
    }

    /// Set the amplitude multiplier between octaves and renormalise the fractal output.
    pub fn set_fractal_gain(&mut self, gain: f32) {
        self.evaluator.config.gain = gain;
        self.evaluator.bounding = self.evaluator.config.fractal_params().bounding();
        tracing::debug!(gain, "Fractal gain changed");
    }

    /// Amplitude multiplier between octaves.
    pub fn fractal_gain(&self) -> f32 {
        self.config().gain
    }

    // --- Point queries ---

    /// Perlin noise at `(x, y)`.
    pub fn get_perlin_2d(&self, x: f32, y: f32) -> f32 {
        self.evaluator.sample_2d(NoiseSource::PERLIN, Vec2::new(x, y))
    }

    /// Perlin noise at `(x, y, z)`.
    pub fn get_perlin_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        self.evaluator
            .sample_3d(NoiseSource::PERLIN, Vec3::new(x, y, z))
    }

    /// Fractal Perlin noise at `(x, y)`.
    pub fn get_perlin_fractal_2d(&self, x: f32, y: f32) -> f32 {
        self.evaluator
            .sample_2d(NoiseSource::PERLIN_FRACTAL, Vec2::new(x, y))
    }

    /// Fractal Perlin noise at `(x, y, z)`.
    pub fn get_perlin_fractal_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        self.evaluator
            .sample_3d(NoiseSource::PERLIN_FRACTAL, Vec3::new(x, y, z))
    }

    /// Simplex noise at `(x, y)`.
    pub fn get_simplex_2d(&self, x: f32, y: f32) -> f32 {
        self.evaluator.sample_2d(NoiseSource::SIMPLEX, Vec2::new(x, y))
    }

    /// Simplex noise at `(x, y, z)`.
    pub fn get_simplex_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        self.evaluator
            .sample_3d(NoiseSource::SIMPLEX, Vec3::new(x, y, z))
    }

    /// Fractal simplex noise at `(x, y)`.
    pub fn get_simplex_fractal_2d(&self, x: f32, y: f32) -> f32 {
        self.evaluator
            .sample_2d(NoiseSource::SIMPLEX_FRACTAL, Vec2::new(x, y))
    }

    /// Fractal simplex noise at `(x, y, z)`.
    pub fn get_simplex_fractal_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        self.evaluator
            .sample_3d(NoiseSource::SIMPLEX_FRACTAL, Vec3::new(x, y, z))
    }

    // --- Bulk queries ---
    //
    // The named `get_*_{strip,square,cube}` accessors fix the source and
    // forward to the generic shape methods below.

    /// Fill the output buffer with `source` sampled over a 2D region.
    ///
    /// The returned slice stays valid until the next call that takes `&mut self`.
    pub fn fill_2d(&mut self, source: NoiseSource, region: Region2D) -> Result<&[f32], NoiseError> {
        let count = region.sample_count().inspect_err(|e| {
            tracing::warn!(?region, "Rejected 2D bulk request: {e}");
        })?;
        tracing::trace!(?source, ?region, count, "2D bulk request");

        let evaluator = self.evaluator;
        let out = self.output.prepare(count).inspect_err(|e| {
            tracing::warn!(count, "Rejected 2D bulk request: {e}");
        })?;
        region.fill(out, |p| evaluator.sample_2d(source, p))?;
        Ok(self.output.as_slice())
    }

    /// Fill the output buffer with `source` sampled over a 3D region.
    ///
    /// The returned slice stays valid until the next call that takes `&mut self`.
    pub fn fill_3d(&mut self, source: NoiseSource, region: Region3D) -> Result<&[f32], NoiseError> {
        let count = region.sample_count().inspect_err(|e| {
            tracing::warn!(?region, "Rejected 3D bulk request: {e}");
        })?;
        tracing::trace!(?source, ?region, count, "3D bulk request");

        let evaluator = self.evaluator;
        let out = self.output.prepare(count).inspect_err(|e| {
            tracing::warn!(count, "Rejected 3D bulk request: {e}");
        })?;
        region.fill(out, |p| evaluator.sample_3d(source, p))?;
        Ok(self.output.as_slice())
    }

    /// `length` samples of `source` stepping one unit along `axis` (X or Y).
    pub fn strip_2d(
        &mut self,
        source: NoiseSource,
        origin: Vec2,
        length: u32,
        axis: StripDirection,
    ) -> Result<&[f32], NoiseError> {
        self.fill_2d(
            source,
            Region2D::Strip {
                origin,
                length,
                axis,
            },
        )
    }

    /// `width × height` samples of `source` in the XY plane, X fastest.
    pub fn square_2d(
        &mut self,
        source: NoiseSource,
        origin: Vec2,
        width: u32,
        height: u32,
    ) -> Result<&[f32], NoiseError> {
        self.fill_2d(
            source,
            Region2D::Square {
                origin,
                width,
                height,
            },
        )
    }

    /// `length` samples of `source` stepping one unit along `axis` (X, Y or Z).
    pub fn strip_3d(
        &mut self,
        source: NoiseSource,
        origin: Vec3,
        length: u32,
        axis: StripDirection,
    ) -> Result<&[f32], NoiseError> {
        self.fill_3d(
            source,
            Region3D::Strip {
                origin,
                length,
                axis,
            },
        )
    }

    /// `width × height` samples of `source` in `plane`, rows along the first axis.
    pub fn square_3d(
        &mut self,
        source: NoiseSource,
        origin: Vec3,
        width: u32,
        height: u32,
        plane: SquarePlane,
    ) -> Result<&[f32], NoiseError> {
        self.fill_3d(
            source,
            Region3D::Square {
                origin,
                width,
                height,
                plane,
            },
        )
    }

    /// `width × height × depth` samples of `source`, X fastest then Y then Z.
    pub fn cube_3d(
        &mut self,
        source: NoiseSource,
        origin: Vec3,
        width: u32,
        height: u32,
        depth: u32,
    ) -> Result<&[f32], NoiseError> {
        self.fill_3d(
            source,
            Region3D::Cube {
                origin,
                width,
                height,
                depth,
            },
        )
    }

    pub fn get_perlin_2d_strip(
        &mut self,
        origin: Vec2,
        length: u32,
        axis: StripDirection,
    ) -> Result<&[f32], NoiseError> {
        self.strip_2d(NoiseSource::PERLIN, origin, length, axis)
    }

    pub fn get_perlin_2d_square(
        &mut self,
        origin: Vec2,
        width: u32,
        height: u32,
    ) -> Result<&[f32], NoiseError> {
        self.square_2d(NoiseSource::PERLIN, origin, width, height)
    }

    pub fn get_perlin_3d_strip(
        &mut self,
        origin: Vec3,
        length: u32,
        axis: StripDirection,
    ) -> Result<&[f32], NoiseError> {
        self.strip_3d(NoiseSource::PERLIN, origin, length, axis)
    }

    pub fn get_perlin_3d_square(
        &mut self,
        origin: Vec3,
        width: u32,
        height: u32,
        plane: SquarePlane,
    ) -> Result<&[f32], NoiseError> {
        self.square_3d(NoiseSource::PERLIN, origin, width, height, plane)
    }

    pub fn get_perlin_3d_cube(
        &mut self,
        origin: Vec3,
        width: u32,
        height: u32,
        depth: u32,
    ) -> Result<&[f32], NoiseError> {
        self.cube_3d(NoiseSource::PERLIN, origin, width, height, depth)
    }

    pub fn get_perlin_fractal_2d_strip(
        &mut self,
        origin: Vec2,
        length: u32,
        axis: StripDirection,
    ) -> Result<&[f32], NoiseError> {
        self.strip_2d(NoiseSource::PERLIN_FRACTAL, origin, length, axis)
    }

    pub fn get_perlin_fractal_2d_square(
        &mut self,
        origin: Vec2,
        width: u32,
        height: u32,
    ) -> Result<&[f32], NoiseError> {
        self.square_2d(NoiseSource::PERLIN_FRACTAL, origin, width, height)
    }

    pub fn get_perlin_fractal_3d_strip(
        &mut self,
        origin: Vec3,
        length: u32,
        axis: StripDirection,
    ) -> Result<&[f32], NoiseError> {
        self.strip_3d(NoiseSource::PERLIN_FRACTAL, origin, length, axis)
    }

    pub fn get_perlin_fractal_3d_square(
        &mut self,
        origin: Vec3,
        width: u32,
        height: u32,
        plane: SquarePlane,
    ) -> Result<&[f32], NoiseError> {
        self.square_3d(NoiseSource::PERLIN_FRACTAL, origin, width, height, plane)
    }

    pub fn get_perlin_fractal_3d_cube(
        &mut self,
        origin: Vec3,
        width: u32,
        height: u32,
        depth: u32,
    ) -> Result<&[f32], NoiseError> {
        self.cube_3d(NoiseSource::PERLIN_FRACTAL, origin, width, height, depth)
    }

    pub fn get_simplex_2d_strip(
        &mut self,
        origin: Vec2,
        length: u32,
        axis: StripDirection,
    ) -> Result<&[f32], NoiseError> {
        self.strip_2d(NoiseSource::SIMPLEX, origin, length, axis)
    }

    pub fn get_simplex_2d_square(
        &mut self,
        origin: Vec2,
        width: u32,
        height: u32,
    ) -> Result<&[f32], NoiseError> {
        self.square_2d(NoiseSource::SIMPLEX, origin, width, height)
    }

    pub fn get_simplex_3d_strip(
        &mut self,
        origin: Vec3,
        length: u32,
        axis: StripDirection,
    ) -> Result<&[f32], NoiseError> {
        self.strip_3d(NoiseSource::SIMPLEX, origin, length, axis)
    }

    pub fn get_simplex_3d_square(
        &mut self,
        origin: Vec3,
        width: u32,
        height: u32,
        plane: SquarePlane,
    ) -> Result<&[f32], NoiseError> {
        self.square_3d(NoiseSource::SIMPLEX, origin, width, height, plane)
    }

    pub fn get_simplex_3d_cube(
        &mut self,
        origin: Vec3,
        width: u32,
        height: u32,
        depth: u32,
    ) -> Result<&[f32], NoiseError> {
        self.cube_3d(NoiseSource::SIMPLEX, origin, width, height, depth)
    }

    pub fn get_simplex_fractal_2d_strip(
        &mut self,
        origin: Vec2,
        length: u32,
        axis: StripDirection,
    ) -> Result<&[f32], NoiseError> {
        self.strip_2d(NoiseSource::SIMPLEX_FRACTAL, origin, length, axis)
    }

    pub fn get_simplex_fractal_2d_square(
        &mut self,
        origin: Vec2,
        width: u32,
        height: u32,
    ) -> Result<&[f32], NoiseError> {
        self.square_2d(NoiseSource::SIMPLEX_FRACTAL, origin, width, height)
    }

    pub fn get_simplex_fractal_3d_strip(
        &mut self,
        origin: Vec3,
        length: u32,
        axis: StripDirection,
    ) -> Result<&[f32], NoiseError> {
        self.strip_3d(NoiseSource::SIMPLEX_FRACTAL, origin, length, axis)
    }

    pub fn get_simplex_fractal_3d_square(
        &mut self,
        origin: Vec3,
        width: u32,
        height: u32,
        plane: SquarePlane,
    ) -> Result<&[f32], NoiseError> {
        self.square_3d(NoiseSource::SIMPLEX_FRACTAL, origin, width, height, plane)
    }

    pub fn get_simplex_fractal_3d_cube(
        &mut self,
        origin: Vec3,
        width: u32,
        height: u32,
        depth: u32,
    ) -> Result<&[f32], NoiseError> {
        self.cube_3d(NoiseSource::SIMPLEX_FRACTAL, origin, width, height, depth)
    }

    /// The result of the most recent bulk query (empty before the first one).
    pub fn output(&self) -> &[f32] {
        self.output.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_octaves() {
        let config = NoiseConfig {
            octaves: 0,
            ..Default::default()
        };
        assert_eq!(
            NoiseEngine::new(config).unwrap_err(),
            NoiseError::InvalidOctaveCount
        );
    }

    #[test]
    fn test_default_engine_matches_default_config() {
        let engine = NoiseEngine::default();
        assert_eq!(*engine.config(), NoiseConfig::default());
        assert!(engine.output().is_empty());
    }

    #[test]
    fn test_setters_and_getters() {
        let mut engine = NoiseEngine::default();
        engine.set_seed(-12);
        engine.set_frequency(0.5);
        engine.set_interp(Interp::Hermite);
        engine.set_fractal_type(FractalType::Billow);
        engine.set_fractal_octaves(6).unwrap();
        engine.set_fractal_lacunarity(1.5);
        engine.set_fractal_gain(0.25);

        assert_eq!(engine.seed(), -12);
        assert_eq!(engine.frequency(), 0.5);
        assert_eq!(engine.interp(), Interp::Hermite);
        assert_eq!(engine.fractal_type(), FractalType::Billow);
        assert_eq!(engine.fractal_octaves(), 6);
        assert_eq!(engine.fractal_lacunarity(), 1.5);
        assert_eq!(engine.fractal_gain(), 0.25);
    }

    #[test]
    fn test_zero_octaves_leaves_config_untouched() {
        let mut engine = NoiseEngine::default();
        engine.set_fractal_octaves(5).unwrap();
        let before = engine.get_perlin_fractal_2d(3.3, 4.4);

        assert_eq!(
            engine.set_fractal_octaves(0),
            Err(NoiseError::InvalidOctaveCount)
        );
        assert_eq!(engine.fractal_octaves(), 5);
        assert_eq!(engine.get_perlin_fractal_2d(3.3, 4.4), before);
    }

    #[test]
    fn test_set_config_is_atomic() {
        let mut engine = NoiseEngine::default();
        let bad = NoiseConfig {
            seed: 1,
            octaves: 0,
            ..Default::default()
        };
        assert!(engine.set_config(bad).is_err());
        assert_eq!(engine.seed(), 42);

        let good = NoiseConfig {
            seed: 1,
            octaves: 2,
            ..Default::default()
        };
        engine.set_config(good).unwrap();
        assert_eq!(*engine.config(), good);
    }

    #[test]
    fn test_gain_change_updates_bounding() {
        let mut engine = NoiseEngine::default();
        engine.set_frequency(1.0);
        engine.set_fractal_octaves(2).unwrap();
        engine.set_fractal_gain(1.0);

        let (x, y) = (0.3, 0.6);
        let expected = (engine.get_perlin_2d(x, y) + engine.get_perlin_2d(x * 2.0, y * 2.0)) / 2.0;
        let actual = engine.get_perlin_fractal_2d(x, y);
        assert!(
            (actual - expected).abs() < 1e-6,
            "Stale bounding after gain change: {actual} vs {expected}"
        );
    }

    #[test]
    fn test_frequency_scales_input() {
        let mut engine = NoiseEngine::default();
        engine.set_frequency(1.0);
        let unit = engine.get_perlin_2d(0.75, 2.5);
        engine.set_frequency(0.5);
        let half = engine.get_perlin_2d(1.5, 5.0);
        assert_eq!(unit, half);
    }

    #[test]
    fn test_rejected_bulk_request_keeps_previous_output() {
        let mut engine = NoiseEngine::default();
        let first = engine
            .get_perlin_2d_square(Vec2::new(0.0, 0.0), 4, 4)
            .unwrap()
            .to_vec();

        let err = engine
            .get_perlin_2d_strip(Vec2::ZERO, 8, StripDirection::ZAxis)
            .unwrap_err();
        assert_eq!(
            err,
            NoiseError::UnsupportedAxis {
                axis: StripDirection::ZAxis,
                dims: 2
            }
        );
        assert!(engine.get_perlin_3d_cube(Vec3::ZERO, 2, 0, 2).is_err());
        assert_eq!(engine.output(), first.as_slice());
    }

    #[test]
    fn test_output_reflects_last_request() {
        let mut engine = NoiseEngine::default();
        let strip = engine
            .get_perlin_3d_strip(Vec3::new(1.0, 2.0, 3.0), 7, StripDirection::YAxis)
            .unwrap()
            .to_vec();
        assert_eq!(strip.len(), 7);
        assert_eq!(engine.output(), strip.as_slice());
    }

    #[test]
    fn test_evaluator_is_shareable_across_threads() {
        let engine = NoiseEngine::default();
        let evaluator = engine.evaluator();
        let handle = std::thread::spawn(move || {
            evaluator.sample_3d(NoiseSource::SIMPLEX_FRACTAL, Vec3::new(10.0, 20.0, 30.0))
        });
        let remote = handle.join().unwrap();
        assert_eq!(remote, engine.get_simplex_fractal_3d(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_simplex_bulk_wrappers_match_generic_queries() {
        let mut engine = NoiseEngine::default();
        let origin = Vec3::new(-5.0, 0.5, 12.0);
        let named = engine
            .get_simplex_fractal_3d_square(origin, 3, 4, SquarePlane::ZYPlane)
            .unwrap()
            .to_vec();
        let generic = engine
            .square_3d(NoiseSource::SIMPLEX_FRACTAL, origin, 3, 4, SquarePlane::ZYPlane)
            .unwrap();
        assert_eq!(named.as_slice(), generic);

        let strip = engine
            .get_simplex_2d_strip(Vec2::new(1.0, 1.0), 5, StripDirection::YAxis)
            .unwrap()
            .to_vec();
        for (i, &v) in strip.iter().enumerate() {
            assert_eq!(v, engine.get_simplex_2d(1.0, 1.0 + i as f32));
        }
    }

    #[test]
    fn test_simplex_ignores_interp() {
        let mut engine = NoiseEngine::default();
        let quintic = engine.get_simplex_2d(123.0, 456.0);
        engine.set_interp(Interp::Linear);
        assert_eq!(engine.get_simplex_2d(123.0, 456.0), quintic);
    }
}
