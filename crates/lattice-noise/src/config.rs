//! Noise configuration with documented defaults.

use serde::{Deserialize, Serialize};

use crate::error::NoiseError;
use crate::fractal::{FractalParams, FractalType};
use crate::interp::Interp;

/// Shaping parameters for every query an engine answers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Lattice hash seed.
    pub seed: i32,
    /// Multiplier applied to input coordinates before lattice lookup.
    pub frequency: f32,
    /// Blending curve for Perlin noise.
    pub interp: Interp,
    /// Octave composition rule for fractal queries.
    pub fractal_type: FractalType,
    /// Number of fractal octaves (at least 1).
    pub octaves: u32,
    /// Frequency multiplier between octaves.
    pub lacunarity: f32,
    /// Amplitude multiplier between octaves.
    pub gain: f32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            frequency: 0.01,
            interp: Interp::Quintic,
            fractal_type: FractalType::Fbm,
            octaves: 3,
            lacunarity: 2.0,
            gain: 0.5,
        }
    }
}

impl NoiseConfig {
    /// Creates the default configuration with the given seed.
    pub fn with_seed(seed: i32) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Reject configurations no engine can evaluate.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.octaves == 0 {
            return Err(NoiseError::InvalidOctaveCount);
        }
        Ok(())
    }

    /// The octave parameters used by fractal queries.
    pub fn fractal_params(&self) -> FractalParams {
        FractalParams {
            fractal_type: self.fractal_type,
            octaves: self.octaves,
            lacunarity: self.lacunarity,
            gain: self.gain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NoiseConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.frequency, 0.01);
        assert_eq!(config.interp, Interp::Quintic);
        assert_eq!(config.fractal_type, FractalType::Fbm);
        assert_eq!(config.octaves, 3);
        assert_eq!(config.lacunarity, 2.0);
        assert_eq!(config.gain, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_octaves_rejected() {
        let config = NoiseConfig {
            octaves: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(NoiseError::InvalidOctaveCount));
    }

    #[test]
    fn test_ron_roundtrip() {
        let config = NoiseConfig {
            seed: -7,
            interp: Interp::Hermite,
            fractal_type: FractalType::RidgedMulti,
            ..Default::default()
        };
        let ron_str = ron::to_string(&config).unwrap();
        assert!(ron_str.contains("RidgedMulti"));
        let back: NoiseConfig = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: NoiseConfig = ron::from_str("(seed: 9, interp: Linear)").unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.interp, Interp::Linear);
        assert_eq!(config.octaves, 3);
    }

    #[test]
    fn test_unknown_enum_name_rejected() {
        let result: Result<NoiseConfig, _> = ron::from_str("(interp: Cubic)");
        assert!(result.is_err());
    }
}
