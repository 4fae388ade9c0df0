//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use lattice_noise::{NoiseConfig, NoiseKind, NoiseSource, SquarePlane, StripDirection};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level tool configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Engine settings: seed, frequency, interpolation and fractal shaping.
    pub noise: NoiseConfig,
    /// The bulk request the CLI runs.
    pub sample: SampleConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Shape of a bulk request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum SampleShape {
    /// `length` samples along `axis` in the XY plane.
    #[value(name = "strip-2d")]
    Strip2D,
    /// `width × height` samples in the XY plane.
    #[default]
    #[value(name = "square-2d")]
    Square2D,
    /// `length` samples along `axis` in 3D.
    #[value(name = "strip-3d")]
    Strip3D,
    /// `width × height` samples in `plane`.
    #[value(name = "square-3d")]
    Square3D,
    /// `width × height × depth` samples.
    Cube,
}

impl SampleShape {
    /// Whether the request samples 3D noise.
    pub fn is_3d(self) -> bool {
        matches!(
            self,
            SampleShape::Strip3D | SampleShape::Square3D | SampleShape::Cube
        )
    }
}

/// A bulk request description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SampleConfig {
    /// Base noise algorithm.
    pub kind: NoiseKind,
    /// Compose the base noise as a fractal.
    pub fractal: bool,
    /// Traversal shape.
    pub shape: SampleShape,
    /// First sample coordinate. 2D shapes ignore `z`.
    pub origin: [f32; 3],
    /// Strip length.
    pub length: u32,
    /// Square/cube width.
    pub width: u32,
    /// Square/cube height.
    pub height: u32,
    /// Cube depth.
    pub depth: u32,
    /// Strip direction.
    pub axis: StripDirection,
    /// Plane for 3D squares.
    pub plane: SquarePlane,
    /// Where to write raw little-endian `f32` samples. Nothing is written when unset.
    pub output: Option<PathBuf>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            kind: NoiseKind::Perlin,
            fractal: true,
            shape: SampleShape::Square2D,
            origin: [0.0; 3],
            length: 256,
            width: 256,
            height: 256,
            depth: 16,
            axis: StripDirection::XAxis,
            plane: SquarePlane::XYPlane,
            output: None,
        }
    }
}

impl SampleConfig {
    /// The evaluator this request runs.
    pub fn source(&self) -> NoiseSource {
        NoiseSource {
            kind: self.kind,
            fractal: self.fractal,
        }
    }
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// `<platform config dir>/lattice-noise`, or `./lattice-noise` when the
/// platform has no config dir.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lattice-noise")
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Reject settings the noise engine would refuse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.noise.validate()?;
        Ok(())
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_noise::{FractalType, Interp, NoiseError};

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("seed: 42"));
        assert!(ron_str.contains("interp: Quintic"));
        assert!(ron_str.contains("shape: Square2D"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.sample.output = Some(PathBuf::from("out.bin"));
        config.sample.axis = StripDirection::ZAxis;
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(noise: (seed: 5))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.noise.seed, 5);
        assert_eq!(config.noise.octaves, 3);
        assert_eq!(config.sample, SampleConfig::default());
        assert_eq!(config.debug, DebugConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.noise.seed = -99;
        config.noise.interp = Interp::Hermite;
        config.noise.fractal_type = FractalType::Billow;
        config.sample.shape = SampleShape::Cube;
        config.sample.origin = [1.5, -2.0, 8.25];

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_load_rejects_zero_octaves() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.ron"), "(noise: (octaves: 0))").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidNoise(NoiseError::InvalidOctaveCount)
        ));
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.noise.frequency = 0.5;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.unwrap().noise.frequency, 0.5);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.ron"), "{{not valid}}").unwrap();
        assert!(matches!(
            Config::load_or_create(dir.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_ron_comments_accepted() {
        let ron_str = "// seed for the demo field\n(\n  noise: (seed: 7), // trailing\n)";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.noise.seed, 7);
    }

    #[test]
    fn test_sample_source() {
        let sample = SampleConfig {
            kind: NoiseKind::Simplex,
            fractal: false,
            ..Default::default()
        };
        assert_eq!(sample.source(), NoiseSource::SIMPLEX);
        assert!(!SampleShape::Square2D.is_3d());
        assert!(SampleShape::Square3D.is_3d());
    }

    #[test]
    fn test_default_config_dir_ends_with_tool_name() {
        assert!(default_config_dir().ends_with("lattice-noise"));
    }
}
