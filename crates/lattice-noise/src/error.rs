//! Error types for rejected noise requests.

use crate::sampling::StripDirection;

/// Caller-input errors detected at the engine boundary.
///
/// Every variant is raised before any sample is computed, so a rejected
/// request never modifies the engine configuration or the output buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NoiseError {
    /// A raw selector value does not name a member of its enumeration.
    #[error("invalid {kind} selector: {value}")]
    InvalidEnum {
        /// Enumeration being decoded (e.g. `"interpolation"`).
        kind: &'static str,
        /// The rejected raw value.
        value: i32,
    },

    /// The strip direction exists but has no axis in the requested dimension.
    #[error("strip direction {axis:?} is not available for {dims}D sampling")]
    UnsupportedAxis {
        /// Requested direction.
        axis: StripDirection,
        /// Dimensionality of the query (2 or 3).
        dims: u8,
    },

    /// A length, width, height or depth of zero.
    #[error("{name} must be at least 1, got {value}")]
    InvalidExtent {
        /// Name of the offending extent.
        name: &'static str,
        /// The rejected value.
        value: u32,
    },

    /// The product of the extents does not fit in addressable memory.
    #[error("requested region is too large to allocate")]
    ExtentOverflow,

    /// A caller-supplied output slice does not match the region's sample count.
    #[error("output slice holds {actual} samples, region needs {expected}")]
    OutputLength {
        /// Samples the region produces.
        expected: usize,
        /// Length of the slice passed in.
        actual: usize,
    },

    /// Fractal composition needs at least one octave.
    #[error("fractal octave count must be at least 1")]
    InvalidOctaveCount,
}
