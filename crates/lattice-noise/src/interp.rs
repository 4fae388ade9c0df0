//! Blending curves used to combine lattice corner contributions.

use serde::{Deserialize, Serialize};

use crate::error::NoiseError;

/// Interpolation curve applied to the fractional cell offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interp {
    /// `t`. Cheapest, visible creases at cell borders.
    Linear = 0,
    /// `3t² − 2t³`. Zero first derivative at 0 and 1.
    Hermite = 1,
    /// `6t⁵ − 15t⁴ + 10t³`. Zero first and second derivative at 0 and 1.
    #[default]
    Quintic = 2,
}

impl Interp {
    /// Map `t ∈ [0, 1]` to a blend weight in `[0, 1]`.
    #[inline]
    pub fn blend(self, t: f32) -> f32 {
        match self {
            Interp::Linear => t,
            Interp::Hermite => t * t * (3.0 - 2.0 * t),
            Interp::Quintic => t * t * t * (t * (t * 6.0 - 15.0) + 10.0),
        }
    }
}

impl TryFrom<i32> for Interp {
    type Error = NoiseError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Interp::Linear),
            1 => Ok(Interp::Hermite),
            2 => Ok(Interp::Quintic),
            _ => Err(NoiseError::InvalidEnum {
                kind: "interpolation",
                value,
            }),
        }
    }
}

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Interp; 3] = [Interp::Linear, Interp::Hermite, Interp::Quintic];

    #[test]
    fn test_endpoints_are_fixed() {
        for interp in ALL {
            assert_eq!(interp.blend(0.0), 0.0, "{interp:?} at 0");
            assert_eq!(interp.blend(1.0), 1.0, "{interp:?} at 1");
            assert!((interp.blend(0.5) - 0.5).abs() < 1e-6, "{interp:?} at 0.5");
        }
    }

    #[test]
    fn test_curves_stay_in_unit_interval() {
        for interp in ALL {
            for i in 0..=1000 {
                let t = i as f32 / 1000.0;
                let w = interp.blend(t);
                assert!(
                    (0.0..=1.0).contains(&w),
                    "{interp:?}.blend({t}) = {w} is outside [0, 1]"
                );
            }
        }
    }

    #[test]
    fn test_smooth_curves_are_flat_at_endpoints() {
        let h = 1e-3;
        for interp in [Interp::Hermite, Interp::Quintic] {
            let start_slope = interp.blend(h) / h;
            let end_slope = (1.0 - interp.blend(1.0 - h)) / h;
            assert!(start_slope < 0.01, "{interp:?} slope at 0 is {start_slope}");
            assert!(end_slope < 0.01, "{interp:?} slope at 1 is {end_slope}");
        }
        let linear_slope = Interp::Linear.blend(h) / h;
        assert!((linear_slope - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_known_values() {
        assert!((Interp::Hermite.blend(0.25) - 0.156_25).abs() < 1e-6);
        assert!((Interp::Quintic.blend(0.25) - 0.103_515_625).abs() < 1e-6);
    }

    #[test]
    fn test_try_from_discriminants() {
        assert_eq!(Interp::try_from(0), Ok(Interp::Linear));
        assert_eq!(Interp::try_from(1), Ok(Interp::Hermite));
        assert_eq!(Interp::try_from(2), Ok(Interp::Quintic));
        assert_eq!(
            Interp::try_from(3),
            Err(NoiseError::InvalidEnum {
                kind: "interpolation",
                value: 3
            })
        );
        assert!(Interp::try_from(-1).is_err());
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    }
}
