//! Multi-octave fractal composition.
//!
//! Layers a base noise function over `octaves` iterations. Each octave scales
//! the sample point by `lacunarity` and the amplitude by `gain`, and the sum is
//! normalized by the total amplitude so the range does not grow with the octave
//! count.

use std::ops::Mul;

use serde::{Deserialize, Serialize};

use crate::error::NoiseError;

/// Rule used to combine octaves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FractalType {
    /// Fractal Brownian motion: plain weighted sum of octaves.
    #[default]
    Fbm = 0,
    /// Sum of `2|n| − 1`, giving rounded, billowy ridges.
    Billow = 1,
    /// Sum of `1 − |n|` with each octave weighted by the previous one, giving sharp crests.
    RidgedMulti = 2,
}

impl TryFrom<i32> for FractalType {
    type Error = NoiseError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FractalType::Fbm),
            1 => Ok(FractalType::Billow),
            2 => Ok(FractalType::RidgedMulti),
            _ => Err(NoiseError::InvalidEnum {
                kind: "fractal type",
                value,
            }),
        }
    }
}

/// Octave parameters for one fractal evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalParams {
    /// Composition rule.
    pub fractal_type: FractalType,
    /// Number of octaves, at least 1.
    pub octaves: u32,
    /// Frequency multiplier between octaves.
    pub lacunarity: f32,
    /// Amplitude multiplier between octaves.
    pub gain: f32,
}

impl FractalParams {
    /// Reciprocal of the summed octave amplitudes (`1 / Σ gainⁱ`).
    pub fn bounding(&self) -> f32 {
        let mut amp = self.gain;
        let mut total = 1.0;
        for _ in 1..self.octaves {
            total += amp;
            amp *= self.gain;
        }
        1.0 / total
    }
}

/// Evaluate `noise` as a fractal at `p`.
///
/// `p` must already be scaled by the base frequency. `bounding` is the value of
/// [`FractalParams::bounding`]; callers cache it because it only changes when
/// the octave count or gain changes.
pub fn fractal<P, F>(params: &FractalParams, bounding: f32, p: P, noise: F) -> f32
where
    P: Copy + Mul<f32, Output = P>,
    F: Fn(P) -> f32,
{
    match params.fractal_type {
        FractalType::Fbm => fbm(params, bounding, p, noise),
        FractalType::Billow => billow(params, bounding, p, noise),
        FractalType::RidgedMulti => ridged_multi(params, bounding, p, noise),
    }
}

fn fbm<P, F>(params: &FractalParams, bounding: f32, mut p: P, noise: F) -> f32
where
    P: Copy + Mul<f32, Output = P>,
    F: Fn(P) -> f32,
{
    let mut sum = noise(p);
    let mut amp = 1.0;

    for _ in 1..params.octaves {
        p = p * params.lacunarity;
        amp *= params.gain;
        sum += noise(p) * amp;
    }

    sum * bounding
}

fn billow<P, F>(params: &FractalParams, bounding: f32, mut p: P, noise: F) -> f32
where
    P: Copy + Mul<f32, Output = P>,
    F: Fn(P) -> f32,
{
    let mut sum = noise(p).abs() * 2.0 - 1.0;
    let mut amp = 1.0;

    for _ in 1..params.octaves {
        p = p * params.lacunarity;
        amp *= params.gain;
        sum += (noise(p).abs() * 2.0 - 1.0) * amp;
    }

    sum * bounding
}

fn ridged_multi<P, F>(params: &FractalParams, bounding: f32, mut p: P, noise: F) -> f32
where
    P: Copy + Mul<f32, Output = P>,
    F: Fn(P) -> f32,
{
    // The first octave has weight 1, so with a single octave this is exactly 1 - |n|.
    let mut sum = 1.0 - noise(p).abs();
    let mut weight = sum.clamp(0.0, 1.0);
    let mut amp = 1.0;

    for _ in 1..params.octaves {
        p = p * params.lacunarity;
        amp *= params.gain;
        let term = (1.0 - noise(p).abs()) * weight;
        sum += term * amp;
        weight = term.clamp(0.0, 1.0);
    }

    sum * bounding
}
