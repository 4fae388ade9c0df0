//! Deterministic procedural noise: Perlin and Simplex gradient noise in 2D and
//! 3D, fractal octave composition, and bulk sampling over strips, squares and
//! cubes into a reusable output buffer.
//!
//! Every query is a pure function of the engine configuration and the input
//! coordinate, so results reproduce across runs and across threads.

mod buffer;
mod config;
mod engine;
mod error;
mod fractal;
mod interp;
mod perlin;
mod sampling;
mod simplex;

pub mod hash;

pub use buffer::OutputBuffer;
pub use config::NoiseConfig;
pub use engine::{Evaluator, NoiseEngine, NoiseKind, NoiseSource};
pub use error::NoiseError;
pub use fractal::{FractalParams, FractalType, fractal};
pub use interp::{Interp, lerp};
pub use perlin::{PERLIN_2D_BOUND, PERLIN_3D_BOUND, perlin_2d, perlin_3d};
pub use sampling::{Region2D, Region3D, SquarePlane, StripDirection};
pub use simplex::{SIMPLEX_BOUND, simplex_2d, simplex_3d};

pub use glam::{Vec2, Vec3};
