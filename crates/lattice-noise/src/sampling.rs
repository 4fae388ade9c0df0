//! Bulk traversal of strips, planes and volumes.
//!
//! A region is validated once, then filled by calling the same per-point
//! closure a single-point query uses, so every bulk sample is bit-identical to
//! the point query at that coordinate. Samples are written in row-major order
//! with X varying fastest.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::NoiseError;

/// Axis a strip advances along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StripDirection {
    /// Advance along X.
    #[default]
    XAxis = 0,
    /// Advance along Y.
    YAxis = 1,
    /// Advance along Z (3D only).
    ZAxis = 2,
    /// Reserved for a fourth axis. No 2D or 3D query accepts it.
    WAxis = 3,
}

impl TryFrom<i32> for StripDirection {
    type Error = NoiseError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(StripDirection::XAxis),
            1 => Ok(StripDirection::YAxis),
            2 => Ok(StripDirection::ZAxis),
            3 => Ok(StripDirection::WAxis),
            _ => Err(NoiseError::InvalidEnum {
                kind: "strip direction",
                value,
            }),
        }
    }
}

/// Plane a 3D square lies in. The first letter names the axis `width` runs
/// along, the second the axis `height` runs along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SquarePlane {
    /// Width along X, height along Y, Z fixed.
    #[default]
    XYPlane = 0,
    /// Width along X, height along Z, Y fixed.
    XZPlane = 1,
    /// Width along Z, height along Y, X fixed.
    ZYPlane = 2,
}

impl TryFrom<i32> for SquarePlane {
    type Error = NoiseError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SquarePlane::XYPlane),
            1 => Ok(SquarePlane::XZPlane),
            2 => Ok(SquarePlane::ZYPlane),
            _ => Err(NoiseError::InvalidEnum {
                kind: "square plane",
                value,
            }),
        }
    }
}

/// A bulk request over 2D space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Region2D {
    /// `length` samples starting at `origin`, stepping by 1 along `axis`.
    Strip {
        origin: Vec2,
        length: u32,
        axis: StripDirection,
    },
    /// `width × height` samples starting at `origin`, stored at `width * y + x`.
    Square { origin: Vec2, width: u32, height: u32 },
}

/// A bulk request over 3D space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Region3D {
    /// `length` samples starting at `origin`, stepping by 1 along `axis`.
    Strip {
        origin: Vec3,
        length: u32,
        axis: StripDirection,
    },
    /// `width × height` samples in `plane`; the remaining axis is held at the origin.
    Square {
        origin: Vec3,
        width: u32,
        height: u32,
        plane: SquarePlane,
    },
    /// `width × height × depth` samples stored at `width * height * z + width * y + x`.
    Cube {
        origin: Vec3,
        width: u32,
        height: u32,
        depth: u32,
    },
}

fn extent(name: &'static str, value: u32) -> Result<usize, NoiseError> {
    if value == 0 {
        return Err(NoiseError::InvalidExtent { name, value });
    }
    usize::try_from(value).map_err(|_| NoiseError::ExtentOverflow)
}

/// Multiply extents into a sample count whose `f32` storage fits in a single allocation.
fn product(extents: &[usize]) -> Result<usize, NoiseError> {
    let count = extents.iter().try_fold(1usize, |acc, &e| {
        acc.checked_mul(e).ok_or(NoiseError::ExtentOverflow)
    })?;
    match count.checked_mul(size_of::<f32>()) {
        Some(bytes) if bytes <= isize::MAX as usize => Ok(count),
        _ => Err(NoiseError::ExtentOverflow),
    }
}

fn check_len(out: &[f32], expected: usize) -> Result<(), NoiseError> {
    if out.len() != expected {
        return Err(NoiseError::OutputLength {
            expected,
            actual: out.len(),
        });
    }
    Ok(())
}

impl Region2D {
    /// Validate the request and return how many samples it produces.
    pub fn sample_count(&self) -> Result<usize, NoiseError> {
        match *self {
            Region2D::Strip { length, axis, .. } => {
                let length = product(&[extent("length", length)?])?;
                match axis {
                    StripDirection::XAxis | StripDirection::YAxis => Ok(length),
                    StripDirection::ZAxis | StripDirection::WAxis => {
                        Err(NoiseError::UnsupportedAxis { axis, dims: 2 })
                    }
                }
            }
            Region2D::Square { width, height, .. } => {
                product(&[extent("width", width)?, extent("height", height)?])
            }
        }
    }

    /// Write one sample per coordinate into `out`.
    ///
    /// The region is validated first and `out` must hold exactly
    /// [`Region2D::sample_count`] elements; nothing is written otherwise.
    pub fn fill<F>(&self, out: &mut [f32], noise: F) -> Result<(), NoiseError>
    where
        F: Fn(Vec2) -> f32,
    {
        check_len(out, self.sample_count()?)?;
        match *self {
            Region2D::Strip { origin, axis, .. } => {
                for (i, value) in out.iter_mut().enumerate() {
                    let step = i as f32;
                    let p = match axis {
                        StripDirection::XAxis => Vec2::new(origin.x + step, origin.y),
                        StripDirection::YAxis => Vec2::new(origin.x, origin.y + step),
                        StripDirection::ZAxis | StripDirection::WAxis => {
                            return Err(NoiseError::UnsupportedAxis { axis, dims: 2 });
                        }
                    };
                    *value = noise(p);
                }
            }
            Region2D::Square { origin, width, .. } => {
                for (y, row) in out.chunks_exact_mut(width as usize).enumerate() {
                    let py = origin.y + y as f32;
                    for (x, value) in row.iter_mut().enumerate() {
                        *value = noise(Vec2::new(origin.x + x as f32, py));
                    }
                }
            }
        }
        Ok(())
    }
}

impl Region3D {
    /// Validate the request and return how many samples it produces.
    pub fn sample_count(&self) -> Result<usize, NoiseError> {
        match *self {
            Region3D::Strip { length, axis, .. } => {
                let length = product(&[extent("length", length)?])?;
                match axis {
                    StripDirection::XAxis | StripDirection::YAxis | StripDirection::ZAxis => {
                        Ok(length)
                    }
                    StripDirection::WAxis => Err(NoiseError::UnsupportedAxis { axis, dims: 3 }),
                }
            }
            Region3D::Square { width, height, .. } => {
                product(&[extent("width", width)?, extent("height", height)?])
            }
            Region3D::Cube {
                width,
                height,
                depth,
                ..
            } => product(&[
                extent("width", width)?,
                extent("height", height)?,
                extent("depth", depth)?,
            ]),
        }
    }

    /// Write one sample per coordinate into `out`.
    ///
    /// The region is validated first and `out` must hold exactly
    /// [`Region3D::sample_count`] elements; nothing is written otherwise.
    pub fn fill<F>(&self, out: &mut [f32], noise: F) -> Result<(), NoiseError>
    where
        F: Fn(Vec3) -> f32,
    {
        check_len(out, self.sample_count()?)?;
        match *self {
            Region3D::Strip { origin, axis, .. } => {
                for (i, value) in out.iter_mut().enumerate() {
                    let step = i as f32;
                    let p = match axis {
                        StripDirection::XAxis => Vec3::new(origin.x + step, origin.y, origin.z),
                        StripDirection::YAxis => Vec3::new(origin.x, origin.y + step, origin.z),
                        StripDirection::ZAxis => Vec3::new(origin.x, origin.y, origin.z + step),
                        StripDirection::WAxis => {
                            return Err(NoiseError::UnsupportedAxis { axis, dims: 3 });
                        }
                    };
                    *value = noise(p);
                }
            }
            Region3D::Square {
                origin,
                width,
                plane,
                ..
            } => {
                for (row_index, row) in out.chunks_exact_mut(width as usize).enumerate() {
                    let r = row_index as f32;
                    for (col_index, value) in row.iter_mut().enumerate() {
                        let c = col_index as f32;
                        let p = match plane {
                            SquarePlane::XYPlane => Vec3::new(origin.x + c, origin.y + r, origin.z),
                            SquarePlane::XZPlane => Vec3::new(origin.x + c, origin.y, origin.z + r),
                            SquarePlane::ZYPlane => Vec3::new(origin.x, origin.y + r, origin.z + c),
                        };
                        *value = noise(p);
                    }
                }
            }
            Region3D::Cube {
                origin,
                width,
                height,
                ..
            } => {
                let slice_len = width as usize * height as usize;
                for (z, slice) in out.chunks_exact_mut(slice_len).enumerate() {
                    let pz = origin.z + z as f32;
                    for (y, row) in slice.chunks_exact_mut(width as usize).enumerate() {
                        let py = origin.y + y as f32;
                        for (x, value) in row.iter_mut().enumerate() {
                            *value = noise(Vec3::new(origin.x + x as f32, py, pz));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
