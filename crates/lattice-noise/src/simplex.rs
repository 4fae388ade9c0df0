//! Simplex noise over a skewed triangular (2D) or tetrahedral (3D) lattice.
//!
//! Each simplex corner contributes `(r² − d²)⁴ · (g · d)` with a radial
//! falloff, so no interpolation curve is involved.

use glam::{Vec2, Vec3};

use crate::hash::{grad_2d, grad_3d};

/// Upper bound of `|simplex_2d|` and `|simplex_3d|`.
pub const SIMPLEX_BOUND: f32 = 1.0;

const SQRT3: f32 = 1.732_050_8;
const F2: f32 = 0.5 * (SQRT3 - 1.0);
const G2: f32 = (3.0 - SQRT3) / 6.0;
const F3: f32 = 1.0 / 3.0;
const G3: f32 = 1.0 / 6.0;

const SCALE_2D: f32 = 70.0;
const SCALE_3D: f32 = 32.0;

#[inline]
fn falloff(r2: f32, d2: f32) -> f32 {
    let t = r2 - d2;
    if t < 0.0 {
        0.0
    } else {
        let t = t * t;
        t * t
    }
}

/// Single-octave 2D simplex noise at `p`.
pub fn simplex_2d(seed: i32, p: Vec2) -> f32 {
    let skew = (p.x + p.y) * F2;
    let i = (p.x + skew).floor() as i32;
    let j = (p.y + skew).floor() as i32;

    let unskew = (i as f32 + j as f32) * G2;
    let x0 = p.x - (i as f32 - unskew);
    let y0 = p.y - (j as f32 - unskew);

    let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

    let x1 = x0 - i1 as f32 + G2;
    let y1 = y0 - j1 as f32 + G2;
    let x2 = x0 - 1.0 + 2.0 * G2;
    let y2 = y0 - 1.0 + 2.0 * G2;

    let n0 = falloff(0.5, x0 * x0 + y0 * y0) * grad_2d(seed, i, j, x0, y0);
    let n1 = falloff(0.5, x1 * x1 + y1 * y1)
        * grad_2d(seed, i.wrapping_add(i1), j.wrapping_add(j1), x1, y1);
    let n2 = falloff(0.5, x2 * x2 + y2 * y2)
        * grad_2d(seed, i.wrapping_add(1), j.wrapping_add(1), x2, y2);

    SCALE_2D * (n0 + n1 + n2)
}

/// Single-octave 3D simplex noise at `p`.
pub fn simplex_3d(seed: i32, p: Vec3) -> f32 {
    let skew = (p.x + p.y + p.z) * F3;
    let i = (p.x + skew).floor() as i32;
    let j = (p.y + skew).floor() as i32;
    let k = (p.z + skew).floor() as i32;

    let unskew = (i as f32 + j as f32 + k as f32) * G3;
    let x0 = p.x - (i as f32 - unskew);
    let y0 = p.y - (j as f32 - unskew);
    let z0 = p.z - (k as f32 - unskew);

    // Offsets of the second and third corner, chosen by the ordering of x0, y0, z0.
    let ((i1, j1, k1), (i2, j2, k2)) = if x0 >= y0 {
        if y0 >= z0 {
            ((1, 0, 0), (1, 1, 0))
        } else if x0 >= z0 {
            ((1, 0, 0), (1, 0, 1))
        } else {
            ((0, 0, 1), (1, 0, 1))
        }
    } else if y0 < z0 {
        ((0, 0, 1), (0, 1, 1))
    } else if x0 < z0 {
        ((0, 1, 0), (0, 1, 1))
    } else {
        ((0, 1, 0), (1, 1, 0))
    };

    let x1 = x0 - i1 as f32 + G3;
    let y1 = y0 - j1 as f32 + G3;
    let z1 = z0 - k1 as f32 + G3;
    let x2 = x0 - i2 as f32 + 2.0 * G3;
    let y2 = y0 - j2 as f32 + 2.0 * G3;
    let z2 = z0 - k2 as f32 + 2.0 * G3;
    let x3 = x0 - 1.0 + 3.0 * G3;
    let y3 = y0 - 1.0 + 3.0 * G3;
    let z3 = z0 - 1.0 + 3.0 * G3;

    let n0 = falloff(0.6, x0 * x0 + y0 * y0 + z0 * z0) * grad_3d(seed, i, j, k, x0, y0, z0);
    let n1 = falloff(0.6, x1 * x1 + y1 * y1 + z1 * z1)
        * grad_3d(
            seed,
            i.wrapping_add(i1),
            j.wrapping_add(j1),
            k.wrapping_add(k1),
            x1,
            y1,
            z1,
        );
    let n2 = falloff(0.6, x2 * x2 + y2 * y2 + z2 * z2)
        * grad_3d(
            seed,
            i.wrapping_add(i2),
            j.wrapping_add(j2),
            k.wrapping_add(k2),
            x2,
            y2,
            z2,
        );
    let n3 = falloff(0.6, x3 * x3 + y3 * y3 + z3 * z3)
        * grad_3d(
            seed,
            i.wrapping_add(1),
            j.wrapping_add(1),
            k.wrapping_add(1),
            x3,
            y3,
            z3,
        );

    SCALE_3D * (n0 + n1 + n2 + n3)
}
