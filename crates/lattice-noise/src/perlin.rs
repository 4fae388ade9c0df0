//! Gradient (Perlin) noise over the integer lattice.
//!
//! Inputs are already scaled by the configured frequency. Corner gradients come
//! from [`crate::hash`] and are blended along each axis with the selected
//! [`Interp`] curve.

use glam::{Vec2, Vec3};

use crate::hash::{grad_2d, grad_3d};
use crate::interp::{Interp, lerp};

/// Upper bound of `|perlin_2d|`. Reached at cell centres when all four
/// corner gradients point inwards.
pub const PERLIN_2D_BOUND: f32 = 1.0;

/// Upper bound of `|perlin_3d|`. The supremum is about 1.065 (Linear
/// blending); Hermite and Quintic stay slightly lower.
pub const PERLIN_3D_BOUND: f32 = 1.07;

/// Single-octave 2D Perlin noise at `p`.
pub fn perlin_2d(seed: i32, interp: Interp, p: Vec2) -> f32 {
    let x0 = p.x.floor() as i32;
    let y0 = p.y.floor() as i32;
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);

    let xd0 = p.x - x0 as f32;
    let yd0 = p.y - y0 as f32;
    let xd1 = xd0 - 1.0;
    let yd1 = yd0 - 1.0;

    let xs = interp.blend(xd0);
    let ys = interp.blend(yd0);

    let xf0 = lerp(
        grad_2d(seed, x0, y0, xd0, yd0),
        grad_2d(seed, x1, y0, xd1, yd0),
        xs,
    );
    let xf1 = lerp(
        grad_2d(seed, x0, y1, xd0, yd1),
        grad_2d(seed, x1, y1, xd1, yd1),
        xs,
    );

    lerp(xf0, xf1, ys)
}

/// Single-octave 3D Perlin noise at `p`.
pub fn perlin_3d(seed: i32, interp: Interp, p: Vec3) -> f32 {
    let x0 = p.x.floor() as i32;
    let y0 = p.y.floor() as i32;
    let z0 = p.z.floor() as i32;
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);
    let z1 = z0.wrapping_add(1);

    let xd0 = p.x - x0 as f32;
    let yd0 = p.y - y0 as f32;
    let zd0 = p.z - z0 as f32;
    let xd1 = xd0 - 1.0;
    let yd1 = yd0 - 1.0;
    let zd1 = zd0 - 1.0;

    let xs = interp.blend(xd0);
    let ys = interp.blend(yd0);
    let zs = interp.blend(zd0);

    let xf00 = lerp(
        grad_3d(seed, x0, y0, z0, xd0, yd0, zd0),
        grad_3d(seed, x1, y0, z0, xd1, yd0, zd0),
        xs,
    );
    let xf10 = lerp(
        grad_3d(seed, x0, y1, z0, xd0, yd1, zd0),
        grad_3d(seed, x1, y1, z0, xd1, yd1, zd0),
        xs,
    );
    let xf01 = lerp(
        grad_3d(seed, x0, y0, z1, xd0, yd0, zd1),
        grad_3d(seed, x1, y0, z1, xd1, yd0, zd1),
        xs,
    );
    let xf11 = lerp(
        grad_3d(seed, x0, y1, z1, xd0, yd1, zd1),
        grad_3d(seed, x1, y1, z1, xd1, yd1, zd1),
        xs,
    );

    let yf0 = lerp(xf00, xf10, ys);
    let yf1 = lerp(xf01, xf11, ys);

    lerp(yf0, yf1, zs)
}
