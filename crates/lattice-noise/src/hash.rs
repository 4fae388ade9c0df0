//! Seeded lattice hashing and gradient lookup.
//!
//! Hashes are pure functions of `(seed, lattice coordinates)`. Coordinates are
//! multiplied by large odd primes and mixed with an avalanched seed, so there is
//! no permutation table and therefore no short repeat period along any axis.

const PRIME_X: u32 = 501_125_321;
const PRIME_Y: u32 = 1_136_930_381;
const PRIME_Z: u32 = 1_720_413_743;

const HASH_MUL: u32 = 0x27d4_eb2d;

/// The 12 cube-edge gradients, split per component.
///
/// Entries 0..4 lie in the XY plane, 4..8 in XZ, 8..12 in YZ. The 2D lookup
/// uses the X and Y columns of the same table.
const GRAD_X: [f32; 12] = [1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 0.0, 0.0, 0.0, 0.0];
const GRAD_Y: [f32; 12] = [1.0, 1.0, -1.0, -1.0, 0.0, 0.0, 0.0, 0.0, 1.0, -1.0, 1.0, -1.0];
const GRAD_Z: [f32; 12] = [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, -1.0];

/// Avalanche the seed so neighbouring seeds produce unrelated fields.
#[inline]
fn mix_seed(seed: i32) -> u32 {
    let mut h = seed as u32;
    h = (h ^ (h >> 16)).wrapping_mul(0x7feb_352d);
    h = (h ^ (h >> 15)).wrapping_mul(0x846c_a68b);
    h ^ (h >> 16)
}

#[inline]
fn finish(h: u32) -> u32 {
    let h = h.wrapping_mul(HASH_MUL);
    h ^ (h >> 15)
}

/// Hash a 2D lattice point.
#[inline]
pub fn hash_2d(seed: i32, x: i32, y: i32) -> u32 {
    finish(
        mix_seed(seed)
            ^ (x as u32).wrapping_mul(PRIME_X)
            ^ (y as u32).wrapping_mul(PRIME_Y),
    )
}

/// Hash a 3D lattice point.
#[inline]
pub fn hash_3d(seed: i32, x: i32, y: i32, z: i32) -> u32 {
    finish(
        mix_seed(seed)
            ^ (x as u32).wrapping_mul(PRIME_X)
            ^ (y as u32).wrapping_mul(PRIME_Y)
            ^ (z as u32).wrapping_mul(PRIME_Z),
    )
}

/// Dot product of `(dx, dy)` with the gradient assigned to lattice point `(x, y)`.
#[inline]
pub fn grad_2d(seed: i32, x: i32, y: i32, dx: f32, dy: f32) -> f32 {
    let i = (hash_2d(seed, x, y) % 12) as usize;
    dx * GRAD_X[i] + dy * GRAD_Y[i]
}

/// Dot product of `(dx, dy, dz)` with the gradient assigned to lattice point `(x, y, z)`.
#[inline]
pub fn grad_3d(seed: i32, x: i32, y: i32, z: i32, dx: f32, dy: f32, dz: f32) -> f32 {
    let i = (hash_3d(seed, x, y, z) % 12) as usize;
    dx * GRAD_X[i] + dy * GRAD_Y[i] + dz * GRAD_Z[i]
}
