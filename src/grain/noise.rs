//! Deterministic 2D gradient noise.
//!
//! Lattice gradients are derived from a sine-fract hash so the field is
//! reproducible across runs and implementations. The hash constants are
//! part of the contract: changing them changes every grain field.

use std::f64::consts::TAU;

const HASH_X: f64 = 12.9898;
const HASH_Y: f64 = 78.233;
const HASH_SCALE: f64 = 43758.5453;

/// Pseudo-random unit gradient for the lattice point (ix, iy).
fn gradient(ix: f64, iy: f64) -> (f64, f64) {
    let s = (ix * HASH_X + iy * HASH_Y).sin() * HASH_SCALE;
    let angle = (s - s.floor()) * TAU;
    (angle.cos(), angle.sin())
}

/// Quintic fade: t^3 (t (6t - 15) + 10). Zero slope at t=0 and t=1.
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Dot product of the gradient at lattice point (ix, iy) with the offset
/// from that point to (x, y).
fn corner_dot(ix: f64, iy: f64, x: f64, y: f64) -> f64 {
    let (gx, gy) = gradient(ix, iy);
    gx * (x - ix) + gy * (y - iy)
}

/// Sample the noise field at (x, y). Output is approximately [-1, 1] and
/// exactly 0 at integer lattice points. Pure function of its inputs.
pub fn sample(x: f64, y: f64) -> f64 {
    let x0 = x.floor();
    let y0 = y.floor();
    let x1 = x0 + 1.0;
    let y1 = y0 + 1.0;

    let sx = fade(x - x0);
    let sy = fade(y - y0);

    let d00 = corner_dot(x0, y0, x, y);
    let d10 = corner_dot(x1, y0, x, y);
    let d01 = corner_dot(x0, y1, x, y);
    let d11 = corner_dot(x1, y1, x, y);

    let top = lerp(d00, d10, sx);
    let bottom = lerp(d01, d11, sx);
    lerp(top, bottom, sy)
}
