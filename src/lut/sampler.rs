//! Trilinear interpolation over a 3D LUT.

use crate::lut::cube::Lut3D;

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn lerp3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [lerp(a[0], b[0], t), lerp(a[1], b[1], t), lerp(a[2], b[2], t)]
}

/// Sample the LUT at a normalized (r, g, b) point via trilinear
/// interpolation of the 8 surrounding grid corners.
///
/// Inputs are clamped to [0, 1]; corner indices are clamped to the grid
/// bounds and, defensively, to the data length so size-mismatched tables
/// never index out of range. The table must have at least one row, which
/// [`super::cube::parse_cube`] guarantees.
pub fn sample(lut: &Lut3D, r: f32, g: f32, b: f32) -> [f32; 3] {
    let size = lut.size;
    let max = (size - 1) as f32;

    let x = r.clamp(0.0, 1.0) * max;
    let y = g.clamp(0.0, 1.0) * max;
    let z = b.clamp(0.0, 1.0) * max;

    let x0 = (x.floor() as usize).min(size - 1);
    let y0 = (y.floor() as usize).min(size - 1);
    let z0 = (z.floor() as usize).min(size - 1);
    let x1 = (x0 + 1).min(size - 1);
    let y1 = (y0 + 1).min(size - 1);
    let z1 = (z0 + 1).min(size - 1);

    let fx = x - x0 as f32;
    let fy = y - y0 as f32;
    let fz = z - z0 as f32;

    let fetch = |xi: usize, yi: usize, zi: usize| -> [f32; 3] {
        let idx = (zi * size * size + yi * size + xi).min(lut.data.len() - 1);
        lut.data[idx]
    };

    // x edges -> y faces -> z
    let c00 = lerp3(fetch(x0, y0, z0), fetch(x1, y0, z0), fx);
    let c10 = lerp3(fetch(x0, y1, z0), fetch(x1, y1, z0), fx);
    let c01 = lerp3(fetch(x0, y0, z1), fetch(x1, y0, z1), fx);
    let c11 = lerp3(fetch(x0, y1, z1), fetch(x1, y1, z1), fx);

    let c0 = lerp3(c00, c10, fy);
    let c1 = lerp3(c01, c11, fy);
    lerp3(c0, c1, fz)
}
