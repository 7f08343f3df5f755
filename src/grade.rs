//! LUT color grading over a full RGBA buffer.

use rayon::prelude::*;

use crate::buffer::PixelBuffer;
use crate::lut::cube::Lut3D;
use crate::lut::sampler;

/// Apply a 3D LUT to every pixel, blended with the original by
/// `strength` in [0, 1].
///
/// Returns a new buffer; strength <= 0 is a no-op clone. Each channel is
/// normalized, remapped through the LUT, scaled back to [0, 255] and
/// linearly blended toward the graded value. Alpha is never touched.
pub fn apply_lut(source: &PixelBuffer, lut: &Lut3D, strength: f32) -> PixelBuffer {
    if strength <= 0.0 {
        return source.clone();
    }
    let strength = strength.min(1.0);

    let mut out = source.clone();
    out.data.par_chunks_mut(4).for_each(|px| {
        let r = px[0] as f32 / 255.0;
        let g = px[1] as f32 / 255.0;
        let b = px[2] as f32 / 255.0;
        let graded = sampler::sample(lut, r, g, b);
        for c in 0..3 {
            let original = px[c] as f32;
            let target = graded[c] * 255.0;
            px[c] = (original + (target - original) * strength)
                .round()
                .clamp(0.0, 255.0) as u8;
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_buffer() -> PixelBuffer {
        let mut buf = PixelBuffer::filled(4, 4, [0, 0, 0, 255]);
        for (i, px) in buf.data.chunks_exact_mut(4).enumerate() {
            px[0] = (i * 16) as u8;
            px[1] = (i * 8) as u8;
            px[2] = 255 - (i * 16) as u8;
            px[3] = (i * 10) as u8;
        }
        buf
    }

    #[test]
    fn zero_strength_is_noop() {
        let src = test_buffer();
        let out = apply_lut(&src, &Lut3D::identity(2), 0.0);
        assert_eq!(out, src);
    }

    #[test]
    fn identity_lut_full_strength_within_rounding() {
        let src = test_buffer();
        let out = apply_lut(&src, &Lut3D::identity(2), 1.0);
        for (a, b) in src.data.iter().zip(out.data.iter()) {
            assert!((*a as i32 - *b as i32).abs() <= 1);
        }
    }

    #[test]
    fn alpha_never_touched() {
        let src = test_buffer();
        // A LUT that crushes everything to black.
        let mut lut = Lut3D::identity(2);
        for row in lut.data.iter_mut() {
            *row = [0.0, 0.0, 0.0];
        }
        let out = apply_lut(&src, &lut, 1.0);
        for (before, after) in src.data.chunks_exact(4).zip(out.data.chunks_exact(4)) {
            assert_eq!(before[3], after[3]);
            assert_eq!(after[0], 0);
        }
    }

    #[test]
    fn half_strength_blends_halfway() {
        let src = PixelBuffer::filled(2, 2, [100, 100, 100, 255]);
        let mut lut = Lut3D::identity(2);
        for row in lut.data.iter_mut() {
            *row = [0.0, 0.0, 0.0];
        }
        let out = apply_lut(&src, &lut, 0.5);
        assert_eq!(out.data[0], 50);
    }

    #[test]
    fn strength_above_one_clamped() {
        let src = test_buffer();
        let full = apply_lut(&src, &Lut3D::identity(2), 1.0);
        let over = apply_lut(&src, &Lut3D::identity(2), 5.0);
        assert_eq!(full, over);
    }
}
