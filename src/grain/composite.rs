//! Luminance mapping and adaptive grain compositing.

use rayon::prelude::*;

use crate::buffer::PixelBuffer;
use crate::grain::{iso_profile, GrainSettings};

/// Gaussian spread of the mid-tone visibility curve.
const MIDTONE_SPREAD: f64 = 0.18;
/// Fraction of the base intensity always applied, even at pure black/white.
const STRENGTH_FLOOR: f64 = 0.4;

/// Per-pixel luma in [0, 1], Rec.601 weighting on the raw 8-bit values
/// (no gamma correction).
pub fn luminance_map(buffer: &PixelBuffer) -> Vec<f64> {
    buffer
        .data
        .chunks_exact(4)
        .map(|px| (0.299 * px[0] as f64 + 0.587 * px[1] as f64 + 0.114 * px[2] as f64) / 255.0)
        .collect()
}

/// Grain visibility multiplier for a luminance value: peaks at mid-gray,
/// falls off toward the extremes but never below the floor.
fn adaptive_strength(base: f64, luminance: f64) -> f64 {
    let midtone = (-(luminance - 0.5).powi(2) / MIDTONE_SPREAD).exp();
    base * (STRENGTH_FLOOR + (1.0 - STRENGTH_FLOOR) * midtone)
}

/// Composite a grain field onto an image, modulated by luminance.
///
/// Returns a new buffer; the source is never touched. The same delta is
/// added to R, G and B (grain is strictly monochromatic), saturating at
/// the channel bounds. Alpha is copied through unchanged.
///
/// `grain` and `luminance` are row-major fields of `width * height`
/// scalars, as produced by [`super::synth::synthesize`] and
/// [`luminance_map`].
pub fn apply_grain(
    source: &PixelBuffer,
    grain: &[f64],
    luminance: &[f64],
    settings: &GrainSettings,
) -> PixelBuffer {
    let profile = iso_profile(settings.iso);
    let base = settings.strength * profile.intensity;

    let mut out = source.clone();
    out.data
        .par_chunks_mut(4)
        .enumerate()
        .for_each(|(i, px)| {
            let delta = grain[i] * adaptive_strength(base, luminance[i]) * 255.0;
            for c in 0..3 {
                px[c] = (px[c] as f64 + delta).round().clamp(0.0, 255.0) as u8;
            }
            // px[3] (alpha) untouched
        });
    out
}
