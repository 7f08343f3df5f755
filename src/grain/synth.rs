//! Full-frame grain field synthesis.
//!
//! Produces one scalar per pixel, centered near zero, before luminance
//! modulation. Two strategies share the interface: `Coherent` layers
//! gradient noise octaves and is fully reproducible; `Fast` draws
//! independent Gaussian samples per pixel and is neither spatially
//! coherent nor reproducible. `Coherent` is the default everywhere.

use rand_distr::{Distribution, Normal};
use rayon::prelude::*;

use crate::grain::noise;

/// Grain synthesis strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrainStrategy {
    /// Multi-band gradient noise. Deterministic for fixed inputs.
    #[default]
    Coherent,
    /// Uncorrelated per-pixel Gaussian draws. Faster, not film-like,
    /// not deterministic. Explicit opt-in only.
    Fast,
}

/// Spatial scale factor per frequency band, multiplied by grain size.
const BAND_SCALES: [f64; 3] = [1.0, 2.0, 4.0];
/// Band weights; later (finer) bands contribute less.
const BAND_WEIGHTS: [f64; 3] = [1.0, 0.5, 1.0 / 3.0];

/// Standard deviation for the fast strategy's per-pixel draws, chosen so
/// the film response compresses it into the same visual range as the
/// coherent field.
const FAST_SIGMA: f64 = 0.25;

/// Film response curve: soft knee, output centered near zero in [-0.5, 0.5].
fn film_response(raw: f64) -> f64 {
    (2.0 * raw).tanh() * 0.5
}

/// Synthesize a row-major width*height grain field.
pub fn synthesize(
    width: usize,
    height: usize,
    grain_size: f64,
    strategy: GrainStrategy,
) -> Vec<f64> {
    match strategy {
        GrainStrategy::Coherent => coherent(width, height, grain_size),
        GrainStrategy::Fast => fast(width, height),
    }
}

fn coherent(width: usize, height: usize, grain_size: f64) -> Vec<f64> {
    let mut field = vec![0.0f64; width * height];
    field
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, out) in row.iter_mut().enumerate() {
                let mut raw = 0.0;
                for (scale, weight) in BAND_SCALES.iter().zip(BAND_WEIGHTS) {
                    let s = scale * grain_size;
                    raw += noise::sample(x as f64 / s, y as f64 / s) * weight;
                }
                *out = film_response(raw / BAND_SCALES.len() as f64);
            }
        });
    field
}

fn fast(width: usize, height: usize) -> Vec<f64> {
    let mut rng = rand::rng();
    let dist = Normal::new(0.0, FAST_SIGMA).unwrap();
    (0..width * height)
        .map(|_| film_response(dist.sample(&mut rng)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coherent_is_deterministic() {
        let a = synthesize(16, 12, 1.0, GrainStrategy::Coherent);
        let b = synthesize(16, 12, 1.0, GrainStrategy::Coherent);
        assert_eq!(a, b);
    }

    #[test]
    fn coherent_is_nonzero_somewhere() {
        let field = synthesize(8, 8, 1.0, GrainStrategy::Coherent);
        assert!(field.iter().any(|v| v.abs() > 1e-6));
    }

    #[test]
    fn field_has_one_scalar_per_pixel() {
        assert_eq!(synthesize(7, 5, 1.0, GrainStrategy::Coherent).len(), 35);
        assert_eq!(synthesize(7, 5, 1.0, GrainStrategy::Fast).len(), 35);
    }

    #[test]
    fn response_bounds_hold_for_both_strategies() {
        for strategy in [GrainStrategy::Coherent, GrainStrategy::Fast] {
            let field = synthesize(32, 32, 0.7, strategy);
            assert!(field.iter().all(|v| v.abs() <= 0.5));
        }
    }

    #[test]
    fn grain_size_changes_the_field() {
        let a = synthesize(16, 16, 1.0, GrainStrategy::Coherent);
        let b = synthesize(16, 16, 3.0, GrainStrategy::Coherent);
        assert_ne!(a, b);
    }

    #[test]
    fn film_response_compresses_extremes() {
        assert!(film_response(100.0) <= 0.5);
        assert!(film_response(-100.0) >= -0.5);
        assert_eq!(film_response(0.0), 0.0);
    }

    #[test]
    fn default_strategy_is_coherent() {
        assert_eq!(GrainStrategy::default(), GrainStrategy::Coherent);
    }
}
