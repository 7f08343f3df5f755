//! Film grain synthesis and compositing.

pub mod composite;
pub mod noise;
pub mod synth;

use synth::GrainStrategy;

/// Grain response parameters for one film speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoProfile {
    /// Base grain amplitude multiplier.
    pub intensity: f64,
    /// Grain size multiplier folded into the synthesis scale.
    pub size: f64,
    /// Grain contrast characteristic of the film speed.
    pub contrast: f64,
}

/// The six canonical film speeds, coarse to fine.
const ISO_TABLE: [(u32, IsoProfile); 6] = [
    (
        100,
        IsoProfile {
            intensity: 0.25,
            size: 0.8,
            contrast: 0.9,
        },
    ),
    (
        200,
        IsoProfile {
            intensity: 0.35,
            size: 0.9,
            contrast: 0.95,
        },
    ),
    (
        400,
        IsoProfile {
            intensity: 0.5,
            size: 1.0,
            contrast: 1.0,
        },
    ),
    (
        800,
        IsoProfile {
            intensity: 0.65,
            size: 1.1,
            contrast: 1.1,
        },
    ),
    (
        1600,
        IsoProfile {
            intensity: 0.85,
            size: 1.25,
            contrast: 1.2,
        },
    ),
    (
        3200,
        IsoProfile {
            intensity: 1.0,
            size: 1.4,
            contrast: 1.3,
        },
    ),
];

/// Look up the profile for a film speed. Unknown or auto-detected ISO
/// values fall back to the 800 profile.
pub fn iso_profile(iso: u32) -> IsoProfile {
    ISO_TABLE
        .iter()
        .find(|(key, _)| *key == iso)
        .map(|(_, profile)| *profile)
        // 800 sits in the middle of the table and is the documented fallback
        .unwrap_or(ISO_TABLE[3].1)
}

/// All grain parameters controlled by the caller.
#[derive(Debug, Clone)]
pub struct GrainSettings {
    /// Film speed; one of 100/200/400/800/1600/3200, otherwise 800 is used.
    pub iso: u32,
    /// Overall grain strength. UI range is 0-1 but larger values are legal;
    /// output saturates at the channel bounds.
    pub strength: f64,
    /// Grain size multiplier, > 0.
    pub grain_size: f64,
    /// Synthesis strategy. Only `Coherent` is deterministic.
    pub strategy: GrainStrategy,
}

impl Default for GrainSettings {
    fn default() -> Self {
        Self {
            iso: 800,
            strength: 0.5,
            grain_size: 1.0,
            strategy: GrainStrategy::Coherent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_iso_resolves() {
        assert_eq!(iso_profile(100).intensity, 0.25);
        assert_eq!(iso_profile(3200).intensity, 1.0);
    }

    #[test]
    fn unknown_iso_falls_back_to_800() {
        assert_eq!(iso_profile(640), iso_profile(800));
        assert_eq!(iso_profile(0), iso_profile(800));
    }

    #[test]
    fn intensity_rises_with_speed() {
        let speeds = [100, 200, 400, 800, 1600, 3200];
        for pair in speeds.windows(2) {
            assert!(iso_profile(pair[0]).intensity < iso_profile(pair[1]).intensity);
        }
    }
}
