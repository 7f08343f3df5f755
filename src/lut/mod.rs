//! 3D LUT parsing, sampling and caching.

pub mod cache;
pub mod cube;
pub mod sampler;

/// Sentinel identifier meaning "no LUT selected".
pub const LUT_NONE: &str = "none";

/// LUT application parameters controlled by the caller.
#[derive(Debug, Clone)]
pub struct LutSettings {
    /// Identifier of the LUT to apply, or [`LUT_NONE`].
    pub selected: String,
    /// Blend strength toward the graded color, in [0, 1].
    pub strength: f32,
    /// Master toggle; when false the grading stage is skipped entirely.
    pub apply: bool,
}

impl Default for LutSettings {
    fn default() -> Self {
        Self {
            selected: LUT_NONE.to_string(),
            strength: 1.0,
            apply: false,
        }
    }
}

impl LutSettings {
    /// True when the settings actually request a grading pass.
    pub fn wants_grading(&self) -> bool {
        self.apply && self.selected != LUT_NONE && self.strength > 0.0
    }
}
