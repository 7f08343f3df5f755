//! The full grain + grading pipeline.

use crate::buffer::PixelBuffer;
use crate::error::{PipelineError, ProcessWarning};
use crate::grade;
use crate::grain::composite;
use crate::grain::synth;
use crate::grain::{iso_profile, GrainSettings};
use crate::lut::cache::LutCatalog;
use crate::lut::LutSettings;

/// Result of a pipeline run: the transformed buffer plus any non-fatal
/// conditions encountered along the way.
#[derive(Debug)]
pub struct ProcessOutput {
    pub buffer: PixelBuffer,
    pub warnings: Vec<ProcessWarning>,
}

/// Run the grain stage, then optionally the grading stage, on a source
/// buffer. The source is never mutated.
///
/// An invalid buffer aborts before any pixel work. LUT trouble never
/// fails the run: an unresolved identifier degrades to the grain-only
/// result with a [`ProcessWarning::LutNotAvailable`], and a
/// size-mismatched table is applied with clamped indices plus a
/// [`ProcessWarning::LutSizeMismatch`]. Each stage either completes its
/// full per-pixel pass or is skipped entirely.
pub fn process(
    source: &PixelBuffer,
    grain: &GrainSettings,
    lut: &LutSettings,
    luts: &mut dyn LutCatalog,
) -> Result<ProcessOutput, PipelineError> {
    source.validate()?;

    // Grain stage. The profile's size characteristic scales the
    // caller's grain size.
    let profile = iso_profile(grain.iso);
    let field = synth::synthesize(
        source.width,
        source.height,
        grain.grain_size * profile.size,
        grain.strategy,
    );
    let luminance = composite::luminance_map(source);
    let mut buffer = composite::apply_grain(source, &field, &luminance, grain);

    // Grading stage.
    let mut warnings = Vec::new();
    if lut.wants_grading() {
        match luts.resolve(&lut.selected) {
            Some(table) => {
                if !table.is_complete() {
                    warnings.push(ProcessWarning::LutSizeMismatch {
                        declared: table.size,
                        rows: table.data.len(),
                    });
                }
                buffer = grade::apply_lut(&buffer, table, lut.strength);
            }
            None => {
                log::warn!("LUT '{}' not available, skipping grading", lut.selected);
                warnings.push(ProcessWarning::LutNotAvailable(lut.selected.clone()));
            }
        }
    }

    Ok(ProcessOutput { buffer, warnings })
}
