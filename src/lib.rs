//! Film Grain Lab - library crate.
//!
//! Offline film grain synthesis and 3D LUT color grading for RGBA
//! pixel buffers, for use by the CLI binary and external callers.

pub mod buffer;
pub mod error;
pub mod grade;
pub mod grain;
pub mod image_io;
pub mod lut;
pub mod pipeline;

pub use buffer::PixelBuffer;
pub use error::{CubeError, PipelineError, ProcessWarning};
pub use grain::synth::GrainStrategy;
pub use grain::{GrainSettings, IsoProfile};
pub use lut::cache::{LutCache, LutCatalog};
pub use lut::cube::Lut3D;
pub use lut::LutSettings;
pub use pipeline::{process, ProcessOutput};
