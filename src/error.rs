use thiserror::Error;

/// Fatal pipeline errors. Raised before any pixel work starts.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid pixel buffer: {0}")]
    InvalidBuffer(String),
}

/// Errors from `.cube` LUT parsing. Fatal to the load, not to the pipeline.
#[derive(Debug, Error)]
pub enum CubeError {
    /// The payload contained no parseable data rows.
    #[error("malformed LUT: no data rows found")]
    NoData,
    #[error("LUT_3D_SIZE must be at least 2, got {0}")]
    InvalidSize(usize),
}

/// Non-fatal conditions reported alongside a successfully processed buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessWarning {
    /// The requested LUT identifier could not be resolved; the pipeline
    /// returned the grain-only result.
    LutNotAvailable(String),
    /// The LUT's data row count does not match its declared size cubed.
    /// Sampling proceeds with clamped indices.
    LutSizeMismatch { declared: usize, rows: usize },
}
