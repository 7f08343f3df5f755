use crate::error::PipelineError;

/// An 8-bit RGBA image buffer, row-major, 4 bytes per pixel.
///
/// The pipeline never mutates a caller's buffer; every stage allocates
/// its output. Alpha is carried through every stage untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer filled with a single RGBA value.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Self {
        let mut data = Vec::with_capacity(width * height * 4);
        for _ in 0..width * height {
            data.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap caller-supplied RGBA bytes, rejecting inconsistent dimensions.
    pub fn from_rgba(width: usize, height: usize, data: Vec<u8>) -> Result<Self, PipelineError> {
        let buffer = Self {
            width,
            height,
            data,
        };
        buffer.validate()?;
        Ok(buffer)
    }

    /// Check dimensions and data length. Fatal to the pipeline if violated.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.width == 0 || self.height == 0 {
            return Err(PipelineError::InvalidBuffer(format!(
                "dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        let expected = self.width * self.height * 4;
        if self.data.len() != expected {
            return Err(PipelineError::InvalidBuffer(format!(
                "data length {} does not match {}x{}x4 = {}",
                self.data.len(),
                self.width,
                self.height,
                expected
            )));
        }
        Ok(())
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_buffer_is_valid() {
        let buf = PixelBuffer::filled(4, 3, [10, 20, 30, 255]);
        assert!(buf.validate().is_ok());
        assert_eq!(buf.data.len(), 4 * 3 * 4);
        assert_eq!(&buf.data[0..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn zero_dimensions_rejected() {
        let buf = PixelBuffer {
            width: 0,
            height: 5,
            data: vec![],
        };
        assert!(buf.validate().is_err());
    }

    #[test]
    fn length_mismatch_rejected() {
        let err = PixelBuffer::from_rgba(2, 2, vec![0u8; 15]).unwrap_err();
        let PipelineError::InvalidBuffer(msg) = err;
        assert!(msg.contains("15"));
    }
}
