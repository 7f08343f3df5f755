//! Image file decode/encode glue for the CLI.

use std::path::Path;

use image::RgbaImage;

use crate::buffer::PixelBuffer;

pub fn load_rgba(path: &Path) -> Result<PixelBuffer, String> {
    let img = image::open(path).map_err(|e| format!("Failed to load image: {e}"))?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    PixelBuffer::from_rgba(w as usize, h as usize, rgba.into_raw())
        .map_err(|e| format!("Decoded image is inconsistent: {e}"))
}

pub fn save_rgba(buffer: &PixelBuffer, path: &Path) -> Result<(), String> {
    let img = RgbaImage::from_raw(
        buffer.width as u32,
        buffer.height as u32,
        buffer.data.clone(),
    )
    .ok_or_else(|| "Buffer dimensions inconsistent with data".to_string())?;
    img.save(path).map_err(|e| format!("Failed to save image: {e}"))
}
