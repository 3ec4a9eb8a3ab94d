//! PNG export of rasterized frames.
//!
//! Feature-gated behind `png` (default on) so embedders that only need
//! [`crate::pixel::rasterize`] do not pull in the `image` crate.

use std::path::Path;

use blobfield_core::error::EngineError;
use blobfield_core::{DrawCommand, Rgb};

use crate::pixel::rasterize;

/// Writes an RGBA8 buffer as a PNG image.
///
/// Returns `EngineError::InvalidDimensions` if the dimensions overflow `u32`,
/// or `EngineError::Io` on a size mismatch or write failure.
pub fn write_png(
    rgba: Vec<u8>,
    width: usize,
    height: usize,
    path: &Path,
) -> Result<(), EngineError> {
    let w = u32::try_from(width).map_err(|_| EngineError::InvalidDimensions)?;
    let h = u32::try_from(height).map_err(|_| EngineError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| EngineError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| EngineError::Io(e.to_string()))?;
    log::debug!("wrote {}x{} frame to {}", w, h, path.display());
    Ok(())
}

/// Rasterizes one frame and writes it to `path`.
pub fn write_frame(
    commands: &[DrawCommand],
    background: Rgb,
    width: usize,
    height: usize,
    blur: f64,
    path: &Path,
) -> Result<(), EngineError> {
    write_png(rasterize(commands, background, width, height, blur), width, height, path)
}
