//! # Rendering Module
//!
//! Procedural icon rendering into RGBA pixel buffers.
//!
//! Rendering is pure: the same item and size always produce byte-identical
//! images. Caching rendered icons is left to whoever displays them.

pub mod canvas;
pub mod icons;

pub use canvas::*;
pub use icons::*;

use crate::LootResult;
use image::RgbaImage;
use std::path::Path;

/// Writes an icon to disk as a PNG file.
pub fn write_png(image: &RgbaImage, path: impl AsRef<Path>) -> LootResult<()> {
    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}
