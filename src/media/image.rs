// SPDX-License-Identifier: MPL-2.0
//! Pixel buffers and image decoding (PNG, JPEG, BMP).

use crate::error::{Error, Result};
use image_rs::{DynamicImage, GenericImageView, ImageReader, RgbImage, RgbaImage};
use std::path::Path;

/// An owned, immutable 2D array of 8-bit color samples.
///
/// Buffers are always 8-bit RGB, or 8-bit RGBA when the decoded source
/// carried an alpha channel. Every editing operation produces a new buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    image: DynamicImage,
}

impl PixelBuffer {
    /// Wraps a decoded image, converting it to 8-bit RGB or RGBA.
    #[must_use]
    pub fn from_dynamic(image: DynamicImage) -> Self {
        let image = match image {
            DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => image,
            other if other.color().has_alpha() => DynamicImage::ImageRgba8(other.to_rgba8()),
            other => DynamicImage::ImageRgb8(other.to_rgb8()),
        };
        Self { image }
    }

    #[must_use]
    pub fn from_rgb(image: RgbImage) -> Self {
        Self {
            image: DynamicImage::ImageRgb8(image),
        }
    }

    #[must_use]
    pub fn from_rgba(image: RgbaImage) -> Self {
        Self {
            image: DynamicImage::ImageRgba8(image),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Number of interleaved channels per pixel (3 or 4).
    #[must_use]
    pub fn channel_count(&self) -> u8 {
        self.image.color().channel_count()
    }

    #[must_use]
    pub fn has_alpha(&self) -> bool {
        self.image.color().has_alpha()
    }

    /// Raw interleaved samples, row-major.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_bytes()
    }

    #[must_use]
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    /// Copies the pixels out as 8-bit RGB, dropping alpha.
    #[must_use]
    pub fn to_rgb8(&self) -> RgbImage {
        self.image.to_rgb8()
    }

    /// Copies the pixels out as 8-bit RGBA for blitting.
    #[must_use]
    pub fn to_rgba8(&self) -> RgbaImage {
        self.image.to_rgba8()
    }
}

/// Load an image from the given path.
///
/// The format is sniffed from the file content, so a mislabelled extension
/// still decodes.
///
/// # Errors
///
/// Returns [`Error::DecodeFailure`] if the file cannot be opened, the format
/// is unsupported, or the data is corrupt.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<PixelBuffer> {
    let path = path.as_ref();
    let reader = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| Error::DecodeFailure(format!("{}: {}", path.display(), e)))?;
    let image = reader
        .decode()
        .map_err(|e| Error::DecodeFailure(format!("{}: {}", path.display(), e)))?;
    Ok(PixelBuffer::from_dynamic(image))
}
