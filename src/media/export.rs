// SPDX-License-Identifier: MPL-2.0
//! Writing edited images to disk (PNG, JPEG).

use crate::domain::editing::JpegQuality;
use crate::error::{Error, Result};
use crate::media::PixelBuffer;
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::ImageFormat;
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    /// PNG format (lossless).
    #[default]
    Png,
    /// JPEG format (lossy, smaller file size).
    Jpeg,
}

impl ExportFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }

    /// Detects format from a file extension (case-insensitive).
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<ExportFormat> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ExportFormat::Png),
            "jpg" | "jpeg" => Some(ExportFormat::Jpeg),
            _ => None,
        }
    }
}

/// Encoder settings applied by [`save_image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportSettings {
    /// Format used when the target path has no extension.
    pub default_format: ExportFormat,
    pub jpeg_quality: JpegQuality,
}

/// Resolves the final output path and format.
///
/// A path without an extension gets the default format's extension appended.
/// A bare dot-name such as `.jpg` counts as having that extension.
fn resolve_target(path: &Path, settings: &ExportSettings) -> Result<(PathBuf, ExportFormat)> {
    let unsupported = |ext: &str| Error::EncodeFailure(format!("unsupported export format '.{ext}'"));

    let ext = match path.extension() {
        Some(ext) => ext
            .to_str()
            .ok_or_else(|| unsupported(&ext.to_string_lossy()))?,
        None => match dot_name_extension(path) {
            Some(ext) => ext,
            None => {
                let format = settings.default_format;
                return Ok((path.with_extension(format.extension()), format));
            }
        },
    };
    ExportFormat::from_extension(ext)
        .map(|format| (path.to_path_buf(), format))
        .ok_or_else(|| unsupported(ext))
}

/// `jpg` for a file named `.jpg`.
fn dot_name_extension(path: &Path) -> Option<&str> {
    path.file_name()?
        .to_str()?
        .strip_prefix('.')
        .filter(|rest| !rest.is_empty() && !rest.contains('.'))
}

/// Hidden sibling file that ends up with the mode `File::create` would give.
fn staging_builder() -> Builder<'static, 'static> {
    let mut builder = Builder::new();
    builder.prefix(".crop_lens-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder
}

/// Writes the buffer as 8-bit RGB and returns the path actually written.
///
/// The image is encoded into a temporary file next to the target and renamed
/// over it once complete, so a failed save leaves any existing file intact.
///
/// # Errors
///
/// Returns [`Error::EncodeFailure`] for unsupported extensions, unwritable
/// paths, or encoder failures.
pub fn save_image(buffer: &PixelBuffer, path: &Path, settings: &ExportSettings) -> Result<PathBuf> {
    let (target, format) = resolve_target(path, settings)?;
    let rgb = buffer.to_rgb8();

    let encode_failure = |e: &dyn std::fmt::Display| {
        Error::EncodeFailure(format!("{}: {}", target.display(), e))
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staging = staging_builder()
        .tempfile_in(dir)
        .map_err(|e| encode_failure(&e))?;
    {
        let mut writer = BufWriter::new(staging.as_file_mut());
        match format {
            ExportFormat::Png => rgb.write_to(&mut writer, ImageFormat::Png),
            ExportFormat::Jpeg => {
                JpegEncoder::new_with_quality(&mut writer, settings.jpeg_quality.value())
                    .encode_image(&rgb)
            }
        }
        .map_err(|e| encode_failure(&e))?;
        writer.flush().map_err(|e| encode_failure(&e))?;
    }
    staging
        .persist(&target)
        .map_err(|e| encode_failure(&e.error))?;

    log::info!(
        "Saved {}x{} image to {} ({:?})",
        rgb.width(),
        rgb.height(),
        target.display(),
        format
    );
    Ok(target)
}
