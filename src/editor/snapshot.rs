// SPDX-License-Identifier: MPL-2.0
//! Immutable editor state recorded at each commit.

use crate::domain::editing::{PixelRect, ResizeScale};
use crate::error::{Error, Result};
use crate::media::PixelBuffer;
use std::fmt;
use std::sync::Arc;

/// The command that produced a snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditOperation {
    Load,
    Crop(PixelRect),
    Grayscale,
    Rotate90,
    Resize(ResizeScale),
}

impl EditOperation {
    /// Stable identifier for diagnostics logging.
    pub fn name(&self) -> &'static str {
        match self {
            EditOperation::Load => "load",
            EditOperation::Crop(_) => "crop",
            EditOperation::Grayscale => "grayscale",
            EditOperation::Rotate90 => "rotate90",
            EditOperation::Resize(_) => "resize",
        }
    }
}

impl fmt::Display for EditOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOperation::Crop(rect) => write!(f, "crop {}", rect),
            EditOperation::Resize(scale) => write!(f, "resize {}%", scale.value()),
            other => f.write_str(other.name()),
        }
    }
}

/// Working image together with the crop result it derives from.
#[derive(Debug, Clone, PartialEq)]
struct CropState {
    working: Arc<PixelBuffer>,
    base_for_resize: Arc<PixelBuffer>,
}

/// One point in the edit history.
///
/// Buffers are shared with neighbouring snapshots through [`Arc`]; a snapshot
/// only owns fresh pixels for what its operation changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    source: Arc<PixelBuffer>,
    crop: Option<CropState>,
    operation: EditOperation,
}

impl Snapshot {
    /// A freshly loaded source image with nothing cropped.
    #[must_use]
    pub fn loaded(source: Arc<PixelBuffer>) -> Self {
        Self {
            source,
            crop: None,
            operation: EditOperation::Load,
        }
    }

    /// A new crop of `source`; the cropped pixels become both the working
    /// image and the base for later resizes.
    #[must_use]
    pub fn cropped(source: Arc<PixelBuffer>, cropped: PixelBuffer, rect: PixelRect) -> Self {
        let cropped = Arc::new(cropped);
        Self {
            source,
            crop: Some(CropState {
                working: Arc::clone(&cropped),
                base_for_resize: cropped,
            }),
            operation: EditOperation::Crop(rect),
        }
    }

    /// Builds the next snapshot by replacing the working image.
    ///
    /// `transform` receives the current working image and the base for
    /// resize. The source image and the base are carried over untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NothingCropped`] if this snapshot has no working
    /// image, or whatever `transform` fails with.
    pub fn derive<F>(&self, operation: EditOperation, transform: F) -> Result<Snapshot>
    where
        F: FnOnce(&PixelBuffer, &PixelBuffer) -> Result<PixelBuffer>,
    {
        let crop = self.crop.as_ref().ok_or(Error::NothingCropped)?;
        let working = transform(&crop.working, &crop.base_for_resize)?;
        Ok(Self {
            source: Arc::clone(&self.source),
            crop: Some(CropState {
                working: Arc::new(working),
                base_for_resize: Arc::clone(&crop.base_for_resize),
            }),
            operation,
        })
    }

    #[must_use]
    pub fn source_image(&self) -> &PixelBuffer {
        &self.source
    }

    /// Shared handle to the source image, for building follow-up snapshots.
    #[must_use]
    pub fn source_handle(&self) -> &Arc<PixelBuffer> {
        &self.source
    }

    #[must_use]
    pub fn working_image(&self) -> Option<&PixelBuffer> {
        self.crop.as_ref().map(|crop| crop.working.as_ref())
    }

    #[must_use]
    pub fn base_for_resize(&self) -> Option<&PixelBuffer> {
        self.crop.as_ref().map(|crop| crop.base_for_resize.as_ref())
    }

    #[must_use]
    pub fn is_cropped(&self) -> bool {
        self.crop.is_some()
    }

    #[must_use]
    pub fn operation(&self) -> EditOperation {
        self.operation
    }
}
