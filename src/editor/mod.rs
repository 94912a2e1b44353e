// SPDX-License-Identifier: MPL-2.0
//! Editor session with crop, grayscale, rotate, and resize operations.
//!
//! This module follows a "state down, messages up" pattern: a UI sends
//! [`Message`]s to [`Session::update`] and receives an [`Event`] back, then
//! asks for fresh [`RenderedView`]s of the source and working surfaces.
//!
//! Every successful edit commits a new immutable [`Snapshot`] to the
//! [`EditHistory`]; a failed edit changes nothing.

mod history;
mod messages;
mod render;
mod snapshot;
pub mod viewport;

pub use history::EditHistory;
pub use messages::{Event, Message};
pub use render::RenderedView;
pub use snapshot::{EditOperation, Snapshot};
pub use viewport::ViewportGeometry;

use crate::domain::editing::{CanvasRect, CanvasSize, PixelRect, ResizeScale};
use crate::error::{Error, Result};
use crate::media::{self, image_transform, ExportSettings, PixelBuffer};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where the session is in its load/crop lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No image loaded yet.
    Empty,
    /// A source image is loaded and nothing is cropped.
    Loaded,
    /// A working image exists.
    Cropped,
}

/// The active editing session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    history: EditHistory,
    export: ExportSettings,
}

impl Session {
    #[must_use]
    pub fn new(export: ExportSettings) -> Self {
        Self {
            history: EditHistory::new(),
            export,
        }
    }

    /// Dispatch a command and report its outcome.
    pub fn update(&mut self, message: Message) -> Event {
        let outcome = match message {
            Message::Load(path) => self.load(&path).map(|s| Event::Committed(s.operation())),
            Message::Crop { selection, canvas } => self
                .crop(selection, canvas)
                .map(|s| Event::Committed(s.operation())),
            Message::Grayscale => self.grayscale().map(|s| Event::Committed(s.operation())),
            Message::Rotate90 => self.rotate90().map(|s| Event::Committed(s.operation())),
            Message::Resize(percent) => self
                .resize(percent)
                .map(|s| Event::Committed(s.operation())),
            Message::Save(path) => self.save(&path).map(Event::Saved),
            Message::Undo => self.undo().map(|s| Event::Restored(s.operation())),
            Message::Redo => self.redo().map(|s| Event::Restored(s.operation())),
        };
        outcome.unwrap_or_else(|err| {
            if err.is_warning() {
                log::warn!("{}", err);
            } else {
                log::error!("{}", err);
            }
            Event::Rejected(err)
        })
    }

    // ---------------------------------------------------------------------
    // Commands
    // ---------------------------------------------------------------------

    /// Decodes `path` and makes it the new source image.
    ///
    /// Valid in any state. Earlier snapshots stay reachable through undo.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DecodeFailure`] if the file cannot be decoded.
    pub fn load(&mut self, path: &Path) -> Result<&Snapshot> {
        let buffer = media::load_image(path)?;
        log::info!(
            "Loaded {} ({}x{}, {} channels)",
            path.display(),
            buffer.width(),
            buffer.height(),
            buffer.channel_count()
        );
        Ok(self.load_buffer(buffer))
    }

    /// Makes an already decoded buffer the new source image.
    pub fn load_buffer(&mut self, buffer: PixelBuffer) -> &Snapshot {
        self.commit(Snapshot::loaded(Arc::new(buffer)))
    }

    /// Crops the source image to a drag selection made on its canvas.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoImageLoaded`] before any load, and
    /// [`Error::InvalidRegion`] if the canvas is not laid out or the
    /// selection maps to an empty rectangle.
    pub fn crop(&mut self, selection: CanvasRect, canvas: CanvasSize) -> Result<&Snapshot> {
        let source = self.current()?.source_image();
        let geometry = ViewportGeometry::new(canvas, source.width(), source.height())
            .ok_or(Error::InvalidRegion)?;
        let rect = geometry.map_selection(selection)?;
        self.crop_region(rect)
    }

    /// Crops the source image to a rectangle in its own pixel coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoImageLoaded`] before any load, and
    /// [`Error::InvalidRegion`] if the rectangle does not fit the source.
    pub fn crop_region(&mut self, rect: PixelRect) -> Result<&Snapshot> {
        let source = Arc::clone(self.current()?.source_handle());
        let cropped = image_transform::crop(&source, rect)?;
        Ok(self.commit(Snapshot::cropped(source, cropped, rect)))
    }

    /// Converts the working image to grayscale.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoImageLoaded`] or [`Error::NothingCropped`].
    pub fn grayscale(&mut self) -> Result<&Snapshot> {
        let next = self
            .current()?
            .derive(EditOperation::Grayscale, |working, _| {
                Ok(image_transform::grayscale(working))
            })?;
        Ok(self.commit(next))
    }

    /// Rotates the working image 90° clockwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoImageLoaded`] or [`Error::NothingCropped`].
    pub fn rotate90(&mut self) -> Result<&Snapshot> {
        let next = self
            .current()?
            .derive(EditOperation::Rotate90, |working, _| {
                Ok(image_transform::rotate90(working))
            })?;
        Ok(self.commit(next))
    }

    /// Rescales the crop result by `percent` (clamped to 10–200).
    ///
    /// Always computed from the base for resize, so grayscale and rotation
    /// applied since the crop are replaced by the resized crop.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoImageLoaded`] or [`Error::NothingCropped`].
    pub fn resize(&mut self, percent: f32) -> Result<&Snapshot> {
        let scale = ResizeScale::new(percent);
        let next = self
            .current()?
            .derive(EditOperation::Resize(scale), |_, base| {
                Ok(image_transform::resize(base, scale))
            })?;
        Ok(self.commit(next))
    }

    /// Writes the working image and returns the path written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoImageLoaded`], [`Error::NothingCropped`], or
    /// [`Error::EncodeFailure`].
    pub fn save(&self, path: &Path) -> Result<PathBuf> {
        let working = self
            .current()?
            .working_image()
            .ok_or(Error::NothingCropped)?;
        media::save_image(working, path, &self.export)
    }

    /// Steps back one snapshot; at the first snapshot, re-displays it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NothingToUndo`] before any load.
    pub fn undo(&mut self) -> Result<&Snapshot> {
        if !self.history.is_empty() && !self.history.can_undo() {
            log::debug!("Undo at the first snapshot; re-displaying it");
        }
        let operation = self.history.undo()?.operation();
        log::debug!(
            "Undo -> {} ({} undo, {} redo)",
            operation,
            self.history.undo_depth(),
            self.history.redo_depth()
        );
        self.history.current().ok_or(Error::NothingToUndo)
    }

    /// Re-applies the last undone snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NothingToRedo`] if nothing was undone since the last
    /// commit.
    pub fn redo(&mut self) -> Result<&Snapshot> {
        let operation = self.history.redo()?.operation();
        log::debug!(
            "Redo -> {} ({} undo, {} redo)",
            operation,
            self.history.undo_depth(),
            self.history.redo_depth()
        );
        self.history.current().ok_or(Error::NothingToRedo)
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// The snapshot on display.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoImageLoaded`] before any load.
    pub fn current(&self) -> Result<&Snapshot> {
        self.history.current().ok_or(Error::NoImageLoaded)
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        match self.history.current() {
            None => SessionState::Empty,
            Some(snapshot) if snapshot.is_cropped() => SessionState::Cropped,
            Some(_) => SessionState::Loaded,
        }
    }

    #[must_use]
    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    #[must_use]
    pub fn export_settings(&self) -> &ExportSettings {
        &self.export
    }

    /// The source image fitted to its canvas.
    #[must_use]
    pub fn render_source(&self, canvas: CanvasSize) -> Option<RenderedView> {
        let snapshot = self.history.current()?;
        RenderedView::fit(snapshot.source_image(), canvas)
    }

    /// The working image fitted to its canvas, if anything is cropped.
    #[must_use]
    pub fn render_working(&self, canvas: CanvasSize) -> Option<RenderedView> {
        let working = self.history.current()?.working_image()?;
        RenderedView::fit(working, canvas)
    }

    fn commit(&mut self, snapshot: Snapshot) -> &Snapshot {
        let committed = self.history.commit(snapshot);
        log::info!("Committed {}", committed.operation());
        committed
    }
}
