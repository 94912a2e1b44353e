// SPDX-License-Identifier: MPL-2.0
//! Command surface between a UI collaborator and the editor session.

use crate::domain::editing::{CanvasRect, CanvasSize};
use crate::editor::EditOperation;
use crate::error::Error;
use std::path::PathBuf;

/// Commands a UI can send to [`Session::update`](crate::editor::Session::update).
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Load(PathBuf),
    /// Crop using a drag on the source canvas of the given size.
    Crop {
        selection: CanvasRect,
        canvas: CanvasSize,
    },
    Grayscale,
    Rotate90,
    /// Resize percentage; clamped to the supported range.
    Resize(f32),
    Save(PathBuf),
    Undo,
    Redo,
}

/// Outcome of a [`Message`], for the UI to render as a canvas refresh or a
/// dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A new snapshot was committed by the given operation.
    Committed(EditOperation),
    /// Undo or redo moved to the snapshot produced by the given operation.
    Restored(EditOperation),
    /// The working image was written to this path.
    Saved(PathBuf),
    /// The command failed and session state is unchanged. Use
    /// [`Error::is_warning`] to pick the dialog severity.
    Rejected(Error),
}

impl Event {
    /// Whether the UI should re-request the rendered views.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        matches!(self, Event::Committed(_) | Event::Restored(_))
    }
}
