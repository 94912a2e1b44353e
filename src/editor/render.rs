// SPDX-License-Identifier: MPL-2.0
//! Display-ready views of the source and working images.

use crate::domain::editing::CanvasSize;
use crate::editor::viewport::ViewportGeometry;
use crate::media::{image_transform, PixelBuffer};

/// A buffer scaled to fit a canvas, with the offset to blit it at.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedView {
    pub buffer: PixelBuffer,
    pub display_width: u32,
    pub display_height: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

impl RenderedView {
    /// Lays `image` out in `canvas` and scales it to the display size.
    ///
    /// Returns `None` while the canvas has no size yet.
    #[must_use]
    pub fn fit(image: &PixelBuffer, canvas: CanvasSize) -> Option<Self> {
        let geometry = ViewportGeometry::new(canvas, image.width(), image.height())?;
        let (display_width, display_height) = geometry.display_size();
        let (offset_x, offset_y) = geometry.offset();
        Some(Self {
            buffer: image_transform::scale_to_display(image, display_width, display_height),
            display_width,
            display_height,
            offset_x,
            offset_y,
        })
    }
}
