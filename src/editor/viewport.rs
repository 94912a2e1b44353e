// SPDX-License-Identifier: MPL-2.0
//! Mapping between a letterboxed display canvas and image pixels.
//!
//! An image is scaled uniformly to fit its canvas (up or down) and centered,
//! leaving symmetric margins on one axis. [`ViewportGeometry`] captures that
//! layout for one canvas size and converts coordinates both ways.

use crate::domain::editing::{CanvasPoint, CanvasRect, CanvasSize, PixelRect};
use crate::error::{Error, Result};

/// Fit-and-center layout of one image inside one canvas.
///
/// Recompute it whenever the canvas or the image changes size. Only
/// [`ViewportGeometry::new`] builds one, so both the canvas and the image are
/// non-empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportGeometry {
    image_width: u32,
    image_height: u32,
    scale: f64,
    display_width: u32,
    display_height: u32,
    offset_x: u32,
    offset_y: u32,
}

impl ViewportGeometry {
    /// Computes the layout, or `None` while the canvas is not laid out or the
    /// image is empty.
    #[must_use]
    pub fn new(canvas: CanvasSize, image_width: u32, image_height: u32) -> Option<Self> {
        if !canvas.is_laid_out() || image_width == 0 || image_height == 0 {
            return None;
        }

        let scale = (f64::from(canvas.width) / f64::from(image_width))
            .min(f64::from(canvas.height) / f64::from(image_height));

        // Truncation keeps the display inside the canvas on the limiting axis.
        let fit = |len: u32, bound: u32| ((f64::from(len) * scale) as u32).clamp(1, bound);
        let display_width = fit(image_width, canvas.width);
        let display_height = fit(image_height, canvas.height);

        let geometry = Self {
            image_width,
            image_height,
            scale,
            display_width,
            display_height,
            offset_x: (canvas.width - display_width) / 2,
            offset_y: (canvas.height - display_height) / 2,
        };
        log::debug!(
            "Viewport {}: image {}x{} -> display {}x{} at ({}, {}), scale {:.4}",
            canvas,
            image_width,
            image_height,
            display_width,
            display_height,
            geometry.offset_x,
            geometry.offset_y,
            scale
        );
        Some(geometry)
    }

    /// Display pixels per image pixel.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn display_size(&self) -> (u32, u32) {
        (self.display_width, self.display_height)
    }

    /// Top-left corner of the displayed image on the canvas.
    #[must_use]
    pub fn offset(&self) -> (u32, u32) {
        (self.offset_x, self.offset_y)
    }

    /// Maps an image pixel position to its canvas position.
    #[must_use]
    pub fn image_to_display(&self, x: u32, y: u32) -> CanvasPoint {
        CanvasPoint::new(
            (f64::from(x) * self.scale + f64::from(self.offset_x)) as f32,
            (f64::from(y) * self.scale + f64::from(self.offset_y)) as f32,
        )
    }

    /// Maps a canvas position to the image pixel under it.
    ///
    /// Positions in the letterbox margins or beyond the canvas clamp to the
    /// nearest edge pixel.
    #[must_use]
    pub fn display_to_image(&self, point: CanvasPoint) -> (u32, u32) {
        let to_image = |pos: f32, offset: u32, dim: u32| {
            let mapped = ((f64::from(pos) - f64::from(offset)) / self.scale).floor();
            mapped.clamp(0.0, f64::from(dim.saturating_sub(1))) as u32
        };
        (
            to_image(point.x, self.offset_x, self.image_width),
            to_image(point.y, self.offset_y, self.image_height),
        )
    }

    /// Maps a drag selection to the image rectangle between its corners.
    ///
    /// The start corner maps to the inclusive top-left and the end corner to
    /// the exclusive bottom-right.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] if the mapped span is empty on either
    /// axis, including drags that run up or to the left.
    pub fn map_selection(&self, selection: CanvasRect) -> Result<PixelRect> {
        let (x1, y1) = self.display_to_image(selection.start);
        let (x2, y2) = self.display_to_image(selection.end);
        PixelRect::from_corners(x1, y1, x2, y2).ok_or(Error::InvalidRegion)
    }
}
