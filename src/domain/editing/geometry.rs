// SPDX-License-Identifier: MPL-2.0
//! Canvas and pixel-space geometry value types.
//!
//! Canvas types describe what the UI reports (surface size, pointer
//! positions). [`PixelRect`] lives in source-image pixel space.

use std::fmt;
use std::str::FromStr;

/// Size of a display surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether the surface has been laid out (both dimensions non-zero).
    #[must_use]
    pub fn is_laid_out(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parses `WIDTHxHEIGHT`, e.g. `400x300`.
impl FromStr for CanvasSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
        let width = w
            .trim()
            .parse()
            .map_err(|_| format!("invalid canvas width '{w}'"))?;
        let height = h
            .trim()
            .parse()
            .map_err(|_| format!("invalid canvas height '{h}'"))?;
        Ok(Self::new(width, height))
    }
}

/// A pointer position on a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasPoint {
    pub x: f32,
    pub y: f32,
}

impl CanvasPoint {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A click-drag selection on the source canvas, from press to release.
///
/// The corners are kept in the order the user produced them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasRect {
    pub start: CanvasPoint,
    pub end: CanvasPoint,
}

impl CanvasRect {
    #[must_use]
    pub fn new(start: CanvasPoint, end: CanvasPoint) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(CanvasPoint::new(x1, y1), CanvasPoint::new(x2, y2))
    }
}

/// Parses `X1,Y1,X2,Y2` in canvas pixels.
impl FromStr for CanvasRect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coords = s
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<f32>()
                    .map_err(|_| format!("invalid coordinate '{part}'"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        match coords.as_slice() {
            [x1, y1, x2, y2] => Ok(Self::from_coords(*x1, *y1, *x2, *y2)),
            _ => Err(format!("expected X1,Y1,X2,Y2, got '{s}'")),
        }
    }
}

/// A non-empty rectangle in source-image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// Builds the rectangle spanning `x1..x2` and `y1..y2` (end exclusive).
    ///
    /// Returns `None` when the span collapses (`x1 >= x2` or `y1 >= y2`).
    #[must_use]
    pub fn from_corners(x1: u32, y1: u32, x2: u32, y2: u32) -> Option<Self> {
        if x1 >= x2 || y1 >= y2 {
            return None;
        }
        Some(Self {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
        })
    }

    /// Exclusive right edge.
    #[must_use]
    pub fn right(&self) -> u64 {
        u64::from(self.x) + u64::from(self.width)
    }

    /// Exclusive bottom edge.
    #[must_use]
    pub fn bottom(&self) -> u64 {
        u64::from(self.y) + u64::from(self.height)
    }

    /// Whether the rectangle is non-empty and lies inside a `width × height` image.
    #[must_use]
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.width > 0
            && self.height > 0
            && self.right() <= u64::from(width)
            && self.bottom() <= u64::from(height)
    }
}

impl fmt::Display for PixelRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})-({},{})",
            self.x,
            self.y,
            self.right(),
            self.bottom()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_size_parses() {
        assert_eq!("400x300".parse(), Ok(CanvasSize::new(400, 300)));
        assert_eq!(" 20 X 10 ".parse(), Ok(CanvasSize::new(20, 10)));
        assert!("400".parse::<CanvasSize>().is_err());
        assert!("axb".parse::<CanvasSize>().is_err());
    }

    #[test]
    fn canvas_size_layout_check() {
        assert!(CanvasSize::new(1, 1).is_laid_out());
        assert!(!CanvasSize::new(0, 400).is_laid_out());
        assert!(!CanvasSize::new(400, 0).is_laid_out());
    }

    #[test]
    fn canvas_rect_parses_four_coordinates() {
        let rect: CanvasRect = "50,120,150.5,180".parse().unwrap();
        assert_eq!(rect, CanvasRect::from_coords(50.0, 120.0, 150.5, 180.0));
        assert!("1,2,3".parse::<CanvasRect>().is_err());
        assert!("1,2,3,x".parse::<CanvasRect>().is_err());
    }

    #[test]
    fn pixel_rect_from_corners() {
        let rect = PixelRect::from_corners(25, 10, 75, 40).unwrap();
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (25, 10, 50, 30));
        assert_eq!(rect.to_string(), "(25,10)-(75,40)");
    }

    #[test]
    fn pixel_rect_rejects_collapsed_spans() {
        assert!(PixelRect::from_corners(10, 10, 10, 20).is_none());
        assert!(PixelRect::from_corners(10, 10, 20, 10).is_none());
        assert!(PixelRect::from_corners(20, 10, 10, 20).is_none());
    }

    #[test]
    fn pixel_rect_bounds_check() {
        let rect = PixelRect::from_corners(0, 0, 10, 8).unwrap();
        assert!(rect.fits_within(10, 8));
        assert!(!rect.fits_within(9, 8));

        let far = PixelRect {
            x: u32::MAX,
            y: 0,
            width: 2,
            height: 1,
        };
        assert!(!far.fits_within(u32::MAX, 1));
    }
}
