// SPDX-License-Identifier: MPL-2.0
//! Editing newtypes.
//!
//! This module provides type-safe wrappers for editing values,
//! ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_JPEG_QUALITY, DEFAULT_RESIZE_SCALE_PERCENT, MAX_JPEG_QUALITY,
    MAX_RESIZE_SCALE_PERCENT, MIN_JPEG_QUALITY, MIN_RESIZE_SCALE_PERCENT,
};

// =============================================================================
// ResizeScale
// =============================================================================

/// Resize scale percentage, guaranteed to be within valid range (10%–200%).
///
/// This value object encapsulates the business rules for resize scaling:
/// - Valid range is defined by configuration constants
/// - Values are automatically clamped to the valid range
/// - Provides conversion to dimensions based on the base image size
///
/// # Example
///
/// ```
/// use crop_lens::domain::editing::ResizeScale;
///
/// let scale = ResizeScale::new(150.0);
/// assert_eq!(scale.apply_to_dimensions(50, 30), (75, 45));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeScale(f32);

impl ResizeScale {
    /// Creates a new resize scale, clamping the value to the valid range.
    ///
    /// A NaN input falls back to the default 100%.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::default();
        }
        Self(percent.clamp(MIN_RESIZE_SCALE_PERCENT, MAX_RESIZE_SCALE_PERCENT))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the scale as a multiplier (e.g., 100% → 1.0, 200% → 2.0).
    #[must_use]
    pub fn as_factor(self) -> f32 {
        self.0 / 100.0
    }

    /// Applies the scale to the given dimensions, returning the new dimensions.
    ///
    /// Both dimensions are rounded to the nearest pixel and are at least 1.
    #[must_use]
    pub fn apply_to_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        let factor = f64::from(self.as_factor());
        // `as` saturates at u32::MAX.
        let scale_axis = |len: u32| (f64::from(len) * factor).round().max(1.0) as u32;
        (scale_axis(width), scale_axis(height))
    }

    /// Returns whether the scale represents 100% (no resize).
    #[must_use]
    pub fn is_original(self) -> bool {
        (self.0 - DEFAULT_RESIZE_SCALE_PERCENT).abs() < f32::EPSILON
    }

    /// Returns whether this scale represents an enlargement (> 100%).
    #[must_use]
    pub fn is_enlargement(self) -> bool {
        self.0 > DEFAULT_RESIZE_SCALE_PERCENT
    }

    /// Returns whether this scale represents a reduction (< 100%).
    #[must_use]
    pub fn is_reduction(self) -> bool {
        self.0 < DEFAULT_RESIZE_SCALE_PERCENT
    }
}

impl Default for ResizeScale {
    fn default() -> Self {
        Self(DEFAULT_RESIZE_SCALE_PERCENT)
    }
}

// =============================================================================
// JpegQuality
// =============================================================================

/// JPEG encoder quality, guaranteed to be within 1–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegQuality(u8);

impl JpegQuality {
    /// Creates a new quality value, clamping to the valid range.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.clamp(MIN_JPEG_QUALITY, MAX_JPEG_QUALITY))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for JpegQuality {
    fn default() -> Self {
        Self(DEFAULT_JPEG_QUALITY)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    // -------------------------------------------------------------------------
    // ResizeScale tests
    // -------------------------------------------------------------------------

    #[test]
    fn resize_scale_clamps() {
        assert_abs_diff_eq!(ResizeScale::new(5.0).value(), MIN_RESIZE_SCALE_PERCENT);
        assert_abs_diff_eq!(ResizeScale::new(1000.0).value(), MAX_RESIZE_SCALE_PERCENT);
        assert_abs_diff_eq!(ResizeScale::new(150.0).value(), 150.0);
    }

    #[test]
    fn resize_scale_nan_falls_back_to_default() {
        assert!(ResizeScale::new(f32::NAN).is_original());
    }

    #[test]
    fn resize_scale_as_factor() {
        assert_abs_diff_eq!(ResizeScale::new(100.0).as_factor(), 1.0);
        assert_abs_diff_eq!(ResizeScale::new(200.0).as_factor(), 2.0);
        assert_abs_diff_eq!(ResizeScale::new(50.0).as_factor(), 0.5);
    }

    #[test]
    fn resize_scale_apply_dimensions_rounds() {
        assert_eq!(ResizeScale::new(200.0).apply_to_dimensions(100, 50), (200, 100));
        assert_eq!(ResizeScale::new(50.0).apply_to_dimensions(100, 50), (50, 25));
        // 51 * 0.5 = 25.5 rounds up, 31 * 0.5 = 15.5 rounds up
        assert_eq!(ResizeScale::new(50.0).apply_to_dimensions(51, 31), (26, 16));
    }

    #[test]
    fn resize_scale_minimum_1px() {
        let (w, h) = ResizeScale::new(10.0).apply_to_dimensions(3, 2);
        assert_eq!((w, h), (1, 1));
    }

    #[test]
    fn resize_scale_enlargement_reduction() {
        assert!(ResizeScale::new(150.0).is_enlargement());
        assert!(!ResizeScale::new(150.0).is_reduction());

        assert!(ResizeScale::new(50.0).is_reduction());
        assert!(!ResizeScale::new(50.0).is_enlargement());

        assert!(!ResizeScale::new(100.0).is_enlargement());
        assert!(!ResizeScale::new(100.0).is_reduction());
        assert!(ResizeScale::default().is_original());
    }

    // -------------------------------------------------------------------------
    // JpegQuality tests
    // -------------------------------------------------------------------------

    #[test]
    fn jpeg_quality_clamps() {
        assert_eq!(JpegQuality::new(0).value(), MIN_JPEG_QUALITY);
        assert_eq!(JpegQuality::new(255).value(), MAX_JPEG_QUALITY);
        assert_eq!(JpegQuality::new(75).value(), 75);
        assert_eq!(JpegQuality::default().value(), DEFAULT_JPEG_QUALITY);
    }
}
