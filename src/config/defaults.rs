// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Resize**: Resize slider percentage bounds
//! - **Canvas**: Display surface size used before a UI reports its layout
//! - **Export**: Output encoding settings

// ==========================================================================
// Resize Defaults
// ==========================================================================

/// Default resize scale (100% = crop result unchanged).
pub const DEFAULT_RESIZE_SCALE_PERCENT: f32 = 100.0;

/// Minimum allowed resize percentage.
pub const MIN_RESIZE_SCALE_PERCENT: f32 = 10.0;

/// Maximum allowed resize percentage.
pub const MAX_RESIZE_SCALE_PERCENT: f32 = 200.0;

// ==========================================================================
// Canvas Defaults
// ==========================================================================

/// Default display canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 400;

/// Default display canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 400;

// ==========================================================================
// Export Defaults
// ==========================================================================

/// Default JPEG encoding quality.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Minimum JPEG encoding quality.
pub const MIN_JPEG_QUALITY: u8 = 1;

/// Maximum JPEG encoding quality.
pub const MAX_JPEG_QUALITY: u8 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_RESIZE_SCALE_PERCENT > 0.0);
    assert!(MIN_RESIZE_SCALE_PERCENT < DEFAULT_RESIZE_SCALE_PERCENT);
    assert!(MAX_RESIZE_SCALE_PERCENT > DEFAULT_RESIZE_SCALE_PERCENT);

    assert!(DEFAULT_CANVAS_WIDTH > 0);
    assert!(DEFAULT_CANVAS_HEIGHT > 0);

    assert!(MIN_JPEG_QUALITY > 0);
    assert!(MAX_JPEG_QUALITY >= MIN_JPEG_QUALITY);
    assert!(DEFAULT_JPEG_QUALITY >= MIN_JPEG_QUALITY);
    assert!(DEFAULT_JPEG_QUALITY <= MAX_JPEG_QUALITY);
};
