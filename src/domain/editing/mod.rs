// SPDX-License-Identifier: MPL-2.0
//! Editing domain types.
//!
//! This module provides pure domain types for image editing operations:
//! - [`ResizeScale`]: Scale percentage for image resizing
//! - [`JpegQuality`]: Encoder quality for JPEG export
//! - [`CanvasSize`], [`CanvasPoint`], [`CanvasRect`]: Display-surface geometry
//! - [`PixelRect`]: Crop rectangle in source-image pixels

pub mod geometry;
pub mod newtypes;

pub use geometry::{CanvasPoint, CanvasRect, CanvasSize, PixelRect};
pub use newtypes::{JpegQuality, ResizeScale};
