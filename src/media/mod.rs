// SPDX-License-Identifier: MPL-2.0
//! In-memory pixel buffers, their transformations, and file I/O.

pub mod export;
pub mod image;
pub mod image_transform;

// Re-export commonly used types
pub use export::{save_image, ExportFormat, ExportSettings};
pub use image::{load_image, PixelBuffer};
