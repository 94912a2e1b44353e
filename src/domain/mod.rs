// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects and business rules.
//!
//! This module contains pure domain types with no dependencies on external
//! crates, to keep them trivially testable.
//!
//! # Modules
//!
//! - [`editing`]: Image editing types ([`ResizeScale`](editing::ResizeScale),
//!   [`PixelRect`](editing::PixelRect), [`CanvasRect`](editing::CanvasRect))

pub mod editing;
