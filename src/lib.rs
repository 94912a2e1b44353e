// SPDX-License-Identifier: MPL-2.0
//! `crop_lens` is a small raster image editor core.
//!
//! It loads an image, maps a drag selection on a letterboxed canvas back to
//! image pixels, crops, and then lets the crop be converted to grayscale,
//! rotated, and rescaled with linear undo/redo over complete snapshots.
//!
//! The [`editor::Session`] owns all state. Front ends send it
//! [`editor::Message`]s and render the views it returns; the bundled
//! [`cli`] is one such front end.

#![doc(html_root_url = "https://docs.rs/crop_lens/0.1.0")]

pub mod cli;
pub mod config;
pub mod domain;
pub mod editor;
pub mod error;
pub mod media;

#[cfg(test)]
pub(crate) mod test_utils;
