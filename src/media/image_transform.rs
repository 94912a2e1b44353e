// SPDX-License-Identifier: MPL-2.0
//! Image transformation functions for crop, grayscale, rotate, and resize.
//!
//! Every function borrows its input and returns a new [`PixelBuffer`].

use crate::domain::editing::{PixelRect, ResizeScale};
use crate::error::{Error, Result};
use crate::media::PixelBuffer;
use image_rs::imageops::FilterType;

/// Crop the buffer to the given rectangle.
///
/// The result is exactly `rect.width × rect.height` pixels.
///
/// # Errors
///
/// Returns [`Error::InvalidRegion`] if the rectangle is empty or does not lie
/// entirely inside the buffer.
pub fn crop(buffer: &PixelBuffer, rect: PixelRect) -> Result<PixelBuffer> {
    let (width, height) = buffer.dimensions();
    if !rect.fits_within(width, height) {
        return Err(Error::InvalidRegion);
    }
    Ok(PixelBuffer::from_dynamic(buffer.as_dynamic().crop_imm(
        rect.x,
        rect.y,
        rect.width,
        rect.height,
    )))
}

/// Desaturate to Rec. 601 luma, keeping the buffer's channel layout.
///
/// RGB input yields RGB output with equal channels; RGBA keeps its alpha.
#[must_use]
pub fn grayscale(buffer: &PixelBuffer) -> PixelBuffer {
    if buffer.has_alpha() {
        let mut rgba = buffer.to_rgba8();
        for pixel in rgba.pixels_mut() {
            let [r, g, b, a] = pixel.0;
            let luma = rec601_luma(r, g, b);
            pixel.0 = [luma, luma, luma, a];
        }
        PixelBuffer::from_rgba(rgba)
    } else {
        let mut rgb = buffer.to_rgb8();
        for pixel in rgb.pixels_mut() {
            let [r, g, b] = pixel.0;
            pixel.0 = [rec601_luma(r, g, b); 3];
        }
        PixelBuffer::from_rgb(rgb)
    }
}

/// `0.299 R + 0.587 G + 0.114 B`, rounded to nearest.
fn rec601_luma(r: u8, g: u8, b: u8) -> u8 {
    let weighted = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    // At most 255_500 / 1000, so the cast never truncates.
    ((weighted + 500) / 1000) as u8
}

/// Rotate 90 degrees clockwise. Width and height swap.
#[must_use]
pub fn rotate90(buffer: &PixelBuffer) -> PixelBuffer {
    PixelBuffer::from_dynamic(buffer.as_dynamic().rotate90())
}

/// Rescale by a percentage of the buffer's size.
///
/// Reductions use an area-averaging filter, enlargements a smooth bicubic
/// one. At 100% the buffer is returned unchanged.
#[must_use]
pub fn resize(buffer: &PixelBuffer, scale: ResizeScale) -> PixelBuffer {
    if scale.is_original() {
        return buffer.clone();
    }
    let (width, height) = scale.apply_to_dimensions(buffer.width(), buffer.height());
    let filter = if scale.is_reduction() {
        FilterType::Triangle
    } else {
        FilterType::CatmullRom
    };
    PixelBuffer::from_dynamic(buffer.as_dynamic().resize_exact(width, height, filter))
}

/// Scale to exact display dimensions for on-screen presentation.
#[must_use]
pub fn scale_to_display(buffer: &PixelBuffer, width: u32, height: u32) -> PixelBuffer {
    if buffer.dimensions() == (width, height) {
        return buffer.clone();
    }
    PixelBuffer::from_dynamic(buffer.as_dynamic().resize_exact(
        width.max(1),
        height.max(1),
        FilterType::Lanczos3,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgb, RgbImage, Rgba, RgbaImage};

    fn create_test_image(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::from_rgb(RgbImage::from_pixel(width, height, Rgb([0, 0, 0])))
    }

    /// Every pixel distinct so rotations and crops are observable.
    fn create_gradient_image(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::from_rgb(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 7 % 256) as u8, (y * 13 % 256) as u8, ((x + y) % 256) as u8])
        }))
    }

    #[test]
    fn crop_within_bounds() {
        let img = create_test_image(10, 8);
        let rect = PixelRect::from_corners(2, 2, 6, 5).unwrap();
        let cropped = crop(&img, rect).expect("valid crop");
        assert_eq!(cropped.dimensions(), (4, 3));
    }

    #[test]
    fn crop_copies_the_selected_pixels() {
        let img = create_gradient_image(10, 8);
        let rect = PixelRect::from_corners(3, 2, 7, 6).unwrap();
        let cropped = crop(&img, rect).expect("valid crop");

        let source = img.to_rgb8();
        let result = cropped.to_rgb8();
        assert_eq!(result.get_pixel(0, 0), source.get_pixel(3, 2));
        assert_eq!(result.get_pixel(3, 3), source.get_pixel(6, 5));
    }

    #[test]
    fn crop_entire_image() {
        let img = create_test_image(10, 8);
        let rect = PixelRect::from_corners(0, 0, 10, 8).unwrap();
        assert_eq!(crop(&img, rect).unwrap().dimensions(), (10, 8));
    }

    #[test]
    fn crop_out_of_bounds_is_invalid_region() {
        let img = create_test_image(10, 8);
        let rect = PixelRect::from_corners(8, 6, 18, 16).unwrap();
        assert_eq!(crop(&img, rect), Err(Error::InvalidRegion));
    }

    #[test]
    fn crop_empty_rect_is_invalid_region() {
        let img = create_test_image(10, 8);
        let rect = PixelRect {
            x: 1,
            y: 1,
            width: 0,
            height: 3,
        };
        assert_eq!(crop(&img, rect), Err(Error::InvalidRegion));
    }

    #[test]
    fn grayscale_keeps_rgb_layout_with_equal_channels() {
        let img = PixelBuffer::from_rgb(RgbImage::from_pixel(3, 3, Rgb([200, 30, 90])));
        let gray = grayscale(&img);
        assert_eq!(gray.channel_count(), 3);
        assert_eq!(gray.dimensions(), (3, 3));
        let [r, g, b] = gray.to_rgb8().get_pixel(1, 1).0;
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn grayscale_preserves_alpha() {
        let img = PixelBuffer::from_rgba(RgbaImage::from_pixel(2, 2, Rgba([10, 200, 30, 77])));
        let gray = grayscale(&img);
        assert_eq!(gray.channel_count(), 4);
        assert_eq!(gray.to_rgba8().get_pixel(0, 0).0[3], 77);
    }

    #[test]
    fn grayscale_uses_rec601_weights() {
        let luma_of = |rgb: [u8; 3]| {
            let img = PixelBuffer::from_rgb(RgbImage::from_pixel(1, 1, Rgb(rgb)));
            grayscale(&img).to_rgb8().get_pixel(0, 0).0
        };
        assert_eq!(luma_of([255, 0, 0]), [76, 76, 76]);
        assert_eq!(luma_of([0, 255, 0]), [150, 150, 150]);
        assert_eq!(luma_of([0, 0, 255]), [29, 29, 29]);
        assert_eq!(luma_of([255, 255, 255]), [255, 255, 255]);

        let rgba = PixelBuffer::from_rgba(RgbaImage::from_pixel(1, 1, Rgba([255, 0, 0, 9])));
        assert_eq!(grayscale(&rgba).to_rgba8().get_pixel(0, 0).0, [76, 76, 76, 9]);
    }

    #[test]
    fn rotate90_swaps_dimensions_clockwise() {
        let img = create_gradient_image(4, 3);
        let rotated = rotate90(&img);
        assert_eq!(rotated.dimensions(), (3, 4));
        // Clockwise: the bottom-left source pixel becomes top-left.
        assert_eq!(
            rotated.to_rgb8().get_pixel(0, 0),
            img.to_rgb8().get_pixel(0, 2)
        );
    }

    #[test]
    fn rotate90_four_times_is_identity() {
        let img = create_gradient_image(7, 5);
        let back = rotate90(&rotate90(&rotate90(&rotate90(&img))));
        assert_eq!(back, img);
    }

    #[test]
    fn resize_rounds_dimensions() {
        let img = create_test_image(51, 31);
        assert_eq!(resize(&img, ResizeScale::new(50.0)).dimensions(), (26, 16));
        assert_eq!(resize(&img, ResizeScale::new(150.0)).dimensions(), (77, 47));
    }

    #[test]
    fn resize_at_100_percent_is_unchanged() {
        let img = create_gradient_image(6, 4);
        assert_eq!(resize(&img, ResizeScale::default()), img);
    }

    #[test]
    fn resize_is_deterministic() {
        let img = create_gradient_image(20, 12);
        let scale = ResizeScale::new(150.0);
        assert_eq!(resize(&img, scale), resize(&img, scale));
    }

    #[test]
    fn resize_downscale_averages_uniform_color() {
        let img = PixelBuffer::from_rgb(RgbImage::from_pixel(40, 20, Rgb([120, 60, 30])));
        let small = resize(&img, ResizeScale::new(25.0));
        assert_eq!(small.dimensions(), (10, 5));
        assert_eq!(small.to_rgb8().get_pixel(4, 2).0, [120, 60, 30]);
    }

    #[test]
    fn scale_to_display_hits_exact_size() {
        let img = create_gradient_image(200, 100);
        assert_eq!(scale_to_display(&img, 400, 200).dimensions(), (400, 200));
        assert_eq!(scale_to_display(&img, 200, 100), img);
    }
}
