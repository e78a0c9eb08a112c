//! Raster implementations of the named effects.

use image::{imageops, Rgba};
use palette::blend::Compose;
use palette::{LinSrgba, Srgba};

use super::Image;
use crate::types::Colour;

/// Gaussian blur of `input`.
///
/// The convolution itself is delegated to the image library; `radius` is
/// used as the Gaussian sigma. Non-positive radii are a no-op copy.
pub(super) fn gaussian_blur(input: &Image, radius: f64) -> Image {
    if radius <= 0.0 {
        return input.clone();
    }
    imageops::blur(input, radius as f32)
}

/// A flat single-colour buffer of the given extent.
pub(super) fn constant_colour(colour: Colour, width: u32, height: u32) -> Image {
    Image::from_pixel(width, height, Rgba(colour.to_rgba()))
}

/// Source-over compositing of `overlay` onto `background`.
///
/// The result has the background's extent: overlay pixels outside it are
/// discarded, background pixels without an overlay counterpart pass through.
pub(super) fn source_over(background: &Image, overlay: &Image) -> Image {
    let mut composed = background.clone();
    for (x, y, pixel) in composed.enumerate_pixels_mut() {
        if x < overlay.width() && y < overlay.height() {
            *pixel = blend_over(*overlay.get_pixel(x, y), *pixel);
        }
    }
    composed
}

/// Alpha-blend one pixel over another in linear space.
fn blend_over(overlay: Rgba<u8>, background: Rgba<u8>) -> Rgba<u8> {
    let fg: LinSrgba<f32> =
        Srgba::new(overlay.0[0], overlay.0[1], overlay.0[2], overlay.0[3]).into_linear();
    let bg: LinSrgba<f32> = Srgba::new(
        background.0[0],
        background.0[1],
        background.0[2],
        background.0[3],
    )
    .into_linear();

    let out: Srgba<u8> = Srgba::from_linear(fg.over(bg));
    Rgba([out.red, out.green, out.blue, out.alpha])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Image {
        Image::from_fn(width, height, |x, y| {
            Rgba([(x * 40) as u8, (y * 40) as u8, 128, 255])
        })
    }

    #[test]
    fn test_blur_zero_radius_is_identity() {
        let input = gradient(4, 4);
        let out = gaussian_blur(&input, 0.0);
        assert_eq!(out.as_raw(), input.as_raw());
    }

    #[test]
    fn test_blur_uniform_image_stays_uniform() {
        let input = Image::from_pixel(16, 16, Rgba([90, 140, 200, 255]));
        let out = gaussian_blur(&input, 2.0);
        for pixel in out.pixels() {
            for (channel, expected) in pixel.0.iter().zip([90u8, 140, 200, 255]) {
                assert!(channel.abs_diff(expected) <= 1);
            }
        }
    }

    #[test]
    fn test_blur_does_not_mutate_input() {
        let input = gradient(4, 4);
        let copy = input.clone();
        let _ = gaussian_blur(&input, 3.0);
        assert_eq!(input.as_raw(), copy.as_raw());
    }

    #[test]
    fn test_constant_colour_extent_and_fill() {
        let out = constant_colour(Colour::new(1, 2, 3, 4), 5, 3);
        assert_eq!((out.width(), out.height()), (5, 3));
        for pixel in out.pixels() {
            assert_eq!(*pixel, Rgba([1, 2, 3, 4]));
        }
    }

    #[test]
    fn test_source_over_opaque_overlay_wins() {
        let background = gradient(4, 4);
        let overlay = Image::from_pixel(4, 4, Rgba([10, 200, 30, 255]));
        let out = source_over(&background, &overlay);
        assert_eq!(out.as_raw(), overlay.as_raw());
    }

    #[test]
    fn test_source_over_transparent_overlay_vanishes() {
        let background = gradient(4, 4);
        let overlay = Image::from_pixel(4, 4, Rgba([255, 255, 255, 0]));
        let out = source_over(&background, &overlay);
        assert_eq!(out.as_raw(), background.as_raw());
    }

    #[test]
    fn test_source_over_partial_alpha_lands_between() {
        let background = Image::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        let overlay = Image::from_pixel(2, 2, Rgba([255, 0, 0, 128]));
        let out = source_over(&background, &overlay);
        for pixel in out.pixels() {
            let [r, g, b, a] = pixel.0;
            assert!(r > 0 && r < 255);
            assert_eq!(g, 0);
            assert_eq!(b, 0);
            assert_eq!(a, 255);
        }
    }

    #[test]
    fn test_source_over_crops_to_background_extent() {
        let background = gradient(4, 4);
        let overlay = Image::from_pixel(8, 8, Rgba([10, 200, 30, 255]));
        let out = source_over(&background, &overlay);
        assert_eq!((out.width(), out.height()), (4, 4));
        for pixel in out.pixels() {
            assert_eq!(*pixel, Rgba([10, 200, 30, 255]));
        }
    }

    #[test]
    fn test_source_over_smaller_overlay_leaves_rest() {
        let background = Image::from_pixel(4, 4, Rgba([0, 0, 255, 255]));
        let overlay = Image::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
        let out = source_over(&background, &overlay);
        assert_eq!(*out.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
        assert_eq!(*out.get_pixel(1, 1), Rgba([255, 0, 0, 255]));
        assert_eq!(*out.get_pixel(3, 3), Rgba([0, 0, 255, 255]));
        assert_eq!(*out.get_pixel(3, 0), Rgba([0, 0, 255, 255]));
    }
}
