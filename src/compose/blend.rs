//! Alpha-aware resampling and mask pasting for RGBA layers.

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Pixel, Rgba, RgbaImage};

type PremulRgba16 = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// Resize `layer` to `width`x`height` with Lanczos3, sampling in premultiplied alpha.
///
/// Colour under fully transparent pixels carries no weight, so it cannot bleed
/// into visible edges.
#[must_use]
pub fn resize_premultiplied(layer: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let premul: PremulRgba16 =
        ImageBuffer::from_fn(layer.width(), layer.height(), |x, y| {
            premultiply(*layer.get_pixel(x, y))
        });

    let resized = imageops::resize(&premul, width, height, FilterType::Lanczos3);

    ImageBuffer::from_fn(width, height, |x, y| unpremultiply(*resized.get_pixel(x, y)))
}

/// Paste `layer` onto `canvas` at (`x`, `y`) using the layer's own alpha as the mask.
///
/// Every channel, alpha included, moves from the canvas value towards the layer
/// value by `alpha / 255`. Pixels outside the canvas are clipped.
pub fn paste_with_mask(canvas: &mut RgbaImage, layer: &RgbaImage, x: i64, y: i64) {
    let (width, height) = canvas.dimensions();

    for (lx, ly, src) in layer.enumerate_pixels() {
        let (Ok(cx), Ok(cy)) = (
            u32::try_from(x + i64::from(lx)),
            u32::try_from(y + i64::from(ly)),
        ) else {
            continue;
        };
        if cx >= width || cy >= height {
            continue;
        }

        let mask = src[3];
        canvas
            .get_pixel_mut(cx, cy)
            .apply2(src, |d, s| mask_blend(d, s, mask));
    }
}

/// `dst + (src - dst) * mask / 255`, rounded.
#[allow(clippy::cast_possible_truncation)]
fn mask_blend(dst: u8, src: u8, mask: u8) -> u8 {
    let (dst, src, mask) = (u32::from(dst), u32::from(src), u32::from(mask));
    // Safe: a convex combination of two u8 values stays within u8
    ((src * mask + dst * (255 - mask) + 127) / 255) as u8
}

#[allow(clippy::cast_possible_truncation)]
fn premultiply(px: Rgba<u8>) -> Rgba<u16> {
    let [r, g, b, a] = px.0;
    let a32 = u32::from(a);
    // c * a / 255 rescaled from 8 to 16 bits; max is 65535
    let scale = |c: u8| ((u32::from(c) * a32 * 257 + 127) / 255) as u16;
    Rgba([scale(r), scale(g), scale(b), u16::from(a) * 257])
}

#[allow(clippy::cast_possible_truncation)]
fn unpremultiply(px: Rgba<u16>) -> Rgba<u8> {
    let [r, g, b, a] = px.0;
    let alpha = ((u32::from(a) + 128) / 257) as u8;
    if alpha == 0 {
        return Rgba([0, 0, 0, 0]);
    }

    let a32 = u32::from(a);
    // Safe: clamped to 255 before casting; ringing can push colour above alpha
    let scale = |c: u16| ((u32::from(c) * 255 + a32 / 2) / a32).min(255) as u8;
    Rgba([scale(r), scale(g), scale(b), alpha])
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::image::{new_canvas, CANVAS_FILL};

    #[test]
    fn test_mask_blend_extremes() {
        assert_eq!(mask_blend(10, 200, 0), 10);
        assert_eq!(mask_blend(10, 200, 255), 200);
        assert_eq!(mask_blend(255, 0, 128), 127);
    }

    #[test]
    fn test_premultiply_round_trips_opaque_and_half() {
        for px in [[255, 0, 0, 255], [0, 0, 255, 128], [12, 34, 56, 200]] {
            assert_eq!(unpremultiply(premultiply(Rgba(px))).0, px);
        }
    }

    #[test]
    fn test_transparent_colour_is_dropped() {
        assert_eq!(premultiply(Rgba([0, 255, 0, 0])).0, [0, 0, 0, 0]);
        assert_eq!(unpremultiply(Rgba([0, 0, 0, 0])).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_half_alpha_over_empty_canvas() {
        let mut canvas = new_canvas();
        let layer = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 255, 128]));

        paste_with_mask(&mut canvas, &layer, 10, 10);

        assert_eq!(canvas.get_pixel(10, 10).0, [127, 127, 255, 64]);
        assert_eq!(canvas.get_pixel(12, 12).0, CANVAS_FILL);
    }

    #[test]
    fn test_half_alpha_over_opaque_layer() {
        let mut canvas = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));
        let layer = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 128]));

        paste_with_mask(&mut canvas, &layer, 0, 0);

        assert_eq!(canvas.get_pixel(1, 1).0, [127, 0, 128, 191]);
    }

    #[test]
    fn test_paste_clips_negative_and_overflowing_origins() {
        let mut canvas = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let layer = RgbaImage::from_pixel(3, 3, Rgba([255, 255, 255, 255]));

        paste_with_mask(&mut canvas, &layer, -2, 3);

        assert_eq!(canvas.get_pixel(0, 3).0, [255, 255, 255, 255]);
        assert_eq!(canvas.get_pixel(1, 3).0, [0, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(0, 2).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_transparent_neighbour_does_not_tint_edge() {
        // left half opaque red, right half transparent green
        let layer = RgbaImage::from_fn(4, 4, |x, _| {
            if x < 2 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 255, 0, 0])
            }
        });

        let resized = resize_premultiplied(&layer, 409, 409);

        for x in 0..409 {
            let [r, g, b, a] = resized.get_pixel(x, 200).0;
            if a > 0 {
                assert_eq!((g, b), (0, 0), "x={x} got {:?}", [r, g, b, a]);
                assert_eq!(r, 255, "x={x} got {:?}", [r, g, b, a]);
            }
        }
        assert!(resized.get_pixel(0, 200).0[3] > resized.get_pixel(408, 200).0[3]);
    }
}
