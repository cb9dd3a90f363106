//! Canvas allocation, layer loading, and PNG saving.

mod load;
mod save;

pub use load::load_layer;
pub use save::save_png;

use image::{Rgba, RgbaImage};

/// Width and height of the square canvas every dish is composed on.
pub const CANVAS_SIZE: u32 = 1024;

/// Initial canvas pixel: white, fully transparent.
pub const CANVAS_FILL: [u8; 4] = [255, 255, 255, 0];

/// Allocate a fresh transparent canvas.
#[must_use]
pub fn new_canvas() -> RgbaImage {
    RgbaImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, Rgba(CANVAS_FILL))
}
