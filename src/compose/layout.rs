//! Layer sizing and placement on the canvas.

use std::fmt;

use crate::image::CANVAS_SIZE;

/// Bowl edge length as a fraction of the canvas.
pub const BOWL_SCALE: f64 = 0.80;

/// Noodle edge length as a fraction of the canvas.
pub const NOODLE_SCALE: f64 = 0.60;

/// Topping edge length as a fraction of the canvas.
pub const TOPPING_SCALE: f64 = 0.40;

/// Maximum number of toppings composited onto a dish.
pub const MAX_TOPPINGS: usize = 3;

/// Per-topping nudge away from the center, in canvas pixels.
///
/// First topping sits slightly up, the second left and down, the third right and down.
pub const TOPPING_OFFSETS: [(i64, i64); MAX_TOPPINGS] = [(0, -30), (-40, 25), (40, 25)];

/// Which part of the dish a layer represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Bowl with broth, the bottom layer.
    Bowl,
    /// Noodles, placed over the bowl.
    Noodle,
    /// Topping at the given input index.
    Topping(usize),
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bowl => f.write_str("bowl"),
            Self::Noodle => f.write_str("noodle"),
            Self::Topping(index) => write!(f, "topping[{index}]"),
        }
    }
}

/// How a layer is scaled and positioned on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerSpec {
    pub kind: LayerKind,
    /// Edge length as a fraction of the canvas edge.
    pub scale: f64,
    /// Offset added to the centered position.
    pub offset: (i64, i64),
}

impl LayerSpec {
    /// Bowl layer: 80% of the canvas, centered.
    #[must_use]
    pub const fn bowl() -> Self {
        Self {
            kind: LayerKind::Bowl,
            scale: BOWL_SCALE,
            offset: (0, 0),
        }
    }

    /// Noodle layer: 60% of the canvas, centered.
    #[must_use]
    pub const fn noodle() -> Self {
        Self {
            kind: LayerKind::Noodle,
            scale: NOODLE_SCALE,
            offset: (0, 0),
        }
    }

    /// Topping at `index`: 40% of the canvas, centered and nudged by [`topping_offset`].
    #[must_use]
    pub const fn topping(index: usize) -> Self {
        Self {
            kind: LayerKind::Topping(index),
            scale: TOPPING_SCALE,
            offset: topping_offset(index),
        }
    }

    /// Edge length in pixels of the resized, square layer.
    #[must_use]
    pub fn size(&self) -> u32 {
        scaled_size(self.scale)
    }

    /// Top-left canvas position of the resized layer.
    #[must_use]
    pub fn origin(&self) -> (i64, i64) {
        let (x, y) = centered_origin(self.size());
        (x + self.offset.0, y + self.offset.1)
    }
}

/// Offset for the topping at `index`, or no offset past the end of the table.
#[must_use]
pub const fn topping_offset(index: usize) -> (i64, i64) {
    if index < TOPPING_OFFSETS.len() {
        TOPPING_OFFSETS[index]
    } else {
        (0, 0)
    }
}

/// Floor of the canvas edge times `scale`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scaled_size(scale: f64) -> u32 {
    // Safe: scales are fixed fractions in (0, 1], so the result fits in u32 and is >= 1
    (f64::from(CANVAS_SIZE) * scale).floor() as u32
}

/// Position that centers a square of edge `size` on the canvas.
#[must_use]
pub fn centered_origin(size: u32) -> (i64, i64) {
    let pos = (i64::from(CANVAS_SIZE) - i64::from(size)).div_euclid(2);
    (pos, pos)
}
