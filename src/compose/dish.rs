//! Dish composition: load, resize, place, and flatten every layer.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::Result;
use crate::image::{load_layer, new_canvas, save_png};

use super::blend::{paste_with_mask, resize_premultiplied};
use super::layout::{LayerSpec, MAX_TOPPINGS};

/// Output path used when none is given.
pub const DEFAULT_OUTPUT: &str = "final_dish.png";

/// A request to compose one dish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dish {
    /// Bowl image, composited first.
    pub bowl: PathBuf,

    /// Noodle image, composited over the bowl.
    pub noodle: PathBuf,

    /// Topping images in composite order. Never longer than [`MAX_TOPPINGS`].
    toppings: Vec<PathBuf>,

    /// Destination of the PNG.
    pub output: PathBuf,
}

impl Dish {
    /// Create a dish with no toppings, written to [`DEFAULT_OUTPUT`].
    #[must_use]
    pub fn new(bowl: impl Into<PathBuf>, noodle: impl Into<PathBuf>) -> Self {
        Self {
            bowl: bowl.into(),
            noodle: noodle.into(),
            toppings: Vec::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    /// Set the toppings, keeping at most [`MAX_TOPPINGS`].
    ///
    /// Extra toppings are dropped with a warning.
    #[must_use]
    pub fn with_toppings<I, P>(mut self, toppings: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut toppings: Vec<PathBuf> = toppings.into_iter().map(Into::into).collect();
        if toppings.len() > MAX_TOPPINGS {
            tracing::warn!(
                "Maximum {MAX_TOPPINGS} toppings supported, ignoring {} extra",
                toppings.len() - MAX_TOPPINGS
            );
            toppings.truncate(MAX_TOPPINGS);
        }
        self.toppings = toppings;
        self
    }

    /// Set the output path.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Toppings that will be composited, in order.
    #[must_use]
    pub fn toppings(&self) -> &[PathBuf] {
        &self.toppings
    }

    /// Every layer with its placement, bottom to top.
    pub fn layers(&self) -> impl Iterator<Item = (&Path, LayerSpec)> {
        [
            (self.bowl.as_path(), LayerSpec::bowl()),
            (self.noodle.as_path(), LayerSpec::noodle()),
        ]
        .into_iter()
        .chain(
            self.toppings
                .iter()
                .enumerate()
                .map(|(index, path)| (path.as_path(), LayerSpec::topping(index))),
        )
    }

    /// Compose the dish in memory without writing it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingFile`] if any layer cannot be loaded.
    pub fn render(&self) -> Result<RgbaImage> {
        let mut canvas = new_canvas();

        for (path, spec) in self.layers() {
            let layer = load_layer(path)?;
            place_layer(&mut canvas, &layer, spec);
        }

        Ok(canvas)
    }

    /// Compose the dish and save it as a PNG at [`Dish::output`].
    ///
    /// Every layer is loaded before the output is touched, so a failed load
    /// leaves any existing file in place.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingFile`] if any layer cannot be loaded, or
    /// [`crate::Error::Write`] if the output cannot be saved.
    pub fn compose(&self) -> Result<PathBuf> {
        tracing::info!(
            "Composing dish with {} topping(s) into {}",
            self.toppings.len(),
            self.output.display()
        );

        let canvas = self.render()?;
        save_png(&canvas, &self.output)?;

        tracing::info!("Dish created: {}", self.output.display());
        Ok(self.output.clone())
    }
}

/// Resize `layer` for `spec` and paste it onto `canvas`, masked by its own alpha.
///
/// Parts of the layer that fall outside the canvas are clipped.
pub fn place_layer(canvas: &mut RgbaImage, layer: &RgbaImage, spec: LayerSpec) {
    let size = spec.size();
    let (x, y) = spec.origin();

    let resized = resize_premultiplied(layer, size, size);

    tracing::debug!("Placing {} at ({x}, {y}) as {size}x{size}", spec.kind);
    paste_with_mask(canvas, &resized, x, y);
}

/// Compose a dish from a bowl, noodles, and up to three toppings.
///
/// Writes to `output`, or [`DEFAULT_OUTPUT`] when `None`, and returns the path written.
///
/// # Errors
///
/// Returns [`crate::Error::MissingFile`] if any input cannot be loaded, or
/// [`crate::Error::Write`] if the output cannot be saved.
pub fn create_dish<B, N, I, P>(
    bowl: B,
    noodle: N,
    toppings: I,
    output: Option<&Path>,
) -> Result<PathBuf>
where
    B: Into<PathBuf>,
    N: Into<PathBuf>,
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let mut dish = Dish::new(bowl, noodle).with_toppings(toppings);
    if let Some(output) = output {
        dish = dish.with_output(output);
    }
    dish.compose()
}
