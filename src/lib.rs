//! # dish-composer
//!
//! A library for composing a noodle dish image from separate layer images.
//!
//! A bowl, a noodle layer, and up to three toppings are each resized to a fixed
//! fraction of a 1024x1024 canvas, centered (toppings are nudged apart by a
//! fixed offset), alpha-composited bottom to top, and saved as a PNG.
//!
//! ## Example
//!
//! ```no_run
//! use dish_composer::Dish;
//!
//! # fn main() -> dish_composer::Result<()> {
//! let written = Dish::new("broth-pho.png", "noodle-ramen.png")
//!     .with_toppings(["topping-egg.png", "topping-basil.png"])
//!     .with_output("my_dish.png")
//!     .compose()?;
//!
//! println!("wrote {}", written.display());
//! # Ok(())
//! # }
//! ```

pub mod compose;
pub mod error;
pub mod image;

pub use compose::{create_dish, Dish, LayerKind, LayerSpec, DEFAULT_OUTPUT, MAX_TOPPINGS};
pub use error::{Error, Result};
