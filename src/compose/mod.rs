//! Layering of bowl, noodles, and toppings into a single dish.

mod blend;
mod dish;
mod layout;

pub use blend::{paste_with_mask, resize_premultiplied};
pub use dish::{create_dish, place_layer, Dish, DEFAULT_OUTPUT};
pub use layout::{
    centered_origin, scaled_size, topping_offset, LayerKind, LayerSpec, BOWL_SCALE,
    MAX_TOPPINGS, NOODLE_SCALE, TOPPING_OFFSETS, TOPPING_SCALE,
};
