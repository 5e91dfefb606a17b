//! Food module: the consumable catalogue and item lifecycle.
pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{FoodItem, FoodKind};
pub use plugin::FoodPlugin;
