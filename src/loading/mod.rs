//! Loading module: per-entity readiness for asynchronously resolved models.
pub mod components;
pub mod events;
pub mod plugin;
pub mod systems;

pub use components::{ModelSource, Readiness};
pub use plugin::LoadingPlugin;
