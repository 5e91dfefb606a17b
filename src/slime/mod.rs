//! Slime module: the pet's state machine, materials and animation systems.
pub mod components;
pub mod events;
pub mod materials;
pub mod plugin;
pub mod systems;

pub use components::{Slime, SlimeSkin};
pub use plugin::SlimePlugin;
