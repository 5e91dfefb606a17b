//! World module housing the room and camera controls.
pub mod camera;
pub mod components;
pub mod plugin;
pub mod systems;

pub use camera::OrbitControl;
pub use plugin::WorldPlugin;
