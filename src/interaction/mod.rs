//! Interaction module: picking, gating rules and input handling.
pub mod controller;
pub mod errors;
pub mod events;
pub mod picking;
pub mod plugin;
pub mod session;
pub mod systems;

pub use plugin::InteractionPlugin;
pub use session::InteractionSession;
