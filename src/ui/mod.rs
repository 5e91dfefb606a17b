// src/ui/mod.rs
//
// UI module providing screen-space elements: the HUD with its controls and
// transient notices.

pub mod hud;
pub mod notice;
pub mod plugin;

pub use plugin::UiPlugin;
