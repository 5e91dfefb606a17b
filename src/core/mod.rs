//! Core module: configuration, session clock and startup helpers.
pub mod config;
pub mod plugin;

pub use plugin::CorePlugin;
