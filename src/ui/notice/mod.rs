// src/ui/notice/mod.rs
//
// Transient notices shown to the player, fading out after a few seconds.

pub mod components;
pub mod systems;
