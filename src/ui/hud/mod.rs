// src/ui/hud/mod.rs
//
// Heads-up display: counters, feeding controls and the evolution panel.

pub mod components;
pub mod systems;
