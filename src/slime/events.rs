//! Creature-specific messages broadcast between systems.
use bevy::prelude::Message;

use crate::food::FoodKind;

/// The creature reached its food and finished eating.
#[derive(Message, Debug, Clone, Copy)]
pub struct SlimeFed {
    pub food: FoodKind,
}

/// The creature evolved. Sent exactly once per session.
#[derive(Message, Debug, Clone, Copy)]
pub struct SlimeEvolved;
