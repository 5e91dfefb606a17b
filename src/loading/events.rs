//! Notifications emitted when a model settles.
use bevy::prelude::{Entity, Message};

/// Fired once when an entity's model becomes available.
#[derive(Message, Debug, Clone)]
pub struct ModelReady {
    pub entity: Entity,
    pub name: String,
}

/// Fired once when an entity's model cannot be loaded; the entity stays unusable.
#[derive(Message, Debug, Clone)]
pub struct ModelLoadFailed {
    pub entity: Entity,
    pub name: String,
    pub reason: String,
}
