//! Messages flowing between input capture, controls and the controller.
use bevy::prelude::*;

use crate::{food::FoodKind, slime::SlimeSkin};

use super::picking::PickTarget;

/// Pointer went down over a recognised scene object.
#[derive(Message, Debug, Clone, Copy)]
pub struct PointerPressed {
    pub target: PickTarget,
    pub entity: Entity,
    pub point: Vec3,
}

#[derive(Message, Debug, Clone, Copy, Default)]
pub struct PointerReleased;

#[derive(Message, Debug, Clone, Copy, Default)]
pub struct FeedToggleClicked;

#[derive(Message, Debug, Clone, Copy)]
pub struct FoodSelected {
    pub food: FoodKind,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct SkinSelected {
    pub skin: SlimeSkin,
}

/// Short message shown to the player.
#[derive(Message, Debug, Clone)]
pub struct UserNotice {
    pub text: String,
}

impl UserNotice {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
