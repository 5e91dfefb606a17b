// src/ui/hud/components.rs
//
// Marker components for HUD nodes.

use bevy::prelude::*;

use crate::{food::FoodKind, slime::SlimeSkin};

#[derive(Component, Debug, Default)]
pub struct FriendshipText;

#[derive(Component, Debug, Default)]
pub struct MoneyText;

/// Button toggling feeding mode.
#[derive(Component, Debug, Default)]
pub struct FeedToggleButton;

/// Text node inside the feed toggle showing `Feed` or `Stop`.
#[derive(Component, Debug, Default)]
pub struct FeedToggleLabel;

/// Selector button choosing which food the next floor click places.
#[derive(Component, Debug, Clone, Copy)]
pub struct FoodButton(pub FoodKind);

/// Selector button choosing the creature's skin.
#[derive(Component, Debug, Clone, Copy)]
pub struct SkinButton(pub SlimeSkin);

/// Announcement panel, hidden until the creature evolves.
#[derive(Component, Debug, Default)]
pub struct EvolutionPanel;
