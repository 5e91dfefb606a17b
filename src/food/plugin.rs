//! Food plugin wiring the consumable items.
use bevy::prelude::*;

use super::systems::{spawn_food_items, sync_food_items};

pub struct FoodPlugin;

impl Plugin for FoodPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_food_items)
            .add_systems(Update, sync_food_items);

        info!("FoodPlugin registered");
    }
}
