use std::path::Path;

use bevy::prelude::*;

mod core;
mod economy;
mod food;
mod interaction;
mod loading;
mod motion;
mod slime;
mod ui;
mod world;

use crate::{
    core::CorePlugin, economy::EconomyPlugin, food::FoodPlugin, interaction::InteractionPlugin,
    loading::LoadingPlugin, slime::SlimePlugin, ui::UiPlugin, world::WorldPlugin,
};

fn main() {
    load_pet_env();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Slime Room".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((
            CorePlugin::default(),
            LoadingPlugin,
            EconomyPlugin,
            WorldPlugin,
            SlimePlugin,
            FoodPlugin,
            InteractionPlugin, // After SlimePlugin so advance_slimes is registered
            UiPlugin,
        ))
        .run();
}

/// Loads optional overrides such as `PET_CONFIG` before the config is read.
fn load_pet_env() {
    const ENV_FILE: &str = "pet.env";

    let path = Path::new(ENV_FILE);
    if !path.exists() {
        return;
    }

    if let Err(err) = dotenvy::from_filename(path) {
        eprintln!("Failed to load {}: {}", ENV_FILE, err);
    }
}
