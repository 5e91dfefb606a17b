//! Slime plugin wiring the creature's spawn, timelines and visuals.
use bevy::prelude::*;

use super::{
    events::{SlimeEvolved, SlimeFed},
    materials::SlimeMaterials,
    systems::{
        advance_slimes, animate_slime_body, attach_evolved_look, log_slime_ready, spawn_slime,
        sync_slime_skin,
    },
};

pub struct SlimePlugin;

impl Plugin for SlimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SlimeMaterials>()
            .add_message::<SlimeFed>()
            .add_message::<SlimeEvolved>()
            .add_systems(Startup, spawn_slime)
            .add_systems(
                Update,
                (
                    log_slime_ready,
                    advance_slimes,
                    (sync_slime_skin, attach_evolved_look, animate_slime_body)
                        .after(advance_slimes),
                ),
            );

        info!("SlimePlugin registered");
    }
}
