//! WorldPlugin builds the room and drives the orbit camera.
use bevy::prelude::*;

use crate::{
    interaction::systems::handle_pointer_pressed,
    world::{
        camera::{orbit_camera, OrbitControl},
        systems::{spawn_camera, spawn_room},
    },
};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitControl>()
            .add_systems(Startup, (spawn_room, spawn_camera))
            .add_systems(Update, orbit_camera.after(handle_pointer_pressed));

        info!("WorldPlugin registered");
    }
}
