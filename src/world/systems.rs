//! Systems for the world module.
use std::f32::consts::{FRAC_PI_2, PI};

use bevy::{math::primitives::Plane3d, prelude::*};

use crate::{
    core::config::PetConfig,
    interaction::picking::PickShape,
    world::components::OrbitCamera,
};

const ROOM_HALF_WIDTH: f32 = 5.0;
const ROOM_HEIGHT: f32 = 7.5;
const LIGHT_POSITION: Vec3 = Vec3::new(3.0, 5.0, 3.0);

/// Spawns the room: floor, ceiling, four walls and the lights.
pub fn spawn_room(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let floor_size = Vec2::splat(ROOM_HALF_WIDTH);
    let wall_size = Vec2::new(ROOM_HALF_WIDTH, ROOM_HEIGHT * 0.5);

    let floor_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(196, 170, 140),
        perceptual_roughness: 0.9,
        ..default()
    });
    let wall_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(236, 230, 220),
        perceptual_roughness: 0.95,
        ..default()
    });

    let horizontal_mesh = meshes.add(Mesh::from(Plane3d::new(Vec3::Y, floor_size)));
    let wall_mesh = meshes.add(Mesh::from(Plane3d::new(Vec3::Y, wall_size)));

    commands.spawn((
        Mesh3d(horizontal_mesh.clone()),
        MeshMaterial3d(floor_material),
        Transform::IDENTITY,
        PickShape::Plane {
            half_size: floor_size,
        },
        Name::new("floor"),
    ));

    commands.spawn((
        Mesh3d(horizontal_mesh),
        MeshMaterial3d(wall_material.clone()),
        Transform::from_xyz(0.0, ROOM_HEIGHT, 0.0).with_rotation(Quat::from_rotation_x(PI)),
        PickShape::Plane {
            half_size: floor_size,
        },
        Name::new("ceiling"),
    ));

    for (index, (yaw, position)) in wall_placements().into_iter().enumerate() {
        commands.spawn((
            Mesh3d(wall_mesh.clone()),
            MeshMaterial3d(wall_material.clone()),
            Transform::from_translation(position)
                .with_rotation(Quat::from_rotation_y(yaw) * Quat::from_rotation_x(FRAC_PI_2)),
            PickShape::Plane {
                half_size: wall_size,
            },
            Name::new(format!("wall{}", index + 1)),
        ));
    }

    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.95, 0.93, 0.9),
        brightness: 250.0,
        affects_lightmapped_meshes: true,
    });

    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            range: 30.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(LIGHT_POSITION),
        Name::new("room_light"),
    ));
}

/// Yaw and centre of each wall; every wall faces the room's centre.
fn wall_placements() -> [(f32, Vec3); 4] {
    let mid = ROOM_HEIGHT * 0.5;
    [
        (0.0, Vec3::new(0.0, mid, -ROOM_HALF_WIDTH)),
        (-FRAC_PI_2, Vec3::new(ROOM_HALF_WIDTH, mid, 0.0)),
        (PI, Vec3::new(0.0, mid, ROOM_HALF_WIDTH)),
        (FRAC_PI_2, Vec3::new(-ROOM_HALF_WIDTH, mid, 0.0)),
    ]
}

/// Spawns the orbit camera at its configured start, looking at the origin.
pub fn spawn_camera(mut commands: Commands, config: Res<PetConfig>) {
    let orbit = OrbitCamera::looking_from(
        config.camera.start_position,
        Vec3::ZERO,
        config.camera.orbit_sensitivity,
    );
    let transform = orbit.transform();

    commands.spawn((Camera3d::default(), transform, orbit));
}
