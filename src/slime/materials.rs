//! Shared mesh and material handles for the creature.
use std::collections::HashMap;

use bevy::{
    ecs::world::FromWorld,
    math::primitives::{Cone, Sphere},
    prelude::*,
};

use crate::core::config::PetConfig;

use super::components::SlimeSkin;

/// Created once at startup and handed to the creature's systems by reference.
#[derive(Resource, Debug)]
pub struct SlimeMaterials {
    body_mesh: Handle<Mesh>,
    ear_mesh: Handle<Mesh>,
    skins: HashMap<SlimeSkin, Handle<StandardMaterial>>,
    fallback: Handle<StandardMaterial>,
}

impl SlimeMaterials {
    pub fn body_mesh(&self) -> Handle<Mesh> {
        self.body_mesh.clone()
    }

    pub fn ear_mesh(&self) -> Handle<Mesh> {
        self.ear_mesh.clone()
    }

    pub fn skin(&self, skin: SlimeSkin) -> Handle<StandardMaterial> {
        self.skins
            .get(&skin)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

impl FromWorld for SlimeMaterials {
    fn from_world(world: &mut World) -> Self {
        let radius = world.get_resource_or_init::<PetConfig>().creature.radius;

        let mut meshes = world.resource_mut::<Assets<Mesh>>();
        let body_mesh = meshes.add(Mesh::from(Sphere::new(radius)));
        let ear_mesh = meshes.add(Mesh::from(Cone {
            radius: radius * 0.25,
            height: radius * 0.6,
        }));

        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
        let mut skins = HashMap::new();
        for skin in SlimeSkin::ALL {
            skins.insert(skin, materials.add(skin_material(skin)));
        }
        let fallback = materials.add(skin_material(SlimeSkin::Normal));

        Self {
            body_mesh,
            ear_mesh,
            skins,
            fallback,
        }
    }
}

fn skin_material(skin: SlimeSkin) -> StandardMaterial {
    match skin {
        SlimeSkin::Normal => StandardMaterial {
            base_color: Color::srgb_u8(238, 238, 238),
            perceptual_roughness: 0.7,
            ..default()
        },
        SlimeSkin::Wood => StandardMaterial {
            base_color: Color::srgb_u8(150, 102, 60),
            perceptual_roughness: 0.9,
            ..default()
        },
        SlimeSkin::Metal => StandardMaterial {
            base_color: Color::srgb_u8(200, 204, 210),
            metallic: 1.0,
            perceptual_roughness: 0.08,
            reflectance: 1.0,
            ..default()
        },
        SlimeSkin::Bubble => StandardMaterial {
            base_color: Color::srgba(0.65, 0.85, 1.0, 0.45),
            alpha_mode: AlphaMode::Blend,
            perceptual_roughness: 0.05,
            ..default()
        },
        SlimeSkin::Glass => StandardMaterial {
            base_color: Color::srgba(0.9, 0.95, 1.0, 0.3),
            alpha_mode: AlphaMode::Blend,
            perceptual_roughness: 0.0,
            reflectance: 0.9,
            ..default()
        },
        SlimeSkin::Stone => StandardMaterial {
            base_color: Color::srgb_u8(120, 120, 115),
            perceptual_roughness: 1.0,
            ..default()
        },
        SlimeSkin::Emissive => StandardMaterial {
            base_color: Color::srgb_u8(120, 255, 170),
            emissive: LinearRgba::rgb(0.4, 2.0, 0.9),
            ..default()
        },
    }
}
