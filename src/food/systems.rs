//! Systems spawning food items and mirroring their state onto the scene.
use bevy::prelude::*;

use crate::{
    interaction::picking::PickShape,
    loading::{ModelSource, Readiness},
};

use super::components::{FoodItem, FoodKind};

/// Spawns one hidden, parked serving per food kind.
pub fn spawn_food_items(mut commands: Commands, asset_server: Res<AssetServer>) {
    for kind in FoodKind::ALL {
        let scene: Handle<Scene> =
            asset_server.load(GltfAssetLabel::Scene(0).from_asset(kind.model_path()));
        let item = FoodItem::new(kind);

        commands
            .spawn((
                Transform::from_translation(item.position()),
                Visibility::Hidden,
                ModelSource::Scene(scene.clone()),
                Readiness::Pending,
                PickShape::Sphere {
                    offset: Vec3::ZERO,
                    radius: kind.pick_radius(),
                },
                Name::new(kind.label()),
                item,
            ))
            .with_children(|parent| {
                parent.spawn((
                    SceneRoot(scene),
                    Transform::from_scale(Vec3::splat(kind.model_scale())),
                ));
            });
    }
}

/// Copies each item's logical position and visibility onto its entity.
pub fn sync_food_items(
    mut items: Query<(&FoodItem, &mut Transform, &mut Visibility), Changed<FoodItem>>,
) {
    for (item, mut transform, mut visibility) in items.iter_mut() {
        transform.translation = item.position();
        *visibility = if item.is_visible() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}
