//! Systems spawning and animating the creature.
use bevy::prelude::*;

use crate::{
    core::{config::PetConfig, plugin::SessionClock},
    interaction::picking::PickShape,
    loading::{
        components::{ModelSource, Readiness},
        events::ModelReady,
    },
};

use super::{
    components::{
        EvolvedLook, Mood, ReflectionBinding, Slime, SlimeBody, SlimeSignal, SkinnedPart,
    },
    events::SlimeFed,
    materials::SlimeMaterials,
};

pub const SLIME_NAME: &str = "slime";

const HAPPY_WOBBLE_RATE: f32 = 8.0;
const HAPPY_WOBBLE_AMOUNT: f32 = 0.04;

/// Spawns the creature at the room's centre with a primitive body.
pub fn spawn_slime(mut commands: Commands, materials: Res<SlimeMaterials>, config: Res<PetConfig>) {
    let radius = config.creature.radius;
    let mut slime = Slime::new(&config.creature);
    slime.set_skin(config.session.starting_skin);

    commands
        .spawn((
            slime,
            Transform::default(),
            Visibility::default(),
            ModelSource::Primitive,
            Readiness::Pending,
            PickShape::Sphere {
                offset: Vec3::Y * radius,
                radius,
            },
            Name::new(SLIME_NAME),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(materials.body_mesh()),
                MeshMaterial3d(materials.skin(SkinnedPart::INITIAL)),
                Transform::from_xyz(0.0, radius, 0.0),
                SlimeBody,
                SkinnedPart::default(),
                Name::new("slime body"),
            ));
        });
}

pub fn log_slime_ready(mut ready: MessageReader<ModelReady>, slimes: Query<&Slime>) {
    for event in ready.read() {
        if let Ok(slime) = slimes.get(event.entity) {
            info!(
                "{} is awake ({} skin, scale {:.2})",
                event.name,
                slime.skin().label(),
                slime.scale()
            );
        }
    }
}

/// Drives eating, growth and evolution timelines for ready creatures.
pub fn advance_slimes(
    clock: Res<SessionClock>,
    mut slimes: Query<(&mut Slime, &mut Transform, &Readiness)>,
    mut fed: MessageWriter<SlimeFed>,
) {
    let dt = clock.delta_secs();
    for (mut slime, mut transform, readiness) in slimes.iter_mut() {
        if !readiness.is_ready() {
            continue;
        }
        if let Some(SlimeSignal::FinishedEating(food)) = slime.advance(dt, &mut transform) {
            info!(
                "Slime finished the {} and grew to {:.2}",
                food.label(),
                slime.target_scale()
            );
            fed.write(SlimeFed { food });
        }
    }
}

/// Keeps every skinned part in step with the creature's active skin.
pub fn sync_slime_skin(
    mut commands: Commands,
    materials: Res<SlimeMaterials>,
    slimes: Query<&Slime>,
    mut parts: Query<(Entity, &mut SkinnedPart, &mut MeshMaterial3d<StandardMaterial>)>,
) {
    let Ok(slime) = slimes.single() else {
        return;
    };
    let skin = slime.skin();

    for (entity, mut part, mut material) in parts.iter_mut() {
        if part.applied == skin {
            continue;
        }
        debug!("Applying {} skin to {}", skin.label(), entity);
        part.applied = skin;
        material.0 = materials.skin(skin);

        if skin.is_reflective() {
            commands.entity(entity).insert(ReflectionBinding);
        } else {
            commands.entity(entity).remove::<ReflectionBinding>();
        }
    }
}

/// Applies the evolution hop and spin to the body mesh, and a gentle wobble
/// while the creature is happy.
pub fn animate_slime_body(
    config: Res<PetConfig>,
    clock: Res<SessionClock>,
    slimes: Query<(&Slime, &Children)>,
    mut bodies: Query<&mut Transform, With<SlimeBody>>,
) {
    let radius = config.creature.radius;
    let wobble_phase = clock.elapsed().as_secs_f32() * HAPPY_WOBBLE_RATE;
    for (slime, children) in slimes.iter() {
        let (hop, spin) = slime.evolution_pose();
        let squash = match slime.mood() {
            Mood::Happy => wobble_phase.sin() * HAPPY_WOBBLE_AMOUNT,
            Mood::Neutral => 0.0,
        };
        for child in children.iter() {
            if let Ok(mut transform) = bodies.get_mut(child) {
                transform.translation.y = radius + hop;
                transform.rotation = Quat::from_rotation_y(spin);
                transform.scale = Vec3::new(1.0 + squash, 1.0 - squash, 1.0 + squash);
            }
        }
    }
}

/// Gives an evolved creature its ears, once.
pub fn attach_evolved_look(
    mut commands: Commands,
    materials: Res<SlimeMaterials>,
    config: Res<PetConfig>,
    slimes: Query<(Entity, &Slime, &Children), Without<EvolvedLook>>,
    bodies: Query<(), With<SlimeBody>>,
) {
    let radius = config.creature.radius;
    for (entity, slime, children) in slimes.iter() {
        if !slime.is_evolved() {
            continue;
        }

        for child in children.iter() {
            if bodies.get(child).is_err() {
                continue;
            }
            commands.entity(child).with_children(|body| {
                for side in [-1.0_f32, 1.0] {
                    body.spawn((
                        Mesh3d(materials.ear_mesh()),
                        MeshMaterial3d(materials.skin(SkinnedPart::INITIAL)),
                        Transform::from_xyz(side * radius * 0.45, radius * 0.85, 0.0)
                            .with_rotation(Quat::from_rotation_z(-side * 0.35)),
                        SkinnedPart::default(),
                        Name::new("slime ear"),
                    ));
                }
            });
        }

        commands.entity(entity).insert(EvolvedLook);
        info!("Slime evolved and grew ears");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slime::components::SlimeSkin;

    fn app() -> App {
        let mut app = App::new();
        app.insert_resource(PetConfig::default())
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<SlimeMaterials>()
            .add_systems(Update, sync_slime_skin);
        app
    }

    #[test]
    fn reflective_skin_binds_and_releases_reflection() {
        let mut app = app();
        let mut slime = Slime::new(&PetConfig::default().creature);
        slime.set_skin(SlimeSkin::Metal);
        let slime_entity = app.world_mut().spawn(slime).id();

        let initial = app
            .world()
            .resource::<SlimeMaterials>()
            .skin(SkinnedPart::INITIAL);
        let part = app
            .world_mut()
            .spawn((SkinnedPart::default(), MeshMaterial3d(initial)))
            .id();

        app.update();

        let metal = app.world().resource::<SlimeMaterials>().skin(SlimeSkin::Metal);
        assert_eq!(
            app.world().get::<SkinnedPart>(part).expect("part").applied,
            SlimeSkin::Metal
        );
        assert_eq!(
            app.world()
                .get::<MeshMaterial3d<StandardMaterial>>(part)
                .expect("material")
                .0,
            metal
        );
        assert!(app.world().get::<ReflectionBinding>(part).is_some());

        app.world_mut()
            .get_mut::<Slime>(slime_entity)
            .expect("slime")
            .set_skin(SlimeSkin::Stone);
        app.update();

        assert_eq!(
            app.world().get::<SkinnedPart>(part).expect("part").applied,
            SlimeSkin::Stone
        );
        assert!(app.world().get::<ReflectionBinding>(part).is_none());
    }

    #[test]
    fn advancing_requires_readiness() {
        let mut app = App::new();
        app.insert_resource(SessionClock::default())
            .add_message::<SlimeFed>()
            .add_systems(Update, advance_slimes);

        let config = PetConfig::default();
        let mut slime = Slime::new(&config.creature);
        slime.grow();
        let pending = app
            .world_mut()
            .spawn((slime.clone(), Transform::default(), Readiness::Pending))
            .id();
        let ready = app
            .world_mut()
            .spawn((slime, Transform::default(), Readiness::Ready))
            .id();

        app.world_mut()
            .resource_mut::<SessionClock>()
            .tick(std::time::Duration::from_secs(1));
        app.update();

        let pending_scale = app.world().get::<Transform>(pending).expect("pending").scale;
        let ready_scale = app.world().get::<Transform>(ready).expect("ready").scale;
        assert_eq!(pending_scale, Vec3::ONE);
        assert!((ready_scale.x - 1.1).abs() < 1e-5);
    }
}
