//! Systems turning pointer and control input into controller calls.
use bevy::{input::ButtonInput, prelude::*, window::PrimaryWindow};

use crate::{
    core::config::PetConfig,
    economy::ResourceLedger,
    food::FoodItem,
    loading::Readiness,
    slime::{
        events::{SlimeEvolved, SlimeFed},
        Slime,
    },
    world::{components::OrbitCamera, OrbitControl},
};

use super::{
    controller::{check_evolution, finish_feeding, Controller},
    errors::InteractionError,
    events::{
        FeedToggleClicked, FoodSelected, PointerPressed, PointerReleased, SkinSelected, UserNotice,
    },
    picking::{pick_nearest, PickShape, PickTarget},
    session::InteractionSession,
};

/// World-space ray under the cursor this frame, if the cursor is over the
/// window and a camera can see it.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PointerRay(pub Option<Ray3d>);

pub fn track_pointer_ray(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<OrbitCamera>>,
    mut pointer: ResMut<PointerRay>,
) {
    let ray = windows
        .single()
        .ok()
        .and_then(Window::cursor_position)
        .zip(cameras.single().ok())
        .and_then(|(cursor, (camera, transform))| {
            camera.viewport_to_world(transform, cursor).ok()
        });
    if pointer.0 != ray {
        pointer.0 = ray;
    }
}

/// Casts the pointer ray into the scene on left press and reports releases.
/// Presses that land on a HUD control never reach the scene.
pub fn capture_pointer(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    pointer: Res<PointerRay>,
    controls: Query<&Interaction>,
    shapes: Query<(Entity, &PickShape, &GlobalTransform, Option<&Name>)>,
    mut pressed: MessageWriter<PointerPressed>,
    mut released: MessageWriter<PointerReleased>,
) {
    if mouse_buttons.just_released(MouseButton::Left) {
        released.write(PointerReleased);
    }
    if !mouse_buttons.just_pressed(MouseButton::Left) {
        return;
    }
    if controls
        .iter()
        .any(|interaction| *interaction != Interaction::None)
    {
        return;
    }
    let Some(ray) = pointer.0 else {
        return;
    };

    match pick_nearest(ray, shapes.iter()) {
        Some(hit) => match hit.target {
            Some(target) => {
                pressed.write(PointerPressed {
                    target,
                    entity: hit.entity,
                    point: hit.point,
                });
            }
            None => debug!("Pointer hit unnamed object {}", hit.entity),
        },
        None => debug!("Pointer hit nothing"),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn handle_pointer_pressed(
    mut events: MessageReader<PointerPressed>,
    config: Res<PetConfig>,
    mut session: ResMut<InteractionSession>,
    mut ledger: ResMut<ResourceLedger>,
    mut orbit: ResMut<OrbitControl>,
    mut slimes: Query<(&mut Slime, &Transform, &Readiness)>,
    mut foods: Query<(&mut FoodItem, &Readiness)>,
    mut notices: MessageWriter<UserNotice>,
) {
    for event in events.read() {
        let mut slime = slimes.single_mut().ok().filter(|(_, _, ready)| ready.is_ready());
        let selected = session.selected_food();
        let mut controller = Controller::new(&mut session, &mut ledger, &mut orbit);

        let outcome = match event.target {
            PickTarget::Slime => controller
                .press_slime(slime.as_mut().map(|(slime, _, _)| &mut **slime))
                .map(|gained| info!("Petting the slime (+{} friendship)", gained)),
            PickTarget::Floor => {
                let food = foods
                    .iter_mut()
                    .find(|(food, _)| food.kind() == selected)
                    .filter(|(_, ready)| ready.is_ready())
                    .map(|(food, _)| food.into_inner());
                controller
                    .press_floor(
                        event.point,
                        slime
                            .as_mut()
                            .map(|(slime, transform, _)| (&mut **slime, &**transform)),
                        food,
                        &config.motion,
                    )
                    .map(|receipt| {
                        info!(
                            "Placed {} at ({:.2}, {:.2}): -{:.0} money, +{} friendship, eaten in {:.1}s",
                            receipt.food.label(),
                            event.point.x,
                            event.point.z,
                            receipt.spent,
                            receipt.friendship_gained,
                            receipt.eta
                        )
                    })
            }
        };

        if let Err(err) = outcome {
            report_refusal(&err, &mut notices);
        }
    }
}

fn report_refusal(err: &InteractionError, notices: &mut MessageWriter<UserNotice>) {
    match err.user_message() {
        Some(text) => {
            warn!("{}", err);
            notices.write(UserNotice::new(text));
        }
        None => debug!("Ignored interaction: {}", err),
    }
}

pub fn handle_pointer_released(
    mut events: MessageReader<PointerReleased>,
    mut session: ResMut<InteractionSession>,
    mut ledger: ResMut<ResourceLedger>,
    mut orbit: ResMut<OrbitControl>,
    mut slimes: Query<&mut Slime>,
) {
    for _ in events.read() {
        let mut slime = slimes.single_mut().ok();
        let mut controller = Controller::new(&mut session, &mut ledger, &mut orbit);
        if controller.release_pointer(slime.as_deref_mut()) {
            debug!("Petting released");
        }
    }
}

pub fn handle_feed_toggle(
    mut events: MessageReader<FeedToggleClicked>,
    mut session: ResMut<InteractionSession>,
    mut ledger: ResMut<ResourceLedger>,
    mut orbit: ResMut<OrbitControl>,
) {
    for _ in events.read() {
        let mut controller = Controller::new(&mut session, &mut ledger, &mut orbit);
        let enabled = controller.toggle_feeding();
        info!("Feeding mode {}", if enabled { "on" } else { "off" });
    }
}

pub fn handle_food_selected(
    mut events: MessageReader<FoodSelected>,
    mut session: ResMut<InteractionSession>,
) {
    for event in events.read() {
        session.select_food(event.food);
        info!("Selected food: {}", event.food.label());
    }
}

pub fn handle_skin_selected(
    mut events: MessageReader<SkinSelected>,
    mut slimes: Query<(&mut Slime, &Readiness)>,
) {
    for event in events.read() {
        let Ok((mut slime, readiness)) = slimes.single_mut() else {
            continue;
        };
        if !readiness.is_ready() {
            debug!("Ignored interaction: {}", InteractionError::EntityNotReady);
            continue;
        }
        if slime.skin() == event.skin {
            continue;
        }
        if let Some(change) = slime.set_skin(event.skin) {
            info!(
                "Slime skin changed from {} to {}",
                change.from.label(),
                change.to.label()
            );
        }
    }
}

/// Clears the eaten food once the creature reports it has arrived.
pub fn finish_feeding_on_arrival(
    mut fed: MessageReader<SlimeFed>,
    mut foods: Query<&mut FoodItem>,
) {
    for event in fed.read() {
        for mut food in foods.iter_mut() {
            if food.kind() == event.food {
                finish_feeding(&mut food);
            }
        }
    }
}

pub fn check_evolution_threshold(
    config: Res<PetConfig>,
    ledger: Res<ResourceLedger>,
    mut slimes: Query<(&mut Slime, &Readiness)>,
    mut evolved: MessageWriter<SlimeEvolved>,
) {
    let threshold = config.creature.evolution_threshold;
    if ledger.friendship() < threshold {
        return;
    }
    for (mut slime, readiness) in slimes.iter_mut() {
        if readiness.is_ready() && check_evolution(&mut slime, &ledger, threshold) {
            info!("Friendship reached {}; the slime evolves", ledger.friendship());
            evolved.write(SlimeEvolved);
        }
    }
}
