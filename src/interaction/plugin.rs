//! InteractionPlugin wires pointer capture, controls and the controller.
use bevy::prelude::*;

use crate::slime::systems::advance_slimes;

use super::{
    events::{
        FeedToggleClicked, FoodSelected, PointerPressed, PointerReleased, SkinSelected, UserNotice,
    },
    session::InteractionSession,
    systems::{
        capture_pointer, check_evolution_threshold, finish_feeding_on_arrival, handle_feed_toggle,
        handle_food_selected, handle_pointer_pressed, handle_pointer_released,
        handle_skin_selected, track_pointer_ray, PointerRay,
    },
};

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InteractionSession>()
            .init_resource::<PointerRay>()
            .add_message::<PointerPressed>()
            .add_message::<PointerReleased>()
            .add_message::<FeedToggleClicked>()
            .add_message::<FoodSelected>()
            .add_message::<SkinSelected>()
            .add_message::<UserNotice>()
            .add_systems(
                Update,
                (
                    track_pointer_ray,
                    capture_pointer,
                    (handle_feed_toggle, handle_food_selected, handle_skin_selected),
                    handle_pointer_pressed,
                    handle_pointer_released,
                )
                    .chain()
                    .before(advance_slimes),
            )
            .add_systems(
                Update,
                (finish_feeding_on_arrival, check_evolution_threshold).after(advance_slimes),
            );

        info!("InteractionPlugin registered");
    }
}
