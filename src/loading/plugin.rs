//! Loading plugin wiring readiness polling and its notification channel.
use bevy::prelude::*;

use super::{
    events::{ModelLoadFailed, ModelReady},
    systems::poll_model_readiness,
};

pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ModelReady>()
            .add_message::<ModelLoadFailed>()
            .add_systems(PreUpdate, poll_model_readiness);
    }
}
