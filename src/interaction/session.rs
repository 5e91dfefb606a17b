//! Transient per-session interaction state.
use bevy::prelude::*;

use crate::{core::config::PetConfig, food::FoodKind};

pub const FEED_LABEL: &str = "Feed";
pub const STOP_LABEL: &str = "Stop";

#[derive(Resource, Debug, Clone)]
pub struct InteractionSession {
    feeding_enabled: bool,
    active_petting: bool,
    selected_food: FoodKind,
}

impl InteractionSession {
    pub fn new(selected_food: FoodKind) -> Self {
        Self {
            feeding_enabled: false,
            active_petting: false,
            selected_food,
        }
    }

    pub fn feeding_enabled(&self) -> bool {
        self.feeding_enabled
    }

    pub fn is_petting(&self) -> bool {
        self.active_petting
    }

    pub fn selected_food(&self) -> FoodKind {
        self.selected_food
    }

    pub fn select_food(&mut self, food: FoodKind) {
        self.selected_food = food;
    }

    /// Flips feeding mode and returns the new state.
    pub fn toggle_feeding(&mut self) -> bool {
        self.feeding_enabled = !self.feeding_enabled;
        self.feeding_enabled
    }

    pub(crate) fn set_petting(&mut self, petting: bool) {
        self.active_petting = petting;
    }

    /// Label for the toggle: it offers the action the next click performs.
    pub fn feed_button_label(&self) -> &'static str {
        if self.feeding_enabled {
            STOP_LABEL
        } else {
            FEED_LABEL
        }
    }
}

impl FromWorld for InteractionSession {
    fn from_world(world: &mut World) -> Self {
        let food = world.get_resource_or_init::<PetConfig>().session.starting_food;
        Self::new(food)
    }
}
