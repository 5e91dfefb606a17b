//! Gating rules that turn picked pointer input into creature, food and ledger
//! changes. Systems borrow the session state into a [`Controller`] per event.
use bevy::prelude::*;

use crate::{
    core::config::MotionConfig,
    economy::ResourceLedger,
    food::{FoodItem, FoodKind},
    slime::Slime,
    world::OrbitControl,
};

use super::{errors::InteractionError, session::InteractionSession};

/// What a successful floor press bought.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedReceipt {
    pub food: FoodKind,
    pub spent: f32,
    pub friendship_gained: u32,
    /// Seconds until the creature reaches the food.
    pub eta: f32,
}

pub struct Controller<'a> {
    session: &'a mut InteractionSession,
    ledger: &'a mut ResourceLedger,
    orbit: &'a mut OrbitControl,
}

impl<'a> Controller<'a> {
    pub fn new(
        session: &'a mut InteractionSession,
        ledger: &'a mut ResourceLedger,
        orbit: &'a mut OrbitControl,
    ) -> Self {
        Self {
            session,
            ledger,
            orbit,
        }
    }

    /// Pointer-down on the creature. `None` means it is not ready yet.
    /// Returns the friendship gained, which is zero at the ceiling.
    pub fn press_slime(&mut self, slime: Option<&mut Slime>) -> Result<u32, InteractionError> {
        let slime = slime.ok_or(InteractionError::EntityNotReady)?;
        if !slime.begin_pet() {
            return Err(InteractionError::Busy);
        }

        self.session.set_petting(true);
        self.orbit.disable();
        Ok(self.ledger.credit_friendship(1))
    }

    /// Pointer-down on the floor at `point`.
    ///
    /// Every guard runs before anything is mutated, and nothing after the
    /// creature starts can fail. On success the creature has started turning,
    /// so the food is revealed and the purchase settled in the same call.
    pub fn press_floor(
        &mut self,
        point: Vec3,
        slime: Option<(&mut Slime, &Transform)>,
        food: Option<&mut FoodItem>,
        motion: &MotionConfig,
    ) -> Result<FeedReceipt, InteractionError> {
        if !self.session.feeding_enabled() {
            return Err(InteractionError::FeedingDisabled);
        }
        let (slime, transform) = slime.ok_or(InteractionError::EntityNotReady)?;
        let food = food.ok_or(InteractionError::EntityNotReady)?;
        let kind = food.kind();

        if food.is_visible() {
            return Err(InteractionError::FoodAlreadyPlaced { food: kind });
        }
        if slime.is_busy() || slime.is_petted() {
            return Err(InteractionError::Busy);
        }
        let purchase = self
            .ledger
            .quote(kind.price())
            .map_err(|shortfall| InteractionError::insufficient_funds(kind, shortfall))?;

        let eta = slime.feed(transform, point, kind, motion)?;

        food.place(point.x, point.z);
        food.reveal();
        self.ledger.settle(purchase);
        let friendship_gained = self.ledger.credit_friendship(kind.friendship_reward());

        Ok(FeedReceipt {
            food: kind,
            spent: kind.price(),
            friendship_gained,
            eta,
        })
    }

    /// Pointer-up. Returns `true` when it ended a petting gesture.
    pub fn release_pointer(&mut self, slime: Option<&mut Slime>) -> bool {
        if !self.session.is_petting() {
            return false;
        }
        self.session.set_petting(false);
        if let Some(slime) = slime {
            slime.end_pet();
        }
        self.orbit.enable();
        true
    }

    /// Flips feeding mode; turning it off hands the camera back to the user.
    pub fn toggle_feeding(&mut self) -> bool {
        let enabled = self.session.toggle_feeding();
        if !enabled {
            self.orbit.enable();
        }
        enabled
    }
}

/// Hides a food item once the creature has eaten it.
pub fn finish_feeding(food: &mut FoodItem) {
    food.conceal();
    food.park_offscreen();
}

/// Evolves the creature when friendship has reached `threshold`.
/// Returns `true` only on the call that performs the evolution.
pub fn check_evolution(slime: &mut Slime, ledger: &ResourceLedger, threshold: u32) -> bool {
    ledger.friendship() >= threshold && slime.evolve()
}
