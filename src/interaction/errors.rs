//! Guarded preconditions that turn an interaction into a no-op.
use std::fmt;

use crate::{economy::InsufficientFunds, food::FoodKind, slime::components::FeedRefusal};

/// Reasons an interaction was refused before any state changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionError {
    InsufficientFunds { food: FoodKind, required: f32, available: f32 },
    EntityNotReady,
    Busy,
    FeedingDisabled,
    FoodAlreadyPlaced { food: FoodKind },
}

impl InteractionError {
    pub fn insufficient_funds(food: FoodKind, shortfall: InsufficientFunds) -> Self {
        Self::InsufficientFunds {
            food,
            required: shortfall.required,
            available: shortfall.available,
        }
    }

    /// Only a failed purchase is reported to the player; everything else is
    /// an ordinary input race and is dropped quietly.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }

    pub fn user_message(&self) -> Option<&'static str> {
        self.is_user_visible().then_some("Not enough money!")
    }
}

impl From<FeedRefusal> for InteractionError {
    fn from(_: FeedRefusal) -> Self {
        Self::Busy
    }
}

impl fmt::Display for InteractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientFunds {
                food,
                required,
                available,
            } => write!(
                f,
                "Cannot afford {}: needs {:.0} money, {:.0} available",
                food.label(),
                required,
                available.floor()
            ),
            Self::EntityNotReady => write!(f, "Target is still loading"),
            Self::Busy => write!(f, "Slime is busy"),
            Self::FeedingDisabled => write!(f, "Feeding mode is off"),
            Self::FoodAlreadyPlaced { food } => {
                write!(f, "The {} is already on the floor", food.label())
            }
        }
    }
}

impl std::error::Error for InteractionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_funds_errors_reach_the_player() {
        let funds = InteractionError::insufficient_funds(
            FoodKind::Chicken,
            InsufficientFunds {
                required: 200.0,
                available: 12.7,
            },
        );
        assert!(funds.is_user_visible());
        assert_eq!(funds.user_message(), Some("Not enough money!"));
        assert_eq!(
            funds.to_string(),
            "Cannot afford chicken: needs 200 money, 12 available"
        );

        for quiet in [
            InteractionError::EntityNotReady,
            InteractionError::Busy,
            InteractionError::FeedingDisabled,
            InteractionError::FoodAlreadyPlaced {
                food: FoodKind::Apple,
            },
        ] {
            assert!(!quiet.is_user_visible());
            assert_eq!(quiet.user_message(), None);
        }
    }

    #[test]
    fn feed_refusals_read_as_busy() {
        assert_eq!(
            InteractionError::from(FeedRefusal::BeingPetted),
            InteractionError::Busy
        );
    }
}
