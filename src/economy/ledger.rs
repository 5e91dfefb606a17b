//! Friendship and money counters shared by every interaction.
use std::fmt;

use bevy::{ecs::world::FromWorld, prelude::*};

use crate::core::config::{LedgerConfig, PetConfig};

/// Raised when a purchase would drive money below zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsufficientFunds {
    pub required: f32,
    pub available: f32,
}

impl fmt::Display for InsufficientFunds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "needs {:.0} money but only {:.0} available",
            self.required,
            self.available.floor()
        )
    }
}

impl std::error::Error for InsufficientFunds {}

/// A price the ledger has agreed it can cover. Settling it cannot fail.
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use]
pub struct Purchase {
    amount: f32,
}

/// Bounded counters: friendship only ever rises, money regenerates over time
/// and is spent on food.
#[derive(Resource, Debug, Clone)]
pub struct ResourceLedger {
    friendship: u32,
    friendship_ceiling: u32,
    money: f32,
    money_ceiling: f32,
    regen_per_second: f32,
}

impl ResourceLedger {
    pub fn new(config: &LedgerConfig) -> Self {
        Self {
            friendship: 0,
            friendship_ceiling: config.friendship_ceiling,
            money: config.starting_money,
            money_ceiling: config.money_ceiling,
            regen_per_second: config.money_regen_per_second,
        }
    }

    pub fn friendship(&self) -> u32 {
        self.friendship
    }

    pub fn friendship_ceiling(&self) -> u32 {
        self.friendship_ceiling
    }

    pub fn money(&self) -> f32 {
        self.money
    }

    /// Money as shown to the player.
    pub fn money_display(&self) -> u32 {
        self.money.floor() as u32
    }

    /// Adds up to `amount` friendship and returns how much was actually gained.
    pub fn credit_friendship(&mut self, amount: u32) -> u32 {
        let next = self
            .friendship
            .saturating_add(amount)
            .min(self.friendship_ceiling)
            .max(self.friendship);
        let gained = next - self.friendship;
        self.friendship = next;
        gained
    }

    pub fn tick_money_regen(&mut self, dt: f32) {
        if dt <= 0.0 || self.money >= self.money_ceiling {
            return;
        }
        self.money = (self.money + dt * self.regen_per_second).min(self.money_ceiling);
    }

    pub fn can_afford(&self, amount: f32) -> bool {
        self.money >= amount
    }

    /// Checks `amount` against current money without debiting it.
    pub fn quote(&self, amount: f32) -> Result<Purchase, InsufficientFunds> {
        if !self.can_afford(amount) {
            return Err(InsufficientFunds {
                required: amount,
                available: self.money,
            });
        }
        Ok(Purchase { amount })
    }

    pub fn settle(&mut self, purchase: Purchase) {
        self.money = (self.money - purchase.amount).max(0.0);
    }

    pub fn try_spend(&mut self, amount: f32) -> Result<(), InsufficientFunds> {
        let purchase = self.quote(amount)?;
        self.settle(purchase);
        Ok(())
    }
}

impl FromWorld for ResourceLedger {
    fn from_world(world: &mut World) -> Self {
        let config = world.get_resource_or_init::<PetConfig>();
        Self::new(&config.ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> ResourceLedger {
        ResourceLedger::new(&PetConfig::default().ledger)
    }

    #[test]
    fn friendship_saturates_at_ceiling() {
        let mut ledger = ledger();
        assert_eq!(ledger.credit_friendship(998), 998);
        assert_eq!(ledger.credit_friendship(5), 2);
        assert_eq!(ledger.friendship(), 1000);
        assert_eq!(ledger.credit_friendship(1), 0);
        assert_eq!(ledger.friendship(), ledger.friendship_ceiling());
    }

    #[test]
    fn money_regenerates_up_to_ceiling() {
        let mut ledger = ledger();
        ledger.tick_money_regen(2.0);
        assert!((ledger.money() - 106.0).abs() < 1e-4);

        ledger.tick_money_regen(10_000.0);
        assert_eq!(ledger.money(), 1000.0);

        ledger.tick_money_regen(1.0);
        assert_eq!(ledger.money(), 1000.0);
    }

    #[test]
    fn spending_never_goes_negative() {
        let mut ledger = ledger();
        assert!(ledger.try_spend(60.0).is_ok());
        assert_eq!(ledger.money(), 40.0);

        let err = ledger.try_spend(50.0).expect_err("only 40 left");
        assert_eq!(err.required, 50.0);
        assert_eq!(err.available, 40.0);
        assert_eq!(ledger.money(), 40.0);

        assert!(ledger.try_spend(40.0).is_ok());
        assert_eq!(ledger.money(), 0.0);
    }

    #[test]
    fn quoting_leaves_money_until_settled() {
        let mut ledger = ledger();
        let purchase = ledger.quote(30.0).expect("100 covers 30");
        assert_eq!(ledger.money(), 100.0);

        ledger.settle(purchase);
        assert_eq!(ledger.money(), 70.0);
        assert_eq!(
            ledger.quote(80.0),
            Err(InsufficientFunds {
                required: 80.0,
                available: 70.0,
            })
        );
        assert_eq!(ledger.money(), 70.0);
    }

    #[test]
    fn display_floors_fractional_money() {
        let mut ledger = ledger();
        ledger.tick_money_regen(0.3);
        assert_eq!(ledger.money_display(), 100);
        assert!(ledger.money() > 100.0);
    }

    #[test]
    fn insufficient_funds_message_is_readable() {
        let err = InsufficientFunds {
            required: 200.0,
            available: 12.7,
        };
        assert_eq!(err.to_string(), "needs 200 money but only 12 available");
    }
}
