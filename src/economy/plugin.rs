//! Economy plugin wiring the friendship/money ledger.
use bevy::prelude::*;

use super::{ledger::ResourceLedger, systems::regenerate_money};

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ResourceLedger>()
            .add_systems(Startup, log_starting_balance)
            .add_systems(Update, regenerate_money);
    }
}

fn log_starting_balance(ledger: Res<ResourceLedger>) {
    info!(
        "EconomyPlugin initialised: friendship {} / {}, money {:.0}",
        ledger.friendship(),
        ledger.friendship_ceiling(),
        ledger.money()
    );
}
