//! Systems keeping the ledger ticking.
use bevy::prelude::*;

use crate::core::plugin::SessionClock;

use super::ledger::ResourceLedger;

/// Regenerates money once per frame from the scaled frame delta.
pub fn regenerate_money(clock: Res<SessionClock>, mut ledger: ResMut<ResourceLedger>) {
    let dt = clock.delta_secs();
    if dt > 0.0 {
        ledger.tick_money_regen(dt);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::core::config::PetConfig;

    #[test]
    fn regenerates_from_session_clock() {
        let mut app = App::new();
        app.add_systems(Update, regenerate_money);

        let mut clock = SessionClock::new(2.0);
        clock.tick(Duration::from_secs(1));
        app.insert_resource(clock);
        app.insert_resource(ResourceLedger::new(&PetConfig::default().ledger));

        app.update();

        let ledger = app.world().resource::<ResourceLedger>();
        assert!((ledger.money() - 106.0).abs() < 1e-4);
    }
}
