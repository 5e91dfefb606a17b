//! CorePlugin wires configuration, session timing and debug logging.
use bevy::prelude::*;
#[cfg(feature = "pet_debug")]
use bevy::time::TimerMode;
use std::time::Duration;

use super::config::PetConfig;

const MIN_TIME_SCALE: f32 = 0.001;

#[cfg(feature = "pet_debug")]
#[derive(Resource)]
struct DebugTickTimer {
    timer: Timer,
}

#[cfg(feature = "pet_debug")]
impl Default for DebugTickTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }
}

/// Scaled per-frame time shared by every timed behaviour in the room.
#[derive(Resource, Debug)]
pub struct SessionClock {
    time_scale: f32,
    last_delta: Duration,
    elapsed: Duration,
}

impl SessionClock {
    pub fn new(time_scale: f32) -> Self {
        Self {
            time_scale: time_scale.max(MIN_TIME_SCALE),
            last_delta: Duration::ZERO,
            elapsed: Duration::ZERO,
        }
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Scaled delta of the most recent frame, in seconds.
    pub fn delta_secs(&self) -> f32 {
        self.last_delta.as_secs_f32()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn tick(&mut self, real_delta: Duration) {
        self.last_delta = real_delta.mul_f32(self.time_scale);
        self.elapsed += self.last_delta;
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Registers configuration and the session clock.
#[derive(Debug, Clone)]
pub struct CorePlugin {
    config: PetConfig,
}

impl CorePlugin {
    pub fn new(config: PetConfig) -> Self {
        Self { config }
    }
}

impl Default for CorePlugin {
    fn default() -> Self {
        Self::new(PetConfig::load_or_default())
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(SessionClock::new(self.config.session.time_scale))
            .add_systems(Startup, log_startup_config)
            .add_systems(First, update_session_clock);

        #[cfg(feature = "pet_debug")]
        {
            app.insert_resource(DebugTickTimer::default())
                .add_systems(Last, log_session_state);
        }
    }
}

fn update_session_clock(mut clock: ResMut<SessionClock>, time: Res<Time>) {
    clock.tick(time.delta());
}

fn log_startup_config(clock: Res<SessionClock>, config: Res<PetConfig>) {
    info!(
        "CorePlugin initialised: time scale {:.3}, evolution at {} friendship, money {:.0}/{:.0}",
        clock.time_scale(),
        config.creature.evolution_threshold,
        config.ledger.starting_money,
        config.ledger.money_ceiling
    );
}

#[cfg(feature = "pet_debug")]
fn log_session_state(
    mut timer: ResMut<DebugTickTimer>,
    clock: Res<SessionClock>,
    ledger: Res<crate::economy::ResourceLedger>,
    slimes: Query<&crate::slime::Slime>,
) {
    if !timer.timer.tick(clock.last_delta).just_finished() {
        return;
    }
    for slime in slimes.iter() {
        info!(
            target: "pet_debug",
            "t={:.1}s | friendship {} | money {:.1} | scale {:.2} | {:?}/{:?} | meal {:?} | evolved {}",
            clock.elapsed().as_secs_f32(),
            ledger.friendship(),
            ledger.money(),
            slime.scale(),
            slime.activity(),
            slime.mood(),
            slime.meal(),
            slime.is_evolved(),
        );
    }
}
