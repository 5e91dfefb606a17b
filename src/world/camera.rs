//! Orbit camera input and the switch that freezes it.
use bevy::{
    ecs::message::MessageReader,
    input::{mouse::MouseMotion, ButtonInput},
    prelude::*,
};

use crate::{core::config::PetConfig, world::components::OrbitCamera};

/// Enable switch for ambient orbit input. Petting turns it off.
#[derive(Resource, Debug, Clone)]
pub struct OrbitControl {
    enabled: bool,
}

impl OrbitControl {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }
}

impl Default for OrbitControl {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Orbits the camera around its focus while the left button is dragged.
pub fn orbit_camera(
    mut motion_events: MessageReader<MouseMotion>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    control: Res<OrbitControl>,
    config: Res<PetConfig>,
    mut query: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let mut cumulative_delta = Vec2::ZERO;
    for ev in motion_events.read() {
        cumulative_delta += ev.delta;
    }

    if !control.is_enabled() || !mouse_buttons.pressed(MouseButton::Left) {
        return;
    }
    if cumulative_delta == Vec2::ZERO {
        return;
    }

    if let Ok((mut orbit, mut transform)) = query.single_mut() {
        apply_orbit_drag(&mut orbit, cumulative_delta, &config);
        *transform = orbit.transform();
    }
}

fn apply_orbit_drag(orbit: &mut OrbitCamera, delta: Vec2, config: &PetConfig) {
    orbit.yaw -= delta.x * orbit.sensitivity;
    orbit.pitch = (orbit.pitch - delta.y * orbit.sensitivity)
        .clamp(config.camera.min_pitch, config.camera.max_pitch);
}
