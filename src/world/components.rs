//! Components used by the world module.
use bevy::prelude::*;

/// Camera that orbits a focus point, storing its spherical coordinates.
#[derive(Component, Debug, Clone)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub radius: f32,
    pub yaw: f32,
    /// Negative values look down at the focus.
    pub pitch: f32,
    pub sensitivity: f32,
}

impl OrbitCamera {
    /// Derives orbit coordinates from a camera position looking at `focus`.
    pub fn looking_from(position: Vec3, focus: Vec3, sensitivity: f32) -> Self {
        let offset = position - focus;
        let radius = offset.length().max(0.1);
        Self {
            focus,
            radius,
            yaw: offset.x.atan2(offset.z),
            pitch: -(offset.y / radius).clamp(-1.0, 1.0).asin(),
            sensitivity,
        }
    }

    pub fn rotation(&self) -> Quat {
        (Quat::from_axis_angle(Vec3::Y, self.yaw) * Quat::from_axis_angle(Vec3::X, self.pitch))
            .normalize()
    }

    pub fn transform(&self) -> Transform {
        let rotation = self.rotation();
        Transform::from_translation(self.focus + rotation * Vec3::new(0.0, 0.0, self.radius))
            .with_rotation(rotation)
    }
}
