//! Orient-then-travel approach sequences driven by accumulated frame time.
use std::f32::consts::PI;

use bevy::prelude::*;

use crate::core::config::MotionConfig;

/// Current phase of an [`ApproachSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApproachPhase {
    Orienting,
    Travelling,
    Arrived,
}

/// Two-phase movement of an actor towards a point on the ground plane.
///
/// The orient phase begins the moment the sequence is constructed: the actor
/// turns to face the target over a fixed duration, then travels in a straight
/// line at constant speed so travel time scales with distance. Movement is
/// planar; the actor keeps its own height.
#[derive(Debug, Clone)]
pub struct ApproachSequence {
    phase: ApproachPhase,
    elapsed: f32,
    from_rotation: Quat,
    to_rotation: Quat,
    origin: Vec3,
    destination: Vec3,
    orient_seconds: f32,
    travel_seconds: f32,
}

impl ApproachSequence {
    pub fn begin(actor: &Transform, target: Vec3, config: &MotionConfig) -> Self {
        let origin = actor.translation;
        let destination = Vec3::new(target.x, origin.y, target.z);
        let distance = planar_distance(origin, target);

        let to_rotation = if distance > f32::EPSILON {
            Quat::from_rotation_y(planar_bearing(origin, target))
        } else {
            actor.rotation
        };

        Self {
            phase: ApproachPhase::Orienting,
            elapsed: 0.0,
            from_rotation: actor.rotation,
            to_rotation,
            origin,
            destination,
            orient_seconds: config.orient_seconds,
            travel_seconds: distance / config.travel_speed,
        }
    }

    pub fn phase(&self) -> ApproachPhase {
        self.phase
    }

    pub fn travel_seconds(&self) -> f32 {
        self.travel_seconds
    }

    /// Advances the sequence by `dt` seconds and writes the interpolated pose
    /// into `transform`. Returns `true` on the frame the actor arrives.
    ///
    /// Time left over when the orient phase completes carries into travel, but
    /// travel never starts before the rotation has finished.
    pub fn advance(&mut self, dt: f32, transform: &mut Transform) -> bool {
        if self.phase == ApproachPhase::Arrived {
            return false;
        }

        let mut remaining = dt.max(0.0);

        if self.phase == ApproachPhase::Orienting {
            self.elapsed += remaining;
            let t = fraction(self.elapsed, self.orient_seconds);
            transform.rotation = self.from_rotation.slerp(self.to_rotation, t);
            if self.elapsed < self.orient_seconds {
                return false;
            }
            transform.rotation = self.to_rotation;
            remaining = self.elapsed - self.orient_seconds;
            self.elapsed = 0.0;
            self.phase = ApproachPhase::Travelling;
        }

        self.elapsed += remaining;
        let t = fraction(self.elapsed, self.travel_seconds);
        transform.translation = self.origin.lerp(self.destination, t);
        if self.elapsed < self.travel_seconds {
            return false;
        }

        transform.translation = self.destination;
        self.phase = ApproachPhase::Arrived;
        true
    }
}

/// Distance between two points ignoring height.
pub fn planar_distance(from: Vec3, to: Vec3) -> f32 {
    Vec2::new(to.x - from.x, to.z - from.z).length()
}

/// Yaw about +Y that turns local +Z towards `to`, normalised to (-PI, PI].
pub fn planar_bearing(from: Vec3, to: Vec3) -> f32 {
    let bearing = (to.x - from.x).atan2(to.z - from.z);
    if bearing <= -PI {
        PI
    } else {
        bearing
    }
}

fn fraction(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        1.0
    } else {
        (elapsed / duration).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn config() -> MotionConfig {
        MotionConfig {
            orient_seconds: 1.0,
            travel_speed: 1.0,
        }
    }

    #[test]
    fn bearing_points_local_z_at_target() {
        let origin = Vec3::ZERO;
        assert!((planar_bearing(origin, Vec3::new(3.0, 0.0, 0.0)) - FRAC_PI_2).abs() < 1e-6);
        assert!(planar_bearing(origin, Vec3::new(0.0, 0.0, 2.0)).abs() < 1e-6);
        assert!((planar_bearing(origin, Vec3::new(-1.0, 0.0, 0.0)) + FRAC_PI_2).abs() < 1e-6);

        let behind = planar_bearing(origin, Vec3::new(-0.0, 0.0, -4.0));
        assert!(behind > 0.0 && (behind - PI).abs() < 1e-6);

        let facing = Quat::from_rotation_y(planar_bearing(origin, Vec3::new(3.0, 0.0, 0.0)));
        assert!((facing * Vec3::Z - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn orients_before_travelling() {
        let mut transform = Transform::default();
        let mut sequence = ApproachSequence::begin(&transform, Vec3::new(3.0, 0.0, 0.0), &config());

        assert_eq!(sequence.phase(), ApproachPhase::Orienting);
        assert!((sequence.travel_seconds() - 3.0).abs() < 1e-6);

        assert!(!sequence.advance(0.5, &mut transform));
        assert_eq!(transform.translation, Vec3::ZERO);
        assert!(transform.rotation.angle_between(Quat::IDENTITY) > 0.1);

        assert!(!sequence.advance(0.5, &mut transform));
        assert_eq!(sequence.phase(), ApproachPhase::Travelling);
        assert_eq!(transform.translation, Vec3::ZERO);
        assert!((transform.rotation * Vec3::Z - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn travel_time_equals_distance_at_unit_speed() {
        let mut transform = Transform::default();
        let mut sequence = ApproachSequence::begin(&transform, Vec3::new(3.0, 0.0, 0.0), &config());

        assert!(!sequence.advance(1.0, &mut transform));
        assert!(!sequence.advance(1.0, &mut transform));
        assert!((transform.translation.x - 1.0).abs() < 1e-5);
        assert!(!sequence.advance(1.0, &mut transform));
        assert!(sequence.advance(1.0, &mut transform));

        assert_eq!(sequence.phase(), ApproachPhase::Arrived);
        assert_eq!(transform.translation, Vec3::new(3.0, 0.0, 0.0));
        assert!(!sequence.advance(1.0, &mut transform));
    }

    #[test]
    fn keeps_actor_height_while_travelling() {
        let mut transform = Transform::from_xyz(1.0, 0.5, 1.0);
        let mut sequence = ApproachSequence::begin(&transform, Vec3::new(1.0, 0.0, 3.0), &config());

        assert!(sequence.advance(10.0, &mut transform));
        assert_eq!(transform.translation, Vec3::new(1.0, 0.5, 3.0));
    }

    #[test]
    fn zero_distance_arrives_once_oriented() {
        let start = Transform::from_rotation(Quat::from_rotation_y(0.7));
        let mut transform = start;
        let mut sequence = ApproachSequence::begin(&transform, Vec3::ZERO, &config());

        assert!(!sequence.advance(0.5, &mut transform));
        assert!(sequence.advance(0.5, &mut transform));
        assert!(transform.rotation.angle_between(start.rotation) < 1e-5);
    }

    #[test]
    fn faster_speed_shortens_travel() {
        let transform = Transform::default();
        let sequence = ApproachSequence::begin(
            &transform,
            Vec3::new(0.0, 0.0, 4.0),
            &MotionConfig {
                orient_seconds: 1.0,
                travel_speed: 2.0,
            },
        );
        assert!((sequence.travel_seconds() - 2.0).abs() < 1e-6);
    }
}
