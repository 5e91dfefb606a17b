//! Analytic ray picking against named scene shapes.
use bevy::prelude::*;

const PARALLEL_EPSILON: f32 = 1e-6;

/// Local-space shape tested by the picker. Hidden entities are still tested.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum PickShape {
    Sphere { offset: Vec3, radius: f32 },
    /// Rectangle through the local origin with normal +Y, spanning X and Z.
    /// Only its front face is pickable, matching the culled mesh.
    Plane { half_size: Vec2 },
}

/// Scene objects the controller knows how to dispatch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    Slime,
    Floor,
}

impl PickTarget {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "slime" => Some(Self::Slime),
            "floor" => Some(Self::Floor),
            _ => None,
        }
    }
}

/// Nearest intersection along a pointer ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub entity: Entity,
    /// `None` when the nearest object has no recognised name.
    pub target: Option<PickTarget>,
    pub point: Vec3,
    pub distance: f32,
}

impl PickShape {
    /// Distance along `ray` to the first hit, if any.
    ///
    /// The ray is moved into the shape's local frame without renormalising its
    /// direction, so the returned parameter is already a world-space distance.
    pub fn intersect(&self, ray: Ray3d, transform: &GlobalTransform) -> Option<f32> {
        let to_local = transform.affine().inverse();
        let origin = to_local.transform_point3(ray.origin);
        let direction = to_local.transform_vector3(*ray.direction);

        match *self {
            Self::Sphere { offset, radius } => {
                let from_centre = origin - offset;
                let a = direction.length_squared();
                if a < PARALLEL_EPSILON {
                    return None;
                }
                let b = 2.0 * from_centre.dot(direction);
                let c = from_centre.length_squared() - radius * radius;
                let discriminant = b * b - 4.0 * a * c;
                if discriminant < 0.0 {
                    return None;
                }
                let root = discriminant.sqrt();
                let near = (-b - root) / (2.0 * a);
                let far = (-b + root) / (2.0 * a);
                if near >= 0.0 {
                    Some(near)
                } else if far >= 0.0 {
                    Some(far)
                } else {
                    None
                }
            }
            Self::Plane { half_size } => {
                if direction.y > -PARALLEL_EPSILON {
                    return None;
                }
                let t = -origin.y / direction.y;
                if t < 0.0 {
                    return None;
                }
                let local = origin + direction * t;
                (local.x.abs() <= half_size.x && local.z.abs() <= half_size.y).then_some(t)
            }
        }
    }
}

/// Returns the closest shape hit by `ray` among `candidates`.
pub fn pick_nearest<'a>(
    ray: Ray3d,
    candidates: impl IntoIterator<Item = (Entity, &'a PickShape, &'a GlobalTransform, Option<&'a Name>)>,
) -> Option<PickHit> {
    candidates
        .into_iter()
        .filter_map(|(entity, shape, transform, name)| {
            shape.intersect(ray, transform).map(|distance| PickHit {
                entity,
                target: name.and_then(|name| PickTarget::from_name(name.as_str())),
                point: ray.get_point(distance),
                distance,
            })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}
