//! Readiness tracking for entities whose visuals load asynchronously.
use bevy::prelude::*;

/// Where an entity's visual comes from.
#[derive(Component, Debug, Clone)]
pub enum ModelSource {
    /// Built from engine primitives; available immediately.
    Primitive,
    /// A glTF scene resolved by the asset server.
    Scene(Handle<Scene>),
}

/// Snapshot of an asset load as reported by the asset server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadProgress {
    Loading,
    Loaded,
    Failed(String),
}

/// Pending → Ready | Failed. Both end states are terminal.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Readiness {
    #[default]
    Pending,
    Ready,
    Failed,
}

impl Readiness {
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Applies a load observation and returns the new state when it changed.
    pub fn observe(&mut self, progress: &LoadProgress) -> Option<Readiness> {
        if *self != Self::Pending {
            return None;
        }
        let next = match progress {
            LoadProgress::Loading => return None,
            LoadProgress::Loaded => Self::Ready,
            LoadProgress::Failed(_) => Self::Failed,
        };
        *self = next;
        Some(next)
    }
}
