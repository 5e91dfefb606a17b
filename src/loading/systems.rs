//! Systems polling the asset server for model readiness.
use bevy::{
    asset::{LoadState, RecursiveDependencyLoadState},
    prelude::*,
};

use super::{
    components::{LoadProgress, ModelSource, Readiness},
    events::{ModelLoadFailed, ModelReady},
};

/// Promotes pending entities to ready or failed and announces the change once.
pub fn poll_model_readiness(
    asset_server: Res<AssetServer>,
    mut query: Query<(Entity, &ModelSource, &mut Readiness, Option<&Name>)>,
    mut ready: MessageWriter<ModelReady>,
    mut failed: MessageWriter<ModelLoadFailed>,
) {
    for (entity, source, mut readiness, name) in query.iter_mut() {
        if *readiness != Readiness::Pending {
            continue;
        }

        let progress = match source {
            ModelSource::Primitive => LoadProgress::Loaded,
            ModelSource::Scene(handle) => scene_progress(&asset_server, handle),
        };

        let label = name
            .map(|name| name.as_str().to_string())
            .unwrap_or_else(|| format!("{entity}"));

        match readiness.observe(&progress) {
            Some(Readiness::Ready) => {
                info!("Model ready: {}", label);
                ready.write(ModelReady {
                    entity,
                    name: label,
                });
            }
            Some(Readiness::Failed) => {
                let reason = match progress {
                    LoadProgress::Failed(reason) => reason,
                    _ => String::from("unknown"),
                };
                warn!("Model for {} failed to load ({}); it stays inactive", label, reason);
                failed.write(ModelLoadFailed {
                    entity,
                    name: label,
                    reason,
                });
            }
            _ => {}
        }
    }
}

fn scene_progress(asset_server: &AssetServer, handle: &Handle<Scene>) -> LoadProgress {
    let id = handle.id();
    if let Some(LoadState::Failed(err)) = asset_server.get_load_state(id) {
        return LoadProgress::Failed(err.to_string());
    }
    if let Some(RecursiveDependencyLoadState::Failed(err)) =
        asset_server.get_recursive_dependency_load_state(id)
    {
        return LoadProgress::Failed(err.to_string());
    }
    if asset_server.is_loaded_with_dependencies(id) {
        LoadProgress::Loaded
    } else {
        LoadProgress::Loading
    }
}
