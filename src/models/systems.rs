//! Model load request and completion systems

use bevy::asset::{AssetLoadError, LoadState, RecursiveDependencyLoadState};
use bevy::prelude::*;
use std::sync::Arc;

use crate::models::resources::{ModelSlot, PendingModel, PendingModels, SceneSlots};
use crate::orbital::Spin;
use crate::rocket::Rocket;
use crate::satellite::Satellite;
use crate::scene::SceneConfig;
use crate::scene::config::SpinConfig;

/// Startup system that requests every scene model from the asset server
pub fn request_model_loads(
    asset_server: Res<AssetServer>,
    config: Res<SceneConfig>,
    mut pending: ResMut<PendingModels>,
) {
    for slot in ModelSlot::ALL {
        let path = slot.asset_path(&config.assets).to_string();
        let handle = asset_server.load(GltfAssetLabel::Scene(0).from_asset(path));
        pending.0.push(PendingModel { slot, handle });
    }
}

/// System to place models whose loads finished since the last tick.
///
/// Each slot is filled once. Failed loads are logged and dropped, leaving
/// their slot empty for the rest of the session.
pub fn finish_model_loads(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<SceneConfig>,
    mut pending: ResMut<PendingModels>,
    mut slots: ResMut<SceneSlots>,
) {
    if pending.0.is_empty() {
        return;
    }

    pending.0.retain(|model| {
        let id = model.handle.id();
        let progress = load_progress(
            asset_server.is_loaded_with_dependencies(id),
            asset_server.get_load_state(id),
            asset_server.get_recursive_dependency_load_state(id),
        );
        match progress {
            LoadProgress::Ready => {
                let entity =
                    place_model(&mut commands, model.slot, model.handle.clone(), &config.spin);
                if slots.fill(model.slot, entity) {
                    info!("{} loaded", model.slot.label());
                } else {
                    warn!("{} loaded twice; keeping the first instance", model.slot.label());
                    commands.entity(entity).despawn();
                }
                false
            }
            LoadProgress::Failed(err) => {
                warn!("Failed to load {}: {}", model.slot.label(), err);
                false
            }
            LoadProgress::Pending => true,
        }
    });
}

/// Where a pending model stands this tick
#[derive(Debug)]
enum LoadProgress {
    Ready,
    Failed(Arc<AssetLoadError>),
    Pending,
}

/// A glTF counts as failed if it or any of its dependencies failed
fn load_progress(
    loaded_with_dependencies: bool,
    state: Option<LoadState>,
    dependencies: Option<RecursiveDependencyLoadState>,
) -> LoadProgress {
    if loaded_with_dependencies {
        return LoadProgress::Ready;
    }
    if let Some(LoadState::Failed(err)) = state {
        return LoadProgress::Failed(err);
    }
    if let Some(RecursiveDependencyLoadState::Failed(err)) = dependencies {
        return LoadProgress::Failed(err);
    }
    LoadProgress::Pending
}

/// Spawn a loaded scene with its placement and per-slot components
fn place_model(
    commands: &mut Commands,
    slot: ModelSlot,
    handle: Handle<Scene>,
    spin: &SpinConfig,
) -> Entity {
    let mut entity = commands.spawn((SceneRoot(handle), slot.placement(), Name::new(slot.label())));
    if let Some(rate) = slot.spin_rate(spin) {
        entity.insert(Spin::new(rate));
    }
    match slot {
        ModelSlot::Rocket => {
            entity.insert(Rocket);
        }
        ModelSlot::Satellite => {
            entity.insert(Satellite);
        }
        _ => {}
    }
    entity.id()
}
