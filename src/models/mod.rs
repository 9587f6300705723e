//! Model loading module
//!
//! Requests the glTF scenes at startup and drops each one into its slot
//! once the asset server reports it ready.

use bevy::prelude::*;

use crate::scene::SceneSet;

pub mod resources;
pub mod systems;

pub use resources::{ModelSlot, PendingModels, SceneSlots};
pub use systems::{finish_model_loads, request_model_loads};

/// Plugin for asynchronous model loading
pub struct ModelsPlugin;

impl Plugin for ModelsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneSlots>()
            .init_resource::<PendingModels>()
            .add_systems(Startup, request_model_loads)
            .add_systems(Update, finish_model_loads.in_set(SceneSet::Load));
    }
}
