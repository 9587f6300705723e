//! Scene plumbing
//!
//! Configuration, the shared RNG, and the per-frame system ordering every
//! other plugin hooks into.

use bevy::prelude::*;

pub mod config;
pub mod rng;

pub use config::SceneConfig;
pub use rng::SceneRng;

/// Per-frame ordering: asset completions land first, then the simulation
/// advances, then visuals are refreshed from simulation state.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum SceneSet {
    Load,
    Simulate,
    Present,
}

/// Plugin for configuration and system ordering
pub struct ScenePlugin {
    pub config: SceneConfig,
}

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(SceneRng::from_seed(self.config.seed))
            .configure_sets(
                Update,
                (SceneSet::Load, SceneSet::Simulate, SceneSet::Present).chain(),
            );
    }
}
