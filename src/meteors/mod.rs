//! Meteor shower module
//!
//! Each tick may spawn one meteor above the scene; live meteors fall at a
//! constant rate and are removed once they pass the floor.

use bevy::prelude::*;

use crate::scene::SceneSet;

pub mod components;
pub mod systems;

pub use components::Meteor;
pub use systems::{advance_meteors, prune_meteors, spawn_meteors};

/// Plugin for the meteor shower
pub struct MeteorPlugin;

impl Plugin for MeteorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (spawn_meteors, advance_meteors, prune_meteors)
                .chain()
                .in_set(SceneSet::Simulate),
        );
    }
}
