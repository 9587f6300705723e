//! Comets and spinning bodies
//!
//! Comets orbit on incrementally integrated angles and record their recent
//! positions; loaded models with a `Spin` rotate in place every tick.

use bevy::prelude::*;

use crate::scene::SceneSet;

pub mod components;
pub mod systems;

pub use components::{Comet, Trail};
pub use systems::{advance_comets, spawn_comets, spin_bodies};

/// Plugin for comets and rotation-only bodies
pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_comets).add_systems(
            Update,
            (spin_bodies, advance_comets).in_set(SceneSet::Simulate),
        );
    }
}
