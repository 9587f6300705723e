//! Rocket module
//!
//! Clicks in the viewport queue world-space targets; the rocket visits them
//! one at a time.

use bevy::prelude::*;

use crate::scene::SceneSet;

pub mod components;
pub mod picking;
pub mod pilot;
pub mod systems;

pub use components::{Rocket, RocketLight};
pub use pilot::{RocketPilot, RocketStep};
pub use systems::{enqueue_click_target, steer_rocket};

/// Plugin for rocket pathing and click targeting
pub struct RocketPlugin;

impl Plugin for RocketPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RocketPilot>().add_systems(
            Update,
            (
                enqueue_click_target.in_set(SceneSet::Load),
                steer_rocket.in_set(SceneSet::Simulate),
            ),
        );
    }
}
