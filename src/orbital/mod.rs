//! Orbital motion module
//!
//! Motion rules for orbiting and spinning bodies, and the frame clock the
//! time-based orbits read from.

use bevy::prelude::*;

use crate::scene::SceneSet;

pub mod motion;
pub mod time;

pub use motion::{OrbitingBody, Spin, comet_position, satellite_position};
pub use time::{FrameClock, sample_frame_clock};

/// Plugin for the frame clock
pub struct OrbitalPlugin;

impl Plugin for OrbitalPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameClock>()
            .add_systems(Update, sample_frame_clock.in_set(SceneSet::Load));
    }
}
