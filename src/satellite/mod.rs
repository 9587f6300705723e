//! Satellite module
//!
//! The satellite circles the scene on a closed-form function of wall-clock
//! time while its self-spin is integrated per tick like the other bodies.

use bevy::prelude::*;

use crate::scene::SceneSet;

pub mod components;
pub mod systems;

pub use components::{Satellite, SatelliteLight};
pub use systems::orbit_satellite;

/// Plugin for the satellite orbit
pub struct SatellitePlugin;

impl Plugin for SatellitePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, orbit_satellite.in_set(SceneSet::Simulate));
    }
}
