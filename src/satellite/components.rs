//! Satellite components

use bevy::prelude::*;

/// Component marker for the loaded satellite model
#[derive(Component)]
pub struct Satellite;

/// Component marker for the point light that follows the satellite
#[derive(Component)]
pub struct SatelliteLight;
