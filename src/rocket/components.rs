//! Rocket components

use bevy::prelude::*;

/// Component marker for the loaded rocket model
#[derive(Component)]
pub struct Rocket;

/// Component marker for the point light that trails the rocket
#[derive(Component)]
pub struct RocketLight;
