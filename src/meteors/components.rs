//! Meteor components

use bevy::prelude::*;
use rand::Rng;

use crate::scene::config::MeteorConfig;

/// A falling meteor; the transform mirrors `position` every tick
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Meteor {
    pub position: Vec3,
    /// Displacement per tick
    pub velocity: Vec3,
}

impl Meteor {
    /// A fresh meteor at a random point of the spawn square, falling straight down
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &MeteorConfig) -> Self {
        let half = config.spawn_half_extent;
        let x = if half > 0.0 { rng.gen_range(-half..half) } else { 0.0 };
        let z = if half > 0.0 { rng.gen_range(-half..half) } else { 0.0 };
        Self {
            position: Vec3::new(x, config.spawn_altitude, z),
            velocity: Vec3::new(0.0, -config.fall_speed, 0.0),
        }
    }

    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    /// True once the meteor has fallen to or below `floor`
    pub fn expired(&self, floor: f32) -> bool {
        self.position.y <= floor
    }
}

/// One Bernoulli trial for this tick's spawn
pub fn should_spawn<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    rng.gen_bool(probability)
}
