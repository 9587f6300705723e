//! Closed-form and incremental motion rules for scene bodies

use bevy::prelude::*;
use std::f32::consts::TAU;

/// Circular orbit parameters integrated one step per tick
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct OrbitingBody {
    /// Current angle in radians, kept within [0, 2π)
    pub angle: f32,
    pub radius: f32,
    /// Radians per tick
    pub speed: f32,
}

impl OrbitingBody {
    pub fn new(angle: f32, radius: f32, speed: f32) -> Self {
        Self {
            angle: angle.rem_euclid(TAU),
            radius,
            speed,
        }
    }

    /// Advance one tick and return the new comet position
    pub fn advance(&mut self) -> Vec3 {
        self.angle = (self.angle + self.speed).rem_euclid(TAU);
        self.position()
    }

    pub fn position(&self) -> Vec3 {
        comet_position(self.angle, self.radius)
    }
}

/// Comet path: a flat circle with a slow vertical bob at half the orbital rate
pub fn comet_position(angle: f32, radius: f32) -> Vec3 {
    Vec3::new(
        angle.cos() * radius,
        (angle * 0.5).sin() * 2.0 + 2.0,
        angle.sin() * radius,
    )
}

/// Satellite position as a pure function of wall-clock seconds.
///
/// Evaluated in f64 since epoch seconds lose all sub-second precision in f32.
pub fn satellite_position(wall_seconds: f64, radius: f32, altitude: f32) -> Vec3 {
    let r = radius as f64;
    Vec3::new(
        (wall_seconds.sin() * r) as f32,
        altitude,
        (wall_seconds.cos() * r) as f32,
    )
}

/// Accumulated self-rotation about the Y axis
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    /// Accumulated angle in radians, kept within [0, 2π)
    pub angle: f32,
    /// Radians per tick
    pub rate: f32,
}

impl Spin {
    pub fn new(rate: f32) -> Self {
        Self { angle: 0.0, rate }
    }

    pub fn advance(&mut self) {
        self.angle = (self.angle + self.rate).rem_euclid(TAU);
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.angle)
    }
}
