//! Rocket pathing state machine
//!
//! Targets queue up in FIFO order. The rocket pursues one at a time at a
//! constant speed and goes idle once within the arrival epsilon.

use bevy::prelude::*;
use std::collections::VecDeque;

use crate::scene::SceneConfig;
use crate::scene::config::RocketConfig;

/// Outcome of one pathing tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RocketStep {
    /// No target and nothing queued
    Idle,
    /// Moved one step toward `target`
    Advanced { position: Vec3, target: Vec3 },
    /// Within epsilon of `target`; the target has been cleared
    Arrived { target: Vec3 },
}

/// Target queue and motion state for the rocket
#[derive(Resource, Debug, Clone)]
pub struct RocketPilot {
    queue: VecDeque<Vec3>,
    target: Option<Vec3>,
    speed: f32,
    arrival_epsilon: f32,
}

impl RocketPilot {
    pub fn new(config: &RocketConfig) -> Self {
        Self {
            queue: VecDeque::new(),
            target: None,
            speed: config.speed,
            arrival_epsilon: config.arrival_epsilon,
        }
    }

    pub fn enqueue(&mut self, point: Vec3) {
        self.queue.push_back(point);
    }

    pub fn target(&self) -> Option<Vec3> {
        self.target
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    #[cfg(test)]
    pub fn queued_targets(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.queue.iter().copied()
    }

    pub fn is_idle(&self) -> bool {
        self.target.is_none() && self.queue.is_empty()
    }

    /// Advance the state machine one tick from `position`
    pub fn step(&mut self, position: Vec3) -> RocketStep {
        if self.target.is_none() {
            self.target = self.queue.pop_front();
        }
        let Some(target) = self.target else {
            return RocketStep::Idle;
        };

        let to_target = target - position;
        if to_target.length() > self.arrival_epsilon {
            let position = position + to_target.normalize() * self.speed;
            RocketStep::Advanced { position, target }
        } else {
            self.target = None;
            RocketStep::Arrived { target }
        }
    }
}

impl FromWorld for RocketPilot {
    fn from_world(world: &mut World) -> Self {
        let config = world
            .get_resource::<SceneConfig>()
            .map(|c| c.rocket.clone())
            .unwrap_or_default();
        Self::new(&config)
    }
}
