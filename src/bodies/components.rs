//! Comet components

use bevy::prelude::*;
use std::collections::VecDeque;

/// Component marker for comet entities
#[derive(Component)]
pub struct Comet;

/// Sliding window of a comet's most recent positions
#[derive(Component, Debug, Clone)]
pub struct Trail {
    points: VecDeque<Vec3>,
    capacity: usize,
}

impl Trail {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Push the newest point, evicting the oldest once over capacity
    pub fn push(&mut self, point: Vec3) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Oldest to newest
    pub fn points(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.points.iter().copied()
    }

    pub fn newest(&self) -> Option<Vec3> {
        self.points.back().copied()
    }
}
