//! Frame clock

use bevy::prelude::*;
use chrono::Utc;

/// Wall-clock sample taken once per frame, plus a tick counter
#[derive(Resource, Default)]
pub struct FrameClock {
    /// Seconds since the Unix epoch at the start of this frame
    pub wall_seconds: f64,
    pub ticks: u64,
}

/// System to sample wall-clock time at the start of each tick
pub fn sample_frame_clock(mut clock: ResMut<FrameClock>) {
    clock.wall_seconds = Utc::now().timestamp_millis() as f64 * 0.001;
    clock.ticks += 1;
}
