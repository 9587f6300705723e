//! Comet trail rendering

use bevy::prelude::*;

use crate::bodies::{Comet, Trail};
use crate::scene::SceneConfig;
use crate::scene::config::rgb;

/// System to redraw each comet trail from its whole current window
pub fn draw_comet_trails(
    mut gizmos: Gizmos,
    config: Res<SceneConfig>,
    trails: Query<&Trail, With<Comet>>,
) {
    let color = rgb(config.comets.trail_color);
    for trail in trails.iter() {
        if trail.len() < 2 {
            continue;
        }
        gizmos.linestrip(trail.points(), color);
    }
}
