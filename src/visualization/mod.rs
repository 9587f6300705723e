//! Visualization module
//!
//! Camera, lights, skybox, star field, and the render-side dressing for
//! simulation entities (meteor meshes, comet trails).

use bevy::prelude::*;

use crate::scene::SceneSet;

pub mod camera;
pub mod lighting;
pub mod meteors;
pub mod skybox;
pub mod stars;
pub mod trails;

pub use camera::{MainCamera, spawn_main_camera};
pub use lighting::setup_lights;
pub use meteors::{MeteorAssets, dress_new_meteors, prepare_meteor_assets};
pub use skybox::SkyboxPlugin;
pub use stars::spawn_star_field;
pub use trails::draw_comet_trails;

/// Plugin for visualization systems
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(SkyboxPlugin)
            .add_systems(
                Startup,
                (
                    spawn_main_camera,
                    setup_lights,
                    spawn_star_field,
                    prepare_meteor_assets,
                ),
            )
            .add_systems(
                Update,
                (dress_new_meteors, draw_comet_trails).in_set(SceneSet::Present),
            );
    }
}
