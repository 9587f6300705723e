// Animated space scene: skybox, stars, glTF bodies, comets, meteors, and a
// rocket that flies to wherever you click.

use bevy::prelude::*;
use bevy::render::RenderPlugin;
use bevy::render::settings::{RenderCreation, WgpuSettings};
use bevy::window::{PresentMode, Window, WindowPlugin};
use bevy_panorbit_camera::PanOrbitCameraPlugin;

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod bodies;
mod meteors;
mod models;
mod orbital;
mod rocket;
mod satellite;
mod scene;
mod visualization;

use bodies::BodiesPlugin;
use meteors::MeteorPlugin;
use models::ModelsPlugin;
use orbital::OrbitalPlugin;
use rocket::RocketPlugin;
use satellite::SatellitePlugin;
use scene::{SceneConfig, ScenePlugin};
use visualization::VisualizationPlugin;

fn main() {
    // Logging is not up yet, so config problems go straight to stderr.
    let config = SceneConfig::load().unwrap_or_else(|err| {
        eprintln!("[CONFIG] {err:#}; using defaults");
        SceneConfig::default()
    });

    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Bevy Cosmos".to_string(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(RenderPlugin {
                render_creation: RenderCreation::Automatic(WgpuSettings { ..default() }),
                ..default()
            }),
    );

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    app.add_plugins(PanOrbitCameraPlugin);

    app.add_plugins(ScenePlugin { config });
    app.add_plugins(OrbitalPlugin);
    app.add_plugins(ModelsPlugin);
    app.add_plugins(BodiesPlugin);
    app.add_plugins(SatellitePlugin);
    app.add_plugins(RocketPlugin);
    app.add_plugins(MeteorPlugin);
    app.add_plugins(VisualizationPlugin);

    app.run();
}
