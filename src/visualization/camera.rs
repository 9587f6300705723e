//! Main camera

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::scene::SceneConfig;

/// Component marker for the main scene camera
#[derive(Component)]
pub struct MainCamera;

/// Spawn the perspective camera with orbit controls around the origin
pub fn spawn_main_camera(mut commands: Commands, config: Res<SceneConfig>) {
    let cfg = &config.camera;
    let position = Vec3::from_array(cfg.position);

    let pan_orbit = PanOrbitCamera {
        focus: Vec3::ZERO,
        force_update: true,
        ..default()
    };

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: cfg.fov_degrees.to_radians(),
            near: cfg.near,
            far: cfg.far,
            ..default()
        }),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        pan_orbit,
        MainCamera,
        Tonemapping::TonyMcMapface,
        Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Main Camera"),
    ));
}
