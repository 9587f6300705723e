//! Rocket steering and click targeting systems

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::models::SceneSlots;
use crate::rocket::components::{Rocket, RocketLight};
use crate::rocket::picking::{click_target, pointer_to_ndc};
use crate::rocket::pilot::{RocketPilot, RocketStep};
use crate::scene::SceneConfig;
use crate::visualization::MainCamera;

/// System to move the rocket one step along its current path.
///
/// Queued targets are held until the rocket model has loaded.
pub fn steer_rocket(
    slots: Res<SceneSlots>,
    mut pilot: ResMut<RocketPilot>,
    mut rockets: Query<&mut Transform, With<Rocket>>,
    mut lights: Query<&mut Transform, (With<RocketLight>, Without<Rocket>)>,
) {
    if pilot.is_idle() {
        return;
    }
    let Some(entity) = slots.rocket else {
        return;
    };
    let Ok(mut transform) = rockets.get_mut(entity) else {
        return;
    };

    match pilot.step(transform.translation) {
        RocketStep::Idle => {}
        RocketStep::Advanced { position, target } => {
            transform.translation = position;
            // glTF models face +Z, so point the back (-Z) away from the target.
            transform.look_to(position - target, Vec3::Y);
            for mut light in lights.iter_mut() {
                light.translation = position;
            }
        }
        RocketStep::Arrived { target } => {
            debug!("Rocket arrived at {target}");
        }
    }
}

/// System to turn a left-click into a rocket target 20 units along the pick ray
pub fn enqueue_click_target(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    config: Res<SceneConfig>,
    mut pilot: ResMut<RocketPilot>,
) {
    if !buttons.just_released(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Some(ndc) = pointer_to_ndc(cursor, window.size()) else {
        return;
    };

    let world_from_view = Mat4::from(camera_transform.affine());
    if let Some(point) = click_target(
        ndc,
        camera.clip_from_view(),
        world_from_view,
        config.rocket.click_distance,
    ) {
        pilot.enqueue(point);
        info!("Rocket target queued at {point} ({} pending)", pilot.queued());
    }
}
