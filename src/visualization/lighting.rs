//! Scene lighting

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

use crate::rocket::RocketLight;
use crate::satellite::SatelliteLight;
use crate::scene::SceneConfig;
use crate::scene::config::rgb;

/// Spawn ambient, key and fill lights plus the point lights that follow the
/// rocket and the satellite
pub fn setup_lights(mut commands: Commands, config: Res<SceneConfig>) {
    let cfg = &config.lighting;

    commands.insert_resource(GlobalAmbientLight {
        brightness: cfg.ambient_brightness,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: cfg.key_illuminance,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(cfg.key_position))
            .looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Key Light"),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: cfg.fill_illuminance,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(cfg.fill_position))
            .looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Fill Light"),
    ));

    // Both follower lights start at the origin and are moved by their owners' systems.
    commands.spawn((
        PointLight {
            color: rgb(cfg.rocket_light_color),
            intensity: cfg.rocket_light_intensity,
            range: cfg.rocket_light_range,
            ..default()
        },
        Transform::default(),
        RocketLight,
        Name::new("Rocket Light"),
    ));
    commands.spawn((
        PointLight {
            color: rgb(cfg.satellite_light_color),
            intensity: cfg.satellite_light_intensity,
            range: cfg.satellite_light_range,
            ..default()
        },
        Transform::default(),
        SatelliteLight,
        Name::new("Satellite Light"),
    ));
}
