//! Satellite orbit system

use bevy::prelude::*;

use crate::models::SceneSlots;
use crate::orbital::{FrameClock, satellite_position};
use crate::satellite::components::{Satellite, SatelliteLight};
use crate::scene::SceneConfig;

/// System to place the satellite on its wall-clock orbit and drag its light along.
///
/// Self-spin is handled separately by the shared spin system.
pub fn orbit_satellite(
    slots: Res<SceneSlots>,
    clock: Res<FrameClock>,
    config: Res<SceneConfig>,
    mut satellites: Query<&mut Transform, With<Satellite>>,
    mut lights: Query<&mut Transform, (With<SatelliteLight>, Without<Satellite>)>,
) {
    let Some(entity) = slots.satellite else {
        return;
    };
    let Ok(mut transform) = satellites.get_mut(entity) else {
        return;
    };

    let position = satellite_position(
        clock.wall_seconds,
        config.satellite.orbit_radius,
        config.satellite.altitude,
    );
    transform.translation = position;

    for mut light in lights.iter_mut() {
        light.translation = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModelSlot;

    fn satellite_app(wall_seconds: f64) -> App {
        let mut app = App::new();
        app.insert_resource(SceneConfig::default())
            .insert_resource(FrameClock {
                wall_seconds,
                ticks: 0,
            })
            .init_resource::<SceneSlots>()
            .add_systems(Update, orbit_satellite);
        app
    }

    #[test]
    fn test_satellite_follows_wall_clock_orbit() {
        let t = 12.5;
        let mut app = satellite_app(t);
        let light = app
            .world_mut()
            .spawn((SatelliteLight, Transform::default()))
            .id();
        let sat = app
            .world_mut()
            .spawn((Satellite, Transform::default()))
            .id();
        app.world_mut()
            .resource_mut::<SceneSlots>()
            .fill(ModelSlot::Satellite, sat);

        app.update();

        let expected = satellite_position(t, 3.0, 2.0);
        let world = app.world();
        assert_eq!(world.get::<Transform>(sat).unwrap().translation, expected);
        assert_eq!(world.get::<Transform>(light).unwrap().translation, expected);
    }

    #[test]
    fn test_missing_satellite_is_skipped() {
        let mut app = satellite_app(1.0);
        let light = app
            .world_mut()
            .spawn((SatelliteLight, Transform::from_xyz(9.0, 9.0, 9.0)))
            .id();

        app.update();

        assert_eq!(
            app.world().get::<Transform>(light).unwrap().translation,
            Vec3::splat(9.0)
        );
    }
}
