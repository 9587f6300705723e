//! Comet and spinning-body systems

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::bodies::components::{Comet, Trail};
use crate::orbital::{OrbitingBody, Spin};
use crate::scene::SceneConfig;

/// Startup system that spawns the comets with empty trails
pub fn spawn_comets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SceneConfig>,
) {
    let cfg = &config.comets;
    let mesh = meshes.add(Sphere::new(0.2).mesh().uv(16, 16));
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    for i in 0..cfg.count {
        let body = OrbitingBody::new(
            i as f32 * FRAC_PI_2,
            cfg.base_radius + i as f32 * cfg.radius_step,
            cfg.base_speed + i as f32 * cfg.speed_step,
        );
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(body.position()),
            Comet,
            body,
            Trail::with_capacity(cfg.trail_capacity),
            Name::new(format!("Comet {i}")),
        ));
    }
}

/// System to advance comet angles and record the new position in each trail
pub fn advance_comets(
    mut comets: Query<(&mut OrbitingBody, &mut Trail, &mut Transform), With<Comet>>,
) {
    for (mut body, mut trail, mut transform) in comets.iter_mut() {
        let position = body.advance();
        transform.translation = position;
        trail.push(position);
    }
}

/// System to advance every loaded spinning body by its per-tick rate.
///
/// Models that are still loading carry no `Spin` yet, so they are skipped.
pub fn spin_bodies(mut bodies: Query<(&mut Spin, &mut Transform)>) {
    for (mut spin, mut transform) in bodies.iter_mut() {
        spin.advance();
        transform.rotation = spin.rotation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbital::comet_position;

    fn comet_app() -> App {
        let mut app = App::new();
        app.add_systems(Update, advance_comets);
        app
    }

    #[test]
    fn test_comet_trail_reaches_capacity_after_100_ticks() {
        let mut app = comet_app();
        let comet = app
            .world_mut()
            .spawn((
                Comet,
                OrbitingBody::new(0.0, 12.0, 0.01),
                Trail::with_capacity(60),
                Transform::default(),
            ))
            .id();

        for _ in 0..100 {
            app.update();
            let trail = app.world().get::<Trail>(comet).unwrap();
            assert!(trail.len() <= 60);
        }
        assert_eq!(app.world().get::<Trail>(comet).unwrap().len(), 60);
    }

    #[test]
    fn test_comet_transform_matches_newest_trail_point() {
        let mut app = comet_app();
        let comet = app
            .world_mut()
            .spawn((
                Comet,
                OrbitingBody::new(FRAC_PI_2, 15.0, 0.015),
                Trail::with_capacity(60),
                Transform::default(),
            ))
            .id();

        app.update();
        let world = app.world();
        let body = world.get::<OrbitingBody>(comet).unwrap();
        let translation = world.get::<Transform>(comet).unwrap().translation;
        assert_eq!(world.get::<Trail>(comet).unwrap().newest(), Some(translation));
        assert!((translation - comet_position(FRAC_PI_2 + 0.015, 15.0)).length() < 1e-5);
        assert!((body.angle - (FRAC_PI_2 + 0.015)).abs() < 1e-6);
    }

    #[test]
    fn test_spin_accumulates_per_tick_regardless_of_elapsed_time() {
        let mut app = App::new();
        app.add_systems(Update, spin_bodies);
        let body = app
            .world_mut()
            .spawn((Spin::new(0.001), Transform::default()))
            .id();

        for _ in 0..250 {
            app.update();
        }
        let spin = app.world().get::<Spin>(body).unwrap();
        assert!((spin.angle - 0.25).abs() < 1e-4);
        let rotation = app.world().get::<Transform>(body).unwrap().rotation;
        assert!(rotation.angle_between(Quat::from_rotation_y(0.25)) < 1e-3);
    }

    #[test]
    fn test_unloaded_bodies_are_ignored() {
        let mut app = App::new();
        app.add_systems(Update, spin_bodies);
        let placeholder = app.world_mut().spawn(Transform::default()).id();
        app.update();
        assert_eq!(
            app.world().get::<Transform>(placeholder).unwrap().rotation,
            Quat::IDENTITY
        );
    }
}
