//! Meteor shower systems

use bevy::prelude::*;

use crate::meteors::components::{Meteor, should_spawn};
use crate::scene::{SceneConfig, SceneRng};

/// System to roll for a new meteor this tick
pub fn spawn_meteors(mut commands: Commands, mut rng: ResMut<SceneRng>, config: Res<SceneConfig>) {
    let cfg = &config.meteors;
    if !should_spawn(&mut **rng, cfg.spawn_probability) {
        return;
    }
    let meteor = Meteor::spawn(&mut **rng, cfg);
    commands.spawn((
        meteor,
        Transform::from_translation(meteor.position),
        Name::new("Meteor"),
    ));
}

/// System to integrate every live meteor by its velocity
pub fn advance_meteors(mut meteors: Query<(&mut Meteor, &mut Transform)>) {
    for (mut meteor, mut transform) in meteors.iter_mut() {
        meteor.advance();
        transform.translation = meteor.position;
    }
}

/// System to despawn meteors that have fallen through the floor
pub fn prune_meteors(
    mut commands: Commands,
    config: Res<SceneConfig>,
    meteors: Query<(Entity, &Meteor)>,
) {
    for (entity, meteor) in meteors.iter() {
        if meteor.expired(config.meteors.floor) {
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meteor_app(config: SceneConfig) -> App {
        let mut app = App::new();
        app.insert_resource(config)
            .insert_resource(SceneRng::seeded(1234))
            .add_systems(Update, (spawn_meteors, advance_meteors, prune_meteors).chain());
        app
    }

    fn live_meteors(app: &mut App) -> Vec<Meteor> {
        let mut query = app.world_mut().query::<&Meteor>();
        query.iter(app.world()).copied().collect()
    }

    #[test]
    fn test_live_meteors_stay_above_floor() {
        let mut app = meteor_app(SceneConfig::default());
        let mut seen_any = false;
        for _ in 0..2000 {
            app.update();
            let meteors = live_meteors(&mut app);
            seen_any |= !meteors.is_empty();
            assert!(meteors.iter().all(|m| m.position.y > -10.0));
        }
        assert!(seen_any);
    }

    #[test]
    fn test_meteor_lifecycle() {
        let mut config = SceneConfig::default();
        config.meteors.spawn_probability = 1.0;
        // Exactly representable step so the floor crossing tick is exact
        config.meteors.fall_speed = 0.25;
        let mut app = meteor_app(config);

        app.update();
        let meteors = live_meteors(&mut app);
        assert_eq!(meteors.len(), 1);
        // Spawned and advanced within the same tick
        assert_eq!(meteors[0].position.y, 9.75);

        // From y = 10 at 0.25 per tick a meteor reaches the floor on its 80th tick,
        // so the population stops growing at 79.
        for _ in 0..150 {
            app.update();
        }
        assert_eq!(live_meteors(&mut app).len(), 79);
    }

    #[test]
    fn test_no_spawns_at_zero_probability() {
        let mut config = SceneConfig::default();
        config.meteors.spawn_probability = 0.0;
        let mut app = meteor_app(config);
        for _ in 0..100 {
            app.update();
        }
        assert!(live_meteors(&mut app).is_empty());
    }
}
