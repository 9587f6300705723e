//! Model slots filled by asynchronous glTF loads

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::scene::config::{AssetPaths, SpinConfig};

/// The glTF models the scene requests at startup
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModelSlot {
    Swirl,
    BoomPlanet,
    Rocket,
    Satellite,
    SolarSystem,
}

impl ModelSlot {
    pub const ALL: [ModelSlot; 5] = [
        ModelSlot::Swirl,
        ModelSlot::BoomPlanet,
        ModelSlot::Rocket,
        ModelSlot::Satellite,
        ModelSlot::SolarSystem,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ModelSlot::Swirl => "Swirl Galaxy",
            ModelSlot::BoomPlanet => "Boom Planet",
            ModelSlot::Rocket => "Rocket",
            ModelSlot::Satellite => "Satellite",
            ModelSlot::SolarSystem => "Solar System",
        }
    }

    pub fn asset_path(self, paths: &AssetPaths) -> &str {
        match self {
            ModelSlot::Swirl => &paths.swirl,
            ModelSlot::BoomPlanet => &paths.boom_planet,
            ModelSlot::Rocket => &paths.rocket,
            ModelSlot::Satellite => &paths.satellite,
            ModelSlot::SolarSystem => &paths.solar_system,
        }
    }

    /// Initial transform applied when the model is placed in the scene
    pub fn placement(self) -> Transform {
        match self {
            ModelSlot::Swirl => Transform::from_xyz(0.0, -20.0, -50.0)
                .with_scale(Vec3::splat(10.0))
                .with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
            ModelSlot::BoomPlanet => {
                Transform::from_xyz(0.0, 5.0, 50.0).with_scale(Vec3::splat(1.5))
            }
            ModelSlot::Rocket => Transform::from_xyz(0.0, 0.0, 0.0).with_scale(Vec3::splat(0.2)),
            ModelSlot::Satellite => Transform::from_scale(Vec3::splat(0.5)),
            ModelSlot::SolarSystem => Transform::from_scale(Vec3::splat(3.0)),
        }
    }

    /// Self-rotation rate, if this model spins in place
    pub fn spin_rate(self, spin: &SpinConfig) -> Option<f32> {
        match self {
            ModelSlot::BoomPlanet => Some(spin.boom_planet),
            ModelSlot::Satellite => Some(spin.satellite),
            ModelSlot::SolarSystem => Some(spin.solar_system),
            ModelSlot::Swirl | ModelSlot::Rocket => None,
        }
    }
}

/// Optional entity per model; `None` until its load completes.
///
/// Systems must treat every slot as possibly empty on every tick.
#[derive(Resource, Default, Debug)]
pub struct SceneSlots {
    pub swirl: Option<Entity>,
    pub boom_planet: Option<Entity>,
    pub rocket: Option<Entity>,
    pub satellite: Option<Entity>,
    pub solar_system: Option<Entity>,
}

impl SceneSlots {
    #[cfg(test)]
    pub fn get(&self, slot: ModelSlot) -> Option<Entity> {
        match slot {
            ModelSlot::Swirl => self.swirl,
            ModelSlot::BoomPlanet => self.boom_planet,
            ModelSlot::Rocket => self.rocket,
            ModelSlot::Satellite => self.satellite,
            ModelSlot::SolarSystem => self.solar_system,
        }
    }

    /// Fill a slot. Returns false and leaves the slot untouched if it was already set.
    pub fn fill(&mut self, slot: ModelSlot, entity: Entity) -> bool {
        let target = match slot {
            ModelSlot::Swirl => &mut self.swirl,
            ModelSlot::BoomPlanet => &mut self.boom_planet,
            ModelSlot::Rocket => &mut self.rocket,
            ModelSlot::Satellite => &mut self.satellite,
            ModelSlot::SolarSystem => &mut self.solar_system,
        };
        if target.is_some() {
            return false;
        }
        *target = Some(entity);
        true
    }
}

/// A requested model whose load has not yet completed
pub struct PendingModel {
    pub slot: ModelSlot,
    pub handle: Handle<Scene>,
}

/// Loads still in flight
#[derive(Resource, Default)]
pub struct PendingModels(pub Vec<PendingModel>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_start_empty() {
        let slots = SceneSlots::default();
        for slot in ModelSlot::ALL {
            assert!(slots.get(slot).is_none());
        }
    }

    #[test]
    fn test_slot_is_filled_exactly_once() {
        let mut world = World::new();
        let first = world.spawn_empty().id();
        let second = world.spawn_empty().id();

        let mut slots = SceneSlots::default();
        assert!(slots.fill(ModelSlot::Rocket, first));
        assert!(!slots.fill(ModelSlot::Rocket, second));
        assert_eq!(slots.get(ModelSlot::Rocket), Some(first));
        assert!(slots.get(ModelSlot::Satellite).is_none());
    }

    #[test]
    fn test_only_bodies_spin() {
        let spin = SpinConfig::default();
        assert_eq!(ModelSlot::SolarSystem.spin_rate(&spin), Some(0.001));
        assert_eq!(ModelSlot::BoomPlanet.spin_rate(&spin), Some(0.005));
        assert_eq!(ModelSlot::Satellite.spin_rate(&spin), Some(0.01));
        assert_eq!(ModelSlot::Rocket.spin_rate(&spin), None);
        assert_eq!(ModelSlot::Swirl.spin_rate(&spin), None);
    }
}
