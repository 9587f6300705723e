//! Shared random source for stochastic scene elements

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Random number generator used by the meteor shower and the star field
#[derive(Resource, Deref, DerefMut)]
pub struct SceneRng(pub StdRng);

impl SceneRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Seed from `seed` if given, otherwise from OS entropy
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self(StdRng::from_entropy()),
        }
    }
}
