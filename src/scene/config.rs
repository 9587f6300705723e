//! Scene configuration
//!
//! Every tunable constant of the scene lives here. Defaults reproduce the
//! stock scene; a JSON file can override any subset of fields.

use anyhow::{Context, bail};
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable that points at an explicit config file.
pub const CONFIG_ENV_VAR: &str = "BEVYCOSMOS_CONFIG";

/// Root configuration resource
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Fixed RNG seed for meteors and stars; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub camera: CameraConfig,
    pub comets: CometConfig,
    pub meteors: MeteorConfig,
    pub rocket: RocketConfig,
    pub satellite: SatelliteConfig,
    pub spin: SpinConfig,
    pub stars: StarConfig,
    pub lighting: LightingConfig,
    pub assets: AssetPaths,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            position: [0.0, 5.0, 10.0],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CometConfig {
    pub count: usize,
    pub base_radius: f32,
    pub radius_step: f32,
    /// Radians per tick for the first comet
    pub base_speed: f32,
    pub speed_step: f32,
    pub trail_capacity: usize,
    pub trail_color: [u8; 3],
}

impl Default for CometConfig {
    fn default() -> Self {
        Self {
            count: 3,
            base_radius: 12.0,
            radius_step: 3.0,
            base_speed: 0.01,
            speed_step: 0.005,
            trail_capacity: 60,
            trail_color: [0xff, 0x88, 0x88],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MeteorConfig {
    /// Bernoulli probability of one spawn per tick
    pub spawn_probability: f64,
    /// Spawn x/z are drawn from [-half_extent, half_extent)
    pub spawn_half_extent: f32,
    pub spawn_altitude: f32,
    /// Units per tick, straight down
    pub fall_speed: f32,
    /// Meteors at or below this height are removed
    pub floor: f32,
}

impl Default for MeteorConfig {
    fn default() -> Self {
        Self {
            spawn_probability: 0.05,
            spawn_half_extent: 10.0,
            spawn_altitude: 10.0,
            fall_speed: 0.2,
            floor: -10.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RocketConfig {
    /// Units per tick
    pub speed: f32,
    pub arrival_epsilon: f32,
    /// Distance along the pick ray at which click targets are placed
    pub click_distance: f32,
}

impl Default for RocketConfig {
    fn default() -> Self {
        Self {
            speed: 0.1,
            arrival_epsilon: 0.1,
            click_distance: 20.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SatelliteConfig {
    pub orbit_radius: f32,
    pub altitude: f32,
}

impl Default for SatelliteConfig {
    fn default() -> Self {
        Self {
            orbit_radius: 3.0,
            altitude: 2.0,
        }
    }
}

/// Self-rotation rates in radians per tick
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinConfig {
    pub solar_system: f32,
    pub boom_planet: f32,
    pub satellite: f32,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            solar_system: 0.001,
            boom_planet: 0.005,
            satellite: 0.01,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StarConfig {
    pub count: usize,
    /// Edge length of the cube stars are scattered in
    pub spread: f32,
    pub size: f32,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            count: 100,
            spread: 100.0,
            size: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub ambient_brightness: f32,
    pub key_illuminance: f32,
    pub key_position: [f32; 3],
    pub fill_illuminance: f32,
    pub fill_position: [f32; 3],
    pub rocket_light_color: [u8; 3],
    pub rocket_light_intensity: f32,
    pub rocket_light_range: f32,
    pub satellite_light_color: [u8; 3],
    pub satellite_light_intensity: f32,
    pub satellite_light_range: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_brightness: 400.0,
            key_illuminance: 3_000.0,
            key_position: [10.0, 20.0, 10.0],
            fill_illuminance: 2_000.0,
            fill_position: [-5.0, -10.0, 5.0],
            rocket_light_color: [0xff, 0xdd, 0xaa],
            rocket_light_intensity: 60_000.0,
            rocket_light_range: 6.0,
            satellite_light_color: [0x66, 0x99, 0xff],
            satellite_light_intensity: 50_000.0,
            satellite_light_range: 5.0,
        }
    }
}

/// Asset paths relative to the `assets/` directory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    /// Cube faces in +X, -X, +Y, -Y, +Z, -Z order
    pub skybox_faces: [String; 6],
    pub star_texture: String,
    pub swirl: String,
    pub boom_planet: String,
    pub rocket: String,
    pub satellite: String,
    pub solar_system: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            skybox_faces: [
                "skybox/px.jpg".to_string(),
                "skybox/nx.jpg".to_string(),
                "skybox/py.jpg".to_string(),
                "skybox/ny.jpg".to_string(),
                "skybox/pz.jpg".to_string(),
                "skybox/nz.jpg".to_string(),
            ],
            star_texture: "textures/star.jpg".to_string(),
            swirl: "models/swirl.glb".to_string(),
            boom_planet: "models/boom.glb".to_string(),
            rocket: "models/rocket.glb".to_string(),
            satellite: "models/satellite.glb".to_string(),
            solar_system: "models/solar_system.glb".to_string(),
        }
    }
}

/// Convert an sRGB byte triple to a Bevy color
pub fn rgb(c: [u8; 3]) -> Color {
    Color::srgb_u8(c[0], c[1], c[2])
}

impl SceneConfig {
    /// Load the scene configuration from disk
    ///
    /// Resolution order:
    /// - `$BEVYCOSMOS_CONFIG` if set
    /// - `<config dir>/bevycosmos/scene.json` otherwise
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, anyhow::Error> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json_str(&contents).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, anyhow::Error> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn config_path() -> Option<PathBuf> {
        if let Ok(explicit) = std::env::var(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(explicit));
        }
        let proj_dirs = ProjectDirs::from("", "", "bevycosmos")?;
        Some(proj_dirs.config_dir().join("scene.json"))
    }

    /// Reject values that would panic at runtime or never settle
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        let p = self.meteors.spawn_probability;
        if !(0.0..=1.0).contains(&p) {
            bail!("meteors.spawn_probability must be within [0, 1], got {p}");
        }
        if self.comets.trail_capacity == 0 {
            bail!("comets.trail_capacity must be at least 1");
        }
        if self.rocket.speed <= 0.0 {
            bail!("rocket.speed must be positive, got {}", self.rocket.speed);
        }
        // A smaller epsilon lets the rocket overshoot back and forth forever.
        if self.rocket.arrival_epsilon * 2.0 < self.rocket.speed {
            bail!(
                "rocket.arrival_epsilon ({}) must be at least half of rocket.speed ({})",
                self.rocket.arrival_epsilon,
                self.rocket.speed
            );
        }
        if self.meteors.fall_speed <= 0.0 {
            bail!("meteors.fall_speed must be positive, got {}", self.meteors.fall_speed);
        }
        // Meteors must start above the floor or they are removed before they are seen.
        if self.meteors.spawn_altitude <= self.meteors.floor {
            bail!(
                "meteors.spawn_altitude ({}) must be above meteors.floor ({})",
                self.meteors.spawn_altitude,
                self.meteors.floor
            );
        }
        if self.camera.near <= 0.0 {
            bail!("camera.near must be positive");
        }
        Ok(())
    }
}
