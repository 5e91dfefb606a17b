//! Tunable parameters loaded from `config/pet.toml`.
use std::{env, fs, path::PathBuf};

use bevy::prelude::*;
use serde::Deserialize;

use crate::{food::FoodKind, slime::SlimeSkin};

const CONFIG_PATH: &str = "config/pet.toml";
const CONFIG_PATH_ENV: &str = "PET_CONFIG";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawPetConfig {
    #[serde(default)]
    session: RawSession,
    #[serde(default)]
    ledger: RawLedger,
    #[serde(default)]
    creature: RawCreature,
    #[serde(default)]
    motion: RawMotion,
    #[serde(default)]
    camera: RawCamera,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawSession {
    time_scale: f32,
    starting_skin: SlimeSkin,
    starting_food: FoodKind,
}

impl Default for RawSession {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            starting_skin: SlimeSkin::Normal,
            starting_food: FoodKind::Apple,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawLedger {
    friendship_ceiling: u32,
    starting_money: f32,
    money_ceiling: f32,
    money_regen_per_second: f32,
}

impl Default for RawLedger {
    fn default() -> Self {
        Self {
            friendship_ceiling: 1000,
            starting_money: 100.0,
            money_ceiling: 1000.0,
            money_regen_per_second: 3.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawCreature {
    radius: f32,
    scale_ceiling: f32,
    grow_step: f32,
    grow_seconds: f32,
    evolution_threshold: u32,
    evolution_seconds: f32,
}

impl Default for RawCreature {
    fn default() -> Self {
        Self {
            radius: 1.0,
            scale_ceiling: 1.6,
            grow_step: 0.1,
            grow_seconds: 0.3,
            evolution_threshold: 100,
            evolution_seconds: 1.5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawMotion {
    orient_seconds: f32,
    travel_speed: f32,
}

impl Default for RawMotion {
    fn default() -> Self {
        Self {
            orient_seconds: 1.0,
            travel_speed: 1.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawCamera {
    start_position: [f32; 3],
    orbit_sensitivity: f32,
    min_pitch: f32,
    max_pitch: f32,
}

impl Default for RawCamera {
    fn default() -> Self {
        Self {
            start_position: [0.0, 4.0, 4.0],
            orbit_sensitivity: 0.005,
            min_pitch: -1.45,
            max_pitch: -0.55,
        }
    }
}

/// Runtime configuration derived from `config/pet.toml`.
#[derive(Resource, Debug, Clone)]
pub struct PetConfig {
    pub session: SessionConfig,
    pub ledger: LedgerConfig,
    pub creature: CreatureConfig,
    pub motion: MotionConfig,
    pub camera: CameraConfig,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub time_scale: f32,
    pub starting_skin: SlimeSkin,
    pub starting_food: FoodKind,
}

#[derive(Debug, Clone)]
pub struct LedgerConfig {
    pub friendship_ceiling: u32,
    pub starting_money: f32,
    pub money_ceiling: f32,
    pub money_regen_per_second: f32,
}

#[derive(Debug, Clone)]
pub struct CreatureConfig {
    pub radius: f32,
    pub scale_ceiling: f32,
    pub grow_step: f32,
    pub grow_seconds: f32,
    pub evolution_threshold: u32,
    pub evolution_seconds: f32,
}

#[derive(Debug, Clone)]
pub struct MotionConfig {
    pub orient_seconds: f32,
    /// World units per second while travelling.
    pub travel_speed: f32,
}

#[derive(Debug, Clone)]
pub struct CameraConfig {
    pub start_position: Vec3,
    pub orbit_sensitivity: f32,
    pub min_pitch: f32,
    pub max_pitch: f32,
}

impl PetConfig {
    pub fn load_or_default() -> Self {
        let path = env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(CONFIG_PATH));

        match fs::read_to_string(&path) {
            Ok(data) => match Self::from_toml_str(&data) {
                Ok(config) => config,
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        path.display(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    path.display(),
                    err
                );
                Self::default()
            }
        }
    }

    pub fn from_toml_str(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawPetConfig>(data).map(Into::into)
    }
}

impl Default for PetConfig {
    fn default() -> Self {
        RawPetConfig::default().into()
    }
}

impl From<RawPetConfig> for PetConfig {
    fn from(value: RawPetConfig) -> Self {
        let session = SessionConfig {
            time_scale: value.session.time_scale.max(0.001),
            starting_skin: value.session.starting_skin,
            starting_food: value.session.starting_food,
        };

        let money_ceiling = value.ledger.money_ceiling.max(0.0);
        let ledger = LedgerConfig {
            friendship_ceiling: value.ledger.friendship_ceiling,
            starting_money: value.ledger.starting_money.clamp(0.0, money_ceiling),
            money_ceiling,
            money_regen_per_second: value.ledger.money_regen_per_second.max(0.0),
        };

        let creature = CreatureConfig {
            radius: value.creature.radius.max(0.05),
            scale_ceiling: value.creature.scale_ceiling.max(1.0),
            grow_step: value.creature.grow_step.max(0.0),
            grow_seconds: value.creature.grow_seconds.max(0.0),
            evolution_threshold: value
                .creature
                .evolution_threshold
                .min(value.ledger.friendship_ceiling),
            evolution_seconds: value.creature.evolution_seconds.max(0.0),
        };

        let motion = MotionConfig {
            orient_seconds: value.motion.orient_seconds.max(0.0),
            travel_speed: value.motion.travel_speed.max(0.01),
        };

        let (min_pitch, max_pitch) = if value.camera.min_pitch <= value.camera.max_pitch {
            (value.camera.min_pitch, value.camera.max_pitch)
        } else {
            (value.camera.max_pitch, value.camera.min_pitch)
        };
        let camera = CameraConfig {
            start_position: Vec3::from_array(value.camera.start_position),
            orbit_sensitivity: value.camera.orbit_sensitivity.max(0.0),
            min_pitch,
            max_pitch,
        };

        Self {
            session,
            ledger,
            creature,
            motion,
            camera,
        }
    }
}
