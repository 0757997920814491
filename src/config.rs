use serde::Deserialize;

use crate::{error::ZError, ZResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Visible world height, the width follows the window's aspect ratio.
    pub view_height: f32,

    /// Written as a tuple, `(r, g, b)`.
    #[serde(default = "default_background")]
    pub background: [f32; 3],

    pub player: PlayerConfig,
    pub physics: PhysicsConfig,
    pub effect: EffectConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub size: f32,
    pub start_x: f32,
    pub move_speed: f32,

    #[serde(default = "default_impulse")]
    pub impulse: f32,

    pub mass: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub floor_y: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EffectConfig {
    /// Name of the actor the effect is attached to.
    pub anchor: String,

    #[serde(default = "default_capacity")]
    pub capacity: usize,

    #[serde(default = "default_spawn_interval_secs")]
    pub spawn_interval_secs: f64,

    #[serde(default = "default_spacing")]
    pub spacing: f32,

    pub size: f32,

    #[serde(default)]
    pub texture: Option<String>,
}

fn default_background() -> [f32; 3] {
    [0.1, 0.1, 0.12]
}

fn default_impulse() -> f32 {
    200.0
}

fn default_capacity() -> usize {
    20
}

fn default_spawn_interval_secs() -> f64 {
    3.0
}

fn default_spacing() -> f32 {
    0.5
}

impl Config {
    pub fn from_ron_str(s: &str, path: &str) -> ZResult<Self> {
        let config: Self =
            ron::de::from_str(s).map_err(|e| ZError::from_ron_de_error(e, path.into()))?;
        config.check(path)?;
        Ok(config)
    }

    /// Catches values the demo can't run with.
    fn check(&self, path: &str) -> ZResult {
        let error = |field, reason| Err(ZError::invalid_config(path.into(), field, reason));
        if self.view_height <= 0.0 {
            return error("view_height", "must be positive");
        }
        if self.player.size <= 0.0 {
            return error("player.size", "must be positive");
        }
        if self.player.mass <= 0.0 {
            return error("player.mass", "must be positive");
        }
        if self.effect.size <= 0.0 {
            return error("effect.size", "must be positive");
        }
        if self.effect.spawn_interval_secs < 0.0 {
            return error("effect.spawn_interval_secs", "can't be negative");
        }
        Ok(())
    }
}
