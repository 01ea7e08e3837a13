use serde::{Deserialize, Serialize};

use tilehop_core::input::KeyBindings;

use crate::error::SetupError;
use crate::physics::PhysicsConfig;
use crate::pickups::{CoinSpec, default_coins};

/// Environment variable naming a TOML config file.
pub const CONFIG_ENV: &str = "TILEHOP_CONFIG";
/// Config file read when the environment variable is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config/tilehop.toml";

/// Top-level game configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformerConfig {
    pub physics: PhysicsConfig,
    pub coins: Vec<CoinSpec>,
    pub input: KeyBindings,
}

impl Default for PlatformerConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            coins: default_coins(),
            input: KeyBindings::default(),
        }
    }
}

impl PlatformerConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is
    /// missing, unparseable or invalid.
    pub fn load() -> Self {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    /// Load config from the given path, with the same fallback as [`Self::load`].
    pub fn load_from(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to load {path}: {e}, using defaults");
                    Self::default()
                },
            },
            Err(_) => Self::default(),
        }
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, SetupError> {
        let cfg: Self =
            toml::from_str(content).map_err(|e| SetupError::ConfigParse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the collision code cannot work with.
    pub fn validate(&self) -> Result<(), SetupError> {
        let p = &self.physics;
        require_at_least("physics.tile_size", p.tile_size, 1.0)?;
        require_at_least("physics.player_width", p.player_width, 1.0)?;
        require_at_least("physics.player_height", p.player_height, 1.0)?;
        require_at_least("physics.gravity", p.gravity, 0.0)?;
        require_at_least("physics.move_speed", p.move_speed, 0.0)?;
        require_at_least("physics.jump_speed", p.jump_speed, 0.0)?;
        if !p.spawn_x.is_finite() || !p.spawn_y.is_finite() {
            return Err(SetupError::InvalidConfig(
                "spawn position must be finite".to_string(),
            ));
        }
        for (i, coin) in self.coins.iter().enumerate() {
            if !(coin.x.is_finite() && coin.y.is_finite()) {
                return Err(SetupError::InvalidConfig(format!(
                    "coins[{i}] position must be finite"
                )));
            }
            if !(coin.size.is_finite() && coin.size > 0.0) {
                return Err(SetupError::InvalidConfig(format!(
                    "coins[{i}].size must be finite and positive, got {}",
                    coin.size
                )));
            }
        }
        Ok(())
    }
}

fn require_at_least(name: &str, value: f32, min: f32) -> Result<(), SetupError> {
    if value.is_finite() && value >= min {
        Ok(())
    } else {
        Err(SetupError::InvalidConfig(format!(
            "{name} must be a finite value >= {min}, got {value}"
        )))
    }
}
