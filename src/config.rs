//! Game configuration
//!
//! One immutable value carrying the physics tuning, the level legend and the
//! driver timings. Passed explicitly to the parser and the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Legend, LegendEntry, SpawnKind};

/// Movement tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub player_x_speed: f64,
    pub gravity: f64,
    pub jump_speed: f64,
    pub wobble_speed: f64,
    pub wobble_dist: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            player_x_speed: PLAYER_X_SPEED,
            gravity: GRAVITY,
            jump_speed: JUMP_SPEED,
            wobble_speed: WOBBLE_SPEED,
            wobble_dist: WOBBLE_DIST,
        }
    }
}

/// Top-level game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub physics: PhysicsConfig,
    pub legend: Legend,
    /// Pixels per grid unit
    pub scale: f64,
    /// Seconds a finished level keeps running before it reports
    pub finish_delay: f64,
    /// Driver-side frame delta cap (seconds)
    pub max_frame_dt: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            legend: Legend::default(),
            scale: SCALE,
            finish_delay: FINISH_DELAY,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Malformed JSON
    Parse(String),
    /// Well-formed but unusable values
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(m) => write!(f, "config parse error: {m}"),
            Self::Invalid(m) => write!(f, "invalid config: {m}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        log::info!("Loaded game config");
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.physics;
        let physics = [
            ("player_x_speed", p.player_x_speed),
            ("gravity", p.gravity),
            ("jump_speed", p.jump_speed),
            ("wobble_speed", p.wobble_speed),
            ("wobble_dist", p.wobble_dist),
        ];
        if let Some((name, _)) = physics.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::Invalid(format!("physics.{name} must be finite")));
        }
        if p.gravity <= 0.0 {
            return Err(ConfigError::Invalid("physics.gravity must be positive".into()));
        }
        if let Some((name, _)) = physics[..3].iter().find(|(_, v)| *v < 0.0) {
            return Err(ConfigError::Invalid(format!(
                "physics.{name} must be zero or positive"
            )));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ConfigError::Invalid("scale must be positive".into()));
        }
        if !(self.finish_delay.is_finite() && self.finish_delay >= 0.0) {
            return Err(ConfigError::Invalid(
                "finish_delay must be zero or positive".into(),
            ));
        }
        if !(self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0) {
            return Err(ConfigError::Invalid("max_frame_dt must be positive".into()));
        }

        let player_chars = self
            .legend
            .iter()
            .filter(|&(_, entry)| entry == LegendEntry::Spawn(SpawnKind::Player))
            .count();
        if player_chars != 1 {
            return Err(ConfigError::Invalid(format!(
                "legend must map exactly one character to the player, found {player_chars}"
            )));
        }
        Ok(())
    }

    /// Clamp a raw frame delta to what the simulation should see
    #[inline]
    pub fn clamp_dt(&self, dt: f64) -> f64 {
        dt.clamp(0.0, self.max_frame_dt)
    }

    /// Read the JSON config embedded in the page (`#game-config`), if any
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("game-config"))
            .and_then(|el| el.text_content());

        if let Some(json) = text {
            match Self::from_json(&json) {
                Ok(config) => return config,
                Err(e) => log::warn!("Ignoring page config: {e}"),
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
