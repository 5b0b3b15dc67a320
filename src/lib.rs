//! Lava Runner - A tile-based platformer for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (level grid, actors, collisions, game state)
//! - `render`: Canvas and text renderers that consume state snapshots
//! - `platform`: Keyboard input tracking (browser listeners on wasm32)
//! - `config`: Tuning values and the level legend
//! - `runner`: Per-level run and level sequencing

pub mod config;
pub mod levels;
pub mod platform;
pub mod render;
pub mod runner;
pub mod sim;

pub use config::{ConfigError, GameConfig, PhysicsConfig};
pub use runner::{Campaign, CampaignEvent, LevelRun, LevelSignal};

/// Game configuration constants
pub mod consts {
    /// Pixels per grid unit when painting
    pub const SCALE: f64 = 20.0;

    /// Player horizontal speed (units/s)
    pub const PLAYER_X_SPEED: f64 = 7.0;
    /// Downward acceleration (units/s²)
    pub const GRAVITY: f64 = 30.0;
    /// Upward speed applied on jump (units/s)
    pub const JUMP_SPEED: f64 = 17.0;

    /// Coin wobble phase rate (radians/s)
    pub const WOBBLE_SPEED: f64 = 8.0;
    /// Coin wobble amplitude (units)
    pub const WOBBLE_DIST: f64 = 0.07;

    /// Largest frame delta the driver feeds the simulation (seconds)
    pub const MAX_FRAME_DT: f64 = 0.1;
    /// How long a finished level keeps animating before it reports (seconds)
    pub const FINISH_DELAY: f64 = 1.0;
}
