//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure:
//! - Every frame produces a new `GameState`; nothing is mutated in place
//! - Randomness only at actor creation, through a caller-supplied RNG
//! - Stable iteration order (actor list order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod collision;
pub mod color;
pub mod level;
pub mod state;
pub mod tick;
pub mod vector;

pub use actor::{Actor, ActorId, ActorKind, Coin, Lava, Player};
pub use collision::overlap;
pub use color::Color;
pub use level::{Legend, LegendEntry, Level, LevelError, SpawnKind, Tile};
pub use state::{GameState, Status};
pub use tick::Keys;
pub use vector::Vector;
