//! Per-frame state transition
//!
//! Every actor updates against the same previous-frame snapshot, then the
//! player is checked against hazard tiles, then against the other actors.

use std::collections::HashMap;

use super::collision::overlap;
use super::level::Tile;
use super::state::{GameState, Status};
use crate::config::PhysicsConfig;

/// Key names the game reads from the input source
pub const KEY_LEFT: &str = "ArrowLeft";
pub const KEY_RIGHT: &str = "ArrowRight";
pub const KEY_UP: &str = "ArrowUp";

/// Input snapshot for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keys {
    pub left: bool,
    pub right: bool,
    /// Jump
    pub up: bool,
}

impl Keys {
    /// Build from a `key name → pressed` map; missing names count as released
    pub fn from_named(pressed: &HashMap<String, bool>) -> Self {
        let held = |name: &str| pressed.get(name).copied().unwrap_or(false);
        Self {
            left: held(KEY_LEFT),
            right: held(KEY_RIGHT),
            up: held(KEY_UP),
        }
    }
}

impl GameState {
    /// Advance by `dt` seconds. Returns the next state; `self` is untouched.
    ///
    /// `dt` is not clamped here; the driver caps it.
    pub fn update(&self, dt: f64, keys: &Keys, physics: &PhysicsConfig) -> GameState {
        let actors = self
            .actors()
            .iter()
            .map(|actor| actor.update(dt, self, keys, physics))
            .collect();
        let mut next = self.with_actors(actors);

        if next.status().is_finished() {
            return next;
        }

        let player = *next.player_actor();
        if next
            .level()
            .touches(player.pos(), player.size(), Tile::Hazard)
        {
            return next.with_status(Status::Lost);
        }

        // Snapshot the candidates first: collide responses may drop actors
        let hits: Vec<_> = next
            .actors()
            .iter()
            .filter(|other| other.id != player.id && overlap(other, &player))
            .copied()
            .collect();
        for other in hits {
            next = other.collide(&next);
        }
        next
    }
}
