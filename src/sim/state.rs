//! Game state and status
//!
//! A `GameState` is never mutated after construction; the per-frame
//! transition in `tick.rs` and the actors' collide responses build new ones.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorKind, Player};
use super::level::Level;

/// Outcome of the current level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Status {
    /// Won and Lost are absorbing
    #[inline]
    pub fn is_finished(self) -> bool {
        self != Status::Playing
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Playing => "playing",
            Status::Won => "won",
            Status::Lost => "lost",
        }
    }
}

/// Complete state of one level at one frame
#[derive(Debug, Clone)]
pub struct GameState {
    level: Rc<Level>,
    actors: Vec<Actor>,
    status: Status,
}

impl GameState {
    /// Fresh state for a level: its spawned actors, status Playing
    pub fn start(level: Rc<Level>) -> Self {
        let actors = level.start_actors().to_vec();
        Self {
            level,
            actors,
            status: Status::Playing,
        }
    }

    #[inline]
    pub fn level(&self) -> &Level {
        &self.level
    }

    #[inline]
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The player actor
    ///
    /// # Panics
    /// If the actor list has no player. Parsed levels always spawn exactly
    /// one and nothing removes it, so this is a broken invariant.
    pub fn player_actor(&self) -> &Actor {
        self.actors
            .iter()
            .find(|a| a.is_player())
            .unwrap_or_else(|| panic!("game state has no player actor"))
    }

    /// The player's behaviour data. Panics like [`GameState::player_actor`].
    pub fn player(&self) -> &Player {
        match &self.player_actor().kind {
            ActorKind::Player(p) => p,
            _ => unreachable!("player_actor only returns the player"),
        }
    }

    /// Copy of this state with a different status
    pub fn with_status(&self, status: Status) -> Self {
        Self {
            level: Rc::clone(&self.level),
            actors: self.actors.clone(),
            status,
        }
    }

    /// Copy of this state with a different actor list
    pub fn with_actors(&self, actors: Vec<Actor>) -> Self {
        Self {
            level: Rc::clone(&self.level),
            actors,
            status: self.status,
        }
    }

    /// Number of coins still in play
    pub fn coins_left(&self) -> usize {
        self.actors.iter().filter(|a| a.is_coin()).count()
    }
}
