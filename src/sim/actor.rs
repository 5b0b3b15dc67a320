//! Actors: the player, moving lava and coins
//!
//! Actors are values. `update` returns a new actor and `collide` returns a new
//! game state; neither mutates anything.

use std::f64::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::level::Tile;
use super::state::{GameState, Status};
use super::tick::Keys;
use super::vector::Vector;
use crate::config::PhysicsConfig;

/// Stable actor identity, assigned at parse time.
/// Removal compares ids, never positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u32);

/// The player character
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vector,
    pub speed: Vector,
}

impl Player {
    pub const SIZE: Vector = Vector::new(0.8, 1.5);
    pub const COLOR: Color = Color::rgb(64, 64, 64);

    /// Spawn in a plan cell; the sprite is taller than a cell, so it starts
    /// half a unit up.
    pub fn spawn(cell: Vector) -> Self {
        Self {
            pos: cell + Vector::new(0.0, -0.5),
            speed: Vector::ZERO,
        }
    }

    pub fn update(&self, dt: f64, state: &GameState, keys: &Keys, physics: &PhysicsConfig) -> Self {
        let level = state.level();

        let x_speed = match (keys.left, keys.right) {
            (true, false) => -physics.player_x_speed,
            (false, true) => physics.player_x_speed,
            _ => 0.0,
        };
        let moved_x = self.pos + Vector::new(x_speed * dt, 0.0);
        let mut pos = if level.touches(moved_x, Self::SIZE, Tile::Wall) {
            self.pos
        } else {
            moved_x
        };

        // Gravity first, then the wall check decides jump/land
        let mut y_speed = self.speed.y + dt * physics.gravity;
        let moved_y = pos + Vector::new(0.0, y_speed * dt);
        if !level.touches(moved_y, Self::SIZE, Tile::Wall) {
            pos = moved_y;
        } else if keys.up && y_speed > 0.0 {
            y_speed = -physics.jump_speed;
        } else {
            y_speed = 0.0;
        }

        Self {
            pos,
            speed: Vector::new(x_speed, y_speed),
        }
    }
}

/// Moving lava: horizontal/vertical shuttles bounce, drips restart their fall
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lava {
    pub pos: Vector,
    pub speed: Vector,
    /// Drip only: where the fall restarts
    pub reset: Option<Vector>,
}

impl Lava {
    pub const SIZE: Vector = Vector::new(1.0, 1.0);
    pub const COLOR: Color = Color::rgb(255, 100, 100);

    /// Pick the motion from the plan character; `None` if it names none
    pub fn spawn(cell: Vector, ch: char) -> Option<Self> {
        let lava = match ch {
            '=' => Self {
                pos: cell,
                speed: Vector::new(2.0, 0.0),
                reset: None,
            },
            '|' => Self {
                pos: cell,
                speed: Vector::new(0.0, 2.0),
                reset: None,
            },
            'v' => Self {
                pos: cell,
                speed: Vector::new(0.0, 3.0),
                reset: Some(cell),
            },
            _ => return None,
        };
        Some(lava)
    }

    pub fn update(&self, dt: f64, state: &GameState) -> Self {
        let moved = self.pos + self.speed.times(dt);
        if !state.level().touches(moved, Self::SIZE, Tile::Wall) {
            Self { pos: moved, ..*self }
        } else if let Some(reset) = self.reset {
            Self { pos: reset, ..*self }
        } else {
            Self {
                speed: self.speed.times(-1.0),
                ..*self
            }
        }
    }

    pub fn collide(&self, state: &GameState) -> GameState {
        state.with_status(Status::Lost)
    }
}

/// A collectible coin bobbing around its base position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vector,
    pub base_pos: Vector,
    /// Phase in radians; grows without bound, only its sine matters
    pub wobble: f64,
}

impl Coin {
    pub const SIZE: Vector = Vector::new(0.6, 0.6);
    pub const COLOR: Color = Color::rgb(241, 229, 89);

    /// Spawn centred in a plan cell with a random starting phase
    pub fn spawn<R: Rng + ?Sized>(cell: Vector, rng: &mut R) -> Self {
        let base_pos = cell + Vector::new(0.2, 0.1);
        Self {
            pos: base_pos,
            base_pos,
            wobble: rng.random::<f64>() * TAU,
        }
    }

    pub fn update(&self, dt: f64, physics: &PhysicsConfig) -> Self {
        let wobble = self.wobble + dt * physics.wobble_speed;
        let offset = wobble.sin() * physics.wobble_dist;
        Self {
            pos: self.base_pos + Vector::new(0.0, offset),
            base_pos: self.base_pos,
            wobble,
        }
    }
}

/// Closed set of actor behaviours
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActorKind {
    Player(Player),
    Lava(Lava),
    Coin(Coin),
}

/// A dynamic entity with a stable identity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub kind: ActorKind,
}

impl Actor {
    pub fn new(id: ActorId, kind: ActorKind) -> Self {
        Self { id, kind }
    }

    pub fn pos(&self) -> Vector {
        match &self.kind {
            ActorKind::Player(p) => p.pos,
            ActorKind::Lava(l) => l.pos,
            ActorKind::Coin(c) => c.pos,
        }
    }

    pub fn size(&self) -> Vector {
        match self.kind {
            ActorKind::Player(_) => Player::SIZE,
            ActorKind::Lava(_) => Lava::SIZE,
            ActorKind::Coin(_) => Coin::SIZE,
        }
    }

    pub fn color(&self) -> Color {
        match self.kind {
            ActorKind::Player(_) => Player::COLOR,
            ActorKind::Lava(_) => Lava::COLOR,
            ActorKind::Coin(_) => Coin::COLOR,
        }
    }

    #[inline]
    pub fn is_player(&self) -> bool {
        matches!(self.kind, ActorKind::Player(_))
    }

    #[inline]
    pub fn is_coin(&self) -> bool {
        matches!(self.kind, ActorKind::Coin(_))
    }

    /// Advance one frame against the previous frame's state
    pub fn update(&self, dt: f64, state: &GameState, keys: &Keys, physics: &PhysicsConfig) -> Self {
        let kind = match &self.kind {
            ActorKind::Player(p) => ActorKind::Player(p.update(dt, state, keys, physics)),
            ActorKind::Lava(l) => ActorKind::Lava(l.update(dt, state)),
            ActorKind::Coin(c) => ActorKind::Coin(c.update(dt, physics)),
        };
        Self { id: self.id, kind }
    }

    /// Response to overlapping the player. The player itself has none.
    pub fn collide(&self, state: &GameState) -> GameState {
        match &self.kind {
            ActorKind::Player(_) => state.clone(),
            ActorKind::Lava(l) => l.collide(state),
            ActorKind::Coin(_) => {
                let remaining: Vec<Actor> = state
                    .actors()
                    .iter()
                    .filter(|a| a.id != self.id)
                    .copied()
                    .collect();
                let status = if remaining.iter().any(Actor::is_coin) {
                    state.status()
                } else {
                    Status::Won
                };
                state.with_actors(remaining).with_status(status)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::{Legend, Level};
    use std::rc::Rc;

    fn state(plan: &str) -> GameState {
        let level = Level::parse_seeded(plan, &Legend::default(), 42).expect("valid plan");
        GameState::start(Rc::new(level))
    }

    fn player(state: &GameState) -> Player {
        *state.player()
    }

    #[test]
    fn test_spawn_offsets() {
        let state = state("@...o");
        assert_eq!(player(&state).pos, Vector::new(0.0, -0.5));
        let coin = state.actors()[1];
        assert_eq!(coin.pos(), Vector::new(4.2, 0.1));
        assert_eq!(coin.size(), Coin::SIZE);
        assert_eq!(coin.color(), Coin::COLOR);
    }

    #[test]
    fn test_player_walks_and_blocks_on_wall() {
        let state = state("#....\n#@...\n#####");
        let physics = PhysicsConfig::default();
        let keys = Keys {
            right: true,
            ..Default::default()
        };

        let moved = player(&state).update(0.1, &state, &keys, &physics);
        assert!((moved.pos.x - 1.7).abs() < 1e-9);
        assert_eq!(moved.speed.x, physics.player_x_speed);

        let keys = Keys {
            left: true,
            ..Default::default()
        };
        // One step left from x=1 would enter the wall column
        let blocked = player(&state).update(0.1, &state, &keys, &physics);
        assert_eq!(blocked.pos.x, 1.0);
    }

    #[test]
    fn test_player_both_keys_cancel() {
        let state = state("#....\n#@...\n#####");
        let keys = Keys {
            left: true,
            right: true,
            up: false,
        };
        let p = player(&state).update(0.1, &state, &keys, &PhysicsConfig::default());
        assert_eq!(p.speed.x, 0.0);
        assert_eq!(p.pos.x, 1.0);
    }

    #[test]
    fn test_player_lands_and_jumps() {
        let state = state("#...\n#...\n#@..\n####");
        let physics = PhysicsConfig::default();

        // Resting on the floor: gravity pushes into the wall, speed resets
        let rest = player(&state).update(0.05, &state, &Keys::default(), &physics);
        assert_eq!(rest.pos, player(&state).pos);
        assert_eq!(rest.speed.y, 0.0);

        let keys = Keys {
            up: true,
            ..Default::default()
        };
        let jump = player(&state).update(0.05, &state, &keys, &physics);
        assert_eq!(jump.speed.y, -physics.jump_speed);
        assert_eq!(jump.pos, player(&state).pos);
    }

    #[test]
    fn test_player_falls_with_gravity() {
        let state = state("#...\n#@..\n#...\n#...\n####");
        let physics = PhysicsConfig::default();
        let p = player(&state).update(0.1, &state, &Keys::default(), &physics);
        assert!((p.speed.y - 3.0).abs() < 1e-9);
        assert!((p.pos.y - (0.5 + 0.3)).abs() < 1e-9);
    }

    #[test]
    fn test_ceiling_bump_zeroes_upward_speed() {
        let state = state("####\n#...\n#@..\n#...\n####");
        let physics = PhysicsConfig::default();
        let rising = Player {
            pos: Vector::new(1.0, 1.1),
            speed: Vector::new(0.0, -10.0),
        };
        let keys = Keys {
            up: true,
            ..Default::default()
        };
        let p = rising.update(0.05, &state, &keys, &physics);
        // Moving up would enter row 0; upward speed is not a jump trigger
        assert_eq!(p.pos.y, 1.1);
        assert_eq!(p.speed.y, 0.0);
    }

    #[test]
    fn test_lava_shuttle_bounces() {
        let state = state("#@.=.#");
        let lava = match state.actors()[1].kind {
            ActorKind::Lava(l) => l,
            _ => unreachable!("second actor is lava"),
        };
        let moved = lava.update(0.25, &state);
        assert_eq!(moved.pos, Vector::new(3.5, 0.0));
        assert_eq!(moved.speed, Vector::new(2.0, 0.0));

        // A full unit further would cover the right wall
        let bounced = moved.update(0.5, &state);
        assert_eq!(bounced.pos, moved.pos);
        assert_eq!(bounced.speed, Vector::new(-2.0, 0.0));
    }

    #[test]
    fn test_lava_drip_resets() {
        let state = state("#v#\n#.#\n#@#\n###");
        let drip = match state.actors()[0].kind {
            ActorKind::Lava(l) => l,
            _ => unreachable!("first actor is the drip"),
        };
        assert_eq!(drip.reset, Some(Vector::new(1.0, 0.0)));

        let fallen = Lava {
            pos: Vector::new(1.0, 2.9),
            ..drip
        };
        let reset = fallen.update(0.1, &state);
        assert_eq!(reset.pos, Vector::new(1.0, 0.0));
        assert_eq!(reset.speed, Vector::new(0.0, 3.0));
    }

    #[test]
    fn test_vertical_lava_spawn() {
        let lava = Lava::spawn(Vector::new(3.0, 2.0), '|').expect("known motion");
        assert_eq!(lava.speed, Vector::new(0.0, 2.0));
        assert_eq!(lava.reset, None);
        assert!(Lava::spawn(Vector::ZERO, 'x').is_none());
    }

    #[test]
    fn test_coin_wobble() {
        let physics = PhysicsConfig::default();
        let coin = Coin {
            pos: Vector::new(1.2, 0.1),
            base_pos: Vector::new(1.2, 0.1),
            wobble: 0.0,
        };
        let dt = std::f64::consts::FRAC_PI_2 / physics.wobble_speed;
        let next = coin.update(dt, &physics);
        assert!((next.wobble - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((next.pos.y - (0.1 + physics.wobble_dist)).abs() < 1e-12);
        assert_eq!(next.pos.x, 1.2);
        assert_eq!(next.base_pos, coin.base_pos);
    }

    #[test]
    fn test_coin_phase_is_seeded() {
        let a = state("@o");
        let b = state("@o");
        assert_eq!(a.actors()[1], b.actors()[1]);
    }

    #[test]
    fn test_coin_collide_removes_by_id() {
        let state = state("@oo");
        let first = state.actors()[1];
        let after = first.collide(&state);
        assert_eq!(after.actors().len(), 2);
        assert!(after.actors().iter().all(|a| a.id != first.id));
        assert_eq!(after.status(), Status::Playing);

        let last = after.actors()[1];
        let won = last.collide(&after);
        assert_eq!(won.actors().len(), 1);
        assert_eq!(won.status(), Status::Won);
    }

    #[test]
    fn test_lava_collide_loses() {
        let state = state("@=");
        let after = state.actors()[1].collide(&state);
        assert_eq!(after.status(), Status::Lost);
        assert_eq!(after.actors(), state.actors());
    }
}
