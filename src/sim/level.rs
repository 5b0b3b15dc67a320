//! Level plans, the tile grid and tile collision queries
//!
//! A plan is a block of text, one character per cell. Each character maps
//! through a [`Legend`] to either a static [`Tile`] or an actor spawn; spawn
//! cells are stored as empty tiles.

use std::collections::BTreeMap;
use std::fmt;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorId, ActorKind, Coin, Lava, Player};
use super::vector::Vector;

/// Static per-cell category of the level grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Empty,
    Wall,
    /// Static lava
    Hazard,
}

/// Actor kinds a legend character can spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnKind {
    Player,
    Coin,
    /// Moving lava; the sub-variant is picked from the plan character
    Lava,
}

/// What a plan character stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendEntry {
    Tile(Tile),
    Spawn(SpawnKind),
}

/// Character → meaning table used by the parser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Legend {
    entries: BTreeMap<char, LegendEntry>,
}

impl Default for Legend {
    fn default() -> Self {
        let entries = BTreeMap::from([
            ('.', LegendEntry::Tile(Tile::Empty)),
            ('#', LegendEntry::Tile(Tile::Wall)),
            ('+', LegendEntry::Tile(Tile::Hazard)),
            ('@', LegendEntry::Spawn(SpawnKind::Player)),
            ('o', LegendEntry::Spawn(SpawnKind::Coin)),
            ('=', LegendEntry::Spawn(SpawnKind::Lava)),
            ('|', LegendEntry::Spawn(SpawnKind::Lava)),
            ('v', LegendEntry::Spawn(SpawnKind::Lava)),
        ]);
        Self { entries }
    }
}

impl Legend {
    pub fn get(&self, ch: char) -> Option<LegendEntry> {
        self.entries.get(&ch).copied()
    }

    /// Add or replace the meaning of `ch`
    pub fn insert(&mut self, ch: char, entry: LegendEntry) {
        self.entries.insert(ch, entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, LegendEntry)> + '_ {
        self.entries.iter().map(|(&ch, &entry)| (ch, entry))
    }
}

/// Level configuration errors, fatal to parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// No rows or no columns after trimming blank lines
    EmptyPlan,
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    UnknownChar {
        ch: char,
        x: usize,
        y: usize,
    },
    /// Legend spawns lava for a character that names no lava motion
    UnknownHazard {
        ch: char,
        x: usize,
        y: usize,
    },
    MissingPlayer,
    MultiplePlayers {
        count: usize,
    },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPlan => write!(f, "level plan has no rows or columns"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            Self::UnknownChar { ch, x, y } => {
                write!(f, "no legend entry for {ch:?} at ({x}, {y})")
            }
            Self::UnknownHazard { ch, x, y } => {
                write!(f, "no lava motion for {ch:?} at ({x}, {y})")
            }
            Self::MissingPlayer => write!(f, "level has no player spawn"),
            Self::MultiplePlayers { count } => {
                write!(f, "level has {count} player spawns, expected 1")
            }
        }
    }
}

impl std::error::Error for LevelError {}

/// Immutable tile grid plus the actors spawned from the plan
#[derive(Debug, Clone)]
pub struct Level {
    width: usize,
    height: usize,
    /// Row-major, `width * height` cells
    tiles: Vec<Tile>,
    start_actors: Vec<Actor>,
}

impl Level {
    /// Parse a plan, drawing coin wobble phases from `rng`
    pub fn parse<R: Rng + ?Sized>(
        plan: &str,
        legend: &Legend,
        rng: &mut R,
    ) -> Result<Self, LevelError> {
        let rows = plan_rows(plan);
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        if height == 0 || width == 0 {
            return Err(LevelError::EmptyPlan);
        }

        let mut tiles = Vec::with_capacity(width * height);
        let mut start_actors = Vec::new();
        let mut next_id = 0u32;

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LevelError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, ch) in row.chars().enumerate() {
                let entry = legend
                    .get(ch)
                    .ok_or(LevelError::UnknownChar { ch, x, y })?;
                match entry {
                    LegendEntry::Tile(tile) => tiles.push(tile),
                    LegendEntry::Spawn(kind) => {
                        let pos = Vector::new(x as f64, y as f64);
                        let kind = match kind {
                            SpawnKind::Player => ActorKind::Player(Player::spawn(pos)),
                            SpawnKind::Coin => ActorKind::Coin(Coin::spawn(pos, rng)),
                            SpawnKind::Lava => ActorKind::Lava(
                                Lava::spawn(pos, ch)
                                    .ok_or(LevelError::UnknownHazard { ch, x, y })?,
                            ),
                        };
                        start_actors.push(Actor::new(ActorId(next_id), kind));
                        next_id += 1;
                        tiles.push(Tile::Empty);
                    }
                }
            }
        }

        let players = start_actors
            .iter()
            .filter(|a| matches!(a.kind, ActorKind::Player(_)))
            .count();
        match players {
            0 => return Err(LevelError::MissingPlayer),
            1 => {}
            count => return Err(LevelError::MultiplePlayers { count }),
        }

        log::debug!(
            "Parsed level {}x{} with {} actors",
            width,
            height,
            start_actors.len()
        );

        Ok(Self {
            width,
            height,
            tiles,
            start_actors,
        })
    }

    /// Parse with a deterministic RNG seeded from `seed`
    pub fn parse_seeded(plan: &str, legend: &Legend, seed: u64) -> Result<Self, LevelError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self::parse(plan, legend, &mut rng)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Actors as spawned by the plan
    pub fn start_actors(&self) -> &[Actor] {
        &self.start_actors
    }

    /// Tile at a cell; anything outside the grid is wall
    pub fn tile_at(&self, x: i64, y: i64) -> Tile {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return Tile::Wall;
        }
        self.tiles[y as usize * self.width + x as usize]
    }

    /// Rows of tiles, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width)
    }

    /// Does the rectangle at `pos` with `size` cover any cell of kind `tile`?
    ///
    /// Covered cells are `floor(x)..ceil(x + w)` by `floor(y)..ceil(y + h)`.
    /// The level boundary acts as an infinite wall.
    pub fn touches(&self, pos: Vector, size: Vector, tile: Tile) -> bool {
        let width = self.width as f64;
        let height = self.height as f64;
        let outside = pos.x < 0.0
            || pos.y < 0.0
            || pos.x + size.x > width
            || pos.y + size.y > height;
        if outside && tile == Tile::Wall {
            return true;
        }

        // Clamped to the grid before casting; huge coordinates must not saturate
        let x_start = pos.x.floor().max(0.0) as usize;
        let x_end = (pos.x + size.x).ceil().min(width) as usize;
        let y_start = pos.y.floor().max(0.0) as usize;
        let y_end = (pos.y + size.y).ceil().min(height) as usize;

        (y_start..y_end).any(|y| (x_start..x_end).any(|x| self.tiles[y * self.width + x] == tile))
    }
}

/// Split a plan into rows, dropping leading/trailing blank lines
fn plan_rows(plan: &str) -> Vec<&str> {
    let lines: Vec<&str> = plan
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .collect();
    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].to_vec(),
        _ => Vec::new(),
    }
}
