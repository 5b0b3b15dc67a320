//! ASCII renderer for terminals and tests

use super::Renderer;
use crate::sim::{Actor, ActorKind, GameState, Tile};

/// Renders the whole level as one character per cell
#[derive(Debug, Default)]
pub struct TextRenderer {
    frame: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last drawn frame, rows separated by `\n`
    pub fn frame(&self) -> &str {
        &self.frame
    }

    fn tile_char(tile: Tile) -> char {
        match tile {
            Tile::Empty => '.',
            Tile::Wall => '#',
            Tile::Hazard => '+',
        }
    }

    fn actor_char(actor: &Actor) -> char {
        match actor.kind {
            ActorKind::Player(_) => '@',
            ActorKind::Coin(_) => 'o',
            ActorKind::Lava(_) => '~',
        }
    }
}

impl Renderer for TextRenderer {
    fn draw(&mut self, state: &GameState) {
        let level = state.level();
        let (width, height) = (level.width(), level.height());
        let mut grid: Vec<Vec<char>> = level
            .rows()
            .map(|row| row.iter().copied().map(Self::tile_char).collect())
            .collect();

        // Player last so nothing hides it
        let actors = state
            .actors()
            .iter()
            .filter(|a| !a.is_player())
            .chain(std::iter::once(state.player_actor()));
        for actor in actors {
            let (pos, size) = (actor.pos(), actor.size());
            let x_start = pos.x.floor().max(0.0) as usize;
            let x_end = ((pos.x + size.x).ceil().max(0.0) as usize).min(width);
            let y_start = pos.y.floor().max(0.0) as usize;
            let y_end = ((pos.y + size.y).ceil().max(0.0) as usize).min(height);
            for row in grid.iter_mut().take(y_end).skip(y_start) {
                for cell in row.iter_mut().take(x_end).skip(x_start) {
                    *cell = Self::actor_char(actor);
                }
            }
        }

        self.frame = grid
            .into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
    }

    fn clear(&mut self) {
        self.frame.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Legend, Level};
    use std::rc::Rc;

    fn state(plan: &str) -> GameState {
        let level = Level::parse_seeded(plan, &Legend::default(), 5).expect("valid plan");
        GameState::start(Rc::new(level))
    }

    #[test]
    fn test_draw_start_frame() {
        let mut renderer = TextRenderer::new();
        renderer.draw(&state("#....#\n#@.o=#\n#+++##"));
        assert_eq!(renderer.frame(), "#@...#\n#@.o~#\n#+++##");
    }

    #[test]
    fn test_clear() {
        let mut renderer = TextRenderer::new();
        renderer.draw(&state("@o"));
        assert_eq!(renderer.frame(), "@o");
        renderer.clear();
        assert_eq!(renderer.frame(), "");
    }
}
