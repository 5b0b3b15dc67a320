//! Rendering module
//!
//! Renderers consume `GameState` snapshots: the tile grid plus every actor's
//! position, size and color. Nothing here feeds back into the simulation.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod text;
pub mod viewport;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use text::TextRenderer;
pub use viewport::Viewport;

use crate::sim::{Color, GameState, Tile};

/// Sky behind everything
pub const BACKGROUND: Color = Color::rgb(52, 166, 251);

/// Paint color for a static tile, `None` for empty cells
pub fn tile_color(tile: Tile) -> Option<Color> {
    match tile {
        Tile::Empty => None,
        Tile::Wall => Some(Color::rgb(255, 255, 255)),
        Tile::Hazard => Some(Color::rgb(255, 100, 100)),
    }
}

/// A drawing target for game state snapshots
pub trait Renderer {
    /// Paint `state`, replacing whatever was drawn before
    fn draw(&mut self, state: &GameState);

    /// Remove everything this renderer has drawn
    fn clear(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_colors() {
        assert_eq!(tile_color(Tile::Empty), None);
        assert_eq!(tile_color(Tile::Hazard), Some(crate::sim::Lava::COLOR));
        assert!(tile_color(Tile::Wall).is_some());
    }
}
