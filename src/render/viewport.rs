//! Scrolling window onto a level, in grid units

use std::ops::Range;

use crate::sim::{GameState, Level, Vector};

/// Visible region of the level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    /// Viewport sized for a canvas of `px_width` x `px_height` at `scale`
    pub fn for_canvas(px_width: f64, px_height: f64, scale: f64) -> Self {
        Self::new(px_width / scale, px_height / scale)
    }

    /// Scroll so `center` stays at least a third of the view from each edge.
    /// Never scrolls past the level bounds.
    pub fn scroll_to(&mut self, center: Vector, level: &Level) {
        let margin_x = self.width / 3.0;
        let margin_y = self.height / 3.0;
        let max_left = (level.width() as f64 - self.width).max(0.0);
        let max_top = (level.height() as f64 - self.height).max(0.0);

        if center.x < self.left + margin_x {
            self.left = (center.x - margin_x).max(0.0);
        } else if center.x > self.left + self.width - margin_x {
            self.left = (center.x + margin_x - self.width).min(max_left);
        }
        if center.y < self.top + margin_y {
            self.top = (center.y - margin_y).max(0.0);
        } else if center.y > self.top + self.height - margin_y {
            self.top = (center.y + margin_y - self.height).min(max_top);
        }
    }

    /// Keep the player in view
    pub fn follow(&mut self, state: &GameState) {
        let player = state.player_actor();
        let center = player.pos() + player.size().times(0.5);
        self.scroll_to(center, state.level());
    }

    /// Cell columns and rows at least partly visible, clipped to the level
    pub fn visible_cells(&self, level: &Level) -> (Range<usize>, Range<usize>) {
        let clip = |start: f64, len: f64, max: usize| {
            let from = (start.floor().max(0.0) as usize).min(max);
            let to = ((start + len).ceil().max(0.0) as usize).min(max);
            from..to
        };
        (
            clip(self.left, self.width, level.width()),
            clip(self.top, self.height, level.height()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Legend;

    fn wide_level() -> Level {
        let row = ".".repeat(60);
        let plan = format!("{row}\n{row}\n@{}\n{row}", ".".repeat(59));
        Level::parse_seeded(&plan, &Legend::default(), 0).expect("valid plan")
    }

    #[test]
    fn test_no_scroll_inside_margin() {
        let level = wide_level();
        let mut view = Viewport::new(30.0, 4.0);
        view.scroll_to(Vector::new(15.0, 2.0), &level);
        assert_eq!(view.left, 0.0);
        assert_eq!(view.top, 0.0);
    }

    #[test]
    fn test_scrolls_right_and_clamps() {
        let level = wide_level();
        let mut view = Viewport::new(30.0, 4.0);
        view.scroll_to(Vector::new(25.0, 2.0), &level);
        assert!((view.left - 5.0).abs() < 1e-9);

        view.scroll_to(Vector::new(59.5, 2.0), &level);
        assert_eq!(view.left, 30.0);
    }

    #[test]
    fn test_scrolls_back_left() {
        let level = wide_level();
        let mut view = Viewport::new(30.0, 4.0);
        view.left = 20.0;
        view.scroll_to(Vector::new(25.0, 2.0), &level);
        assert!((view.left - 15.0).abs() < 1e-9);
        view.scroll_to(Vector::new(1.0, 2.0), &level);
        assert_eq!(view.left, 0.0);
    }

    #[test]
    fn test_visible_cells_clip() {
        let level = wide_level();
        let view = Viewport {
            left: 58.5,
            top: -1.0,
            width: 10.0,
            height: 10.0,
        };
        let (cols, rows) = view.visible_cells(&level);
        assert_eq!(cols, 58..60);
        assert_eq!(rows, 0..4);
    }

    #[test]
    fn test_for_canvas() {
        let view = Viewport::for_canvas(600.0, 450.0, 20.0);
        assert_eq!(view.width, 30.0);
        assert_eq!(view.height, 22.5);
    }
}
