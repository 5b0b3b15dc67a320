//! Actor/actor overlap testing
//!
//! Tile collisions go through `Level::touches`; this covers the pairwise case.

use super::actor::Actor;
use super::vector::Vector;

/// Positive-area intersection of two axis-aligned rectangles.
/// Touching edges do not count.
#[inline]
pub fn rects_overlap(a_pos: Vector, a_size: Vector, b_pos: Vector, b_size: Vector) -> bool {
    a_pos.x + a_size.x > b_pos.x
        && a_pos.x < b_pos.x + b_size.x
        && a_pos.y + a_size.y > b_pos.y
        && a_pos.y < b_pos.y + b_size.y
}

/// Do the two actors' rectangles overlap?
#[inline]
pub fn overlap(a: &Actor, b: &Actor) -> bool {
    rects_overlap(a.pos(), a.size(), b.pos(), b.size())
}
