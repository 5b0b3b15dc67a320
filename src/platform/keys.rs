//! Pressed-key tracking
//!
//! Key events arrive asynchronously; the game samples a [`Keys`] snapshot
//! once per frame.

use std::collections::HashMap;

use crate::sim::Keys;
use crate::sim::tick::{KEY_LEFT, KEY_RIGHT, KEY_UP};

/// Key names the tracker records; everything else is ignored
pub const TRACKED_KEYS: [&str; 3] = [KEY_LEFT, KEY_RIGHT, KEY_UP];

/// `key name → pressed` map fed by keydown/keyup events
#[derive(Debug, Clone, Default)]
pub struct KeyTracker {
    pressed: HashMap<String, bool>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Is `name` one of the keys the game reads?
    pub fn tracks(name: &str) -> bool {
        TRACKED_KEYS.contains(&name)
    }

    /// Record a keydown. Returns whether the key is tracked.
    pub fn press(&mut self, name: &str) -> bool {
        self.set(name, true)
    }

    /// Record a keyup. Returns whether the key is tracked.
    pub fn release(&mut self, name: &str) -> bool {
        self.set(name, false)
    }

    fn set(&mut self, name: &str, down: bool) -> bool {
        if !Self::tracks(name) {
            return false;
        }
        self.pressed.insert(name.to_string(), down);
        true
    }

    pub fn is_pressed(&self, name: &str) -> bool {
        self.pressed.get(name).copied().unwrap_or(false)
    }

    /// Release everything (focus loss)
    pub fn clear(&mut self) {
        self.pressed.clear();
    }

    /// Input for the next frame
    pub fn snapshot(&self) -> Keys {
        Keys::from_named(&self.pressed)
    }
}
