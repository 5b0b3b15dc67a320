//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Keyboard input (key tracking is pure; listeners are wasm32 only)

pub mod keys;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use keys::KeyTracker;
