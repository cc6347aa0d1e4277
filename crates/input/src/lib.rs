//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`brickfall_types::GameAction`] move
//! intents. Intentionally independent of any UI framework; the intents carry
//! no payload beyond their kind.

pub mod map;

pub use brickfall_types as types;

pub use map::{handle_key_event, should_quit};
