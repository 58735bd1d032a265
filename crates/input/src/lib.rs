//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`retris_types::GameAction`] intents.
//! The mapping is fixed; the engine decides whether an intent applies in
//! its current state.

pub mod map;

pub use retris_types as types;

pub use map::{handle_key_event, should_quit};
