//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::PongAction`] and exposes a
//! [`KeySource`] the game loop polls with a frame deadline.

pub mod map;
pub mod source;

pub use order_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::{KeySource, ScriptedKeys, TerminalKeys};
