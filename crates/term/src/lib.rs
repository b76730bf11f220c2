//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is flushed to the terminal with
//! a full clear-and-repaint each frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep raw mode scoped to the renderer's lifetime

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use order_core as core;
pub use order_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{score_line, GameView};
pub use renderer::{
    clear_screen, encode_full_into, encode_restore_into, restore_on_termination,
    signal_exit_status, FrameSink, TerminalRenderer,
};
