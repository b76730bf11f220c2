//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the Pong rules, state management, and simulation step.
//! It has **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical matches
//! - **Testable**: Unit tests for every rule of the update step
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`game_state`]: Paddles, ball, scores and the per-frame update
//! - [`bot`]: Difficulty-aware bot paddle steering
//! - [`physics`]: Paddle deflection angle and velocity projection
//! - [`snapshot`]: Plain copy of the state for renderers
//!
//! # Frame order
//!
//! Every call to [`GameState::update`](game_state::GameState::update) runs:
//!
//! 1. Advance the ball by its velocity
//! 2. Steer the bot paddle toward the ball (unless it fumbles)
//! 3. Bounce off the top and bottom walls
//! 4. Deflect off a paddle the ball reached
//! 5. Award a point if the ball left the arena, re-serving from the center
//! 6. Stop the match once a side reaches [`WIN_SCORE`](types::WIN_SCORE)
//!
//! # Example
//!
//! ```
//! use order_core::GameState;
//! use order_types::{Difficulty, PongAction};
//!
//! let mut game = GameState::new(Difficulty::Medium, 12345);
//! game.apply_action(PongAction::PaddleUp);
//! game.update();
//! assert!(game.running());
//!
//! game.apply_action(PongAction::Quit);
//! assert!(!game.running());
//! ```

pub mod bot;
pub mod game_state;
pub mod physics;
pub mod snapshot;

pub use order_types as types;

// Re-export commonly used types for convenience
pub use game_state::{Ball, GameState};
pub use physics::{deflect, Deflection};
pub use snapshot::GameSnapshot;
