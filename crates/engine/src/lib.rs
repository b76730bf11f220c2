//! Match driver.
//!
//! Runs a [`GameState`](order_core::GameState) against a key source and a
//! frame sink with one polling loop: draw, wait for keys until the frame
//! deadline, step the simulation. Keys are applied the moment they arrive,
//! so the state is only ever touched from this loop.

pub mod session;
pub mod summary;

pub use order_core as core;
pub use order_input as input;
pub use order_term as term;
pub use order_types as types;

pub use session::{is_interactive, play, run_match, MatchReport};
pub use summary::{finish, prompt_clear, summary_line, wants_clear};
