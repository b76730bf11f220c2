//! Order CLI (workspace facade crate).
//!
//! The one-shot commands live here; the Pong game is split across the crates
//! under `crates/` and re-exported as `order::{core,engine,input,term,types}`.

pub use order_core as core;
pub use order_engine as engine;
pub use order_input as input;
pub use order_term as term;
pub use order_types as types;

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod usage;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::CliError;
