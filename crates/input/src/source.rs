//! Key sources polled by the game loop.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::PongAction;

/// Something the game loop can wait on for player input.
pub trait KeySource {
    /// Wait at most `timeout` for one input event.
    ///
    /// Returns `Ok(None)` on timeout or for events that map to no action.
    fn next_action(&mut self, timeout: Duration) -> Result<Option<PongAction>>;
}

/// Reads key presses from the controlling terminal.
///
/// Requires raw mode to be enabled so arrow keys arrive unbuffered.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl TerminalKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for TerminalKeys {
    fn next_action(&mut self, timeout: Duration) -> Result<Option<PongAction>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            // Holding an arrow key repeats the move.
            Event::Key(key) if key.kind != KeyEventKind::Release => Ok(handle_key_event(key)),
            _ => Ok(None),
        }
    }
}

/// Replays a fixed sequence of actions, one per poll.
///
/// A `None` entry (or an exhausted script) behaves like an idle keyboard and
/// waits out the timeout.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    script: VecDeque<Option<PongAction>>,
    polls: usize,
}

impl ScriptedKeys {
    pub fn new<I: IntoIterator<Item = Option<PongAction>>>(script: I) -> Self {
        Self {
            script: script.into_iter().collect(),
            polls: 0,
        }
    }

    /// Number of times the loop polled this source.
    pub fn polls(&self) -> usize {
        self.polls
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_action(&mut self, timeout: Duration) -> Result<Option<PongAction>> {
        self.polls += 1;
        match self.script.pop_front().flatten() {
            Some(action) => Ok(Some(action)),
            None => {
                std::thread::sleep(timeout);
                Ok(None)
            }
        }
    }
}
