//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{ARENA_HEIGHT, ARENA_WIDTH, BOT_COLUMN, PADDLE_HEIGHT, PLAYER_COLUMN};

pub const WALL: char = '│';
pub const PADDLE: char = '█';
pub const BALL: char = 'O';

/// Draws the arena followed by a one-line score readout.
#[derive(Debug, Clone)]
pub struct GameView {
    wall: CellStyle,
    player: CellStyle,
    bot: CellStyle,
    ball: CellStyle,
    text: CellStyle,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            wall: CellStyle::fg(Rgb::WALL),
            player: CellStyle::fg(Rgb::PLAYER).bold(),
            bot: CellStyle::fg(Rgb::BOT).bold(),
            ball: CellStyle::fg(Rgb::BALL).bold(),
            text: CellStyle::default(),
        }
    }
}

impl GameView {
    /// Framebuffer size this view draws into: the arena plus the score line.
    pub fn size() -> (u16, u16) {
        (ARENA_WIDTH as u16, ARENA_HEIGHT as u16 + 1)
    }

    /// Render a snapshot into an existing framebuffer.
    pub fn render_into(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        fb.wipe();

        fb.column(0, 0, ARENA_HEIGHT, WALL, self.wall);
        fb.column(ARENA_WIDTH - 1, 0, ARENA_HEIGHT, WALL, self.wall);

        fb.column(PLAYER_COLUMN, snap.player_y, PADDLE_HEIGHT, PADDLE, self.player);
        fb.column(BOT_COLUMN, snap.bot_y, PADDLE_HEIGHT, PADDLE, self.bot);

        // The ball is only visible inside the arena rows.
        if (0..ARENA_HEIGHT).contains(&snap.ball_y) {
            fb.plot(snap.ball_x, snap.ball_y, BALL, self.ball);
        }

        fb.text(0, ARENA_HEIGHT, &score_line(snap), self.text);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot) -> FrameBuffer {
        let (w, h) = Self::size();
        let mut fb = FrameBuffer::new(w, h);
        self.render_into(snap, &mut fb);
        fb
    }
}

/// Score readout shown under the arena.
pub fn score_line(snap: &GameSnapshot) -> String {
    format!(
        "You {} - {} Bot | {} | q quits",
        snap.player_score,
        snap.bot_score,
        snap.difficulty.as_str()
    )
}
