//! Bot paddle steering.
//!
//! The bot aims the middle of its paddle at the ball's row. Its position is
//! kept fractionally so slow difficulties still creep toward the target; the
//! rendered row is the rounded value.

use rand::Rng;

use crate::types::{BotParams, ARENA_HEIGHT, PADDLE_HEIGHT};

/// Highest legal top row for any paddle.
pub const MAX_PADDLE_Y: i32 = ARENA_HEIGHT - PADDLE_HEIGHT;

/// Row the bot wants its paddle top at for a ball on `ball_y`.
pub fn target_row(ball_y: i32) -> f64 {
    ball_y as f64 - PADDLE_HEIGHT as f64 / 2.0
}

/// Advance the bot one frame.
///
/// Returns the new (clamped) position. With probability `mistake_chance`
/// the bot stays put for the frame.
pub fn step<R: Rng + ?Sized>(bot_y: f64, ball_y: i32, params: &BotParams, rng: &mut R) -> f64 {
    if params.mistake_chance > 0.0 && rng.gen_bool(params.mistake_chance.min(1.0)) {
        return bot_y;
    }

    let diff = target_row(ball_y) - bot_y;
    if diff.abs() < 1.0 {
        return bot_y;
    }

    clamp_row(bot_y + diff.signum() * params.speed)
}

/// Clamp a fractional paddle position into `[0, MAX_PADDLE_Y]`.
pub fn clamp_row(y: f64) -> f64 {
    y.clamp(0.0, MAX_PADDLE_Y as f64)
}

/// Nearest cell for a fractional paddle position.
pub fn cell(y: f64) -> i32 {
    (clamp_row(y).round() as i32).clamp(0, MAX_PADDLE_Y)
}
