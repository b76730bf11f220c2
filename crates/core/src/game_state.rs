//! Game state module - manages the complete match state
//!
//! This module ties together the ball, both paddles, the bot and scoring.
//! It handles the per-frame update, player actions and the match lifecycle.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bot::{self, MAX_PADDLE_Y};
use crate::physics::{self, Deflection};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Ball position and velocity (cells, cells per frame)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub vx: i32,
    pub vy: i32,
}

impl Ball {
    /// A ball in the middle of the arena
    pub fn centered(vx: i32, vy: i32) -> Self {
        Self {
            x: ARENA_WIDTH / 2,
            y: ARENA_HEIGHT / 2,
            vx,
            vy,
        }
    }
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct GameState {
    difficulty: Difficulty,
    params: BotParams,
    player_y: i32,
    /// Fractional so slow bots still make progress; read through [`bot::cell`].
    bot_y: f64,
    ball: Ball,
    player_score: u32,
    bot_score: u32,
    running: bool,
    /// Frames simulated so far.
    frame: u64,
    last_deflection: Option<Deflection>,
    seed: u64,
    rng: StdRng,
}

impl GameState {
    /// Create a new match with the given difficulty and RNG seed
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_params(difficulty, difficulty.params(), seed)
    }

    /// Create a match with explicit bot tuning
    pub fn with_params(difficulty: Difficulty, params: BotParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let vx = random_sign(&mut rng);
        let vy = random_sign(&mut rng);
        let mid = (ARENA_HEIGHT - PADDLE_HEIGHT) / 2;

        Self {
            difficulty,
            params,
            player_y: mid,
            bot_y: mid as f64,
            ball: Ball::centered(vx, vy),
            player_score: 0,
            bot_score: 0,
            running: true,
            frame: 0,
            last_deflection: None,
            seed,
            rng,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.params.frame_delay_ms)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn player_y(&self) -> i32 {
        self.player_y
    }

    /// Bot paddle top row, rounded to the nearest cell
    pub fn bot_y(&self) -> i32 {
        bot::cell(self.bot_y)
    }

    pub fn ball(&self) -> Ball {
        self.ball
    }

    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    pub fn bot_score(&self) -> u32 {
        self.bot_score
    }

    /// Angle and velocity of the most recent paddle hit
    pub fn last_deflection(&self) -> Option<Deflection> {
        self.last_deflection
    }

    /// How the match ended, once it has
    pub fn outcome(&self) -> Option<Outcome> {
        if self.running {
            return None;
        }
        Some(if self.player_score >= WIN_SCORE {
            Outcome::PlayerWon
        } else if self.bot_score >= WIN_SCORE {
            Outcome::BotWon
        } else {
            Outcome::Quit
        })
    }

    // Positioning hooks for scripted scenarios (benches, tests).

    pub fn set_ball(&mut self, ball: Ball) {
        self.ball = ball;
    }

    pub fn set_player_y(&mut self, y: i32) {
        self.player_y = y.clamp(0, MAX_PADDLE_Y);
    }

    pub fn set_bot_y(&mut self, y: f64) {
        self.bot_y = bot::clamp_row(y);
    }

    pub fn set_scores(&mut self, player: u32, bot: u32) {
        self.player_score = player;
        self.bot_score = bot;
        self.check_finished();
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.player_y = self.player_y;
        out.bot_y = self.bot_y();
        out.ball_x = self.ball.x;
        out.ball_y = self.ball.y;
        out.player_score = self.player_score;
        out.bot_score = self.bot_score;
        out.difficulty = self.difficulty;
        out.running = self.running;
        out.frame = self.frame;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply a player action.
    ///
    /// Paddle moves are clamped; quitting ends the match immediately.
    pub fn apply_action(&mut self, action: PongAction) {
        if !self.running {
            return;
        }
        match action {
            PongAction::PaddleUp => self.move_player(-1),
            PongAction::PaddleDown => self.move_player(1),
            PongAction::Quit => self.running = false,
        }
    }

    fn move_player(&mut self, dy: i32) {
        self.player_y = (self.player_y + dy).clamp(0, MAX_PADDLE_Y);
    }

    /// Run one simulation frame.
    ///
    /// Returns the side that scored, if any. Does nothing once the match has
    /// stopped.
    pub fn update(&mut self) -> Option<Point> {
        if !self.running {
            return None;
        }
        self.frame += 1;

        let prev = self.ball;
        self.ball.x += self.ball.vx;
        self.ball.y += self.ball.vy;

        self.bot_y = bot::step(self.bot_y, self.ball.y, &self.params, &mut self.rng);

        self.bounce_walls();
        self.collide_paddles(prev);

        let point = self.scored()?;
        self.award(point);
        Some(point)
    }

    fn bounce_walls(&mut self) {
        if self.ball.y <= 0 {
            self.ball.y = 0;
            self.ball.vy = self.ball.vy.abs().max(1);
        } else if self.ball.y >= ARENA_HEIGHT - 1 {
            self.ball.y = ARENA_HEIGHT - 1;
            self.ball.vy = -self.ball.vy.abs().max(1);
        }
    }

    fn collide_paddles(&mut self, prev: Ball) {
        let ball = self.ball;

        if ball.vx < 0 && prev.x >= PLAYER_COLUMN && ball.x <= PLAYER_COLUMN {
            if let Some(row) = contact_row(self.player_y, prev.y, ball.y) {
                self.deflect_off(PLAYER_COLUMN, self.player_y, row, 1);
            }
            return;
        }

        let bot_y = self.bot_y();
        if ball.vx > 0 && prev.x <= BOT_COLUMN && ball.x >= BOT_COLUMN {
            if let Some(row) = contact_row(bot_y, prev.y, ball.y) {
                self.deflect_off(BOT_COLUMN, bot_y, row, -1);
            }
        }
    }

    fn deflect_off(&mut self, column: i32, paddle_y: i32, row: i32, dir: i32) {
        let d = physics::deflect(&mut self.rng, row, paddle_y, dir);
        self.ball.vx = d.vx;
        self.ball.vy = d.vy;
        self.ball.x = column + d.vx;
        self.last_deflection = Some(d);
    }

    fn scored(&self) -> Option<Point> {
        if self.ball.x >= ARENA_WIDTH - 1 {
            Some(Point::Player)
        } else if self.ball.x <= 0 {
            Some(Point::Bot)
        } else {
            None
        }
    }

    fn award(&mut self, point: Point) {
        // Serve toward the side that conceded.
        let vx = match point {
            Point::Player => {
                self.player_score += 1;
                1
            }
            Point::Bot => {
                self.bot_score += 1;
                -1
            }
        };
        let vy = random_sign(&mut self.rng);
        self.ball = Ball::centered(vx, vy);
        self.check_finished();
    }

    fn check_finished(&mut self) {
        if self.player_score >= WIN_SCORE || self.bot_score >= WIN_SCORE {
            self.running = false;
        }
    }
}

/// Row where the ball met a paddle, if either end of its move was covered.
fn contact_row(paddle_y: i32, from_y: i32, to_y: i32) -> Option<i32> {
    let covers = |y: i32| y >= paddle_y && y < paddle_y + PADDLE_HEIGHT;
    if covers(from_y) {
        Some(from_y)
    } else if covers(to_y) {
        Some(to_y)
    } else {
        None
    }
}

fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    if rng.gen_bool(0.5) {
        1
    } else {
        -1
    }
}
