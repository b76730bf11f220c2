//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Arena dimensions (character cells)
pub const ARENA_WIDTH: i32 = 40;
pub const ARENA_HEIGHT: i32 = 15;

/// Paddle geometry
pub const PADDLE_HEIGHT: i32 = 3;
pub const PLAYER_COLUMN: i32 = 2;
pub const BOT_COLUMN: i32 = ARENA_WIDTH - 3;

/// Points needed to win a match
pub const WIN_SCORE: u32 = 5;

/// Deflection limits (degrees)
pub const MAX_DEFLECTION_DEG: f64 = 45.0;
pub const MIN_DEFLECTION_DEG: f64 = 15.0;
pub const DEFLECTION_JITTER_DEG: f64 = 15.0;
pub const DEFLECTION_PER_CELL_DEG: f64 = 20.0;

/// Bot skill level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Impossible,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Impossible,
    ];

    /// Parse difficulty from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            "impossible" => Some(Difficulty::Impossible),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Impossible => "impossible",
        }
    }

    pub fn params(&self) -> BotParams {
        match self {
            Difficulty::Easy => BotParams {
                speed: 0.5,
                mistake_chance: 0.30,
                frame_delay_ms: 140,
            },
            Difficulty::Medium => BotParams {
                speed: 0.75,
                mistake_chance: 0.15,
                frame_delay_ms: 110,
            },
            Difficulty::Hard => BotParams {
                speed: 1.0,
                mistake_chance: 0.05,
                frame_delay_ms: 90,
            },
            Difficulty::Impossible => BotParams {
                speed: 1.5,
                mistake_chance: 0.0,
                frame_delay_ms: 70,
            },
        }
    }
}

/// Difficulty-dependent tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BotParams {
    /// Cells per frame the bot paddle may move.
    pub speed: f64,
    /// Per-frame probability that the bot does not move.
    pub mistake_chance: f64,
    /// Interval between simulation steps.
    pub frame_delay_ms: u64,
}

/// Player actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PongAction {
    PaddleUp,
    PaddleDown,
    Quit,
}

/// Which side took a point in a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Point {
    Player,
    Bot,
}

/// How a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerWon,
    BotWon,
    Quit,
}

impl Outcome {
    pub fn headline(&self) -> &'static str {
        match self {
            Outcome::PlayerWon => "You win!",
            Outcome::BotWon => "You lose!",
            Outcome::Quit => "Game over.",
        }
    }
}
