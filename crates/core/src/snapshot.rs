use crate::types::Difficulty;

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub player_y: i32,
    pub bot_y: i32,
    pub ball_x: i32,
    pub ball_y: i32,
    pub player_score: u32,
    pub bot_score: u32,
    pub difficulty: Difficulty,
    pub running: bool,
    pub frame: u64,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            player_y: 0,
            bot_y: 0,
            ball_x: 0,
            ball_y: 0,
            player_score: 0,
            bot_score: 0,
            difficulty: Difficulty::Medium,
            running: true,
            frame: 0,
        }
    }
}
