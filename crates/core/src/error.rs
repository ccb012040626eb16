//! Error types for the tracker

use thiserror::Error;

/// Rejected user input. The triggering action leaves state untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Game name cannot be empty")]
    EmptyName,

    #[error("Achievement title cannot be empty")]
    EmptyTitle,
}

/// Failure reading or writing the saved collection.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Game {0} not found")]
    GameNotFound(u32),

    #[error("Achievement {achievement_id} not found in game {game_id}")]
    AchievementNotFound { game_id: u32, achievement_id: u32 },

    /// Every id up to `u32::MAX` is taken, usually by a hand-edited save file
    #[error("No {0} ids left to assign")]
    IdsExhausted(&'static str),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
