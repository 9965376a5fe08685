use std::fmt;

/// Errors raised by the game engine and its configuration
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// Non-positive dimensions, a probability outside [0, 1], or a bad CLI value
    InvalidConfig(String),
    /// The clicked cell itself lies outside the board
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            GameError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "Cell ({}, {}) is outside the {}x{} board",
                row, col, rows, cols
            ),
        }
    }
}

impl std::error::Error for GameError {}

/// Result type alias for engine operations
pub type GameResult<T> = Result<T, GameError>;
