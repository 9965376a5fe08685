mod board;
mod config;
mod error;
pub mod engine;
pub mod solver;

pub use board::Board;
pub use config::{GameConfig, USAGE, DEFAULT_ROWS, DEFAULT_COLS, DEFAULT_LIGHT_PROBABILITY};
pub use error::{GameError, GameResult};
pub use engine::{initialize, toggle, is_won};
pub use solver::{Solution, solve, solve_parallel};
