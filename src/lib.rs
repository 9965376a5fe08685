// Domain layer - Core game logic
pub mod domain;

// Application layer - Session state and screen layout
pub mod application;

// Infrastructure layer - UI, rendering, input, audio
pub mod ui;
pub mod rendering;
pub mod input;
pub mod audio;

// Re-exports for convenience
pub use domain::{Board, GameConfig, GameError, GameResult, initialize, toggle, is_won};
pub use application::{GameState, Phase, ToggleOutcome, BoardLayout};
