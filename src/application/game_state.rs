use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::domain::{self, Board, GameConfig, GameError, GameResult};

/// Whether the session is still accepting moves
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Won,
}

/// What a click did to the session.
/// `Won` is reported once, on the move that turns the last light off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    Flipped,
    Won,
    /// The session was already won; the click was dropped
    Ignored,
}

/// Seeded stream when the config has a seed, OS entropy otherwise
fn session_rng(config: &GameConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// GameState owns one Lights Out session.
/// This is the application layer that presentation code talks to: it exposes
/// the board read-only and funnels every change through `toggle`.
pub struct GameState {
    config: GameConfig,
    rng: StdRng,
    board: Board,
    has_won: bool,
    hint: Option<(usize, usize)>,
}

impl GameState {
    /// Start a session. A seeded config gives a reproducible sequence of boards.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        config.validate()?;

        let mut rng = session_rng(&config);
        let board = domain::initialize(&config, &mut rng)?;

        let state = Self {
            config,
            rng,
            has_won: domain::is_won(&board),
            board,
            hint: None,
        };
        state.log_session_start();
        Ok(state)
    }

    /// Start a session on a given board instead of a random one.
    /// The board must have the configured dimensions; later games are random.
    pub fn with_board(config: GameConfig, board: Board) -> GameResult<Self> {
        config.validate()?;
        if board.dimensions() != (config.rows, config.cols) {
            return Err(GameError::InvalidConfig(format!(
                "board is {}x{} but the game is configured for {}x{}",
                board.rows(),
                board.cols(),
                config.rows,
                config.cols
            )));
        }

        Ok(Self {
            rng: session_rng(&config),
            config,
            has_won: domain::is_won(&board),
            board,
            hint: None,
        })
    }

    /// Replace the board with a fresh random one, continuing the RNG stream
    pub fn new_game(&mut self) -> GameResult<()> {
        self.board = domain::initialize(&self.config, &mut self.rng)?;
        self.has_won = domain::is_won(&self.board);
        self.hint = None;
        self.log_session_start();
        Ok(())
    }

    fn log_session_start(&self) {
        let (rows, cols) = self.board.dimensions();
        log::info!(
            "New {}x{} board with {} lights on",
            rows,
            cols,
            self.board.count_lit()
        );
        if self.has_won {
            log::info!("Board started dark; nothing to play");
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn has_won(&self) -> bool {
        self.has_won
    }

    pub fn phase(&self) -> Phase {
        if self.has_won { Phase::Won } else { Phase::Playing }
    }

    /// Apply a click at (row, col).
    /// Clicks after the win are ignored; an off-board click is a caller error.
    pub fn toggle(&mut self, row: usize, col: usize) -> GameResult<ToggleOutcome> {
        if self.has_won {
            log::debug!("Ignoring click at ({}, {}) after win", row, col);
            return Ok(ToggleOutcome::Ignored);
        }

        self.board.toggle(row, col)?;
        self.has_won = domain::is_won(&self.board);
        self.hint = None;

        if self.has_won {
            log::info!("All lights out");
            Ok(ToggleOutcome::Won)
        } else {
            Ok(ToggleOutcome::Flipped)
        }
    }

    /// Suggest the next press, remembering it until the board changes
    pub fn request_hint(&mut self) -> Option<(usize, usize)> {
        if self.has_won {
            return None;
        }
        if self.hint.is_none() {
            let start = std::time::Instant::now();
            self.hint = domain::solve_parallel(&self.board).and_then(|s| s.first());
            log::debug!(
                "Hint search took {:.2}ms",
                start.elapsed().as_secs_f32() * 1000.0
            );
            if self.hint.is_none() {
                log::info!("No solution exists for this board");
            }
        }
        self.hint
    }

    /// Hint currently on display, if any
    pub fn hint(&self) -> Option<(usize, usize)> {
        self.hint
    }
}
