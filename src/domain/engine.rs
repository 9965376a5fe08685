//! The three game operations: build a random board, toggle a cell, check for a win.
//!
//! All functions are pure with respect to their inputs. Randomness is taken
//! from whatever `rand::Rng` the caller supplies, so tests can pass a seeded
//! generator and the game can pass a thread or OS-seeded one.

use rand::Rng;

use super::{Board, GameConfig, GameResult};

/// Build a `rows x cols` board, lighting each cell independently
/// with `config.light_probability`.
pub fn initialize<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> GameResult<Board> {
    config.validate()?;

    let mut board = Board::new(config.rows, config.cols);
    for row in 0..config.rows {
        for col in 0..config.cols {
            board.set(row, col, rng.random_bool(config.light_probability));
        }
    }
    Ok(board)
}

/// Return a new board with the clicked cell and its in-bounds neighbors flipped.
/// Fails with `OutOfBounds` only when the clicked cell is off the board.
pub fn toggle(board: &Board, row: usize, col: usize) -> GameResult<Board> {
    let mut next = board.clone();
    next.toggle(row, col)?;
    Ok(next)
}

/// True iff every cell is off
pub fn is_won(board: &Board) -> bool {
    board.is_dark()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GameError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn changed_cells(a: &Board, b: &Board) -> Vec<(usize, usize)> {
        a.iter_cells()
            .zip(b.iter_cells())
            .filter(|((_, _, x), (_, _, y))| x != y)
            .map(|((r, c, _), _)| (r, c))
            .collect()
    }

    #[test]
    fn test_initialize_matches_dimensions() {
        let mut rng = StdRng::seed_from_u64(7);
        for (rows, cols) in [(1, 1), (5, 5), (3, 8), (10, 2)] {
            let config = GameConfig::default().with_dimensions(rows, cols);
            let board = initialize(&config, &mut rng).unwrap();
            assert_eq!(board.dimensions(), (rows, cols));
        }
    }

    #[test]
    fn test_initialize_is_deterministic_for_a_seed() {
        let config = GameConfig::default();
        let a = initialize(&config, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = initialize(&config, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_probability_zero_starts_won() {
        let config = GameConfig::default().with_light_probability(0.0);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert!(is_won(&initialize(&config, &mut rng).unwrap()));
        }
    }

    #[test]
    fn test_probability_one_lights_everything() {
        let config = GameConfig::default().with_light_probability(1.0);
        let board = initialize(&config, &mut StdRng::seed_from_u64(1)).unwrap();
        assert!(!is_won(&board));
        assert_eq!(board.count_lit(), 25);
    }

    #[test]
    fn test_initialize_rejects_invalid_config() {
        let mut rng = StdRng::seed_from_u64(1);
        let bad = GameConfig::default().with_light_probability(1.5);
        assert!(matches!(
            initialize(&bad, &mut rng),
            Err(GameError::InvalidConfig(_))
        ));

        let bad = GameConfig::default().with_dimensions(0, 0);
        assert!(matches!(
            initialize(&bad, &mut rng),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_toggle_flips_only_plus_shape() {
        let mut rng = StdRng::seed_from_u64(2024);
        let config = GameConfig::default().with_light_probability(0.5);
        let board = initialize(&config, &mut rng).unwrap();

        for row in 0..5 {
            for col in 0..5 {
                let next = toggle(&board, row, col).unwrap();
                let changed = changed_cells(&board, &next);

                let expected_neighbors = [row > 0, row < 4, col > 0, col < 4]
                    .iter()
                    .filter(|&&exists| exists)
                    .count();
                assert_eq!(changed.len(), 1 + expected_neighbors);
                for (r, c) in changed {
                    assert!(
                        r.abs_diff(row) + c.abs_diff(col) <= 1,
                        "({}, {}) flipped by toggle at ({}, {})", r, c, row, col
                    );
                }
            }
        }
    }

    #[test]
    fn test_toggle_twice_restores_board() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = GameConfig::default().with_dimensions(4, 6).with_light_probability(0.5);
        let board = initialize(&config, &mut rng).unwrap();

        for row in 0..4 {
            for col in 0..6 {
                let once = toggle(&board, row, col).unwrap();
                assert_ne!(once, board);
                assert_eq!(toggle(&once, row, col).unwrap(), board);
            }
        }
    }

    #[test]
    fn test_toggle_does_not_modify_input() {
        let board = Board::new(3, 3);
        let _ = toggle(&board, 1, 1).unwrap();
        assert!(board.is_dark());
    }

    #[test]
    fn test_toggle_out_of_bounds() {
        let board = Board::new(5, 5);
        assert!(matches!(
            toggle(&board, 5, 0),
            Err(GameError::OutOfBounds { row: 5, col: 0, .. })
        ));
        assert!(matches!(
            toggle(&board, 0, 9),
            Err(GameError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_three_by_three_scenario() {
        let board = Board::new(3, 3);
        assert!(is_won(&board));

        let lit = toggle(&board, 1, 1).unwrap();
        let expected = Board::from_rows(&[
            [false, true, false],
            [true, true, true],
            [false, true, false],
        ])
        .unwrap();
        assert_eq!(lit, expected);
        assert!(!is_won(&lit));

        let dark = toggle(&lit, 1, 1).unwrap();
        assert_eq!(dark, board);
        assert!(is_won(&dark));
    }

    #[test]
    fn test_is_won_false_with_single_light() {
        let mut board = Board::new(5, 5);
        board.set(4, 2, true);
        assert!(!is_won(&board));
    }
}
