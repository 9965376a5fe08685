//! Hint solver based on light chasing.
//!
//! Once the presses on the first row are fixed, every other press is forced:
//! a light left on in row `r - 1` can only be switched off by pressing the cell
//! below it. Enumerating all first-row press masks therefore enumerates every
//! solution, and the board is solvable iff some mask leaves the last row dark.
//!
//! The search runs along the narrower side of the board (the board is
//! transposed when it is wider than tall) so the mask space stays `2^min(rows, cols)`.

use std::ops::Range;

use rayon::prelude::*;

use super::Board;

/// Widest side the chase will enumerate (2^20 masks)
pub const MAX_CHASE_WIDTH: usize = 20;

/// Presses that turn a board dark, in row-major order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub presses: Vec<(usize, usize)>,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.presses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presses.is_empty()
    }

    /// First press to suggest as a hint
    pub fn first(&self) -> Option<(usize, usize)> {
        self.presses.first().copied()
    }
}

/// Find a minimal solution, trying first-row masks one by one
pub fn solve(board: &Board) -> Option<Solution> {
    search(board, |masks, chase| {
        masks
            .filter_map(|mask| chase(mask).map(|presses| (mask, presses)))
            .min_by_key(|(mask, presses)| (presses.len(), *mask))
    })
}

/// Same result as [`solve`], with the masks spread over the rayon pool
pub fn solve_parallel(board: &Board) -> Option<Solution> {
    search(board, |masks, chase| {
        masks
            .into_par_iter()
            .filter_map(|mask| chase(mask).map(|presses| (mask, presses)))
            .min_by_key(|(mask, presses)| (presses.len(), *mask))
    })
}

type Presses = Vec<(usize, usize)>;
type Candidate = (u64, Presses);
type Chase<'a> = &'a (dyn Fn(u64) -> Option<Presses> + Sync);

/// Shared driver: orient the board, run the mask search, map presses back
fn search<F>(board: &Board, pick: F) -> Option<Solution>
where
    F: for<'a> Fn(Range<u64>, Chase<'a>) -> Option<Candidate>,
{
    let transposed = board.cols() > board.rows();
    let oriented = if transposed {
        board.transposed()
    } else {
        board.clone()
    };

    let width = oriented.cols();
    if width > MAX_CHASE_WIDTH {
        log::warn!(
            "Board {}x{} is too wide to search for a hint",
            board.rows(),
            board.cols()
        );
        return None;
    }

    let chase = |mask: u64| chase_lights(&oriented, mask);
    let (_, mut presses) = pick(0..1u64 << width, &chase)?;

    if transposed {
        presses = presses.into_iter().map(|(r, c)| (c, r)).collect();
    }
    presses.sort_unstable();
    Some(Solution { presses })
}

/// Press the first row according to `mask`, chase lights down the board,
/// and return the presses if the board ends up dark.
fn chase_lights(board: &Board, mask: u64) -> Option<Presses> {
    let mut work = board.clone();
    let mut presses = Vec::new();

    let mut press = |work: &mut Board, row: usize, col: usize| {
        // Coordinates come from the board's own range
        let pressed = work.toggle(row, col);
        debug_assert!(pressed.is_ok(), "chase pressed ({}, {}) off the board", row, col);
        presses.push((row, col));
    };

    for col in 0..work.cols() {
        if mask >> col & 1 == 1 {
            press(&mut work, 0, col);
        }
    }

    for row in 1..work.rows() {
        for col in 0..work.cols() {
            if work.get(row - 1, col) == Some(true) {
                press(&mut work, row, col);
            }
        }
    }

    work.is_dark().then_some(presses)
}
