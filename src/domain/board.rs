use super::error::{GameError, GameResult};

/// Offsets of the plus-shaped toggle pattern, clicked cell first
const PLUS_SHAPE: [(isize, isize); 5] = [(0, 0), (0, 1), (0, -1), (1, 0), (-1, 0)];

/// Board is the Lights Out grid of lit/off cells.
/// Cells are stored row-major in a flat vector; dimensions never change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Board {
    /// Create a board with every cell off
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Build a board from nested rows, e.g. `[[false, true], [true, true]]`.
    /// Returns `None` when the rows are ragged.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Option<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        if rows.iter().any(|r| r.as_ref().len() != cols) {
            return None;
        }
        let cells = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Some(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Get board dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.contains(row, col)
            .then(|| self.cells[self.get_index(row, col)])
    }

    /// Set cell at position; out-of-bounds writes are ignored
    pub fn set(&mut self, row: usize, col: usize, lit: bool) {
        if self.contains(row, col) {
            let idx = self.get_index(row, col);
            self.cells[idx] = lit;
        }
    }

    /// Flip a single cell; out-of-bounds positions are a no-op
    fn flip(&mut self, row: isize, col: isize) {
        if row < 0 || col < 0 {
            return;
        }
        let (row, col) = (row as usize, col as usize);
        if self.contains(row, col) {
            let idx = self.get_index(row, col);
            self.cells[idx] = !self.cells[idx];
        }
    }

    /// Toggle in place: flip the clicked cell and its orthogonal neighbors.
    /// The clicked cell must be on the board; neighbors off the edge are skipped.
    pub fn toggle(&mut self, row: usize, col: usize) -> GameResult<()> {
        if !self.contains(row, col) {
            return Err(GameError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }

        let (r, c) = (row as isize, col as isize);
        for (dr, dc) in PLUS_SHAPE {
            self.flip(r + dr, c + dc);
        }
        Ok(())
    }

    /// True when every cell is off
    pub fn is_dark(&self) -> bool {
        self.cells.iter().all(|&lit| !lit)
    }

    pub fn count_lit(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }

    /// Swap rows and columns
    pub fn transposed(&self) -> Self {
        let mut out = Self::new(self.cols, self.rows);
        for (row, col, lit) in self.iter_cells() {
            out.set(col, row, lit);
        }
        out
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &lit)| (idx / self.cols, idx % self.cols, lit))
    }
}
