/// BoardLayout places the board on screen and maps clicks back to cells
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32,
    rows: usize,
    cols: usize,
}

impl BoardLayout {
    /// Largest square cells that fit `rows x cols` into the area,
    /// centred horizontally and placed below `top`.
    pub fn fit(
        rows: usize,
        cols: usize,
        area_width: f32,
        area_height: f32,
        top: f32,
        max_cell: f32,
    ) -> Self {
        let avail_h = (area_height - top).max(0.0);
        let cell_size = (area_width / cols.max(1) as f32)
            .min(avail_h / rows.max(1) as f32)
            .min(max_cell)
            .floor()
            .max(1.0);

        let width = cell_size * cols as f32;
        Self {
            origin_x: ((area_width - width) / 2.0).max(0.0),
            origin_y: top,
            cell_size,
            rows,
            cols,
        }
    }

    pub fn width(&self) -> f32 {
        self.cell_size * self.cols as f32
    }

    pub fn height(&self) -> f32 {
        self.cell_size * self.rows as f32
    }

    /// Convert screen coordinates to a cell, `None` when outside the board
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32) -> Option<(usize, usize)> {
        let dx = screen_x - self.origin_x;
        let dy = screen_y - self.origin_y;
        if dx < 0.0 || dy < 0.0 {
            return None;
        }

        let col = (dx / self.cell_size) as usize;
        let row = (dy / self.cell_size) as usize;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// Top-left screen corner of a cell
    pub fn cell_to_screen(&self, row: usize, col: usize) -> (f32, f32) {
        (
            self.origin_x + col as f32 * self.cell_size,
            self.origin_y + row as f32 * self.cell_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_centres_board() {
        let layout = BoardLayout::fit(5, 5, 600.0, 700.0, 100.0, 200.0);
        assert_eq!(layout.cell_size, 120.0);
        assert_eq!(layout.width(), 600.0);
        assert_eq!(layout.origin_x, 0.0);

        let layout = BoardLayout::fit(5, 5, 1000.0, 700.0, 100.0, 100.0);
        assert_eq!(layout.cell_size, 100.0);
        assert_eq!(layout.origin_x, 250.0);
        assert_eq!(layout.origin_y, 100.0);
    }

    #[test]
    fn test_screen_to_cell() {
        let layout = BoardLayout::fit(3, 4, 400.0, 400.0, 0.0, 100.0);
        assert_eq!(layout.cell_size, 100.0);

        assert_eq!(layout.screen_to_cell(5.0, 5.0), Some((0, 0)));
        assert_eq!(layout.screen_to_cell(399.0, 299.0), Some((2, 3)));
        assert_eq!(layout.screen_to_cell(150.0, 250.0), Some((2, 1)));
    }

    #[test]
    fn test_clicks_outside_board() {
        let layout = BoardLayout::fit(3, 3, 900.0, 400.0, 50.0, 100.0);
        assert_eq!(layout.screen_to_cell(layout.origin_x - 1.0, 60.0), None);
        assert_eq!(layout.screen_to_cell(layout.origin_x + 10.0, 49.0), None);
        let right = layout.origin_x + layout.width();
        let bottom = layout.origin_y + layout.height();
        assert_eq!(layout.screen_to_cell(right, 60.0), None);
        assert_eq!(layout.screen_to_cell(layout.origin_x + 10.0, bottom), None);
    }

    #[test]
    fn test_round_trip_cell_centres() {
        let layout = BoardLayout::fit(5, 7, 800.0, 600.0, 80.0, 90.0);
        for row in 0..5 {
            for col in 0..7 {
                let (x, y) = layout.cell_to_screen(row, col);
                let half = layout.cell_size / 2.0;
                assert_eq!(layout.screen_to_cell(x + half, y + half), Some((row, col)));
            }
        }
    }
}
