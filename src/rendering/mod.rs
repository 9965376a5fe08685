use macroquad::prelude::*;

use crate::application::{BoardLayout, GameState, Phase};
use crate::ui::{Button, TITLE_HEIGHT};

const NEON_ORANGE: Color = Color::new(1.0, 0.42, 0.1, 1.0);
const NEON_BLUE: Color = Color::new(0.29, 0.83, 1.0, 1.0);
const LIT_COLOR: Color = Color::new(0.55, 0.9, 1.0, 1.0);
const OFF_COLOR: Color = Color::new(0.06, 0.07, 0.12, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.18, 0.28, 1.0);
const HINT_COLOR: Color = Color::new(1.0, 0.85, 0.2, 1.0);

const CELL_GAP: f32 = 4.0;

/// Draw two words side by side, centred, each in its own colour
fn draw_two_tone(left: &str, right: &str, center_y: f32, size: u16) {
    let gap = size as f32 * 0.4;
    let left_dim = measure_text(left, None, size, 1.0);
    let right_dim = measure_text(right, None, size, 1.0);
    let total = left_dim.width + gap + right_dim.width;
    let x = (screen_width() - total) / 2.0;
    let baseline = center_y + left_dim.height / 2.0;

    draw_text(left, x, baseline, size as f32, NEON_ORANGE);
    draw_text(right, x + left_dim.width + gap, baseline, size as f32, NEON_BLUE);
}

/// "Lights Out" title above the board
pub fn draw_title() {
    draw_two_tone("Lights", "Out", TITLE_HEIGHT / 2.0, 64);
}

/// Full-screen "YOU WIN !" banner shown instead of the board
pub fn draw_win_banner() {
    draw_two_tone("YOU", "WIN !", screen_height() / 2.0 - 40.0, 96);
}

/// Draw the board cells, with a soft glow around lit ones
pub fn draw_board(state: &GameState, layout: &BoardLayout) {
    let size = layout.cell_size;
    let inner = (size - CELL_GAP).max(1.0);

    for (row, col, lit) in state.board().iter_cells() {
        let (x, y) = layout.cell_to_screen(row, col);
        let (cx, cy) = (x + CELL_GAP / 2.0, y + CELL_GAP / 2.0);

        if lit {
            let glow = Color::new(LIT_COLOR.r, LIT_COLOR.g, LIT_COLOR.b, 0.25);
            draw_rectangle(x, y, size, size, glow);
            draw_rectangle(cx, cy, inner, inner, LIT_COLOR);
        } else {
            draw_rectangle(cx, cy, inner, inner, OFF_COLOR);
        }
        draw_rectangle_lines(cx, cy, inner, inner, 1.0, GRID_LINE_COLOR);
    }

    if let Some((row, col)) = state.hint() {
        let (x, y) = layout.cell_to_screen(row, col);
        draw_rectangle_lines(x + 1.0, y + 1.0, size - 2.0, size - 2.0, 3.0, HINT_COLOR);
    }
}

/// Draw the whole frame for the current phase
pub fn draw_frame(
    state: &GameState,
    layout: &BoardLayout,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    clear_background(BLACK);

    match state.phase() {
        Phase::Playing => {
            draw_title();
            draw_board(state, layout);
        }
        Phase::Won => draw_win_banner(),
    }

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let config = state.config();
    draw_text(
        &format!(
            "{}x{}  {:.0}% lit at start  N: new  H: hint  Esc: quit",
            config.rows,
            config.cols,
            config.light_probability * 100.0
        ),
        10.0,
        screen_height() - 10.0,
        16.0,
        GRAY,
    );
}
