mod button;

pub use button::{Button, UiAction};

use macroquad::prelude::{screen_height, screen_width};

use crate::application::BoardLayout;
use crate::domain::Board;

pub const TITLE_HEIGHT: f32 = 110.0;
pub const FOOTER_HEIGHT: f32 = 80.0;
pub const BUTTON_WIDTH: f32 = 160.0;
pub const BUTTON_HEIGHT: f32 = 44.0;
pub const BUTTON_GAP: f32 = 24.0;
pub const MAX_CELL_SIZE: f32 = 110.0;

/// Height available to the board between title and footer
pub fn board_area_height() -> f32 {
    screen_height() - FOOTER_HEIGHT
}

/// Fit the board into the current window
pub fn board_layout(board: &Board) -> BoardLayout {
    BoardLayout::fit(
        board.rows(),
        board.cols(),
        screen_width(),
        board_area_height(),
        TITLE_HEIGHT,
        MAX_CELL_SIZE,
    )
}

/// Footer buttons, centred under the board
pub fn create_buttons() -> Vec<Button> {
    let total = 2.0 * BUTTON_WIDTH + BUTTON_GAP;
    let x = (screen_width() - total) / 2.0;
    let y = screen_height() - FOOTER_HEIGHT + (FOOTER_HEIGHT - BUTTON_HEIGHT) / 2.0;
    let hint_x = x + BUTTON_WIDTH + BUTTON_GAP;
    vec![
        Button::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT, "New Game", UiAction::NewGame),
        Button::new(hint_x, y, BUTTON_WIDTH, BUTTON_HEIGHT, "Hint", UiAction::Hint),
    ]
}
