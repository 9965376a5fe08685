use macroquad::prelude::*;

use crate::application::{BoardLayout, GameState, Phase, ToggleOutcome};
use crate::audio::SoundCues;
use crate::domain::GameResult;
use crate::ui::{Button, UiAction};

/// Forward a click at a screen position to the board.
/// Only in-bounds cells reach the engine, and nothing is forwarded once won.
pub fn apply_click(
    state: &mut GameState,
    layout: &BoardLayout,
    mouse_pos: (f32, f32),
) -> Option<ToggleOutcome> {
    if state.phase() == Phase::Won {
        return None;
    }

    let (row, col) = layout.screen_to_cell(mouse_pos.0, mouse_pos.1)?;
    match state.toggle(row, col) {
        Ok(outcome) => Some(outcome),
        Err(err) => {
            log::error!("Click mapped outside the board: {}", err);
            None
        }
    }
}

/// Run a footer or keyboard action
pub fn apply_action(state: &mut GameState, action: UiAction) -> GameResult<()> {
    match action {
        UiAction::NewGame => state.new_game()?,
        UiAction::Hint => match state.request_hint() {
            Some((row, col)) => log::info!("Hint: press ({}, {})", row, col),
            None => log::debug!("No hint available"),
        },
    }
    Ok(())
}

/// Handle a left click on the board, playing whatever cues it calls for
pub fn handle_board_click(
    state: &mut GameState,
    layout: &BoardLayout,
    sounds: &SoundCues,
    mouse_pos: (f32, f32),
) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    if let Some(outcome) = apply_click(state, layout, mouse_pos) {
        sounds.react(outcome);
    }
}

/// Actions requested this frame from buttons and keys
pub fn collect_actions(buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<UiAction> {
    let keys = [(KeyCode::N, UiAction::NewGame), (KeyCode::H, UiAction::Hint)];

    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .map(Button::action)
        .chain(
            keys.iter()
                .filter(|(key, _)| is_key_pressed(*key))
                .map(|&(_, action)| action),
        )
        .collect()
}
