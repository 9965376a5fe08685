mod game_state;
mod layout;

pub use game_state::{GameState, Phase, ToggleOutcome};
pub use layout::BoardLayout;
