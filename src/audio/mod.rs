//! Sound cues for clicks and the win.
//!
//! Cues are derived from `ToggleOutcome`, so the win sound plays on the move
//! that turns the last light off and never again while the win screen is up.

use macroquad::audio::{load_sound, play_sound, PlaySoundParams, Sound};

use crate::application::ToggleOutcome;

pub const CLICK_SOUND_PATH: &str = "assets/sounds/select.wav";
pub const WIN_SOUND_PATH: &str = "assets/sounds/win.wav";
pub const MASTER_VOLUME: f32 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Click,
    Win,
}

/// Cues to play for the result of a click
pub fn cues_for(outcome: ToggleOutcome) -> &'static [Cue] {
    match outcome {
        ToggleOutcome::Flipped => &[Cue::Click],
        ToggleOutcome::Won => &[Cue::Click, Cue::Win],
        ToggleOutcome::Ignored => &[],
    }
}

/// Loaded sounds. A missing file leaves its cue silent.
pub struct SoundCues {
    click: Option<Sound>,
    win: Option<Sound>,
    volume: f32,
}

impl SoundCues {
    pub async fn load() -> Self {
        Self {
            click: load_optional(CLICK_SOUND_PATH).await,
            win: load_optional(WIN_SOUND_PATH).await,
            volume: MASTER_VOLUME,
        }
    }

    pub fn play(&self, cue: Cue) {
        let sound = match cue {
            Cue::Click => &self.click,
            Cue::Win => &self.win,
        };
        if let Some(sound) = sound {
            play_sound(
                sound,
                PlaySoundParams {
                    looped: false,
                    volume: self.volume,
                },
            );
        }
    }

    /// Play everything a click outcome calls for
    pub fn react(&self, outcome: ToggleOutcome) {
        cues_for(outcome).iter().for_each(|&cue| self.play(cue));
    }
}

async fn load_optional(path: &str) -> Option<Sound> {
    match load_sound(path).await {
        Ok(sound) => {
            log::debug!("Loaded sound {}", path);
            Some(sound)
        }
        Err(err) => {
            log::warn!("Could not load sound {}: {}", path, err);
            None
        }
    }
}
