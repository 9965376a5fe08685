use macroquad::prelude::*;
use lights_out::{
    GameConfig, GameState,
    audio::SoundCues,
    domain::USAGE,
    ui, rendering, input,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Lights Out".to_owned(),
        window_width: 720,
        window_height: 820,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match GameConfig::from_args(std::env::args().skip(1)) {
        Ok(Some(config)) => config,
        Ok(None) => {
            println!("{}", USAGE);
            return;
        }
        Err(err) => {
            log::error!("{}", err);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    let mut state = match GameState::new(config) {
        Ok(state) => state,
        Err(err) => {
            log::error!("Could not start game: {}", err);
            std::process::exit(1);
        }
    };

    let sounds = SoundCues::load().await;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let mouse_pos = mouse_position();
        let layout = ui::board_layout(state.board());
        let buttons = ui::create_buttons();

        input::handle_board_click(&mut state, &layout, &sounds, mouse_pos);
        for action in input::collect_actions(&buttons, mouse_pos) {
            if let Err(err) = input::apply_action(&mut state, action) {
                log::error!("{}", err);
            }
        }

        rendering::draw_frame(&state, &layout, &buttons, mouse_pos);

        next_frame().await;
    }
}
