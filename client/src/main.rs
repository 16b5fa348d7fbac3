mod input;
mod render;

use game_core::{step, Config, Events, GameState, InputState, Key, Params};
use macroquad::prelude::{next_frame, Conf};
use tracing::{debug, info};

fn window_conf() -> Conf {
    Conf {
        window_title: "Pong".to_owned(),
        window_width: Params::SCREEN_WIDTH,
        window_height: Params::SCREEN_HEIGHT,
        fullscreen: false,
        ..Default::default()
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    info!("window up, starting match");

    let config = Config::new();
    let mut state = GameState::new(&config);
    let mut input = InputState::new();
    let mut events = Events::new();

    // Window close ends the loop from the host side; Escape ends it here.
    loop {
        input::poll(&mut input);
        if input.is_pressed(Key::Escape) {
            break;
        }

        step(&mut state, &input, &config, &mut events);
        log_events(&events, &state);

        render::draw(&state);
        next_frame().await;
    }

    info!(
        left = state.scores[0],
        right = state.scores[1],
        "shutting down"
    );
}

fn log_events(events: &Events, state: &GameState) {
    if events.wall_bounce {
        debug!("ball bounced off wall");
    }
    if events.paddle_bounce {
        debug!("ball bounced off paddle");
    }
    for (side, scored) in events.scored.iter().enumerate() {
        if *scored {
            info!(
                side,
                left = state.scores[0],
                right = state.scores[1],
                "point scored"
            );
        }
    }
}
