pub mod components;
pub mod config;
pub mod input;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use input::*;
pub use state::*;

use systems::*;

/// Run one deterministic frame of the Pong simulation.
///
/// Systems run in a fixed order: paddles move, the ball integrates its
/// velocity, then the wall-bounce, paddle-bounce, and scoring checks are
/// each evaluated independently. `events` is cleared at the start and
/// records what this frame did.
pub fn step(state: &mut GameState, input: &InputState, config: &Config, events: &mut Events) {
    events.clear();

    // 1. Move paddles from held keys
    move_paddles(state, input, config);

    // 2. Move ball
    move_ball(state);

    // 3. Reflect off the top/bottom edges
    bounce_walls(state, config, events);

    // 4. Reflect off paddles
    bounce_paddles(state, events);

    // 5. Award points for side-edge exits
    check_scoring(state, config, events);
}
