use crate::{Config, Events, GameState};

/// Award a point when the ball exits a side edge and respawn it centered.
///
/// Only the position resets; the ball keeps whatever velocity vector it
/// had, not the initial diagonal. Scores accumulate without cap and there
/// is no win condition.
pub fn check_scoring(state: &mut GameState, config: &Config, events: &mut Events) {
    let ball = &mut state.ball;
    if ball.pos.x < 0 {
        ball.pos = config.ball_spawn();
        state.scores[0] += 1;
        events.scored[0] = true;
    } else if ball.pos.x > config.screen_width - ball.size.x {
        ball.pos = config.ball_spawn();
        state.scores[1] += 1;
        events.scored[1] = true;
    }
}
