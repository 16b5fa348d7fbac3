use crate::{Config, GameState, InputState};

/// Apply paddle movement from held keys.
///
/// One else-if branch per paddle per frame, so moving up takes priority
/// when both keys are held. The bound check precedes the move and skips
/// it entirely at the boundary: a paddle can rest at exactly y = 0 or
/// y = screen_height - paddle_height, never beyond. Horizontal position
/// is fixed for life.
pub fn move_paddles(state: &mut GameState, input: &InputState, config: &Config) {
    for (paddle, keys) in state.paddles.iter_mut().zip(config.bindings) {
        if input.is_pressed(keys.up) && paddle.pos.y > 0 {
            paddle.pos.y -= config.paddle_speed;
        } else if input.is_pressed(keys.down)
            && paddle.pos.y < config.screen_height - config.paddle_height
        {
            paddle.pos.y += config.paddle_speed;
        }
    }
}

/// Integrate ball position by one frame of velocity.
///
/// Each component is truncated toward zero when added to the integer
/// position, so sub-pixel motion is lost every frame rather than
/// accumulated.
pub fn move_ball(state: &mut GameState) {
    let ball = &mut state.ball;
    ball.pos.x += ball.vel.x as i32;
    ball.pos.y += ball.vel.y as i32;
}
