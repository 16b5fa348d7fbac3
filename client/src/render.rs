//! Wireframe rendering of the game state

use game_core::{Entity, GameState};
use macroquad::prelude::{
    clear_background, draw_rectangle_lines, draw_text, screen_width, BLACK, WHITE,
};

const STROKE: f32 = 2.0;
const SCORE_FONT_SIZE: f32 = 32.0;

/// One clear plus one unfilled-rectangle draw call per entity, then the
/// score line. No logic of its own.
pub fn draw(state: &GameState) {
    clear_background(BLACK);

    for paddle in &state.paddles {
        draw_entity(paddle);
    }
    draw_entity(&state.ball);

    let score_line = format!("{}   {}", state.scores[0], state.scores[1]);
    draw_text(
        &score_line,
        screen_width() / 2.0 - 40.0,
        SCORE_FONT_SIZE,
        SCORE_FONT_SIZE,
        WHITE,
    );
}

fn draw_entity(entity: &Entity) {
    draw_rectangle_lines(
        entity.pos.x as f32,
        entity.pos.y as f32,
        entity.size.x as f32,
        entity.size.y as f32,
        STROKE,
        WHITE,
    );
}
