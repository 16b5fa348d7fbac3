//! Keyboard input handling

use game_core::{InputState, Key};
use macroquad::prelude::{is_key_down, KeyCode};

/// Map between host key codes and the game's key identifiers
const KEY_MAP: [(KeyCode, Key); 5] = [
    (KeyCode::W, Key::W),
    (KeyCode::S, Key::S),
    (KeyCode::Up, Key::ArrowUp),
    (KeyCode::Down, Key::ArrowDown),
    (KeyCode::Escape, Key::Escape),
];

/// Fold the host's current keyboard state into the game's input snapshot.
/// Writes every mapped key each frame, so releases are observed too.
pub fn poll(input: &mut InputState) {
    for (code, key) in KEY_MAP {
        input.set_key(key, is_key_down(code));
    }
}
