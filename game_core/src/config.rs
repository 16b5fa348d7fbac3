use glam::{IVec2, Vec2};

use crate::input::Key;

/// Game tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 40;
    pub const PADDLE_HEIGHT: i32 = 120;
    pub const PADDLE_SPEED: i32 = 5;

    // Ball
    pub const BALL_SIZE: i32 = 25;
    pub const BALL_VELOCITY: Vec2 = Vec2::new(1.0, -1.0);
}

/// Up/down key binding for one paddle
#[derive(Debug, Clone, Copy)]
pub struct PaddleKeys {
    pub up: Key,
    pub down: Key,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: i32,
    pub screen_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_speed: i32,
    pub ball_size: i32,
    pub ball_velocity: Vec2,
    /// Index-aligned with `GameState::paddles`
    pub bindings: [PaddleKeys; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_velocity: Params::BALL_VELOCITY,
            bindings: [
                PaddleKeys {
                    up: Key::W,
                    down: Key::S,
                },
                PaddleKeys {
                    up: Key::ArrowUp,
                    down: Key::ArrowDown,
                },
            ],
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for a paddle; both are flush with the screen edges
    /// and never move horizontally.
    pub fn paddle_x(&self, side: usize) -> i32 {
        if side == 0 {
            0
        } else {
            self.screen_width - self.paddle_width
        }
    }

    /// Vertically centered paddle spawn position
    pub fn paddle_spawn_y(&self) -> i32 {
        (self.screen_height - self.paddle_height) / 2
    }

    /// Ball spawn/respawn position at the screen center
    pub fn ball_spawn(&self) -> IVec2 {
        IVec2::new(
            self.screen_width / 2 - self.ball_size / 2,
            self.screen_height / 2 - self.ball_size / 2,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(0), 0, "Left paddle X position");
        assert_eq!(config.paddle_x(1), 760, "Right paddle X position");
    }

    #[test]
    fn test_config_paddle_spawn_y_is_centered() {
        let config = Config::new();
        let y = config.paddle_spawn_y();
        assert_eq!(y, 240);
        assert_eq!(y, config.screen_height - config.paddle_height - y);
    }

    #[test]
    fn test_config_ball_spawn_is_centered() {
        let config = Config::new();
        assert_eq!(config.ball_spawn(), IVec2::new(388, 288));
    }

    #[test]
    fn test_config_default_bindings() {
        let config = Config::new();
        assert_eq!(config.bindings[0].up, Key::W);
        assert_eq!(config.bindings[0].down, Key::S);
        assert_eq!(config.bindings[1].up, Key::ArrowUp);
        assert_eq!(config.bindings[1].down, Key::ArrowDown);
    }
}
