use glam::{IVec2, Vec2};

use crate::components::Entity;
use crate::config::Config;

/// The whole mutable game world: two paddles, one ball, two scores.
///
/// Owned by the frame loop for the process lifetime; the update step
/// borrows it mutably once per frame. Nothing is allocated or destroyed
/// during play - the ball resets in place and scores increment in place.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Index 0 = left/player 1, index 1 = right/player 2
    pub paddles: [Entity; 2],
    pub ball: Entity,
    /// Index-aligned with `paddles`; accumulates without cap
    pub scores: [u32; 2],
}

impl GameState {
    /// Paddles centered vertically at their fixed horizontal positions,
    /// ball centered with the initial diagonal velocity.
    pub fn new(config: &Config) -> Self {
        let paddle_size = IVec2::new(config.paddle_width, config.paddle_height);
        let spawn_y = config.paddle_spawn_y();
        let paddles = [
            Entity::new(
                IVec2::new(config.paddle_x(0), spawn_y),
                paddle_size,
                Vec2::ZERO,
            ),
            Entity::new(
                IVec2::new(config.paddle_x(1), spawn_y),
                paddle_size,
                Vec2::ZERO,
            ),
        ];
        let ball = Entity::new(
            config.ball_spawn(),
            IVec2::splat(config.ball_size),
            config.ball_velocity,
        );

        Self {
            paddles,
            ball,
            scores: [0, 0],
        }
    }
}

/// What the last update step did; cleared at the start of each step.
/// Consumed by the client for logging, carries no game logic.
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub wall_bounce: bool,
    pub paddle_bounce: bool,
    /// Index-aligned with `GameState::scores`
    pub scored: [bool; 2],
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
