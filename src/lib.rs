//! Obstacle Course - a side-scrolling runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `settings`: Tuning constants, difficulty presets and preferences
//! - `input`: Keyboard intents and jump debounce
//! - `audio`: Sound event routing to an external audio backend
//! - `highscores`: In-memory session leaderboard

pub mod audio;
pub mod error;
pub mod highscores;
pub mod input;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use highscores::HighScores;
pub use settings::{Difficulty, Settings, Tuning};

/// Reference tuning values
pub mod consts {
    /// Simulation rate (one tick per rendered frame)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;
    /// Top edge of the ground strip (y grows downward)
    pub const GROUND_Y: f32 = 350.0;

    /// Per-tick gravity (positive = downward)
    pub const GRAVITY: f32 = 0.8;
    /// Initial jump velocity (negative = upward)
    pub const JUMP_VELOCITY: f32 = -15.0;

    /// Player hitbox
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;

    /// Speed progression
    pub const INITIAL_GAME_SPEED: f32 = 5.0;
    pub const SPEED_INCREMENT: f32 = 1.0;
    pub const SCORE_THRESHOLD: u64 = 1000;

    /// Obstacles
    pub const OBSTACLE_WIDTH: f32 = 30.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 40.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 70.0;
    pub const OBSTACLE_MIN_DISTANCE: f32 = 200.0;

    /// Collectibles
    pub const COLLECTIBLE_MIN_DISTANCE: f32 = 100.0;
    pub const COIN_SIZE: f32 = 20.0;
    pub const COIN_VALUE: u32 = 10;
    pub const GEM_SIZE: f32 = 25.0;
    pub const GEM_VALUE: u32 = 50;
}
