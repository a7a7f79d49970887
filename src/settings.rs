//! Tuning constants and player preferences
//!
//! `Tuning` is the immutable configuration every simulation component is
//! built from. `Settings` holds the player-facing preferences (audio toggles,
//! difficulty) that the driver applies on top of it.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::SpawnPolicy;

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "norm" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// How much more often obstacles spawn (divides spawn delays)
    pub fn obstacle_frequency(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.7,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.3,
        }
    }

    /// Multiplier on base speed and speed increment
    pub fn speed_multiplier(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.8,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.2,
        }
    }
}

/// Obstacle shape and spawn constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleTuning {
    pub width: f32,
    pub min_height: f32,
    pub max_height: f32,
    pub spawn: SpawnPolicy,
}

impl Default for ObstacleTuning {
    fn default() -> Self {
        Self {
            width: OBSTACLE_WIDTH,
            min_height: OBSTACLE_MIN_HEIGHT,
            max_height: OBSTACLE_MAX_HEIGHT,
            spawn: SpawnPolicy {
                initial_delay: 60,
                base_delay: 60,
                min_delay: 30,
                delay_per_speed: 2.0,
                delay_jitter: 10,
                min_separation: OBSTACLE_MIN_DISTANCE,
                anchor_jitter: 50.0,
            },
        }
    }
}

/// Collectible shape, value and spawn constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectibleTuning {
    pub coin_size: f32,
    pub coin_value: u32,
    pub gem_size: f32,
    pub gem_value: u32,
    /// Probability that a spawn is a coin rather than a gem
    pub coin_chance: f64,
    /// Lowest item top, measured upward from the ground
    pub min_clearance: f32,
    /// Highest item top, measured upward from the ground
    pub max_clearance: f32,
    pub spawn: SpawnPolicy,
}

impl Default for CollectibleTuning {
    fn default() -> Self {
        Self {
            coin_size: COIN_SIZE,
            coin_value: COIN_VALUE,
            gem_size: GEM_SIZE,
            gem_value: GEM_VALUE,
            coin_chance: 0.7,
            min_clearance: 30.0,
            max_clearance: 100.0,
            spawn: SpawnPolicy {
                initial_delay: 30,
                base_delay: 30,
                min_delay: 20,
                delay_per_speed: 1.0,
                delay_jitter: 5,
                min_separation: COLLECTIBLE_MIN_DISTANCE,
                anchor_jitter: 30.0,
            },
        }
    }
}

/// Every constant the simulation reads. Immutable for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,
    pub ground_y: f32,

    pub gravity: f32,
    pub jump_velocity: f32,

    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,

    pub base_speed: f32,
    pub speed_increment: f32,
    /// Score needed per speed step
    pub score_threshold: u64,

    pub obstacles: ObstacleTuning,
    pub collectibles: CollectibleTuning,

    /// Start sessions in the menu instead of straight into play
    pub menu_gate: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_y: GROUND_Y,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            base_speed: INITIAL_GAME_SPEED,
            speed_increment: SPEED_INCREMENT,
            score_threshold: SCORE_THRESHOLD,
            obstacles: ObstacleTuning::default(),
            collectibles: CollectibleTuning::default(),
            menu_gate: false,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON (missing fields fall back to defaults) and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Game speed for a given tick score
    pub fn speed_for_score(&self, score: u64) -> f32 {
        self.base_speed + (score / self.score_threshold) as f32 * self.speed_increment
    }

    /// Apply a difficulty preset on top of these values
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        let speed = difficulty.speed_multiplier();
        self.base_speed *= speed;
        self.speed_increment *= speed;

        let freq = difficulty.obstacle_frequency();
        let spawn = &mut self.obstacles.spawn;
        let scale = |ticks: u32| ((ticks as f32) / freq).round() as u32;
        spawn.initial_delay = scale(spawn.initial_delay);
        spawn.base_delay = scale(spawn.base_delay);
        spawn.min_delay = scale(spawn.min_delay);

        log::info!(
            "Difficulty {}: base speed {:.2}, obstacle delay {}..{}",
            difficulty.as_str(),
            self.base_speed,
            spawn.min_delay,
            spawn.base_delay
        );
        self
    }

    /// Reject values that would produce broken spawning or physics
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(ConfigError::ScreenSize {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if !(self.ground_y > 0.0 && self.ground_y <= self.screen_height) {
            return Err(ConfigError::GroundOutOfScreen {
                ground_y: self.ground_y,
                height: self.screen_height,
            });
        }
        positive("gravity", self.gravity)?;
        if !(self.jump_velocity < 0.0) {
            return Err(ConfigError::JumpVelocity(self.jump_velocity));
        }
        positive("player width", self.player_width)?;
        positive("player height", self.player_height)?;
        if self.player_height > self.ground_y {
            return Err(ConfigError::PlayerTooTall {
                player_height: self.player_height,
                ground_y: self.ground_y,
            });
        }
        positive("base speed", self.base_speed)?;
        if !(self.speed_increment >= 0.0) {
            return Err(ConfigError::NotPositive {
                name: "speed increment",
                value: self.speed_increment,
            });
        }
        if self.score_threshold == 0 {
            return Err(ConfigError::ZeroScoreThreshold);
        }

        let obstacles = &self.obstacles;
        positive("obstacle width", obstacles.width)?;
        positive("obstacle min height", obstacles.min_height)?;
        if !(obstacles.min_height <= obstacles.max_height) {
            return Err(ConfigError::ObstacleHeights {
                min: obstacles.min_height,
                max: obstacles.max_height,
            });
        }
        obstacles.spawn.validate("obstacles")?;

        let items = &self.collectibles;
        positive("coin size", items.coin_size)?;
        positive("gem size", items.gem_size)?;
        if !(0.0..=1.0).contains(&items.coin_chance) {
            return Err(ConfigError::CoinChance(items.coin_chance));
        }
        let tallest = items.coin_size.max(items.gem_size);
        if !(items.min_clearance > tallest
            && items.min_clearance <= items.max_clearance
            && items.max_clearance <= self.ground_y)
        {
            return Err(ConfigError::CollectibleBand {
                min: items.min_clearance,
                max: items.max_clearance,
            });
        }
        items.spawn.validate("collectibles")?;

        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

/// Player preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,

    // === Audio ===
    pub sound_enabled: bool,
    pub music_enabled: bool,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            sound_enabled: true,
            music_enabled: true,
            sfx_volume: 0.7,
            music_volume: 0.5,
        }
    }
}

impl Settings {
    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
    }

    pub fn toggle_music(&mut self) {
        self.music_enabled = !self.music_enabled;
    }

    /// Tuning for the selected difficulty
    pub fn tuning(&self) -> Tuning {
        Tuning::default().with_difficulty(self.difficulty)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}
