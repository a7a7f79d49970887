//! Configuration errors
//!
//! The simulation itself never fails at tick time; the only fallible step is
//! building it from a `Tuning` value.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("screen dimensions must be positive (got {width}x{height})")]
    ScreenSize { width: f32, height: f32 },
    #[error("ground level {ground_y} must lie inside the screen (0, {height}]")]
    GroundOutOfScreen { ground_y: f32, height: f32 },
    #[error("player of height {player_height} does not fit above ground at {ground_y}")]
    PlayerTooTall { player_height: f32, ground_y: f32 },
    #[error("{name} must be positive (got {value})")]
    NotPositive { name: &'static str, value: f32 },
    #[error("jump velocity must point upward (negative), got {0}")]
    JumpVelocity(f32),
    #[error("score threshold must be non-zero")]
    ZeroScoreThreshold,
    #[error("obstacle height range is inverted ({min} > {max})")]
    ObstacleHeights { min: f32, max: f32 },
    #[error("{field}: spawn delay floor {floor} must exceed jitter {jitter}")]
    SpawnDelay {
        field: &'static str,
        floor: u32,
        jitter: u32,
    },
    #[error("{field}: base spawn delay {base} is below its floor {floor}")]
    SpawnBase {
        field: &'static str,
        base: u32,
        floor: u32,
    },
    #[error("{field}: spawn separation must be non-negative (got {value})")]
    Separation { field: &'static str, value: f32 },
    #[error("collectible band [{min}, {max}] above ground would let items touch the ground")]
    CollectibleBand { min: f32, max: f32 },
    #[error("coin probability must be within [0, 1] (got {0})")]
    CoinChance(f64),
    #[error("invalid tuning json: {0}")]
    Parse(#[from] serde_json::Error),
}
