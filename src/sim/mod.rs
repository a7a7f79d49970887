//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per frame
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod collectibles;
pub mod collision;
pub mod events;
pub mod obstacles;
pub mod physics;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collectibles::{Collectible, CollectibleField, CollectibleKind, GemColor, Pickup};
pub use collision::{Aabb, CollisionDetector, Hitbox};
pub use events::GameEvent;
pub use obstacles::{Obstacle, ObstacleField, ObstacleKind};
pub use physics::{BodyState, PhysicsIntegrator};
pub use player::Player;
pub use spawn::{SpawnPolicy, SpawnScheduler, Spawnable};
pub use state::{GamePhase, GameStateMachine};
pub use tick::{Session, Snapshot, TickInput, TickOutcome, World};
