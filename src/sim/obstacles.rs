//! Ground obstacles

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, Hitbox};
use super::spawn::{SpawnScheduler, Spawnable};
use crate::settings::{ObstacleTuning, Tuning};

/// Cactus silhouette, chosen uniformly at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Simple,
    Double,
    Triple,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [
        ObstacleKind::Simple,
        ObstacleKind::Double,
        ObstacleKind::Triple,
    ];
}

/// An obstacle sitting on the ground
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    /// Obstacle resting on the ground at `ground_y`
    pub fn on_ground(x: f32, ground_y: f32, width: f32, height: f32, kind: ObstacleKind) -> Self {
        Self {
            x,
            y: ground_y - height,
            width,
            height,
            kind,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, x: f32, ground_y: f32, tuning: &ObstacleTuning) -> Self {
        let height = if tuning.max_height > tuning.min_height {
            rng.random_range(tuning.min_height..=tuning.max_height)
        } else {
            tuning.min_height
        };
        let kind = *ObstacleKind::ALL
            .choose(rng)
            .unwrap_or(&ObstacleKind::Simple);
        Self::on_ground(x, ground_y, tuning.width, height, kind)
    }
}

impl Hitbox for Obstacle {
    fn hitbox(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

impl Spawnable for Obstacle {
    fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }
}

/// Live obstacles plus their spawner
#[derive(Debug, Clone)]
pub struct ObstacleField {
    scheduler: SpawnScheduler<Obstacle>,
    tuning: ObstacleTuning,
    ground_y: f32,
}

impl ObstacleField {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            scheduler: SpawnScheduler::new(
                tuning.obstacles.spawn.clone(),
                tuning.screen_width,
                tuning.base_speed,
            ),
            tuning: tuning.obstacles.clone(),
            ground_y: tuning.ground_y,
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        self.scheduler.items()
    }

    pub fn scheduler(&self) -> &SpawnScheduler<Obstacle> {
        &self.scheduler
    }

    /// Advance, cull and maybe spawn. Returns true on a spawn.
    pub fn update<R: Rng + ?Sized>(&mut self, game_speed: f32, rng: &mut R) -> bool {
        let (ground_y, tuning) = (self.ground_y, &self.tuning);
        let spawned = self.scheduler.update(game_speed, rng, |rng, x| {
            Obstacle::random(rng, x, ground_y, tuning)
        });
        if spawned {
            if let Some(o) = self.scheduler.items().last() {
                log::debug!("Spawned {:?} obstacle h={:.0} at x={:.0}", o.kind, o.height, o.x);
            }
        }
        spawned
    }

    /// Spawn immediately if spacing allows, ignoring the timer
    pub fn spawn_now<R: Rng + ?Sized>(&mut self, game_speed: f32, rng: &mut R) -> bool {
        let (ground_y, tuning) = (self.ground_y, &self.tuning);
        self.scheduler
            .try_spawn(game_speed, rng, |rng, x| Obstacle::random(rng, x, ground_y, tuning))
    }

    /// Place a specific obstacle at the end of the field (tests, scripted setups)
    pub fn push(&mut self, x: f32, height: f32, kind: ObstacleKind) {
        let obstacle = Obstacle::on_ground(x, self.ground_y, self.tuning.width, height, kind);
        self.scheduler.push(obstacle);
    }
}
