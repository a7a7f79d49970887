//! Floating bonus pickups

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, CollisionDetector, Hitbox};
use super::spawn::{SpawnScheduler, Spawnable};
use crate::settings::{CollectibleTuning, Tuning};

/// Ticks per sparkle phase
const ANIMATION_TICKS: u32 = 8;
/// Number of sparkle phases
const ANIMATION_PHASES: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GemColor {
    Red,
    Blue,
    Green,
    Purple,
}

impl GemColor {
    pub const PALETTE: [GemColor; 4] = [
        GemColor::Red,
        GemColor::Blue,
        GemColor::Green,
        GemColor::Purple,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    Coin,
    Gem(GemColor),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: CollectibleKind,
    /// Score awarded on pickup
    pub value: u32,
    pub collected: bool,
    pub animation_phase: u8,
    animation_timer: u32,
}

impl Collectible {
    pub fn new(x: f32, y: f32, size: f32, kind: CollectibleKind, value: u32) -> Self {
        Self {
            x,
            y,
            width: size,
            height: size,
            kind,
            value,
            collected: false,
            animation_phase: 0,
            animation_timer: 0,
        }
    }

    pub fn coin(x: f32, y: f32, tuning: &CollectibleTuning) -> Self {
        Self::new(x, y, tuning.coin_size, CollectibleKind::Coin, tuning.coin_value)
    }

    pub fn gem(x: f32, y: f32, color: GemColor, tuning: &CollectibleTuning) -> Self {
        Self::new(
            x,
            y,
            tuning.gem_size,
            CollectibleKind::Gem(color),
            tuning.gem_value,
        )
    }

    /// Coin or gem somewhere in the band above the ground
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        x: f32,
        ground_y: f32,
        tuning: &CollectibleTuning,
    ) -> Self {
        let clearance = if tuning.max_clearance > tuning.min_clearance {
            rng.random_range(tuning.min_clearance..=tuning.max_clearance)
        } else {
            tuning.min_clearance
        };
        let y = ground_y - clearance;

        if rng.random_bool(tuning.coin_chance) {
            Self::coin(x, y, tuning)
        } else {
            let color = *GemColor::PALETTE.choose(rng).unwrap_or(&GemColor::Red);
            Self::gem(x, y, color, tuning)
        }
    }
}

impl Hitbox for Collectible {
    fn hitbox(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }

    fn is_live(&self) -> bool {
        !self.collected
    }
}

impl Spawnable for Collectible {
    fn advance(&mut self, speed: f32) {
        self.x -= speed;

        self.animation_timer += 1;
        if self.animation_timer >= ANIMATION_TICKS {
            self.animation_timer = 0;
            self.animation_phase = (self.animation_phase + 1) % ANIMATION_PHASES;
        }
    }
}

/// A single pickup reported by collision resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: CollectibleKind,
    pub value: u32,
}

/// Live collectibles plus their spawner
#[derive(Debug, Clone)]
pub struct CollectibleField {
    scheduler: SpawnScheduler<Collectible>,
    tuning: CollectibleTuning,
    ground_y: f32,
}

impl CollectibleField {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            scheduler: SpawnScheduler::new(
                tuning.collectibles.spawn.clone(),
                tuning.screen_width,
                tuning.base_speed,
            ),
            tuning: tuning.collectibles.clone(),
            ground_y: tuning.ground_y,
        }
    }

    pub fn collectibles(&self) -> &[Collectible] {
        self.scheduler.items()
    }

    pub fn scheduler(&self) -> &SpawnScheduler<Collectible> {
        &self.scheduler
    }

    /// Advance, cull collected/off-screen items and maybe spawn
    pub fn update<R: Rng + ?Sized>(&mut self, game_speed: f32, rng: &mut R) -> bool {
        let (ground_y, tuning) = (self.ground_y, &self.tuning);
        let spawned = self.scheduler.update(game_speed, rng, |rng, x| {
            Collectible::random(rng, x, ground_y, tuning)
        });
        if spawned {
            if let Some(c) = self.scheduler.items().last() {
                log::debug!("Spawned {:?} at ({:.0}, {:.0})", c.kind, c.x, c.y);
            }
        }
        spawned
    }

    /// Mark every live collectible overlapping `player` as collected and
    /// report each one. Collected items are culled on the next update.
    pub fn collect(&mut self, player: &Aabb) -> Vec<Pickup> {
        let hits = CollisionDetector::hits(player, self.scheduler.items());
        let items = self.scheduler.items_mut();
        hits.into_iter()
            .map(|i| {
                let item = &mut items[i];
                item.collected = true;
                Pickup {
                    kind: item.kind,
                    value: item.value,
                }
            })
            .collect()
    }

    /// Place a specific collectible at the end of the field
    pub fn push(&mut self, item: Collectible) {
        self.scheduler.push(item);
    }

    pub fn tuning(&self) -> &CollectibleTuning {
        &self.tuning
    }
}
