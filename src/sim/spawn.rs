//! Timer-driven procedural spawning shared by every field
//!
//! A `SpawnScheduler<T>` owns the live entities of one field in spawn order
//! (oldest first, i.e. leftmost first since everything scrolls left). Fields
//! differ only in their `SpawnPolicy` and in the factory they hand to
//! `update`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Hitbox;
use crate::error::ConfigError;

/// Spacing and timing rules for one field. Delays are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnPolicy {
    /// Delay before the first spawn attempt
    pub initial_delay: u32,
    /// Delay at base game speed, before jitter
    pub base_delay: u32,
    /// Lowest delay the speed adjustment can reach, before jitter
    pub min_delay: u32,
    /// Ticks removed from the delay per unit of speed above base speed
    pub delay_per_speed: f32,
    /// Uniform jitter applied to every recomputed delay, in ticks
    pub delay_jitter: u32,
    /// The newest entity must be left of `screen_width - min_separation`
    pub min_separation: f32,
    /// Uniform jitter around the spawn anchor, in pixels
    pub anchor_jitter: f32,
}

impl SpawnPolicy {
    pub fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.min_delay <= self.delay_jitter {
            return Err(ConfigError::SpawnDelay {
                field,
                floor: self.min_delay,
                jitter: self.delay_jitter,
            });
        }
        if self.base_delay < self.min_delay {
            return Err(ConfigError::SpawnBase {
                field,
                base: self.base_delay,
                floor: self.min_delay,
            });
        }
        if !(self.min_separation >= 0.0) {
            return Err(ConfigError::Separation {
                field,
                value: self.min_separation,
            });
        }
        if !(self.anchor_jitter >= 0.0 && self.delay_per_speed >= 0.0) {
            return Err(ConfigError::NotPositive {
                name: "spawn jitter",
                value: self.anchor_jitter.min(self.delay_per_speed),
            });
        }
        Ok(())
    }

    /// Baseline delay at the given speed, before jitter
    pub fn baseline_delay(&self, game_speed: f32, base_speed: f32) -> u32 {
        let adjustment = (game_speed - base_speed) * self.delay_per_speed;
        (self.base_delay as f32 - adjustment)
            .max(self.min_delay as f32)
            .floor() as u32
    }
}

/// A scrolling field entity
pub trait Spawnable: Hitbox {
    /// Scroll left by `speed` and advance any per-entity animation
    fn advance(&mut self, speed: f32);

    /// Right edge has left the screen
    fn is_off_screen(&self) -> bool {
        self.hitbox().right() < 0.0
    }

    /// Removed from the field at the next cull (collected, spent, ...)
    fn is_spent(&self) -> bool {
        !self.is_live()
    }
}

/// Generic spawner: advance, cull, tick the timer, maybe spawn
#[derive(Debug, Clone)]
pub struct SpawnScheduler<T> {
    items: Vec<T>,
    policy: SpawnPolicy,
    screen_width: f32,
    base_speed: f32,
    timer: u32,
    delay: u32,
}

impl<T: Spawnable> SpawnScheduler<T> {
    pub fn new(policy: SpawnPolicy, screen_width: f32, base_speed: f32) -> Self {
        let delay = policy.initial_delay;
        Self {
            items: Vec::new(),
            policy,
            screen_width,
            base_speed,
            timer: 0,
            delay,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Current delay, in ticks, between spawn attempts
    pub fn delay(&self) -> u32 {
        self.delay
    }

    pub fn timer(&self) -> u32 {
        self.timer
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// x beyond which the newest entity blocks further spawns
    pub fn spawn_threshold(&self) -> f32 {
        self.screen_width - self.policy.min_separation
    }

    /// Spacing check against the most recently spawned entity
    pub fn has_room(&self) -> bool {
        match self.items.last() {
            None => true,
            Some(last) => last.hitbox().min.x < self.spawn_threshold(),
        }
    }

    /// Drop off-screen and spent entities
    pub fn cull(&mut self) {
        self.items.retain(|item| !item.is_off_screen() && !item.is_spent());
    }

    /// One field tick. Returns true if a new entity was appended.
    ///
    /// `factory` receives the jittered spawn x.
    pub fn update<R, F>(&mut self, game_speed: f32, rng: &mut R, factory: F) -> bool
    where
        R: Rng + ?Sized,
        F: FnOnce(&mut R, f32) -> T,
    {
        for item in &mut self.items {
            item.advance(game_speed);
        }
        self.cull();

        self.timer += 1;
        if self.timer < self.delay {
            return false;
        }
        self.timer = 0;
        self.try_spawn(game_speed, rng, factory)
    }

    /// Attempt a spawn now, ignoring the timer
    pub fn try_spawn<R, F>(&mut self, game_speed: f32, rng: &mut R, factory: F) -> bool
    where
        R: Rng + ?Sized,
        F: FnOnce(&mut R, f32) -> T,
    {
        if !self.has_room() {
            return false;
        }

        let jitter = self.policy.anchor_jitter;
        let offset = if jitter > 0.0 {
            rng.random_range(-jitter..=jitter)
        } else {
            0.0
        };
        let item = factory(&mut *rng, self.screen_width + offset);
        self.items.push(item);

        self.delay = self.next_delay(game_speed, rng);
        true
    }

    fn next_delay<R: Rng + ?Sized>(&self, game_speed: f32, rng: &mut R) -> u32 {
        let baseline = self.policy.baseline_delay(game_speed, self.base_speed) as i64;
        let jitter = self.policy.delay_jitter as i64;
        let offset = if jitter > 0 {
            rng.random_range(-jitter..=jitter)
        } else {
            0
        };
        (baseline + offset).max(1) as u32
    }

    /// Append an entity directly, bypassing timer and spacing
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::Aabb;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[derive(Debug)]
    struct Post {
        x: f32,
        gone: bool,
    }

    impl Hitbox for Post {
        fn hitbox(&self) -> Aabb {
            Aabb::new(self.x, 0.0, 10.0, 10.0)
        }
        fn is_live(&self) -> bool {
            !self.gone
        }
    }

    impl Spawnable for Post {
        fn advance(&mut self, speed: f32) {
            self.x -= speed;
        }
    }

    fn policy() -> SpawnPolicy {
        SpawnPolicy {
            initial_delay: 3,
            base_delay: 20,
            min_delay: 10,
            delay_per_speed: 2.0,
            delay_jitter: 0,
            min_separation: 100.0,
            anchor_jitter: 0.0,
        }
    }

    fn post(_: &mut Pcg32, x: f32) -> Post {
        Post { x, gone: false }
    }

    #[test]
    fn test_first_spawn_after_initial_delay() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = SpawnScheduler::new(policy(), 800.0, 5.0);
        assert!(!field.update(5.0, &mut rng, post));
        assert!(!field.update(5.0, &mut rng, post));
        assert!(field.update(5.0, &mut rng, post));
        assert_eq!(field.len(), 1);
        assert_eq!(field.items()[0].x, 800.0);
        assert_eq!(field.timer(), 0);
        assert_eq!(field.delay(), 20);
    }

    #[test]
    fn test_blocked_spawn_resets_timer_and_keeps_delay() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = SpawnScheduler::new(policy(), 800.0, 5.0);
        field.items.push(Post { x: 790.0, gone: false });
        for _ in 0..3 {
            field.update(0.0, &mut rng, post);
        }
        assert_eq!(field.len(), 1);
        assert_eq!(field.timer(), 0);
        assert_eq!(field.delay(), 3);
    }

    #[test]
    fn test_culls_off_screen_and_spent() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = SpawnScheduler::new(policy(), 800.0, 5.0);
        field.items.push(Post { x: -12.0, gone: false });
        field.items.push(Post { x: 300.0, gone: true });
        field.items.push(Post { x: 400.0, gone: false });
        field.update(0.0, &mut rng, post);
        assert_eq!(field.len(), 1);
        assert_eq!(field.items()[0].x, 400.0);
    }

    #[test]
    fn test_entity_touching_left_edge_survives() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = SpawnScheduler::new(policy(), 800.0, 5.0);
        field.items.push(Post { x: -10.0, gone: false });
        field.update(0.0, &mut rng, post);
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn test_faster_speed_shortens_delay_down_to_floor() {
        let p = policy();
        assert_eq!(p.baseline_delay(5.0, 5.0), 20);
        assert_eq!(p.baseline_delay(7.0, 5.0), 16);
        assert_eq!(p.baseline_delay(50.0, 5.0), 10);
    }

    #[test]
    fn test_jittered_delay_stays_in_band() {
        let mut rng = Pcg32::seed_from_u64(42);
        let p = SpawnPolicy {
            delay_jitter: 4,
            ..policy()
        };
        let mut field: SpawnScheduler<Post> = SpawnScheduler::new(p, 800.0, 5.0);
        for _ in 0..200 {
            field.items.clear();
            assert!(field.try_spawn(5.0, &mut rng, post));
            assert!((16..=24).contains(&field.delay()), "delay {}", field.delay());
        }
    }
}
