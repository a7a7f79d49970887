//! Fixed-step run loop
//!
//! A `Session` owns the player, both fields and the state machine, and
//! advances them one tick at a time:
//! input -> phase transitions -> physics -> fields -> score -> collisions -> speed.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collectibles::{Collectible, CollectibleField, CollectibleKind};
use super::collision::{CollisionDetector, Hitbox};
use super::events::GameEvent;
use super::obstacles::{Obstacle, ObstacleField, ObstacleKind};
use super::physics::PhysicsIntegrator;
use super::player::Player;
use super::state::{GamePhase, GameStateMachine};
use crate::error::ConfigError;
use crate::highscores::HighScores;
use crate::settings::Tuning;

/// Intents for a single tick (already debounced by the input collaborator)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub jump: bool,
    pub pause: bool,
    pub resume: bool,
    /// Start a run from the menu
    pub start: bool,
    /// Start a new run after game over
    pub restart: bool,
    pub menu: bool,
    pub quit: bool,
}

/// What a tick produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    pub events: Vec<GameEvent>,
    /// Quit was requested; the driver should stop ticking
    pub quit: bool,
}

/// Per-run entity state. Replaced wholesale on restart.
#[derive(Debug, Clone)]
pub struct World {
    pub player: Player,
    pub obstacles: ObstacleField,
    pub collectibles: CollectibleField,
    /// Survival score, one point per simulated tick
    pub score: u64,
    /// Sum of collected item values
    pub bonus: u64,
    pub collected_count: u32,
    pub speed: f32,
}

impl World {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            player: Player::new(tuning),
            obstacles: ObstacleField::new(tuning),
            collectibles: CollectibleField::new(tuning),
            score: 0,
            bonus: 0,
            collected_count: 0,
            speed: tuning.speed_for_score(0),
        }
    }
}

/// One play session: a world, its phase machine and the run history
#[derive(Debug, Clone)]
pub struct Session {
    tuning: Tuning,
    physics: PhysicsIntegrator,
    machine: GameStateMachine,
    world: World,
    rng: Pcg32,
    /// Ticks simulated across all runs
    time_ticks: u64,
    runs: u32,
    high_scores: HighScores,
}

impl Session {
    /// Validate `tuning` and build a session seeded with `seed`
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, ConfigError> {
        if let Err(err) = tuning.validate() {
            log::warn!("Rejected tuning: {err}");
            return Err(err);
        }

        let initial = if tuning.menu_gate {
            GamePhase::Menu
        } else {
            GamePhase::Playing
        };
        log::info!("Session created (seed {seed}, starting in {})", initial.as_str());

        Ok(Self {
            physics: PhysicsIntegrator::new(&tuning),
            machine: GameStateMachine::new(initial),
            world: World::new(&tuning),
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            runs: if tuning.menu_gate { 0 } else { 1 },
            high_scores: HighScores::new(),
            tuning,
        })
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn phase(&self) -> GamePhase {
        self.machine.phase()
    }

    pub fn state_machine(&self) -> &GameStateMachine {
        &self.machine
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct world access for scripted setups
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player(&self) -> &Player {
        &self.world.player
    }

    pub fn score(&self) -> u64 {
        self.world.score
    }

    pub fn bonus(&self) -> u64 {
        self.world.bonus
    }

    pub fn speed(&self) -> f32 {
        self.world.speed
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    /// Advance the session by one tick
    pub fn tick(&mut self, input: &TickInput) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if input.quit {
            log::info!("Quit requested");
            outcome.quit = true;
            return outcome;
        }

        self.apply_transitions(input, &mut outcome.events);

        if self.machine.is_playing() {
            self.simulate(input.jump, &mut outcome.events);
        }
        outcome
    }

    fn apply_transitions(&mut self, input: &TickInput, events: &mut Vec<GameEvent>) {
        if input.menu && self.machine.go_to_menu() {
            events.push(GameEvent::EnteredMenu);
        }
        if input.start && self.machine.start() {
            self.begin_run(events);
        }
        if input.restart && self.machine.restart() {
            self.begin_run(events);
        }
        if input.pause && self.machine.pause() {
            events.push(GameEvent::Paused);
        }
        if input.resume && self.machine.resume() {
            events.push(GameEvent::Resumed);
        }
    }

    /// Discard every entity and start from a fresh world
    fn begin_run(&mut self, events: &mut Vec<GameEvent>) {
        self.world = World::new(&self.tuning);
        self.runs += 1;
        log::info!("Run {} started", self.runs);
        events.push(GameEvent::RunStarted);
    }

    fn simulate(&mut self, jump: bool, events: &mut Vec<GameEvent>) {
        if jump && self.world.player.jump(&self.physics) {
            events.push(GameEvent::Jump);
        }
        self.world.player.update(&self.physics);

        let speed = self.world.speed;
        self.world.obstacles.update(speed, &mut self.rng);
        self.world.collectibles.update(speed, &mut self.rng);

        // Counted before collisions so a death on this tick includes it
        self.world.score += 1;
        self.resolve_collisions(events);

        self.world.speed = self.tuning.speed_for_score(self.world.score);
        self.time_ticks += 1;
    }

    /// Test the player against both fields.
    ///
    /// A lethal overlap ends the run (one `Death` event); every overlapped
    /// collectible is collected and reported. Does nothing unless playing.
    /// Returns true if the run ended.
    pub fn resolve_collisions(&mut self, events: &mut Vec<GameEvent>) -> bool {
        if !self.machine.is_playing() {
            return false;
        }
        let hitbox = self.world.player.hitbox();

        let lethal = CollisionDetector::any_hit(&hitbox, self.world.obstacles.obstacles())
            && self.machine.game_over();
        if lethal {
            self.finish_run(events);
        }

        for pickup in self.world.collectibles.collect(&hitbox) {
            self.world.bonus += pickup.value as u64;
            self.world.collected_count += 1;
            let event = match pickup.kind {
                CollectibleKind::Coin => GameEvent::CoinCollected {
                    value: pickup.value,
                },
                CollectibleKind::Gem(color) => GameEvent::GemCollected {
                    color,
                    value: pickup.value,
                },
            };
            log::debug!("Collected {:?}", pickup.kind);
            events.push(event);
        }

        lethal
    }

    fn finish_run(&mut self, events: &mut Vec<GameEvent>) {
        let world = &self.world;
        log::info!(
            "Game over: score {}, bonus {} ({} items)",
            world.score,
            world.bonus,
            world.collected_count
        );
        if let Some(rank) = self.high_scores.add_score(world.score, world.bonus, self.runs) {
            log::info!("New session high score, rank {rank}");
        }
        events.push(GameEvent::Death { score: world.score });
    }

    /// Owned copy of everything a renderer needs, taken between ticks
    pub fn snapshot(&self) -> Snapshot {
        let world = &self.world;
        let player = &world.player;
        Snapshot {
            phase: self.machine.phase(),
            score: world.score,
            bonus: world.bonus,
            collected: world.collected_count,
            speed: world.speed,
            player: PlayerView {
                x: player.x,
                y: player.y(),
                width: player.width,
                height: player.height,
                on_ground: player.on_ground(),
                animation_phase: player.animation_phase,
            },
            obstacles: world.obstacles.obstacles().iter().map(ObstacleView::from).collect(),
            collectibles: world
                .collectibles
                .collectibles()
                .iter()
                .filter(|c| !c.collected)
                .map(CollectibleView::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub on_ground: bool,
    pub animation_phase: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: ObstacleKind,
}

impl From<&Obstacle> for ObstacleView {
    fn from(o: &Obstacle) -> Self {
        Self {
            x: o.x,
            y: o.y,
            width: o.width,
            height: o.height,
            kind: o.kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectibleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: CollectibleKind,
    pub animation_phase: u8,
}

impl From<&Collectible> for CollectibleView {
    fn from(c: &Collectible) -> Self {
        Self {
            x: c.x,
            y: c.y,
            width: c.width,
            height: c.height,
            kind: c.kind,
            animation_phase: c.animation_phase,
        }
    }
}

/// Read-only frame state handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub bonus: u64,
    pub collected: u32,
    pub speed: f32,
    pub player: PlayerView,
    pub obstacles: Vec<ObstacleView>,
    pub collectibles: Vec<CollectibleView>,
}

impl Snapshot {
    pub fn total(&self) -> u64 {
        self.score + self.bonus
    }
}
