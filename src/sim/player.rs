//! The player-controlled runner

use serde::{Deserialize, Serialize};

use super::collision::{Aabb, Hitbox};
use super::physics::{BodyState, PhysicsIntegrator};
use crate::settings::Tuning;

/// Ticks per run-cycle phase
const RUN_CYCLE_TICKS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Fixed horizontal position
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub body: BodyState,
    /// Two-phase run cycle for the renderer
    pub animation_phase: u8,
    animation_timer: u32,
}

impl Player {
    /// Player standing on the ground
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: tuning.player_x,
            width: tuning.player_width,
            height: tuning.player_height,
            body: BodyState {
                y: tuning.ground_y - tuning.player_height,
                velocity: 0.0,
                on_ground: true,
                jumping: false,
            },
            animation_phase: 0,
            animation_timer: 0,
        }
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.body.y
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.body.velocity
    }

    #[inline]
    pub fn on_ground(&self) -> bool {
        self.body.on_ground
    }

    #[inline]
    pub fn is_jumping(&self) -> bool {
        self.body.jumping
    }

    /// Request a jump. Returns false (and changes nothing) while airborne.
    pub fn jump(&mut self, physics: &PhysicsIntegrator) -> bool {
        match physics.jump(self.body) {
            Some(body) => {
                self.body = body;
                true
            }
            None => false,
        }
    }

    /// One physics tick plus run-cycle animation
    pub fn update(&mut self, physics: &PhysicsIntegrator) {
        self.body = physics.step(self.body, self.height);

        self.animation_timer += 1;
        if self.animation_timer >= RUN_CYCLE_TICKS {
            self.animation_timer = 0;
            self.animation_phase = (self.animation_phase + 1) % 2;
        }
    }
}

impl Hitbox for Player {
    fn hitbox(&self) -> Aabb {
        Aabb::new(self.x, self.body.y, self.width, self.height)
    }
}
