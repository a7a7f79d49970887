//! Vertical gravity integration against a flat ground

use serde::{Deserialize, Serialize};

use crate::settings::Tuning;

/// Vertical state of a single moving body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    /// Top edge (y grows downward)
    pub y: f32,
    pub velocity: f32,
    pub on_ground: bool,
    pub jumping: bool,
}

/// Fixed per-tick integrator. Holds only constants, so every step is a pure
/// function of the incoming body state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsIntegrator {
    pub gravity: f32,
    pub jump_velocity: f32,
    pub ground_y: f32,
}

impl PhysicsIntegrator {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            gravity: tuning.gravity,
            jump_velocity: tuning.jump_velocity,
            ground_y: tuning.ground_y,
        }
    }

    #[inline]
    pub fn apply_gravity(&self, velocity: f32) -> f32 {
        velocity + self.gravity
    }

    #[inline]
    pub fn touches_ground(&self, y: f32, height: f32) -> bool {
        y + height >= self.ground_y
    }

    /// Resting y for a body of the given height
    #[inline]
    pub fn ground_rest(&self, height: f32) -> f32 {
        self.ground_y - height
    }

    /// Advance one tick: gravity, then position, then ground clamp
    pub fn step(&self, body: BodyState, height: f32) -> BodyState {
        let velocity = self.apply_gravity(body.velocity);
        let y = body.y + velocity;

        if self.touches_ground(y, height) {
            BodyState {
                y: self.ground_rest(height),
                velocity: 0.0,
                on_ground: true,
                jumping: false,
            }
        } else {
            BodyState {
                y,
                velocity,
                ..body
            }
        }
    }

    /// Start a jump if grounded. Returns `None` when airborne (no double jump).
    pub fn jump(&self, body: BodyState) -> Option<BodyState> {
        if body.on_ground && !body.jumping {
            Some(BodyState {
                velocity: self.jump_velocity,
                on_ground: false,
                jumping: true,
                ..body
            })
        } else {
            None
        }
    }
}
