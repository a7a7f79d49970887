//! Keyboard intents
//!
//! Turns raw key presses into one `TickInput` per frame. Jump is debounced
//! here, not in the simulation: a held key yields one jump per physical press
//! and presses inside the cooldown window are dropped.

use crate::sim::{GamePhase, TickInput};

/// Ticks after a jump during which further jump presses are ignored
pub const JUMP_COOLDOWN_TICKS: u32 = 5;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Escape,
    R,
    Enter,
    Backspace,
    Q,
    M,
    B,
}

/// Everything the driver needs from one frame of input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub tick: TickInput,
    pub toggle_sound: bool,
    pub toggle_music: bool,
}

#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    pending: FrameInput,
    /// Jump key is down (a new press needs a release first)
    jump_held: bool,
    jump_cooldown: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key went down. `phase` decides what Escape means.
    pub fn key_down(&mut self, key: Key, phase: GamePhase) {
        match key {
            Key::Space => {
                if !self.jump_held && self.jump_cooldown == 0 {
                    self.pending.tick.jump = true;
                    self.jump_cooldown = JUMP_COOLDOWN_TICKS;
                }
                self.jump_held = true;
            }
            Key::Escape => match phase {
                GamePhase::Playing => self.pending.tick.pause = true,
                GamePhase::Paused => self.pending.tick.resume = true,
                _ => {}
            },
            Key::R => self.pending.tick.restart = true,
            Key::Enter => self.pending.tick.start = true,
            Key::Backspace => self.pending.tick.menu = true,
            Key::Q => self.pending.tick.quit = true,
            Key::M => self.pending.toggle_sound = true,
            Key::B => self.pending.toggle_music = true,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        if key == Key::Space {
            self.jump_held = false;
        }
    }

    /// Take this frame's intents and advance the cooldown
    pub fn take_frame(&mut self) -> FrameInput {
        self.jump_cooldown = self.jump_cooldown.saturating_sub(1);
        std::mem::take(&mut self.pending)
    }

    pub fn jump_cooldown(&self) -> u32 {
        self.jump_cooldown
    }
}
