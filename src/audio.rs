//! Audio routing
//!
//! The simulation only emits `GameEvent`s. `AudioDirector` turns them into
//! sound effects and music commands for whatever backend implements
//! `AudioSink`, honoring the player's sound and music toggles.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player left the ground
    Jump,
    /// Coin picked up
    Coin,
    /// Gem picked up
    Gem,
    /// Lethal collision
    Death,
}

/// Backend that actually produces sound
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
    fn start_music(&mut self, volume: f32);
    fn stop_music(&mut self);
}

/// Sink that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("sfx {:?} @ {:.2}", effect, volume);
    }

    fn start_music(&mut self, volume: f32) {
        log::debug!("music on @ {:.2}", volume);
    }

    fn stop_music(&mut self) {
        log::debug!("music off");
    }
}

/// Event-to-sound routing with mute toggles
pub struct AudioDirector<S: AudioSink> {
    sink: S,
    sound_enabled: bool,
    music_enabled: bool,
    sfx_volume: f32,
    music_volume: f32,
    music_playing: bool,
}

impl<S: AudioSink> AudioDirector<S> {
    pub fn new(sink: S, settings: &Settings) -> Self {
        Self {
            sink,
            sound_enabled: settings.sound_enabled,
            music_enabled: settings.music_enabled,
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            music_volume: settings.music_volume.clamp(0.0, 1.0),
            music_playing: false,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }

    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
        log::info!("Sound {}", if self.sound_enabled { "on" } else { "off" });
    }

    pub fn toggle_music(&mut self) {
        self.music_enabled = !self.music_enabled;
        if self.music_enabled {
            self.start_music();
        } else {
            self.stop_music();
        }
    }

    pub fn start_music(&mut self) {
        if self.music_enabled && !self.music_playing {
            self.sink.start_music(self.music_volume);
            self.music_playing = true;
        }
    }

    pub fn stop_music(&mut self) {
        if self.music_playing {
            self.sink.stop_music();
            self.music_playing = false;
        }
    }

    fn play(&mut self, effect: SoundEffect) {
        if self.sound_enabled && self.sfx_volume > 0.0 {
            self.sink.play(effect, self.sfx_volume);
        }
    }

    /// React to one tick's events
    pub fn handle(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Jump => self.play(SoundEffect::Jump),
                GameEvent::CoinCollected { .. } => self.play(SoundEffect::Coin),
                GameEvent::GemCollected { .. } => self.play(SoundEffect::Gem),
                GameEvent::Death { .. } => {
                    self.play(SoundEffect::Death);
                    self.stop_music();
                }
                GameEvent::RunStarted | GameEvent::Resumed => self.start_music(),
                GameEvent::Paused | GameEvent::EnteredMenu => self.stop_music(),
            }
        }
    }
}
