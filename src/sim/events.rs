//! Discrete notifications emitted by a tick, for audio and UI collaborators

use serde::{Deserialize, Serialize};

use super::collectibles::GemColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A jump request was honored
    Jump,
    CoinCollected { value: u32 },
    GemCollected { color: GemColor, value: u32 },
    /// Lethal obstacle collision; the run is over
    Death { score: u64 },
    /// A fresh run began (from the menu or after game over)
    RunStarted,
    Paused,
    Resumed,
    EnteredMenu,
}
