//! Game phases and the transitions between them

use serde::{Deserialize, Serialize};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, simulation idle
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended by a lethal collision
    GameOver,
    /// Reserved for a leaderboard screen; nothing transitions here yet
    HighScore,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Menu => "menu",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "game_over",
            GamePhase::HighScore => "high_score",
        }
    }
}

/// Finite state machine gating the simulation.
///
/// Every request returns whether it changed the phase; illegal requests are
/// silent no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateMachine {
    current: GamePhase,
    previous: Option<GamePhase>,
}

impl GameStateMachine {
    pub fn new(initial: GamePhase) -> Self {
        Self {
            current: initial,
            previous: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.current
    }

    pub fn previous(&self) -> Option<GamePhase> {
        self.previous
    }

    pub fn is_playing(&self) -> bool {
        self.current == GamePhase::Playing
    }

    fn set(&mut self, next: GamePhase) {
        log::debug!("Phase {} -> {}", self.current.as_str(), next.as_str());
        self.previous = Some(self.current);
        self.current = next;
    }

    fn transition(&mut self, from: GamePhase, to: GamePhase) -> bool {
        if self.current == from {
            self.set(to);
            true
        } else {
            false
        }
    }

    /// Menu -> Playing
    pub fn start(&mut self) -> bool {
        self.transition(GamePhase::Menu, GamePhase::Playing)
    }

    /// Playing -> Paused
    pub fn pause(&mut self) -> bool {
        self.transition(GamePhase::Playing, GamePhase::Paused)
    }

    /// Paused -> Playing
    pub fn resume(&mut self) -> bool {
        self.transition(GamePhase::Paused, GamePhase::Playing)
    }

    /// Playing -> GameOver
    pub fn game_over(&mut self) -> bool {
        self.transition(GamePhase::Playing, GamePhase::GameOver)
    }

    /// GameOver -> Playing. The caller rebuilds the world.
    pub fn restart(&mut self) -> bool {
        self.transition(GamePhase::GameOver, GamePhase::Playing)
    }

    /// Any phase -> Menu
    pub fn go_to_menu(&mut self) -> bool {
        if self.current == GamePhase::Menu {
            return false;
        }
        self.set(GamePhase::Menu);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pause_resume_pair() {
        let mut sm = GameStateMachine::new(GamePhase::Playing);
        assert!(sm.pause());
        assert_eq!(sm.phase(), GamePhase::Paused);
        assert_eq!(sm.previous(), Some(GamePhase::Playing));
        assert!(!sm.pause());
        assert!(sm.resume());
        assert_eq!(sm.phase(), GamePhase::Playing);
        assert_eq!(sm.previous(), Some(GamePhase::Paused));
        assert!(!sm.resume());
    }

    #[test]
    fn test_illegal_requests_are_noops() {
        let mut sm = GameStateMachine::new(GamePhase::Menu);
        assert!(!sm.pause());
        assert!(!sm.resume());
        assert!(!sm.restart());
        assert!(!sm.game_over());
        assert_eq!(sm.phase(), GamePhase::Menu);
        assert_eq!(sm.previous(), None);
    }

    #[test]
    fn test_full_run_cycle() {
        let mut sm = GameStateMachine::new(GamePhase::Menu);
        assert!(sm.start());
        assert!(sm.game_over());
        assert!(!sm.pause());
        assert!(sm.restart());
        assert_eq!(sm.phase(), GamePhase::Playing);
        assert_eq!(sm.previous(), Some(GamePhase::GameOver));
    }

    #[test]
    fn test_menu_reachable_from_anywhere() {
        for phase in [
            GamePhase::Playing,
            GamePhase::Paused,
            GamePhase::GameOver,
            GamePhase::HighScore,
        ] {
            let mut sm = GameStateMachine::new(phase);
            assert!(sm.go_to_menu());
            assert_eq!(sm.phase(), GamePhase::Menu);
            assert_eq!(sm.previous(), Some(phase));
        }
        let mut sm = GameStateMachine::new(GamePhase::Menu);
        assert!(!sm.go_to_menu());
    }
}
