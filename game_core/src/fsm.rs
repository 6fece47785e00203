//! Game State Machine
//!
//! Start screen, play, and game-over screen transitions.

/// Game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Title screen with the start button
    #[default]
    NotStarted,
    Playing,
    /// Final score with the restart button
    GameOver,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Start button clicked
    Start,
    /// A side reached the winning score
    GameOver,
    /// Restart button clicked
    Restart,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: GamePhase,
    pub to: GamePhase,
    pub action: GameAction,
}

/// Game Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct GameFsm {
    phase: GamePhase,
}

impl GameFsm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current phase
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from = self.phase;

        if let Some(next) = self.next_phase(action) {
            self.phase = next;
            log::info!("Phase {:?} -> {:?} ({:?})", from, next, action);
            TransitionResult {
                success: true,
                from,
                to: next,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from,
                to: from,
                action,
            }
        }
    }

    /// Get next phase for a given action (if valid)
    fn next_phase(&self, action: GameAction) -> Option<GamePhase> {
        match (self.phase, action) {
            (GamePhase::NotStarted, GameAction::Start) => Some(GamePhase::Playing),
            (GamePhase::Playing, GameAction::GameOver) => Some(GamePhase::GameOver),
            (GamePhase::GameOver, GameAction::Restart) => Some(GamePhase::Playing),
            // Invalid transition
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.phase(), GamePhase::NotStarted);
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Start);
        assert!(result.success);
        assert_eq!(result.from, GamePhase::NotStarted);
        assert_eq!(result.to, GamePhase::Playing);
        assert!(fsm.is_playing());
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Restart);
        assert!(!result.success);
        assert_eq!(fsm.phase(), GamePhase::NotStarted);
        assert!(!fsm.can_transition(GameAction::GameOver));
    }

    #[test]
    fn test_full_game_flow() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        fsm.transition(GameAction::GameOver);
        assert!(fsm.is_game_over());
        assert!(!fsm.can_transition(GameAction::Start), "Start only works from the title screen");
        fsm.transition(GameAction::Restart);
        assert_eq!(fsm.phase(), GamePhase::Playing);
    }
}
