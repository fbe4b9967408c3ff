//! Match State Machine
//!
//! Tracks whether a match is in play, showing the win banner, or restarting.

use crate::{Config, Score, Side};

/// Match states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    Playing,
    /// Win banner is up; the winner keeps scoring until the grace runs out
    Won(Side),
    /// Grace is over and the next match is being set up
    Resetting(Side),
}

impl MatchState {
    /// State implied by the current scores
    pub fn from_score(score: &Score, config: &Config) -> Self {
        match score.leader(config.win_score) {
            Some(side) if score.of(side) >= config.reset_score() => MatchState::Resetting(side),
            Some(side) => MatchState::Won(side),
            None => MatchState::Playing,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            MatchState::Playing => None,
            MatchState::Won(side) | MatchState::Resetting(side) => Some(*side),
        }
    }
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    WinningScore(Side),
    GraceElapsed,
    Restart,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub action: MatchAction,
}

/// Match Finite State Machine
#[derive(Debug, Clone)]
pub struct MatchFsm {
    state: MatchState,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            state: MatchState::Playing,
        }
    }

    /// Get current state
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let next_state = self.get_next_state(action);
        if let Some(next_state) = next_state {
            self.state = next_state;
        }
        TransitionResult {
            success: next_state.is_some(),
            action,
        }
    }

    /// Walk the machine toward the state the scores imply, returning every
    /// transition taken. A zero grace goes Playing -> Won -> Resetting in one call.
    pub fn advance(&mut self, target: MatchState) -> Vec<TransitionResult> {
        let mut taken = Vec::new();
        while self.state != target {
            let action = match (self.state, target) {
                (MatchState::Playing, MatchState::Won(side) | MatchState::Resetting(side)) => {
                    MatchAction::WinningScore(side)
                }
                (MatchState::Won(_), MatchState::Resetting(_)) => MatchAction::GraceElapsed,
                (MatchState::Resetting(_), MatchState::Playing) => MatchAction::Restart,
                _ => break,
            };
            let result = self.transition(action);
            if !result.success {
                break;
            }
            taken.push(result);
        }
        taken
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: MatchAction) -> Option<MatchState> {
        match (self.state, action) {
            (MatchState::Playing, MatchAction::WinningScore(side)) => Some(MatchState::Won(side)),
            (MatchState::Won(side), MatchAction::GraceElapsed) => Some(MatchState::Resetting(side)),
            (MatchState::Resetting(_), MatchAction::Restart) => Some(MatchState::Playing),

            // Invalid transition
            _ => None,
        }
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}
