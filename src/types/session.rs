//! Ephemeral per-run session state and round results

use serde::{Deserialize, Serialize};

use crate::types::GameMode;
use crate::{SESSION_HINTS, SESSION_LIVES, SESSION_TIME_SECS};

/// Session state, reset whenever the active game changes. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub active_game: Option<GameMode>,
    /// Running total of the active game
    pub score: u32,
    pub lives_remaining: u32,
    pub time_remaining_secs: u32,
    pub hints_remaining: u32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            active_game: None,
            score: 0,
            lives_remaining: SESSION_LIVES,
            time_remaining_secs: SESSION_TIME_SECS,
            hints_remaining: SESSION_HINTS,
        }
    }
}

impl SessionState {
    /// Fresh state for a newly entered game
    pub fn for_game(mode: GameMode) -> Self {
        Self {
            active_game: Some(mode),
            ..Self::default()
        }
    }
}

/// Result of one answered scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub points_awarded: u32,
    pub is_correct: bool,
}

impl RoundOutcome {
    pub fn new(points_awarded: u32, is_correct: bool) -> Self {
        Self { points_awarded, is_correct }
    }

    /// Wrong answer or timeout
    pub fn miss() -> Self {
        Self::new(0, false)
    }
}

/// Emitted exactly once when a game's scenario list is exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEvent {
    pub mode: GameMode,
    pub xp_gain: u32,
    pub points_gain: u32,
}

/// Where a game's linear scenario pointer stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundPhase {
    /// Scenario `i` is waiting for a choice
    Presenting(usize),
    /// Scenario `i` was answered; feedback is on screen
    FeedbackShown(usize),
    /// All scenarios answered
    Complete,
}

impl std::fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundPhase::Presenting(i) => write!(f, "PRESENTING({})", i),
            RoundPhase::FeedbackShown(i) => write!(f, "FEEDBACK({})", i),
            RoundPhase::Complete => write!(f, "COMPLETE"),
        }
    }
}
