//! Reason codes for navigation and round decisions
//!
//! Rejections are no-ops at the interaction boundary, never faults.
//! Each code says why an input was accepted or ignored.

use serde::{Deserialize, Serialize};

/// Navigation outcomes (R1xx)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum NavReason {
    // =========================================================================
    // R100: Accepted transitions
    // =========================================================================
    /// Landing → menu
    R100_ENTERED_MENU,
    /// Menu → mini-game
    R101_GAME_STARTED,
    /// Menu → profile
    R102_PROFILE_OPENED,
    /// Game/profile → menu
    R103_RETURNED_TO_MENU,

    // =========================================================================
    // R110: Ignored inputs
    // =========================================================================
    /// Player level below the mode's unlock level
    R110_MODE_LOCKED,
    /// Transition not available from the current screen
    R111_NOT_AVAILABLE_HERE,
}

impl NavReason {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::R100_ENTERED_MENU => "R100_ENTERED_MENU",
            Self::R101_GAME_STARTED => "R101_GAME_STARTED",
            Self::R102_PROFILE_OPENED => "R102_PROFILE_OPENED",
            Self::R103_RETURNED_TO_MENU => "R103_RETURNED_TO_MENU",
            Self::R110_MODE_LOCKED => "R110_MODE_LOCKED",
            Self::R111_NOT_AVAILABLE_HERE => "R111_NOT_AVAILABLE_HERE",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::R100_ENTERED_MENU => "Entered the menu",
            Self::R101_GAME_STARTED => "Challenge started",
            Self::R102_PROFILE_OPENED => "Profile opened",
            Self::R103_RETURNED_TO_MENU => "Back at the menu",
            Self::R110_MODE_LOCKED => "Mode is locked at this level",
            Self::R111_NOT_AVAILABLE_HERE => "Not available from this screen",
        }
    }

    /// Did the screen change?
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::R110_MODE_LOCKED | Self::R111_NOT_AVAILABLE_HERE)
    }
}

impl std::fmt::Display for NavReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

/// Why a round input was rejected (R2xx)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum RoundReason {
    // =========================================================================
    // R200: Phase
    // =========================================================================
    /// No mini-game is running
    R200_NO_ACTIVE_GAME,
    /// Feedback already shown for this scenario
    R201_ANSWER_LOCKED,
    /// Scenario still waiting for an answer
    R202_ANSWER_PENDING,
    /// Every scenario has been played
    R203_GAME_COMPLETE,

    // =========================================================================
    // R210: Selection
    // =========================================================================
    /// Option/card/evidence id not in the scenario
    R210_UNKNOWN_OPTION,
    /// Input shape does not match the running game
    R211_INPUT_MISMATCH,
    /// Same card or evidence given twice
    R212_DUPLICATE_SELECTION,

    // =========================================================================
    // R220: Thresholds
    // =========================================================================
    /// Argument needs at least 3 cards
    R220_TOO_FEW_CARDS,
    /// Argument holds at most 4 cards
    R221_TOO_MANY_CARDS,
    /// Trial needs at least one piece of evidence
    R222_NO_EVIDENCE_SELECTED,
    /// Trial needs a verdict
    R223_NO_VERDICT,
    /// Step not allowed in the current trial phase
    R224_WRONG_TRIAL_PHASE,
}

impl RoundReason {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::R200_NO_ACTIVE_GAME => "R200_NO_ACTIVE_GAME",
            Self::R201_ANSWER_LOCKED => "R201_ANSWER_LOCKED",
            Self::R202_ANSWER_PENDING => "R202_ANSWER_PENDING",
            Self::R203_GAME_COMPLETE => "R203_GAME_COMPLETE",
            Self::R210_UNKNOWN_OPTION => "R210_UNKNOWN_OPTION",
            Self::R211_INPUT_MISMATCH => "R211_INPUT_MISMATCH",
            Self::R212_DUPLICATE_SELECTION => "R212_DUPLICATE_SELECTION",
            Self::R220_TOO_FEW_CARDS => "R220_TOO_FEW_CARDS",
            Self::R221_TOO_MANY_CARDS => "R221_TOO_MANY_CARDS",
            Self::R222_NO_EVIDENCE_SELECTED => "R222_NO_EVIDENCE_SELECTED",
            Self::R223_NO_VERDICT => "R223_NO_VERDICT",
            Self::R224_WRONG_TRIAL_PHASE => "R224_WRONG_TRIAL_PHASE",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::R200_NO_ACTIVE_GAME => "No challenge running",
            Self::R201_ANSWER_LOCKED => "Answer already locked in",
            Self::R202_ANSWER_PENDING => "Answer the current scenario first",
            Self::R203_GAME_COMPLETE => "Challenge already complete",
            Self::R210_UNKNOWN_OPTION => "Unknown option",
            Self::R211_INPUT_MISMATCH => "Input does not fit this challenge",
            Self::R212_DUPLICATE_SELECTION => "Selected twice",
            Self::R220_TOO_FEW_CARDS => "Select at least 3 cards",
            Self::R221_TOO_MANY_CARDS => "At most 4 cards",
            Self::R222_NO_EVIDENCE_SELECTED => "Select at least one piece of evidence",
            Self::R223_NO_VERDICT => "Choose a verdict first",
            Self::R224_WRONG_TRIAL_PHASE => "Not available in this trial phase",
        }
    }
}

impl std::fmt::Display for RoundReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
