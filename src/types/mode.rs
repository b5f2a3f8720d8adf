//! Game modes and navigation screens

use serde::{Deserialize, Serialize};

/// The five mini-games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Pick the strongest rebuttal
    Arena,
    /// Name the fallacy against the clock
    FallacyHunt,
    /// Build an argument from cards
    FrameFlame,
    /// Decide who carries the burden of proof
    BurdenBrawl,
    /// Weigh evidence and deliver a verdict
    VerdictRoom,
}

impl GameMode {
    /// Menu order
    pub const ALL: [GameMode; 5] = [
        GameMode::Arena,
        GameMode::FallacyHunt,
        GameMode::FrameFlame,
        GameMode::BurdenBrawl,
        GameMode::VerdictRoom,
    ];

    /// Stable identifier (menu input, logs, JSON)
    pub fn id(&self) -> &'static str {
        match self {
            GameMode::Arena => "arena",
            GameMode::FallacyHunt => "fallacy-hunt",
            GameMode::FrameFlame => "frame-flame",
            GameMode::BurdenBrawl => "burden-brawl",
            GameMode::VerdictRoom => "verdict-room",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            GameMode::Arena => "The Arena",
            GameMode::FallacyHunt => "Fallacy Hunt",
            GameMode::FrameFlame => "Frame the Flame",
            GameMode::BurdenBrawl => "Burden Brawl",
            GameMode::VerdictRoom => "The Verdict Room",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            GameMode::Arena => "Debate Battle Simulator",
            GameMode::FallacyHunt => "Spot the Logic Errors",
            GameMode::FrameFlame => "Argument Construction",
            GameMode::BurdenBrawl => "Proof Assignment",
            GameMode::VerdictRoom => "Mock Jury Trial",
        }
    }

    /// Minimum player level before the mode can be selected
    pub fn unlock_level(&self) -> u32 {
        match self {
            GameMode::Arena => 1,
            GameMode::FallacyHunt => 1,
            GameMode::FrameFlame => 3,
            GameMode::BurdenBrawl => 2,
            GameMode::VerdictRoom => 5,
        }
    }

    /// Parse a mode id
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Screens the navigation controller moves between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    /// Initial screen
    Landing,
    /// Mode selection
    Menu,
    /// A mini-game is running
    Game(GameMode),
    /// Profile dashboard
    Profile,
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Screen::Landing => write!(f, "LANDING"),
            Screen::Menu => write!(f, "MENU"),
            Screen::Game(mode) => write!(f, "GAME({})", mode.id()),
            Screen::Profile => write!(f, "PROFILE"),
        }
    }
}
