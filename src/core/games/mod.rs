//! The five mini-games as rules for the shared scenario runner

pub mod arena;
pub mod burden;
pub mod fallacy;
pub mod flame;
pub mod verdict;

use serde::{Deserialize, Serialize};

use crate::types::{CompletionEvent, GameMode, RoundOutcome, RoundPhase, RoundReason};

pub use arena::ArenaGame;
pub use burden::BurdenGame;
pub use fallacy::FallacyGame;
pub use flame::{ArgumentBuilder, FlameGame};
pub use verdict::{TrialBuilder, TrialPhase, TrialSubmission, VerdictGame};

/// One player action, routed to whichever game is running
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayerInput {
    /// Option id (Arena, Fallacy Hunt, Burden Brawl)
    Pick { id: String },
    /// Card ids (Frame the Flame)
    Argument { cards: Vec<String> },
    /// Full trial decision (Verdict Room)
    Trial(TrialSubmission),
}

impl PlayerInput {
    pub fn pick(id: impl Into<String>) -> Self {
        PlayerInput::Pick { id: id.into() }
    }
}

/// The mini-game currently on screen
#[derive(Debug)]
pub enum ActiveGame {
    Arena(ArenaGame),
    FallacyHunt(FallacyGame),
    FrameFlame(FlameGame),
    BurdenBrawl(BurdenGame),
    VerdictRoom(VerdictGame),
}

macro_rules! each_game {
    ($game:expr, $g:ident => $body:expr) => {
        match $game {
            ActiveGame::Arena($g) => $body,
            ActiveGame::FallacyHunt($g) => $body,
            ActiveGame::FrameFlame($g) => $body,
            ActiveGame::BurdenBrawl($g) => $body,
            ActiveGame::VerdictRoom($g) => $body,
        }
    };
}

impl ActiveGame {
    /// Fresh game over the mode's full content table
    pub fn new(mode: GameMode) -> Self {
        match mode {
            GameMode::Arena => ActiveGame::Arena(arena::new_game()),
            GameMode::FallacyHunt => ActiveGame::FallacyHunt(fallacy::new_game()),
            GameMode::FrameFlame => ActiveGame::FrameFlame(flame::new_game()),
            GameMode::BurdenBrawl => ActiveGame::BurdenBrawl(burden::new_game()),
            GameMode::VerdictRoom => ActiveGame::VerdictRoom(verdict::new_game()),
        }
    }

    /// Route an input to the running game. Wrong-shaped input is rejected.
    pub fn submit(&mut self, input: &PlayerInput) -> Result<RoundOutcome, RoundReason> {
        match (self, input) {
            (ActiveGame::Arena(g), PlayerInput::Pick { id }) => g.choose(id),
            (ActiveGame::FallacyHunt(g), PlayerInput::Pick { id }) => g.choose(id),
            (ActiveGame::BurdenBrawl(g), PlayerInput::Pick { id }) => g.choose(id),
            (ActiveGame::FrameFlame(g), PlayerInput::Argument { cards }) => g.choose(cards),
            (ActiveGame::VerdictRoom(g), PlayerInput::Trial(trial)) => g.choose(trial),
            _ => Err(RoundReason::R211_INPUT_MISMATCH),
        }
    }

    pub fn tick(&mut self) -> Option<RoundOutcome> {
        each_game!(self, g => g.tick())
    }

    /// Start a round clock that waits for the player (Verdict Room)
    pub fn start_clock(&mut self) -> bool {
        each_game!(self, g => g.start_clock())
    }

    pub fn advance(&mut self) -> Result<Option<CompletionEvent>, RoundReason> {
        each_game!(self, g => g.advance())
    }

    pub fn mode(&self) -> GameMode {
        each_game!(self, g => g.mode())
    }

    pub fn phase(&self) -> RoundPhase {
        each_game!(self, g => g.phase())
    }

    /// Running total
    pub fn score(&self) -> u32 {
        each_game!(self, g => g.total_points())
    }

    pub fn time_left(&self) -> Option<u32> {
        each_game!(self, g => g.time_left())
    }

    pub fn last_outcome(&self) -> Option<RoundOutcome> {
        each_game!(self, g => g.last_outcome())
    }

    pub fn round_number(&self) -> usize {
        each_game!(self, g => g.round_number())
    }

    pub fn round_count(&self) -> usize {
        each_game!(self, g => g.round_count())
    }

    pub fn is_complete(&self) -> bool {
        each_game!(self, g => g.is_complete())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matches_mode() {
        for mode in GameMode::ALL {
            let game = ActiveGame::new(mode);
            assert_eq!(game.mode(), mode);
            assert_eq!(game.phase(), RoundPhase::Presenting(0));
            assert_eq!(game.score(), 0);
        }
    }

    #[test]
    fn test_input_shape_mismatch() {
        let mut arena = ActiveGame::new(GameMode::Arena);
        let argument = PlayerInput::Argument { cards: vec!["1".into(), "2".into(), "3".into()] };
        assert_eq!(arena.submit(&argument), Err(RoundReason::R211_INPUT_MISMATCH));

        let mut flame = ActiveGame::new(GameMode::FrameFlame);
        assert_eq!(flame.submit(&PlayerInput::pick("a")), Err(RoundReason::R211_INPUT_MISMATCH));
        assert_eq!(flame.phase(), RoundPhase::Presenting(0));
    }

    #[test]
    fn test_input_serde_shape() {
        let json = serde_json::to_string(&PlayerInput::pick("b")).unwrap();
        assert_eq!(json, r#"{"kind":"pick","id":"b"}"#);
    }

    #[test]
    fn test_only_timed_games_have_clock() {
        assert_eq!(ActiveGame::new(GameMode::Arena).time_left(), None);
        assert_eq!(ActiveGame::new(GameMode::FallacyHunt).time_left(), Some(crate::FALLACY_ROUND_SECS));
        assert_eq!(ActiveGame::new(GameMode::VerdictRoom).time_left(), Some(crate::VERDICT_DELIBERATION_SECS));
    }

    #[test]
    fn test_only_verdict_clock_waits() {
        assert!(!ActiveGame::new(GameMode::FallacyHunt).start_clock());
        assert!(!ActiveGame::new(GameMode::Arena).start_clock());
        assert!(ActiveGame::new(GameMode::VerdictRoom).start_clock());
    }
}
