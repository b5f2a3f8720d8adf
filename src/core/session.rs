//! Session controller: screens, the unlock gate and completion routing
//!
//! Screen transitions:
//! - LANDING → MENU: start
//! - MENU → GAME(mode): select_mode, only when unlocked
//! - MENU → PROFILE: open_profile
//! - GAME | PROFILE → MENU: back_to_menu, or a finished game's advance
//!
//! Rejected navigation is a no-op reported with a reason code.

use tracing::debug;

use crate::core::games::{ActiveGame, PlayerInput, TrialBuilder};
use crate::core::progress::ProgressTracker;
use crate::core::store::ProgressStore;
use crate::types::{
    CompletionSummary, GameMode, NavReason, ProgressRecord, RoundOutcome, RoundReason, Screen,
    SessionState,
};

#[derive(Debug)]
pub struct SessionController<S: ProgressStore> {
    screen: Screen,
    tracker: ProgressTracker<S>,
    session: SessionState,
    game: Option<ActiveGame>,
}

impl<S: ProgressStore> SessionController<S> {
    /// Start on the landing screen with progress loaded from `store`
    pub fn open(store: S) -> Self {
        Self::new(ProgressTracker::open(store))
    }

    pub fn new(tracker: ProgressTracker<S>) -> Self {
        Self {
            screen: Screen::Landing,
            tracker,
            session: SessionState::default(),
            game: None,
        }
    }

    pub fn start(&mut self) -> NavReason {
        if self.screen != Screen::Landing {
            return NavReason::R111_NOT_AVAILABLE_HERE;
        }
        self.go(Screen::Menu, NavReason::R100_ENTERED_MENU)
    }

    /// Enter a mini-game. Locked modes leave everything unchanged.
    pub fn select_mode(&mut self, mode: GameMode) -> NavReason {
        if self.screen != Screen::Menu {
            return NavReason::R111_NOT_AVAILABLE_HERE;
        }
        if !self.tracker.record().is_unlocked(mode) {
            debug!(
                mode = mode.id(),
                level = self.tracker.record().level,
                required = mode.unlock_level(),
                "mode locked"
            );
            return NavReason::R110_MODE_LOCKED;
        }

        self.game = Some(ActiveGame::new(mode));
        self.session = SessionState::for_game(mode);
        self.sync_session();
        self.go(Screen::Game(mode), NavReason::R101_GAME_STARTED)
    }

    pub fn open_profile(&mut self) -> NavReason {
        if self.screen != Screen::Menu {
            return NavReason::R111_NOT_AVAILABLE_HERE;
        }
        self.go(Screen::Profile, NavReason::R102_PROFILE_OPENED)
    }

    /// Leave a game or the profile. An abandoned game awards nothing.
    pub fn back_to_menu(&mut self) -> NavReason {
        match self.screen {
            Screen::Game(_) | Screen::Profile => {
                self.close_game();
                self.go(Screen::Menu, NavReason::R103_RETURNED_TO_MENU)
            }
            Screen::Landing | Screen::Menu => NavReason::R111_NOT_AVAILABLE_HERE,
        }
    }

    /// Player input for the running game
    pub fn submit(&mut self, input: &PlayerInput) -> Result<RoundOutcome, RoundReason> {
        let game = self.game.as_mut().ok_or(RoundReason::R200_NO_ACTIVE_GAME)?;
        let outcome = game.submit(input)?;
        self.sync_session();
        Ok(outcome)
    }

    /// One second of wall time for the running game's clock
    pub fn tick(&mut self) -> Option<RoundOutcome> {
        let outcome = self.game.as_mut()?.tick();
        self.sync_session();
        outcome
    }

    /// Move a trial into deliberation and start the Verdict Room clock
    pub fn begin_deliberation(&mut self, trial: &mut TrialBuilder) -> Result<(), RoundReason> {
        let game = self.game.as_mut().ok_or(RoundReason::R200_NO_ACTIVE_GAME)?;
        if game.mode() != GameMode::VerdictRoom {
            return Err(RoundReason::R211_INPUT_MISMATCH);
        }
        trial.begin_deliberation()?;
        game.start_clock();
        self.sync_session();
        Ok(())
    }

    /// Move past feedback. A finished game is credited and closed.
    pub fn advance(&mut self) -> Result<Option<CompletionSummary>, RoundReason> {
        let game = self.game.as_mut().ok_or(RoundReason::R200_NO_ACTIVE_GAME)?;
        match game.advance()? {
            Some(event) => {
                let summary = self.tracker.apply(&event);
                self.close_game();
                self.go(Screen::Menu, NavReason::R103_RETURNED_TO_MENU);
                Ok(Some(summary))
            }
            None => {
                self.sync_session();
                Ok(None)
            }
        }
    }

    fn go(&mut self, screen: Screen, reason: NavReason) -> NavReason {
        debug!(from = %self.screen, to = %screen, reason = reason.code(), "screen change");
        self.screen = screen;
        reason
    }

    fn close_game(&mut self) {
        self.game = None;
        self.session = SessionState::default();
    }

    fn sync_session(&mut self) {
        if let Some(game) = &self.game {
            self.session.score = game.score();
            if let Some(secs) = game.time_left() {
                self.session.time_remaining_secs = secs;
            }
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn game(&self) -> Option<&ActiveGame> {
        self.game.as_ref()
    }

    pub fn record(&self) -> &ProgressRecord {
        self.tracker.record()
    }

    pub fn tracker(&self) -> &ProgressTracker<S> {
        &self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MemoryStore;

    fn at_menu() -> SessionController<MemoryStore> {
        let mut controller = SessionController::open(MemoryStore::new());
        assert_eq!(controller.start(), NavReason::R100_ENTERED_MENU);
        controller
    }

    #[test]
    fn test_starts_on_landing() {
        let mut controller = SessionController::open(MemoryStore::new());
        assert_eq!(controller.screen(), Screen::Landing);
        assert_eq!(controller.select_mode(GameMode::Arena), NavReason::R111_NOT_AVAILABLE_HERE);
        controller.start();
        assert_eq!(controller.start(), NavReason::R111_NOT_AVAILABLE_HERE);
    }

    #[test]
    fn test_locked_mode_is_noop() {
        let mut controller = at_menu();
        assert_eq!(controller.select_mode(GameMode::VerdictRoom), NavReason::R110_MODE_LOCKED);
        assert_eq!(controller.screen(), Screen::Menu);
        assert_eq!(controller.session().active_game, None);
        assert!(controller.game().is_none());
    }

    #[test]
    fn test_select_resets_session() {
        let mut controller = at_menu();
        assert_eq!(controller.select_mode(GameMode::FallacyHunt), NavReason::R101_GAME_STARTED);
        assert_eq!(controller.session().active_game, Some(GameMode::FallacyHunt));
        assert_eq!(controller.session().time_remaining_secs, crate::FALLACY_ROUND_SECS);
        assert_eq!(controller.session().lives_remaining, crate::SESSION_LIVES);
    }

    #[test]
    fn test_submit_without_game() {
        let mut controller = at_menu();
        assert_eq!(
            controller.submit(&PlayerInput::pick("a")),
            Err(RoundReason::R200_NO_ACTIVE_GAME)
        );
        assert_eq!(controller.advance(), Err(RoundReason::R200_NO_ACTIVE_GAME));
    }

    #[test]
    fn test_deliberation_needs_verdict_room() {
        let mut controller = at_menu();
        let mut trial = TrialBuilder::new();
        assert_eq!(controller.begin_deliberation(&mut trial), Err(RoundReason::R200_NO_ACTIVE_GAME));

        controller.select_mode(GameMode::Arena);
        trial.begin_review().unwrap();
        assert_eq!(controller.begin_deliberation(&mut trial), Err(RoundReason::R211_INPUT_MISMATCH));
    }

    #[test]
    fn test_back_to_menu_discards_game() {
        let mut controller = at_menu();
        controller.select_mode(GameMode::Arena);
        controller.submit(&PlayerInput::pick("a")).unwrap();
        assert_eq!(controller.session().score, 68);

        assert_eq!(controller.back_to_menu(), NavReason::R103_RETURNED_TO_MENU);
        assert_eq!(controller.session(), &SessionState::default());
        assert_eq!(controller.record().games_completed, 0);
        assert_eq!(controller.tick(), None);
    }

    #[test]
    fn test_profile_round_trip() {
        let mut controller = at_menu();
        assert_eq!(controller.open_profile(), NavReason::R102_PROFILE_OPENED);
        assert_eq!(controller.select_mode(GameMode::Arena), NavReason::R111_NOT_AVAILABLE_HERE);
        assert_eq!(controller.back_to_menu(), NavReason::R103_RETURNED_TO_MENU);
        assert_eq!(controller.back_to_menu(), NavReason::R111_NOT_AVAILABLE_HERE);
    }
}
