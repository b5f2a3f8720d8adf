//! Linear scenario runner: the state machine every mini-game shares
//!
//! State transitions:
//! - PRESENTING(i) → FEEDBACK(i): choice evaluated, or countdown expired
//! - FEEDBACK(i) → PRESENTING(i+1): advance, more scenarios left
//! - FEEDBACK(last) → COMPLETE: advance, emits the single CompletionEvent
//!
//! There are no backward transitions. Once feedback is shown for a scenario
//! its choice is locked.

use tracing::{debug, info};

use crate::core::countdown::{Countdown, Tick};
use crate::types::{CompletionEvent, GameMode, RoundOutcome, RoundPhase, RoundReason};

/// Context handed to a rules type when a choice is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundContext {
    /// Seconds left on the round clock, if the game has one
    pub time_left_secs: Option<u32>,
}

/// Per-game rules plugged into a [`ScenarioRunner`]
///
/// ## Implementation Notes
///
/// - `evaluate`: reject malformed choices with a reason, never panic
/// - `on_timeout`: `None` means the clock is display-only
/// - `completion_xp`: receives the accumulated points of the whole game
pub trait RoundRules {
    /// One content-table row
    type Scenario;
    /// What the player submits for one scenario
    type Choice: ?Sized;

    fn mode(&self) -> GameMode;

    /// Score one choice against one scenario
    fn evaluate(
        &mut self,
        scenario: &Self::Scenario,
        choice: &Self::Choice,
        ctx: RoundContext,
    ) -> Result<RoundOutcome, RoundReason>;

    /// XP for the finished game
    fn completion_xp(&self, total_points: u32) -> u32;

    /// Seconds per scenario, restarted for each one
    fn round_time_limit(&self) -> Option<u32> {
        None
    }

    /// Clock stays stopped until [`ScenarioRunner::start_clock`]
    fn clock_waits_for_start(&self) -> bool {
        false
    }

    /// Outcome when the round clock runs out
    fn on_timeout(&mut self, _scenario: &Self::Scenario) -> Option<RoundOutcome> {
        None
    }
}

/// Walks an ordered scenario list, scoring each choice with `R`
pub struct ScenarioRunner<R: RoundRules> {
    rules: R,
    scenarios: Vec<R::Scenario>,
    phase: RoundPhase,
    total_points: u32,
    correct_count: u32,
    last_outcome: Option<RoundOutcome>,
    countdown: Option<Countdown>,
    completion_emitted: bool,
}

impl<R: RoundRules> ScenarioRunner<R> {
    /// Start at the first scenario. An empty list starts complete.
    pub fn new(rules: R, scenarios: Vec<R::Scenario>) -> Self {
        let phase = if scenarios.is_empty() {
            RoundPhase::Complete
        } else {
            RoundPhase::Presenting(0)
        };
        let countdown = match phase {
            RoundPhase::Presenting(_) => round_clock(&rules),
            _ => None,
        };
        Self {
            rules,
            scenarios,
            phase,
            total_points: 0,
            correct_count: 0,
            last_outcome: None,
            countdown,
            completion_emitted: false,
        }
    }

    /// Submit a choice for the scenario being presented
    pub fn choose(&mut self, choice: &R::Choice) -> Result<RoundOutcome, RoundReason> {
        let index = match self.phase {
            RoundPhase::Presenting(i) => i,
            RoundPhase::FeedbackShown(_) => return Err(RoundReason::R201_ANSWER_LOCKED),
            RoundPhase::Complete => return Err(RoundReason::R203_GAME_COMPLETE),
        };
        let ctx = RoundContext {
            time_left_secs: self.countdown.as_ref().map(Countdown::remaining),
        };
        let outcome = self.rules.evaluate(&self.scenarios[index], choice, ctx)?;
        self.record(index, outcome);
        Ok(outcome)
    }

    /// Start a clock that waits for the player. Returns whether it started.
    pub fn start_clock(&mut self) -> bool {
        let RoundPhase::Presenting(index) = self.phase else {
            return false;
        };
        let started = self.countdown.as_mut().is_some_and(Countdown::start);
        if started {
            debug!(mode = self.rules.mode().id(), round = index, "round clock started");
        }
        started
    }

    /// One second of wall time. Returns the timeout outcome if the clock ran out.
    ///
    /// Ticks outside PRESENTING, or after the countdown stopped, are no-ops.
    pub fn tick(&mut self) -> Option<RoundOutcome> {
        let RoundPhase::Presenting(index) = self.phase else {
            return None;
        };
        let tick = self.countdown.as_mut()?.tick();
        if tick != Tick::Expired {
            return None;
        }
        let outcome = self.rules.on_timeout(&self.scenarios[index])?;
        debug!(mode = self.rules.mode().id(), round = index, "round timed out");
        self.record(index, outcome);
        Some(outcome)
    }

    /// Leave the feedback screen: next scenario, or completion
    pub fn advance(&mut self) -> Result<Option<CompletionEvent>, RoundReason> {
        match self.phase {
            RoundPhase::Presenting(_) => Err(RoundReason::R202_ANSWER_PENDING),
            RoundPhase::FeedbackShown(i) if i + 1 < self.scenarios.len() => {
                self.phase = RoundPhase::Presenting(i + 1);
                self.last_outcome = None;
                self.countdown = round_clock(&self.rules);
                Ok(None)
            }
            RoundPhase::FeedbackShown(_) => {
                self.phase = RoundPhase::Complete;
                Ok(Some(self.emit_completion()))
            }
            RoundPhase::Complete if !self.completion_emitted => Ok(Some(self.emit_completion())),
            RoundPhase::Complete => Err(RoundReason::R203_GAME_COMPLETE),
        }
    }

    fn record(&mut self, index: usize, outcome: RoundOutcome) {
        self.total_points += outcome.points_awarded;
        if outcome.is_correct {
            self.correct_count += 1;
        }
        self.last_outcome = Some(outcome);
        self.phase = RoundPhase::FeedbackShown(index);
        if let Some(countdown) = self.countdown.as_mut() {
            countdown.stop();
        }
        debug!(
            mode = self.rules.mode().id(),
            round = index,
            points = outcome.points_awarded,
            correct = outcome.is_correct,
            total = self.total_points,
            "round scored"
        );
    }

    fn emit_completion(&mut self) -> CompletionEvent {
        self.completion_emitted = true;
        let event = CompletionEvent {
            mode: self.rules.mode(),
            xp_gain: self.rules.completion_xp(self.total_points),
            points_gain: self.total_points,
        };
        info!(
            mode = event.mode.id(),
            points = event.points_gain,
            xp = event.xp_gain,
            "challenge complete"
        );
        event
    }

    /// Get current phase
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Scenario on screen (presenting or showing feedback)
    pub fn current(&self) -> Option<&R::Scenario> {
        match self.phase {
            RoundPhase::Presenting(i) | RoundPhase::FeedbackShown(i) => self.scenarios.get(i),
            RoundPhase::Complete => None,
        }
    }

    /// 1-based round number for display
    pub fn round_number(&self) -> usize {
        match self.phase {
            RoundPhase::Presenting(i) | RoundPhase::FeedbackShown(i) => i + 1,
            RoundPhase::Complete => self.scenarios.len(),
        }
    }

    pub fn round_count(&self) -> usize {
        self.scenarios.len()
    }

    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn last_outcome(&self) -> Option<RoundOutcome> {
        self.last_outcome
    }

    /// Seconds left on the round clock
    pub fn time_left(&self) -> Option<u32> {
        self.countdown.as_ref().map(Countdown::remaining)
    }

    pub fn is_complete(&self) -> bool {
        self.phase == RoundPhase::Complete
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn mode(&self) -> GameMode {
        self.rules.mode()
    }
}

/// Fresh clock for one scenario
fn round_clock<R: RoundRules>(rules: &R) -> Option<Countdown> {
    let limit = rules.round_time_limit()?;
    if rules.clock_waits_for_start() {
        Some(Countdown::paused(limit))
    } else {
        Some(Countdown::new(limit))
    }
}

impl<R: RoundRules> std::fmt::Debug for ScenarioRunner<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScenarioRunner")
            .field("mode", &self.rules.mode())
            .field("phase", &self.phase)
            .field("rounds", &self.scenarios.len())
            .field("total_points", &self.total_points)
            .field("time_left", &self.time_left())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Scenario = expected answer; correct answers score 10
    struct Quiz {
        clock: Option<u32>,
        waits: bool,
    }

    impl RoundRules for Quiz {
        type Scenario = u32;
        type Choice = u32;

        fn mode(&self) -> GameMode {
            GameMode::BurdenBrawl
        }

        fn evaluate(&mut self, scenario: &u32, choice: &u32, _ctx: RoundContext) -> Result<RoundOutcome, RoundReason> {
            if *choice > 9 {
                return Err(RoundReason::R210_UNKNOWN_OPTION);
            }
            let correct = scenario == choice;
            Ok(RoundOutcome::new(if correct { 10 } else { 0 }, correct))
        }

        fn completion_xp(&self, total_points: u32) -> u32 {
            total_points * 2
        }

        fn round_time_limit(&self) -> Option<u32> {
            self.clock
        }

        fn clock_waits_for_start(&self) -> bool {
            self.waits
        }

        fn on_timeout(&mut self, _scenario: &u32) -> Option<RoundOutcome> {
            Some(RoundOutcome::miss())
        }
    }

    fn runner(scenarios: Vec<u32>) -> ScenarioRunner<Quiz> {
        ScenarioRunner::new(Quiz { clock: None, waits: false }, scenarios)
    }

    #[test]
    fn test_linear_walk_emits_one_completion() {
        let mut r = runner(vec![1, 2]);
        assert_eq!(r.phase(), RoundPhase::Presenting(0));

        r.choose(&1).unwrap();
        assert_eq!(r.phase(), RoundPhase::FeedbackShown(0));
        assert_eq!(r.advance(), Ok(None));

        r.choose(&5).unwrap();
        let event = r.advance().unwrap().expect("completion");
        assert_eq!(event.points_gain, 10);
        assert_eq!(event.xp_gain, 20);
        assert!(r.is_complete());

        assert_eq!(r.advance(), Err(RoundReason::R203_GAME_COMPLETE));
    }

    #[test]
    fn test_choice_locked_after_feedback() {
        let mut r = runner(vec![1, 2]);
        r.choose(&3).unwrap();
        assert_eq!(r.choose(&1), Err(RoundReason::R201_ANSWER_LOCKED));
        assert_eq!(r.total_points(), 0);
    }

    #[test]
    fn test_advance_requires_answer() {
        let mut r = runner(vec![1]);
        assert_eq!(r.advance(), Err(RoundReason::R202_ANSWER_PENDING));
    }

    #[test]
    fn test_rejected_choice_keeps_presenting() {
        let mut r = runner(vec![1]);
        assert_eq!(r.choose(&42), Err(RoundReason::R210_UNKNOWN_OPTION));
        assert_eq!(r.phase(), RoundPhase::Presenting(0));
    }

    #[test]
    fn test_empty_list_completes_once() {
        let mut r = runner(vec![]);
        assert!(r.is_complete());
        assert!(r.advance().unwrap().is_some());
        assert_eq!(r.advance(), Err(RoundReason::R203_GAME_COMPLETE));
    }

    #[test]
    fn test_timeout_then_stale_ticks() {
        let mut r = ScenarioRunner::new(Quiz { clock: Some(2), waits: false }, vec![1, 2]);
        assert_eq!(r.tick(), None);
        assert_eq!(r.tick(), Some(RoundOutcome::miss()));
        assert_eq!(r.phase(), RoundPhase::FeedbackShown(0));

        // Feedback on screen: clock is cancelled
        assert_eq!(r.tick(), None);
        assert_eq!(r.phase(), RoundPhase::FeedbackShown(0));

        r.advance().unwrap();
        assert_eq!(r.time_left(), Some(2));
    }

    #[test]
    fn test_answer_stops_clock() {
        let mut r = ScenarioRunner::new(Quiz { clock: Some(15), waits: false }, vec![1]);
        r.tick();
        r.choose(&1).unwrap();
        for _ in 0..20 {
            assert_eq!(r.tick(), None);
        }
        assert_eq!(r.time_left(), Some(14));
    }

    #[test]
    fn test_waiting_clock_runs_only_once_started() {
        let mut r = ScenarioRunner::new(Quiz { clock: Some(10), waits: true }, vec![1, 2]);
        for _ in 0..30 {
            assert_eq!(r.tick(), None);
        }
        assert_eq!(r.time_left(), Some(10));

        assert!(r.start_clock());
        assert!(!r.start_clock());
        r.tick();
        assert_eq!(r.time_left(), Some(9));

        // Next scenario waits again
        r.choose(&1).unwrap();
        assert!(!r.start_clock());
        r.advance().unwrap();
        r.tick();
        assert_eq!(r.time_left(), Some(10));
    }

    #[test]
    fn test_start_clock_without_clock() {
        let mut r = runner(vec![1]);
        assert!(!r.start_clock());
        assert_eq!(r.time_left(), None);
    }
}
