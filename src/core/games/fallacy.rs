//! Fallacy Hunt: name the fallacy before the 15 second clock runs out
//!
//! A correct answer earns base points, a time bonus and a bonus for the
//! streak *before* the answer. Misses and timeouts reset the streak.

use tracing::debug;

use crate::content::FALLACY_QUESTIONS;
use crate::core::runner::{RoundContext, RoundRules, ScenarioRunner};
use crate::core::scoring::{fallacy_points, fallacy_xp, next_streak};
use crate::types::{FallacyQuestion, GameMode, RoundOutcome, RoundReason};
use crate::FALLACY_ROUND_SECS;

pub type FallacyGame = ScenarioRunner<FallacyRules>;

#[derive(Debug, Clone, Default)]
pub struct FallacyRules {
    streak: u32,
    best_streak: u32,
}

impl FallacyRules {
    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    fn update_streak(&mut self, correct: bool) {
        self.streak = next_streak(correct, self.streak);
        self.best_streak = self.best_streak.max(self.streak);
    }
}

impl RoundRules for FallacyRules {
    type Scenario = FallacyQuestion;
    type Choice = str;

    fn mode(&self) -> GameMode {
        GameMode::FallacyHunt
    }

    fn evaluate(&mut self, question: &FallacyQuestion, option_id: &str, ctx: RoundContext) -> Result<RoundOutcome, RoundReason> {
        if !question.options.iter().any(|o| o.id == option_id) {
            return Err(RoundReason::R210_UNKNOWN_OPTION);
        }

        let correct = option_id == question.correct;
        let time_left = ctx.time_left_secs.unwrap_or(0);
        let points = fallacy_points(correct, time_left, self.streak);
        self.update_streak(correct);
        debug!(correct, time_left, streak = self.streak, "fallacy answer");

        Ok(RoundOutcome::new(points, correct))
    }

    fn completion_xp(&self, total_points: u32) -> u32 {
        fallacy_xp(total_points)
    }

    fn round_time_limit(&self) -> Option<u32> {
        Some(FALLACY_ROUND_SECS)
    }

    fn on_timeout(&mut self, _question: &FallacyQuestion) -> Option<RoundOutcome> {
        self.update_streak(false);
        Some(RoundOutcome::miss())
    }
}

pub fn new_game() -> FallacyGame {
    ScenarioRunner::new(FallacyRules::default(), FALLACY_QUESTIONS.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RoundPhase;

    fn answer_correctly(game: &mut FallacyGame) -> RoundOutcome {
        let correct = game.current().unwrap().correct;
        game.choose(correct).unwrap()
    }

    #[test]
    fn test_streak_bonus_counts_prior_answers() {
        let mut game = new_game();
        for _ in 0..5 {
            game.tick();
        }
        // 10s left, streak 0
        assert_eq!(answer_correctly(&mut game).points_awarded, 100);
        game.advance().unwrap();

        for _ in 0..5 {
            game.tick();
        }
        // 10s left, streak 1
        assert_eq!(answer_correctly(&mut game).points_awarded, 110);
        game.advance().unwrap();

        for _ in 0..5 {
            game.tick();
        }
        // 10s left, streak 2
        assert_eq!(answer_correctly(&mut game).points_awarded, 120);
        assert_eq!(game.rules().streak(), 3);
    }

    #[test]
    fn test_wrong_answer_resets_streak() {
        let mut game = new_game();
        answer_correctly(&mut game);
        game.advance().unwrap();

        let wrong = game
            .current()
            .unwrap()
            .options
            .iter()
            .find(|o| o.id != game.current().unwrap().correct)
            .unwrap()
            .id;
        assert_eq!(game.choose(wrong).unwrap(), RoundOutcome::miss());
        assert_eq!(game.rules().streak(), 0);
        assert_eq!(game.rules().best_streak(), 1);
    }

    #[test]
    fn test_timeout_is_a_miss() {
        let mut game = new_game();
        answer_correctly(&mut game);
        game.advance().unwrap();

        let mut timed_out = None;
        for _ in 0..FALLACY_ROUND_SECS {
            timed_out = game.tick().or(timed_out);
        }
        assert_eq!(timed_out, Some(RoundOutcome::miss()));
        assert_eq!(game.phase(), RoundPhase::FeedbackShown(1));
        assert_eq!(game.rules().streak(), 0);
        assert_eq!(game.choose("bandwagon"), Err(RoundReason::R201_ANSWER_LOCKED));
    }

    #[test]
    fn test_clock_restarts_per_question() {
        let mut game = new_game();
        game.tick();
        answer_correctly(&mut game);
        assert_eq!(game.time_left(), Some(14));
        game.advance().unwrap();
        assert_eq!(game.time_left(), Some(FALLACY_ROUND_SECS));
    }

    #[test]
    fn test_immediate_answer_full_time_bonus() {
        let mut game = new_game();
        // 50 + 15 × 5
        assert_eq!(answer_correctly(&mut game).points_awarded, 125);
    }
}
