//! The Arena: pick the strongest rebuttal to the opponent's point

use crate::content::ARENA_SCENARIOS;
use crate::core::runner::{RoundContext, RoundRules, ScenarioRunner};
use crate::core::scoring::{arena_round_points, arena_xp};
use crate::types::{ArenaScenario, GameMode, RoundOutcome, RoundReason, ScoreBand};

pub type ArenaGame = ScenarioRunner<ArenaRules>;

#[derive(Debug, Clone, Default)]
pub struct ArenaRules;

impl RoundRules for ArenaRules {
    type Scenario = ArenaScenario;
    type Choice = str;

    fn mode(&self) -> GameMode {
        GameMode::Arena
    }

    fn evaluate(&mut self, scenario: &ArenaScenario, option_id: &str, _ctx: RoundContext) -> Result<RoundOutcome, RoundReason> {
        let option = scenario
            .options
            .iter()
            .find(|o| o.id == option_id)
            .ok_or(RoundReason::R210_UNKNOWN_OPTION)?;

        // Only "Strong" rebuttals count as correct
        let strong = ScoreBand::for_strength(option.strength) == ScoreBand::High;
        Ok(RoundOutcome::new(arena_round_points(option.strength), strong))
    }

    fn completion_xp(&self, total_points: u32) -> u32 {
        arena_xp(total_points)
    }
}

pub fn new_game() -> ArenaGame {
    ScenarioRunner::new(ArenaRules, ARENA_SCENARIOS.to_vec())
}
