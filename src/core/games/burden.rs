//! Burden Brawl: decide who carries the burden of proof

use crate::content::BURDEN_SCENARIOS;
use crate::core::runner::{RoundContext, RoundRules, ScenarioRunner};
use crate::core::scoring::{burden_points, burden_xp};
use crate::types::{BurdenScenario, GameMode, RoundOutcome, RoundReason};

pub type BurdenGame = ScenarioRunner<BurdenRules>;

#[derive(Debug, Clone, Default)]
pub struct BurdenRules;

impl RoundRules for BurdenRules {
    type Scenario = BurdenScenario;
    type Choice = str;

    fn mode(&self) -> GameMode {
        GameMode::BurdenBrawl
    }

    fn evaluate(&mut self, scenario: &BurdenScenario, option_id: &str, _ctx: RoundContext) -> Result<RoundOutcome, RoundReason> {
        let option = scenario
            .options
            .iter()
            .find(|o| o.id == option_id)
            .ok_or(RoundReason::R210_UNKNOWN_OPTION)?;
        Ok(RoundOutcome::new(burden_points(option.is_correct), option.is_correct))
    }

    fn completion_xp(&self, total_points: u32) -> u32 {
        burden_xp(total_points)
    }
}

pub fn new_game() -> BurdenGame {
    ScenarioRunner::new(BurdenRules, BURDEN_SCENARIOS.to_vec())
}
