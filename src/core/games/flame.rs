//! Frame the Flame: build an argument from a hand of 3-4 cards
//!
//! The score is not clamped, a well-structured hand of strong cards can
//! exceed 100.

use crate::content::FLAME_TOPICS;
use crate::core::runner::{RoundContext, RoundRules, ScenarioRunner};
use crate::core::scoring::{argument_score, flame_xp, ArgumentScore};
use crate::types::{ArgumentCard, FlameTopic, GameMode, RoundOutcome, RoundReason, ScoreBand};
use crate::{FLAME_MAX_CARDS, FLAME_MIN_CARDS};

pub type FlameGame = ScenarioRunner<FlameRules>;

#[derive(Debug, Clone, Default)]
pub struct FlameRules {
    last_score: Option<ArgumentScore>,
}

impl FlameRules {
    /// Breakdown of the most recently submitted argument
    pub fn last_score(&self) -> Option<ArgumentScore> {
        self.last_score
    }
}

impl RoundRules for FlameRules {
    type Scenario = FlameTopic;
    type Choice = [String];

    fn mode(&self) -> GameMode {
        GameMode::FrameFlame
    }

    fn evaluate(&mut self, topic: &FlameTopic, card_ids: &[String], _ctx: RoundContext) -> Result<RoundOutcome, RoundReason> {
        let mut cards: Vec<ArgumentCard> = Vec::with_capacity(card_ids.len());
        for id in card_ids {
            let card = topic.find_card(id).ok_or(RoundReason::R210_UNKNOWN_OPTION)?;
            if cards.iter().any(|c| c.id == card.id) {
                return Err(RoundReason::R212_DUPLICATE_SELECTION);
            }
            cards.push(*card);
        }

        let score = argument_score(&cards)?;
        self.last_score = Some(score);
        let good = ScoreBand::for_argument(score.score) != ScoreBand::Low;
        Ok(RoundOutcome::new(score.score, good))
    }

    /// One topic per game: the argument score is the total
    fn completion_xp(&self, total_points: u32) -> u32 {
        flame_xp(total_points)
    }
}

pub fn new_game() -> FlameGame {
    ScenarioRunner::new(FlameRules::default(), FLAME_TOPICS.to_vec())
}

/// The player's hand while building an argument
#[derive(Debug, Clone, Default)]
pub struct ArgumentBuilder {
    cards: Vec<ArgumentCard>,
}

impl ArgumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card. No-op (false) when the hand is full or already holds it.
    pub fn add(&mut self, card: ArgumentCard) -> bool {
        if self.is_full() || self.contains(card.id) {
            return false;
        }
        self.cards.push(card);
        true
    }

    /// Return a card to the pool
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.cards.len();
        self.cards.retain(|c| c.id != id);
        self.cards.len() != before
    }

    /// Add when absent, remove when held
    pub fn toggle(&mut self, card: ArgumentCard) -> bool {
        if self.contains(card.id) {
            self.remove(card.id)
        } else {
            self.add(card)
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    pub fn is_full(&self) -> bool {
        self.cards.len() >= FLAME_MAX_CARDS
    }

    pub fn can_evaluate(&self) -> bool {
        self.cards.len() >= FLAME_MIN_CARDS
    }

    pub fn cards(&self) -> &[ArgumentCard] {
        &self.cards
    }

    /// Ids in selection order, ready for submission
    pub fn card_ids(&self) -> Vec<String> {
        self.cards.iter().map(|c| c.id.to_string()).collect()
    }
}
