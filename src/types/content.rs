//! Content table row types
//!
//! Rows are immutable `'static` data; runners copy them by value.

use serde::{Deserialize, Serialize};

// =============================================================================
// ARENA
// =============================================================================

/// One rebuttal the player may pick
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ArgumentOption {
    pub id: &'static str,
    pub text: &'static str,
    /// 0-100
    pub strength: u32,
    pub feedback: &'static str,
}

/// One debate round: opponent's point plus candidate rebuttals
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ArenaScenario {
    pub topic: &'static str,
    pub context: &'static str,
    pub opponent: &'static str,
    pub options: &'static [ArgumentOption],
}

// =============================================================================
// FALLACY HUNT
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FallacyOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// A statement hiding one fallacy (or none)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FallacyQuestion {
    pub statement: &'static str,
    pub options: &'static [FallacyOption],
    /// Id of the correct option
    pub correct: &'static str,
    pub explanation: &'static str,
}

// =============================================================================
// FRAME THE FLAME
// =============================================================================

/// Structural role of an argument card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Claim,
    Evidence,
    Reasoning,
    Counterpoint,
}

impl CardType {
    pub fn label(&self) -> &'static str {
        match self {
            CardType::Claim => "claim",
            CardType::Evidence => "evidence",
            CardType::Reasoning => "reasoning",
            CardType::Counterpoint => "counterpoint",
        }
    }
}

/// Which side of the motion a card argues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Pro,
    Con,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ArgumentCard {
    pub id: &'static str,
    pub text: &'static str,
    pub card_type: CardType,
    /// 0-100
    pub strength: u32,
    pub side: Side,
}

/// A motion plus the card pool to build from
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FlameTopic {
    pub title: &'static str,
    pub description: &'static str,
    pub cards: &'static [ArgumentCard],
}

impl FlameTopic {
    pub fn find_card(&self, id: &str) -> Option<&'static ArgumentCard> {
        self.cards.iter().find(|c| c.id == id)
    }
}

// =============================================================================
// BURDEN BRAWL
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BurdenOption {
    pub id: &'static str,
    pub text: &'static str,
    pub is_correct: bool,
    pub explanation: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BurdenScenario {
    pub title: &'static str,
    pub scenario: &'static str,
    pub claim: &'static str,
    pub options: &'static [BurdenOption],
    pub reasoning: &'static str,
}

// =============================================================================
// VERDICT ROOM
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceKind {
    Witness,
    Physical,
    Expert,
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Party {
    Prosecution,
    Defense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    Guilty,
    NotGuilty,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Guilty => write!(f, "GUILTY"),
            Verdict::NotGuilty => write!(f, "NOT GUILTY"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Evidence {
    pub id: &'static str,
    pub kind: EvidenceKind,
    pub title: &'static str,
    pub description: &'static str,
    /// 0-100
    pub credibility: u32,
    /// 0-100
    pub relevance: u32,
    pub side: Party,
}

impl Evidence {
    /// (credibility + relevance) / 2, the "true" value of this piece
    pub fn merit(&self) -> f64 {
        (self.credibility + self.relevance) as f64 / 2.0
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrialCase {
    pub title: &'static str,
    pub description: &'static str,
    pub charge: &'static str,
    pub evidence: &'static [Evidence],
    /// Canonical verdict
    pub verdict: Verdict,
    pub reasoning: &'static str,
}

impl TrialCase {
    pub fn find_evidence(&self, id: &str) -> Option<&'static Evidence> {
        self.evidence.iter().find(|e| e.id == id)
    }
}
