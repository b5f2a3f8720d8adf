//! The Verdict Room: weigh the evidence, then rule on the charge
//!
//! Trial phases (driven by [`TrialBuilder`]):
//! - BRIEFING → EVIDENCE_REVIEW: always
//! - EVIDENCE_REVIEW → DELIBERATION: at least one piece selected
//! - DELIBERATION → submission: a verdict chosen
//!
//! The 180 second deliberation clock stays stopped through briefing and
//! evidence review, and starts with deliberation. It is display-only and
//! never forces a submission.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::content::TRIAL_CASES;
use crate::core::runner::{RoundContext, RoundRules, ScenarioRunner};
use crate::core::scoring::{verdict_score, verdict_xp, VerdictScore};
use crate::types::{Evidence, GameMode, RoundOutcome, RoundReason, TrialCase, Verdict};
use crate::VERDICT_DELIBERATION_SECS;

pub type VerdictGame = ScenarioRunner<VerdictRules>;

/// Everything the player decided for one trial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialSubmission {
    /// Evidence ids in selection order
    pub selected: Vec<String>,
    /// Player ratings (0-100). Unrated pieces count as 50.
    pub assigned_scores: BTreeMap<String, u32>,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Default)]
pub struct VerdictRules {
    last_score: Option<VerdictScore>,
}

impl VerdictRules {
    pub fn last_score(&self) -> Option<VerdictScore> {
        self.last_score
    }
}

impl RoundRules for VerdictRules {
    type Scenario = TrialCase;
    type Choice = TrialSubmission;

    fn mode(&self) -> GameMode {
        GameMode::VerdictRoom
    }

    fn evaluate(&mut self, case: &TrialCase, submission: &TrialSubmission, _ctx: RoundContext) -> Result<RoundOutcome, RoundReason> {
        if submission.selected.is_empty() {
            return Err(RoundReason::R222_NO_EVIDENCE_SELECTED);
        }

        let mut rated: Vec<(&Evidence, Option<u32>)> = Vec::with_capacity(submission.selected.len());
        for id in &submission.selected {
            let evidence = case.find_evidence(id).ok_or(RoundReason::R210_UNKNOWN_OPTION)?;
            if rated.iter().any(|(e, _)| e.id == evidence.id) {
                return Err(RoundReason::R212_DUPLICATE_SELECTION);
            }
            let assigned = submission.assigned_scores.get(id.as_str()).map(|s| (*s).min(100));
            rated.push((evidence, assigned));
        }

        let score = verdict_score(case, rated, submission.verdict);
        self.last_score = Some(score);
        Ok(RoundOutcome::new(score.final_score, score.verdict_correct))
    }

    fn completion_xp(&self, total_points: u32) -> u32 {
        verdict_xp(total_points)
    }

    fn round_time_limit(&self) -> Option<u32> {
        Some(VERDICT_DELIBERATION_SECS)
    }

    fn clock_waits_for_start(&self) -> bool {
        true
    }
}

pub fn new_game() -> VerdictGame {
    ScenarioRunner::new(VerdictRules::default(), TRIAL_CASES.to_vec())
}

/// Where the player stands within one trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrialPhase {
    Briefing,
    EvidenceReview,
    Deliberation,
}

impl std::fmt::Display for TrialPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrialPhase::Briefing => write!(f, "BRIEFING"),
            TrialPhase::EvidenceReview => write!(f, "EVIDENCE_REVIEW"),
            TrialPhase::Deliberation => write!(f, "DELIBERATION"),
        }
    }
}

/// Collects a [`TrialSubmission`] step by step
#[derive(Debug, Clone)]
pub struct TrialBuilder {
    phase: TrialPhase,
    selected: Vec<String>,
    assigned_scores: BTreeMap<String, u32>,
    verdict: Option<Verdict>,
}

impl Default for TrialBuilder {
    fn default() -> Self {
        Self {
            phase: TrialPhase::Briefing,
            selected: Vec::new(),
            assigned_scores: BTreeMap::new(),
            verdict: None,
        }
    }
}

impl TrialBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> TrialPhase {
        self.phase
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    pub fn assigned_score(&self, id: &str) -> Option<u32> {
        self.assigned_scores.get(id).copied()
    }

    /// Briefing → evidence review
    pub fn begin_review(&mut self) -> Result<(), RoundReason> {
        self.require(TrialPhase::Briefing)?;
        self.phase = TrialPhase::EvidenceReview;
        Ok(())
    }

    /// Select or deselect a piece. Returns whether it is now selected.
    pub fn toggle_evidence(&mut self, case: &TrialCase, id: &str) -> Result<bool, RoundReason> {
        self.require(TrialPhase::EvidenceReview)?;
        let evidence = case.find_evidence(id).ok_or(RoundReason::R210_UNKNOWN_OPTION)?;

        if let Some(pos) = self.selected.iter().position(|s| s == evidence.id) {
            self.selected.remove(pos);
            Ok(false)
        } else {
            self.selected.push(evidence.id.to_string());
            Ok(true)
        }
    }

    /// Rate a piece of evidence; values above 100 are clamped
    pub fn assign_score(&mut self, case: &TrialCase, id: &str, score: u32) -> Result<u32, RoundReason> {
        self.require(TrialPhase::EvidenceReview)?;
        let evidence = case.find_evidence(id).ok_or(RoundReason::R210_UNKNOWN_OPTION)?;
        let clamped = score.min(100);
        self.assigned_scores.insert(evidence.id.to_string(), clamped);
        Ok(clamped)
    }

    /// Evidence review → deliberation
    pub fn begin_deliberation(&mut self) -> Result<(), RoundReason> {
        self.require(TrialPhase::EvidenceReview)?;
        if self.selected.is_empty() {
            return Err(RoundReason::R222_NO_EVIDENCE_SELECTED);
        }
        self.phase = TrialPhase::Deliberation;
        Ok(())
    }

    pub fn choose_verdict(&mut self, verdict: Verdict) -> Result<(), RoundReason> {
        self.require(TrialPhase::Deliberation)?;
        self.verdict = Some(verdict);
        Ok(())
    }

    /// Final submission for the runner
    pub fn submission(&self) -> Result<TrialSubmission, RoundReason> {
        self.require(TrialPhase::Deliberation)?;
        let verdict = self.verdict.ok_or(RoundReason::R223_NO_VERDICT)?;
        Ok(TrialSubmission {
            selected: self.selected.clone(),
            assigned_scores: self
                .assigned_scores
                .iter()
                .filter(|(id, _)| self.selected.contains(*id))
                .map(|(id, score)| (id.clone(), *score))
                .collect(),
            verdict,
        })
    }

    fn require(&self, phase: TrialPhase) -> Result<(), RoundReason> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(RoundReason::R224_WRONG_TRIAL_PHASE)
        }
    }
}
