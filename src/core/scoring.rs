//! Scoring engine: one pure formula per mini-game
//!
//! Every formula rounds like `Math.round`: floor(x + 0.5). All inputs are
//! non-negative, so this is round-half-up everywhere.

use crate::types::{ArgumentCard, CardType, Evidence, RoundReason, TrialCase, Verdict};
use crate::{
    ARENA_POINTS_FACTOR, ARENA_XP_FACTOR, BURDEN_CORRECT_POINTS, BURDEN_XP_FACTOR,
    FALLACY_BASE_POINTS, FALLACY_STREAK_BONUS, FALLACY_TIME_BONUS_PER_SEC, FALLACY_XP_FACTOR,
    FLAME_COHERENCE_BONUS, FLAME_FULL_STRUCTURE_BONUS, FLAME_MAX_CARDS, FLAME_MIN_CARDS,
    FLAME_PARTIAL_STRUCTURE_BONUS, FLAME_XP_FACTOR, VERDICT_COMPLETENESS_THRESHOLD,
    VERDICT_CORRECT_BONUS, VERDICT_DEFAULT_ASSIGNED_SCORE, VERDICT_XP_FACTOR,
};

/// floor(x + 0.5), clamped at zero
pub fn round_score(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    (value + 0.5).floor() as u32
}

fn scale(total: u32, factor: f64) -> u32 {
    round_score(total as f64 * factor)
}

// =============================================================================
// ARENA
// =============================================================================

pub fn arena_round_points(strength: u32) -> u32 {
    scale(strength, ARENA_POINTS_FACTOR)
}

pub fn arena_xp(total: u32) -> u32 {
    scale(total, ARENA_XP_FACTOR)
}

// =============================================================================
// FALLACY HUNT
// =============================================================================

/// Points for one answer. `streak_before` is the streak *before* this answer.
pub fn fallacy_points(correct: bool, time_left_secs: u32, streak_before: u32) -> u32 {
    if !correct {
        return 0;
    }
    FALLACY_BASE_POINTS + time_left_secs * FALLACY_TIME_BONUS_PER_SEC + streak_before * FALLACY_STREAK_BONUS
}

/// Streak after an answer: +1 on correct, 0 on miss or timeout
pub fn next_streak(correct: bool, streak: u32) -> u32 {
    if correct {
        streak + 1
    } else {
        0
    }
}

pub fn fallacy_xp(total: u32) -> u32 {
    scale(total, FALLACY_XP_FACTOR)
}

// =============================================================================
// FRAME THE FLAME
// =============================================================================

/// Breakdown of a built argument's score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentScore {
    pub strength_sum: u32,
    pub structure_bonus: u32,
    pub coherence_bonus: u32,
    pub card_count: usize,
    /// round((sum + structure + coherence) / count). Not clamped to 100.
    pub score: u32,
}

/// 50 for claim+evidence+reasoning, 25 for claim+evidence or claim+reasoning
pub fn structure_bonus(cards: &[ArgumentCard]) -> u32 {
    let has = |t: CardType| cards.iter().any(|c| c.card_type == t);
    let (claim, evidence, reasoning) = (has(CardType::Claim), has(CardType::Evidence), has(CardType::Reasoning));

    if claim && evidence && reasoning {
        FLAME_FULL_STRUCTURE_BONUS
    } else if claim && (evidence || reasoning) {
        FLAME_PARTIAL_STRUCTURE_BONUS
    } else {
        0
    }
}

/// 30 when every card argues the same side
pub fn coherence_bonus(cards: &[ArgumentCard]) -> u32 {
    match cards.first() {
        Some(first) if cards.iter().all(|c| c.side == first.side) => FLAME_COHERENCE_BONUS,
        _ => 0,
    }
}

/// Score a built argument; rejects hands outside 3..=4 cards
pub fn argument_score(cards: &[ArgumentCard]) -> Result<ArgumentScore, RoundReason> {
    if cards.len() < FLAME_MIN_CARDS {
        return Err(RoundReason::R220_TOO_FEW_CARDS);
    }
    if cards.len() > FLAME_MAX_CARDS {
        return Err(RoundReason::R221_TOO_MANY_CARDS);
    }

    let strength_sum: u32 = cards.iter().map(|c| c.strength).sum();
    let structure = structure_bonus(cards);
    let coherence = coherence_bonus(cards);
    let raw = (strength_sum + structure + coherence) as f64 / cards.len() as f64;

    Ok(ArgumentScore {
        strength_sum,
        structure_bonus: structure,
        coherence_bonus: coherence,
        card_count: cards.len(),
        score: round_score(raw),
    })
}

pub fn flame_xp(score: u32) -> u32 {
    scale(score, FLAME_XP_FACTOR)
}

// =============================================================================
// BURDEN BRAWL
// =============================================================================

pub fn burden_points(correct: bool) -> u32 {
    if correct {
        BURDEN_CORRECT_POINTS
    } else {
        0
    }
}

pub fn burden_xp(total: u32) -> u32 {
    scale(total, BURDEN_XP_FACTOR)
}

// =============================================================================
// VERDICT ROOM
// =============================================================================

/// weight × accuracy for one selected piece of evidence
///
/// weight = (cred + rel) / 200, accuracy = 100 - |assigned - (cred + rel) / 2|
pub fn evidence_contribution(evidence: &Evidence, assigned: Option<u32>) -> f64 {
    let weight = (evidence.credibility + evidence.relevance) as f64 / 200.0;
    let assigned = assigned.unwrap_or(VERDICT_DEFAULT_ASSIGNED_SCORE) as f64;
    let accuracy = 100.0 - (assigned - evidence.merit()).abs();
    weight * accuracy
}

/// ratio × 100 above half coverage, ratio × 50 otherwise
pub fn completeness_score(selected: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let ratio = selected as f64 / total as f64;
    if ratio > VERDICT_COMPLETENESS_THRESHOLD {
        ratio * 100.0
    } else {
        ratio * 50.0
    }
}

/// Breakdown of a trial score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerdictScore {
    pub evidence_score: f64,
    pub verdict_bonus: f64,
    pub completeness_score: f64,
    pub verdict_correct: bool,
    /// round(evidence + verdict + completeness)
    pub final_score: u32,
}

/// Score a trial from the selected evidence (with the player's ratings) and verdict
pub fn verdict_score<'a, I>(case: &TrialCase, rated: I, verdict: Verdict) -> VerdictScore
where
    I: IntoIterator<Item = (&'a Evidence, Option<u32>)>,
{
    let mut evidence_score = 0.0;
    let mut selected = 0usize;
    for (evidence, assigned) in rated {
        evidence_score += evidence_contribution(evidence, assigned);
        selected += 1;
    }

    let verdict_correct = verdict == case.verdict;
    let verdict_bonus = if verdict_correct { VERDICT_CORRECT_BONUS } else { 0.0 };
    let completeness = completeness_score(selected, case.evidence.len());

    VerdictScore {
        evidence_score,
        verdict_bonus,
        completeness_score: completeness,
        verdict_correct,
        final_score: round_score(evidence_score + verdict_bonus + completeness),
    }
}

pub fn verdict_xp(final_score: u32) -> u32 {
    scale(final_score, VERDICT_XP_FACTOR)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TRIAL_CASES;
    use crate::types::{Side, EvidenceKind, Party};

    fn card(id: &'static str, card_type: CardType, strength: u32, side: Side) -> ArgumentCard {
        ArgumentCard { id, text: "", card_type, strength, side }
    }

    #[test]
    fn test_round_matches_math_round() {
        assert_eq!(round_score(108.333), 108);
        assert_eq!(round_score(2.5), 3);
        assert_eq!(round_score(2.4999), 2);
        assert_eq!(round_score(0.0), 0);
        assert_eq!(round_score(-3.0), 0);
    }

    #[test]
    fn test_arena_formulas() {
        assert_eq!(arena_round_points(85), 68);
        assert_eq!(arena_round_points(45), 36);
        // 68 + 72 + 76
        assert_eq!(arena_xp(216), 259);
    }

    #[test]
    fn test_fallacy_streak_bonus_uses_prior_streak() {
        assert_eq!(fallacy_points(true, 10, 2), 120);
        assert_eq!(next_streak(true, 2), 3);
        assert_eq!(fallacy_points(false, 14, 4), 0);
        assert_eq!(next_streak(false, 4), 0);
        assert_eq!(fallacy_points(true, 0, 0), 50);
    }

    #[test]
    fn test_structure_bonus_tiers() {
        let full = [
            card("a", CardType::Claim, 0, Side::Pro),
            card("b", CardType::Evidence, 0, Side::Pro),
            card("c", CardType::Reasoning, 0, Side::Pro),
        ];
        assert_eq!(structure_bonus(&full), 50);

        let partial = [
            card("a", CardType::Claim, 0, Side::Pro),
            card("c", CardType::Reasoning, 0, Side::Pro),
            card("d", CardType::Counterpoint, 0, Side::Pro),
        ];
        assert_eq!(structure_bonus(&partial), 25);

        let no_claim = [
            card("b", CardType::Evidence, 0, Side::Pro),
            card("c", CardType::Reasoning, 0, Side::Pro),
            card("d", CardType::Counterpoint, 0, Side::Pro),
        ];
        assert_eq!(structure_bonus(&no_claim), 0);
    }

    #[test]
    fn test_argument_example_exceeds_hundred() {
        let cards = [
            card("a", CardType::Claim, 80, Side::Con),
            card("b", CardType::Evidence, 90, Side::Con),
            card("c", CardType::Reasoning, 75, Side::Con),
        ];
        let result = argument_score(&cards).unwrap();
        assert_eq!(result.strength_sum, 245);
        assert_eq!(result.structure_bonus, 50);
        assert_eq!(result.coherence_bonus, 30);
        assert_eq!(result.score, 108);
        assert_eq!(flame_xp(result.score), 162);
    }

    #[test]
    fn test_argument_card_count_gate() {
        let two = [card("a", CardType::Claim, 80, Side::Pro), card("b", CardType::Claim, 80, Side::Pro)];
        assert_eq!(argument_score(&two), Err(RoundReason::R220_TOO_FEW_CARDS));

        let five = [card("a", CardType::Claim, 80, Side::Pro); 5];
        assert_eq!(argument_score(&five), Err(RoundReason::R221_TOO_MANY_CARDS));
    }

    #[test]
    fn test_mixed_sides_lose_coherence() {
        let cards = [
            card("a", CardType::Claim, 80, Side::Pro),
            card("b", CardType::Evidence, 90, Side::Con),
            card("c", CardType::Reasoning, 70, Side::Pro),
        ];
        assert_eq!(coherence_bonus(&cards), 0);
        // (240 + 50) / 3 = 96.67
        assert_eq!(argument_score(&cards).unwrap().score, 97);
    }

    #[test]
    fn test_burden_formulas() {
        assert_eq!(burden_points(true), 100);
        assert_eq!(burden_points(false), 0);
        assert_eq!(burden_xp(300), 300);
    }

    #[test]
    fn test_evidence_contribution_default_rating() {
        let e2 = Evidence {
            id: "e2",
            kind: EvidenceKind::Physical,
            title: "",
            description: "",
            credibility: 90,
            relevance: 95,
            side: Party::Prosecution,
        };
        let contribution = evidence_contribution(&e2, None);
        assert!((contribution - 53.1875).abs() < 1e-9);

        // Rating exactly at merit gives full accuracy
        let exact = evidence_contribution(&e2, Some(92));
        assert!((exact - 0.925 * 99.5).abs() < 1e-9);
    }

    #[test]
    fn test_completeness_threshold() {
        assert!((completeness_score(4, 7) - 400.0 / 7.0).abs() < 1e-9);
        assert!((completeness_score(3, 6) - 25.0).abs() < 1e-9);
        assert_eq!(completeness_score(0, 0), 0.0);
    }

    #[test]
    fn test_verdict_score_full_case() {
        let case = &TRIAL_CASES[0];
        let e2 = case.find_evidence("e2").unwrap();
        let e4 = case.find_evidence("e4").unwrap();

        let result = verdict_score(case, [(e2, None), (e4, None)], Verdict::NotGuilty);

        // e2: 0.925 × 57.5, e4: 0.925 × 57.5, completeness 2/7 × 50
        let expected = 2.0 * 53.1875 + 200.0 + (2.0 / 7.0) * 50.0;
        assert!(result.verdict_correct);
        assert!((result.evidence_score - 106.375).abs() < 1e-9);
        assert_eq!(result.final_score, round_score(expected));
        assert_eq!(result.final_score, 321);
        assert_eq!(verdict_xp(result.final_score), 642);
    }

    #[test]
    fn test_wrong_verdict_gets_no_bonus() {
        let case = &TRIAL_CASES[0];
        let e1 = case.find_evidence("e1").unwrap();
        let result = verdict_score(case, [(e1, Some(50))], Verdict::Guilty);
        assert!(!result.verdict_correct);
        assert_eq!(result.verdict_bonus, 0.0);
    }
}
