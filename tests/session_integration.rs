//! Integration tests for the session controller
//!
//! Tests the full path: menu → game → submit/tick/advance → tracker → menu

use std::collections::BTreeMap;

use grayverdict::content::{BURDEN_SCENARIOS, FALLACY_QUESTIONS, TRIAL_CASES};
use grayverdict::core::games::{PlayerInput, TrialBuilder, TrialSubmission};
use grayverdict::core::{MemoryStore, SessionController};
use grayverdict::types::{GameMode, NavReason, RoundOutcome, RoundPhase, RoundReason, Screen, SessionState, Verdict};
use grayverdict::{FALLACY_ROUND_SECS, VERDICT_DELIBERATION_SECS};

fn controller_with_xp(xp: u64) -> SessionController<MemoryStore> {
    let blob = format!(
        r#"{{"level":{},"xp":{},"badges":[],"gamesCompleted":0,"streakDays":0,"totalPoints":0}}"#,
        xp / 100 + 1,
        xp
    );
    let mut controller = SessionController::open(MemoryStore::with_blob(blob));
    controller.start();
    controller
}

fn trial(selected: &[&str], verdict: Verdict) -> PlayerInput {
    PlayerInput::Trial(TrialSubmission {
        selected: selected.iter().map(|s| s.to_string()).collect(),
        assigned_scores: BTreeMap::new(),
        verdict,
    })
}

/// Locked selection leaves the session untouched
#[test]
fn test_locked_mode_leaves_session() {
    let mut controller = controller_with_xp(0);
    for mode in [GameMode::FrameFlame, GameMode::BurdenBrawl, GameMode::VerdictRoom] {
        assert_eq!(controller.select_mode(mode), NavReason::R110_MODE_LOCKED);
        assert_eq!(controller.session().active_game, None);
        assert_eq!(controller.screen(), Screen::Menu);
    }
}

/// Unlock levels follow the record
#[test]
fn test_unlock_levels() {
    let mut controller = controller_with_xp(100);
    assert_eq!(controller.select_mode(GameMode::BurdenBrawl), NavReason::R101_GAME_STARTED);
    controller.back_to_menu();
    assert_eq!(controller.select_mode(GameMode::FrameFlame), NavReason::R110_MODE_LOCKED);

    let mut controller = controller_with_xp(400);
    assert_eq!(controller.select_mode(GameMode::VerdictRoom), NavReason::R101_GAME_STARTED);
}

/// Burden Brawl start to finish, credited and back at the menu
#[test]
fn test_burden_playthrough_credits_progress() {
    let mut controller = controller_with_xp(100);
    controller.select_mode(GameMode::BurdenBrawl);

    let mut summary = None;
    for scenario in BURDEN_SCENARIOS {
        let correct = scenario.options.iter().find(|o| o.is_correct).unwrap();
        controller.submit(&PlayerInput::pick(correct.id)).unwrap();
        summary = controller.advance().unwrap();
    }

    let summary = summary.expect("completion summary");
    assert_eq!(summary.points, 400);
    assert_eq!(summary.xp_gain, 400);
    assert_eq!((summary.level_before, summary.level_after), (2, 6));

    assert_eq!(controller.screen(), Screen::Menu);
    assert_eq!(controller.session(), &SessionState::default());
    assert_eq!(controller.record().games_completed, 1);
    assert_eq!(controller.record().total_points, 400);
    assert_eq!(controller.tracker().store().save_count(), 1);
}

/// The trial's XP lands in the record exactly once
#[test]
fn test_verdict_credited_once() {
    let mut controller = controller_with_xp(400);
    controller.select_mode(GameMode::VerdictRoom);

    let outcome = controller.submit(&trial(&["e2", "e4"], Verdict::NotGuilty)).unwrap();
    assert_eq!(outcome, RoundOutcome::new(321, true));
    assert_eq!(controller.session().score, 321);

    let summary = controller.advance().unwrap().unwrap();
    assert_eq!(summary.xp_gain, 642);
    assert_eq!(controller.record().xp, 400 + 642);
    assert_eq!(controller.record().games_completed, 1);

    // Nothing left to advance or submit
    assert_eq!(controller.advance(), Err(RoundReason::R200_NO_ACTIVE_GAME));
    assert_eq!(
        controller.submit(&trial(&["e2"], Verdict::NotGuilty)),
        Err(RoundReason::R200_NO_ACTIVE_GAME)
    );
    assert_eq!(controller.record().xp, 1042);
    assert_eq!(controller.tracker().store().save_count(), 1);
}

/// Briefing and evidence review leave the deliberation clock untouched
#[test]
fn test_deliberation_clock_starts_with_deliberation() {
    let case = &TRIAL_CASES[0];
    let mut controller = controller_with_xp(400);
    controller.select_mode(GameMode::VerdictRoom);
    let mut trial = TrialBuilder::new();

    for _ in 0..60 {
        assert_eq!(controller.tick(), None);
    }
    trial.begin_review().unwrap();
    for _ in 0..60 {
        controller.tick();
    }
    trial.toggle_evidence(case, "e2").unwrap();
    assert_eq!(controller.game().unwrap().time_left(), Some(VERDICT_DELIBERATION_SECS));

    controller.begin_deliberation(&mut trial).unwrap();
    for _ in 0..10 {
        controller.tick();
    }
    assert_eq!(controller.session().time_remaining_secs, VERDICT_DELIBERATION_SECS - 10);

    trial.choose_verdict(Verdict::NotGuilty).unwrap();
    let outcome = controller.submit(&PlayerInput::Trial(trial.submission().unwrap())).unwrap();
    assert!(outcome.is_correct);
}

/// Ticks after the answer or after leaving change nothing
#[test]
fn test_stale_ticks_are_noops() {
    let mut controller = controller_with_xp(0);
    controller.select_mode(GameMode::FallacyHunt);

    for _ in 0..3 {
        controller.tick();
    }
    assert_eq!(controller.session().time_remaining_secs, FALLACY_ROUND_SECS - 3);

    let correct = FALLACY_QUESTIONS[0].correct;
    let outcome = controller.submit(&PlayerInput::pick(correct)).unwrap();
    assert_eq!(outcome.points_awarded, 50 + (FALLACY_ROUND_SECS - 3) * 5);

    for _ in 0..30 {
        assert_eq!(controller.tick(), None);
    }
    let game = controller.game().unwrap();
    assert_eq!(game.phase(), RoundPhase::FeedbackShown(0));
    assert_eq!(game.score(), outcome.points_awarded);

    controller.back_to_menu();
    for _ in 0..30 {
        assert_eq!(controller.tick(), None);
    }
    assert_eq!(controller.session(), &SessionState::default());
    assert_eq!(controller.record(), &Default::default());
}

/// A timed-out question is a miss and locks the answer
#[test]
fn test_timeout_through_controller() {
    let mut controller = controller_with_xp(0);
    controller.select_mode(GameMode::FallacyHunt);

    let timeout = (0..FALLACY_ROUND_SECS).find_map(|_| controller.tick());
    assert_eq!(timeout, Some(RoundOutcome::miss()));
    assert_eq!(controller.session().time_remaining_secs, 0);
    assert_eq!(
        controller.submit(&PlayerInput::pick(FALLACY_QUESTIONS[0].correct)),
        Err(RoundReason::R201_ANSWER_LOCKED)
    );

    assert_eq!(controller.advance(), Ok(None));
    assert_eq!(controller.session().time_remaining_secs, FALLACY_ROUND_SECS);
}

/// Wrong-shaped input is rejected without side effects
#[test]
fn test_input_mismatch() {
    let mut controller = controller_with_xp(0);
    controller.select_mode(GameMode::Arena);
    assert_eq!(
        controller.submit(&PlayerInput::Argument { cards: vec!["1".into(), "2".into(), "3".into()] }),
        Err(RoundReason::R211_INPUT_MISMATCH)
    );
    assert_eq!(controller.game().unwrap().phase(), RoundPhase::Presenting(0));
    assert_eq!(controller.advance(), Err(RoundReason::R202_ANSWER_PENDING));
}

/// Abandoning a game awards nothing and saves nothing
#[test]
fn test_abandon_awards_nothing() {
    let mut controller = controller_with_xp(0);
    controller.select_mode(GameMode::Arena);
    controller.submit(&PlayerInput::pick("a")).unwrap();
    controller.advance().unwrap();
    controller.submit(&PlayerInput::pick("b")).unwrap();

    assert_eq!(controller.back_to_menu(), NavReason::R103_RETURNED_TO_MENU);
    assert_eq!(controller.record().xp, 0);
    assert_eq!(controller.tracker().store().save_count(), 0);
}
