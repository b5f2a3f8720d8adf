//! The Gray Verdict CLI
//!
//! Usage:
//!   grayverdict                              # Play, progress in ./.grayverdict
//!   grayverdict --data-dir ~/.gv             # Custom progress directory
//!   grayverdict --memory                     # Play without saving
//!   grayverdict --profile                    # Print profile and exit
//!   grayverdict --json                       # JSON completion summaries

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use grayverdict::core::achievements;
use grayverdict::core::games::{ActiveGame, ArgumentBuilder, PlayerInput, TrialBuilder};
use grayverdict::core::{FileStore, MemoryStore, ProgressStore, SessionController};
use grayverdict::types::{
    ArenaScenario, BurdenScenario, CompletionSummary, FallacyQuestion, FlameTopic, GameMode,
    ProgressRecord, RoundOutcome, RoundPhase, RoundReason, Screen, ScoreBand, TrialCase, Verdict,
};
use grayverdict::{PROGRESS_STORE_KEY, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "grayverdict",
    version = VERSION,
    about = "The Gray Verdict - debate and critical-thinking challenges",
    long_about = "The Gray Verdict trains argument skills through five challenges.\n\n\
                  Modes (unlock level):\n  \
                  1. The Arena         (1)  pick the strongest rebuttal\n  \
                  2. Fallacy Hunt      (1)  spot the fallacy against the clock\n  \
                  3. Frame the Flame   (3)  build an argument from cards\n  \
                  4. Burden Brawl      (2)  assign the burden of proof\n  \
                  5. The Verdict Room  (5)  weigh evidence, rule on a case\n\n\
                  Type 'menu' at any prompt to abandon a challenge."
)]
struct Args {
    /// Directory for the progress file
    #[arg(long, default_value = "./.grayverdict")]
    data_dir: PathBuf,

    /// Storage key (file name without .json)
    #[arg(long, default_value = PROGRESS_STORE_KEY)]
    key: String,

    /// Keep progress in memory only
    #[arg(long)]
    memory: bool,

    /// Print the profile and exit
    #[arg(long)]
    profile: bool,

    /// Output completion summaries as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Debug logging on stderr
    #[arg(long)]
    verbose: bool,
}

/// What the player asked for at a game prompt
enum Action {
    Submit(PlayerInput),
    /// Invalid entry, ask again
    Retry,
    Menu,
    Quit,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    if args.no_color {
        colored::control::set_override(false);
    }

    if args.memory {
        run(SessionController::open(MemoryStore::new()), &args)
    } else {
        let store = FileStore::new(&args.data_dir, &args.key);
        debug!(path = %store.path().display(), "using file store");
        run(SessionController::open(store), &args)
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run<S: ProgressStore>(mut controller: SessionController<S>, args: &Args) -> Result<()> {
    if args.profile {
        return print_profile(controller.record(), args);
    }

    print_header();
    if read_line("Press Enter to begin")?.is_none() {
        return Ok(());
    }
    controller.start();

    loop {
        let keep_going = match controller.screen() {
            Screen::Landing => {
                controller.start();
                true
            }
            Screen::Menu => menu_step(&mut controller)?,
            Screen::Profile => {
                print_profile(controller.record(), args)?;
                let line = read_line("Press Enter to return")?;
                controller.back_to_menu();
                line.is_some()
            }
            Screen::Game(_) => game_step(&mut controller, args)?,
        };
        if !keep_going {
            break;
        }
    }

    let record = controller.record();
    println!();
    println!("Session ended. Level {} | {} XP | {} challenges completed", record.level, record.xp, record.games_completed);
    Ok(())
}

// =============================================================================
// MENU / PROFILE
// =============================================================================

fn menu_step<S: ProgressStore>(controller: &mut SessionController<S>) -> Result<bool> {
    print_menu(controller.record());
    let Some(choice) = read_line("Choose 1-5, p for profile, q to quit")? else {
        return Ok(false);
    };

    match choice.as_str() {
        "q" | "quit" | "exit" => return Ok(false),
        "p" | "profile" => {
            controller.open_profile();
        }
        other => {
            let mode = other
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| GameMode::ALL.get(i).copied())
                .or_else(|| GameMode::from_id(other));
            match mode {
                Some(mode) => {
                    let reason = controller.select_mode(mode);
                    if !reason.is_accepted() {
                        print_notice(&reason.to_string());
                    }
                }
                None => print_notice("Unknown choice"),
            }
        }
    }
    Ok(true)
}

fn print_header() {
    println!();
    println!("{}", "╔══════════════════════════════════════════╗".bright_black());
    println!("{}", "║  ⚖  THE GRAY VERDICT                     ║".bold());
    println!("{}", format!("║  Version: {:<31}║", VERSION).bright_black());
    println!("{}", "╚══════════════════════════════════════════╝".bright_black());
    println!("Sharpen your reasoning. Every argument has a weight.");
    println!();
}

fn print_menu(record: &ProgressRecord) {
    println!();
    println!(
        "{}  Level {} | {} XP | {} XP to next level",
        "MENU".bold(),
        record.level,
        record.xp,
        record.xp_to_next_level()
    );
    for (i, mode) in GameMode::ALL.iter().enumerate() {
        if record.is_unlocked(*mode) {
            println!("  {}. {:<18} {}", i + 1, mode.title().bold(), mode.subtitle());
        } else {
            let line = format!("  {}. {:<18} locked until level {}", i + 1, mode.title(), mode.unlock_level());
            println!("{}", line.bright_black());
        }
    }
}

fn print_profile(record: &ProgressRecord, args: &Args) -> Result<()> {
    let statuses = achievements::evaluate(record);

    if args.json {
        #[derive(serde::Serialize)]
        struct Profile<'a> {
            record: &'a ProgressRecord,
            achievements: &'a [achievements::AchievementStatus],
        }
        let profile = Profile { record, achievements: &statuses };
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    println!();
    println!("{}", "PROFILE".bold());
    println!("  Level:        {}", record.level);
    println!("  XP:           {} ({} / 100 into level)", record.xp, record.xp_into_level());
    println!("  Completed:    {}", record.games_completed);
    println!("  Total points: {}", record.total_points);
    println!("  Streak:       {} days", record.streak_days);
    println!();
    println!("{}", "ACHIEVEMENTS".bold());
    for status in &statuses {
        let a = status.achievement;
        if status.unlocked {
            println!("  {} {:<22} {}", "★".yellow(), a.title.bold(), a.description);
        } else {
            println!("{}", format!("  ☆ {:<22} {}", a.title, a.description).bright_black());
        }
    }
    Ok(())
}

// =============================================================================
// GAME LOOP
// =============================================================================

/// One prompt inside a running game. Returns false on quit/EOF.
fn game_step<S: ProgressStore>(controller: &mut SessionController<S>, args: &Args) -> Result<bool> {
    let phase = controller
        .game()
        .context("game screen without a running game")?
        .phase();

    if let RoundPhase::Presenting(_) = phase {
        return present(controller);
    }

    let Some(line) = read_line("Press Enter to continue")? else {
        return Ok(false);
    };
    if line == "menu" {
        controller.back_to_menu();
        return Ok(true);
    }
    match controller.advance() {
        Ok(Some(summary)) => print_summary(&summary, args)?,
        Ok(None) => {}
        Err(reason) => print_notice(&reason.to_string()),
    }
    Ok(true)
}

fn present<S: ProgressStore>(controller: &mut SessionController<S>) -> Result<bool> {
    let game = controller.game().context("no running game")?;
    print_round_header(game);

    let started = Instant::now();
    let (action, clock_from) = match game {
        ActiveGame::Arena(g) => match g.current().copied() {
            Some(s) => (ask_arena(s)?, started),
            None => return Ok(true),
        },
        ActiveGame::FallacyHunt(g) => match g.current().copied() {
            Some(q) => (ask_fallacy(q)?, started),
            None => return Ok(true),
        },
        ActiveGame::FrameFlame(g) => match g.current().copied() {
            Some(t) => (ask_flame(t)?, started),
            None => return Ok(true),
        },
        ActiveGame::BurdenBrawl(g) => match g.current().copied() {
            Some(s) => (ask_burden(s)?, started),
            None => return Ok(true),
        },
        ActiveGame::VerdictRoom(g) => match g.current().copied() {
            Some(c) => ask_verdict(controller, c)?,
            None => return Ok(true),
        },
    };
    Ok(finish_prompt(controller, action, clock_from))
}

/// Apply the player's action. Menu and quit win over a clock that ran out meanwhile.
fn finish_prompt<S: ProgressStore>(controller: &mut SessionController<S>, action: Action, clock_from: Instant) -> bool {
    let input = match action {
        Action::Submit(input) => Some(input),
        Action::Retry => None,
        Action::Menu => {
            controller.back_to_menu();
            return true;
        }
        Action::Quit => return false,
    };

    // Time spent at the prompt lands before the answer
    if let Some(outcome) = deliver_elapsed(controller, clock_from) {
        println!("{}", "⏱ Time's up!".red().bold());
        print_feedback(controller.game(), outcome, None);
        return true;
    }

    let Some(input) = input else {
        return true;
    };
    let picked = match &input {
        PlayerInput::Pick { id } => Some(id.clone()),
        _ => None,
    };
    match controller.submit(&input) {
        Ok(outcome) => print_feedback(controller.game(), outcome, picked.as_deref()),
        Err(reason) => print_notice(&reason.to_string()),
    }
    true
}

/// Whole seconds waited become ticks. Stops at the first timeout.
fn deliver_elapsed<S: ProgressStore>(controller: &mut SessionController<S>, started: Instant) -> Option<RoundOutcome> {
    let elapsed = started.elapsed().as_secs();
    debug!(elapsed_secs = elapsed, "delivering ticks");
    (0..elapsed).find_map(|_| controller.tick())
}

fn print_round_header(game: &ActiveGame) {
    println!();
    let mut line = format!(
        "{} | round {}/{} | score {}",
        game.mode().title().to_uppercase(),
        game.round_number(),
        game.round_count(),
        game.score()
    );
    if let Some(secs) = game.time_left() {
        line.push_str(&format!(" | {}s", secs));
    }
    println!("{}", line.bold());

    if game.mode() == GameMode::FallacyHunt {
        if let Some(secs) = game.time_left() {
            let hint = format!("You have {} seconds.", secs);
            println!("{}", hint.color(ScoreBand::for_time_left(secs).color()));
        }
    }
}

/// Number → id, anything else passed through
fn resolve_pick(line: &str, ids: &[&str]) -> String {
    line.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| ids.get(i))
        .map(|id| id.to_string())
        .unwrap_or_else(|| line.to_string())
}

/// Read a line, handling the shared 'menu' and EOF cases
fn ask(prompt: &str) -> Result<std::result::Result<String, Action>> {
    match read_line(prompt)? {
        None => Ok(Err(Action::Quit)),
        Some(line) if line == "menu" => Ok(Err(Action::Menu)),
        Some(line) => Ok(Ok(line)),
    }
}

fn ask_arena(scenario: ArenaScenario) -> Result<Action> {
    println!("{} {}", "Topic:".bold(), scenario.topic);
    println!("{}", scenario.context.bright_black());
    println!("{} \"{}\"", "Opponent:".red().bold(), scenario.opponent);
    for option in scenario.options {
        println!("  {}) {}", option.id, option.text);
    }

    let ids: Vec<&str> = scenario.options.iter().map(|o| o.id).collect();
    Ok(match ask("Your rebuttal")? {
        Ok(line) => Action::Submit(PlayerInput::pick(resolve_pick(&line, &ids))),
        Err(action) => action,
    })
}

fn ask_fallacy(question: FallacyQuestion) -> Result<Action> {
    println!("\"{}\"", question.statement.italic());
    for (i, option) in question.options.iter().enumerate() {
        println!("  {}. {:<22} {}", i + 1, option.name, option.description.bright_black());
    }

    let ids: Vec<&str> = question.options.iter().map(|o| o.id).collect();
    Ok(match ask("Which fallacy")? {
        Ok(line) => Action::Submit(PlayerInput::pick(resolve_pick(&line, &ids))),
        Err(action) => action,
    })
}

fn ask_flame(topic: FlameTopic) -> Result<Action> {
    println!("{} {}", "Motion:".bold(), topic.title);
    println!("{}", topic.description.bright_black());
    for card in topic.cards {
        println!(
            "  [{}] {:<13} {:>3}  {:?}  {}",
            card.id,
            card.card_type.label(),
            card.strength,
            card.side,
            card.text
        );
    }

    let line = match ask("Pick 3-4 card ids, space separated")? {
        Ok(line) => line,
        Err(action) => return Ok(action),
    };

    let mut hand = ArgumentBuilder::new();
    for id in line.split_whitespace() {
        match topic.find_card(id) {
            Some(card) => {
                if hand.contains(card.id) {
                    print_notice(&format!("Card {}: {}", id, RoundReason::R212_DUPLICATE_SELECTION));
                } else if !hand.add(*card) {
                    print_notice(&format!("Card {} ignored: {}", id, RoundReason::R221_TOO_MANY_CARDS));
                }
            }
            None => print_notice(&format!("Card {}: {}", id, RoundReason::R210_UNKNOWN_OPTION)),
        }
    }
    if !hand.can_evaluate() {
        print_notice(&RoundReason::R220_TOO_FEW_CARDS.to_string());
        return Ok(Action::Retry);
    }
    Ok(Action::Submit(PlayerInput::Argument { cards: hand.card_ids() }))
}

fn ask_burden(scenario: BurdenScenario) -> Result<Action> {
    println!("{}", scenario.title.bold());
    println!("{}", scenario.scenario);
    println!("{} \"{}\"", "Claim:".bold(), scenario.claim);
    for (i, option) in scenario.options.iter().enumerate() {
        println!("  {}. {}", i + 1, option.text);
    }

    let ids: Vec<&str> = scenario.options.iter().map(|o| o.id).collect();
    Ok(match ask("Who bears the burden")? {
        Ok(line) => Action::Submit(PlayerInput::pick(resolve_pick(&line, &ids))),
        Err(action) => action,
    })
}

/// Walks the trial phases. Also returns when the deliberation clock started.
fn ask_verdict<S: ProgressStore>(
    controller: &mut SessionController<S>,
    case: TrialCase,
) -> Result<(Action, Instant)> {
    let mut trial = TrialBuilder::new();

    println!("{} {}", "Case:".bold(), case.title);
    println!("{}", case.description);
    println!("{} {}", "Charge:".bold(), case.charge);
    if let Err(action) = ask("Press Enter to review the evidence")? {
        return Ok((action, Instant::now()));
    }
    if let Err(reason) = trial.begin_review() {
        print_notice(&reason.to_string());
        return Ok((Action::Retry, Instant::now()));
    }

    for e in case.evidence {
        println!(
            "  [{}] {:<34} {:?}, {:?}  cred {} / rel {}",
            e.id, e.title, e.kind, e.side, e.credibility, e.relevance
        );
        println!("       {}", e.description.bright_black());
    }

    loop {
        let line = match ask("Select evidence ids, space separated")? {
            Ok(line) => line,
            Err(action) => return Ok((action, Instant::now())),
        };
        for id in line.split_whitespace() {
            if let Err(reason) = trial.toggle_evidence(&case, id) {
                print_notice(&format!("{}: {}", id, reason));
            }
        }
        if trial.selected().is_empty() {
            print_notice(&RoundReason::R222_NO_EVIDENCE_SELECTED.to_string());
            continue;
        }

        let line = match ask("Rate evidence as id=0-100 (blank: 50 each)")? {
            Ok(line) => line,
            Err(action) => return Ok((action, Instant::now())),
        };
        for pair in line.split_whitespace() {
            let rated = pair
                .split_once('=')
                .and_then(|(id, score)| score.parse::<u32>().ok().map(|s| (id, s)));
            match rated {
                Some((id, score)) => {
                    if let Err(reason) = trial.assign_score(&case, id, score) {
                        print_notice(&format!("{}: {}", id, reason));
                    }
                }
                None => print_notice(&format!("Ignored '{}'", pair)),
            }
        }

        match controller.begin_deliberation(&mut trial) {
            Ok(()) => break,
            Err(reason) => {
                print_notice(&reason.to_string());
                return Ok((Action::Retry, Instant::now()));
            }
        }
    }

    let deliberation_started = Instant::now();
    let secs = controller.game().and_then(ActiveGame::time_left).unwrap_or(0);
    println!("{} {}", "Deliberation".bold(), format!("({}s)", secs).bright_black());
    loop {
        let line = match ask("Verdict: [g]uilty or [n]ot guilty")? {
            Ok(line) => line.to_lowercase(),
            Err(action) => return Ok((action, deliberation_started)),
        };
        let verdict = match line.as_str() {
            "g" | "guilty" => Verdict::Guilty,
            "n" | "not guilty" | "not-guilty" => Verdict::NotGuilty,
            _ => continue,
        };
        if trial.choose_verdict(verdict).is_ok() {
            break;
        }
    }

    match trial.submission() {
        Ok(submission) => Ok((Action::Submit(PlayerInput::Trial(submission)), deliberation_started)),
        Err(reason) => {
            print_notice(&reason.to_string());
            Ok((Action::Retry, deliberation_started))
        }
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

fn print_feedback(game: Option<&ActiveGame>, outcome: RoundOutcome, picked: Option<&str>) {
    let verdict_line = format!("+{} points", outcome.points_awarded);
    if outcome.is_correct {
        println!("{} {}", "✔".green().bold(), verdict_line.green());
    } else {
        println!("{} {}", "✘".red().bold(), verdict_line.red());
    }

    let Some(game) = game else { return };
    match game {
        ActiveGame::Arena(g) => {
            let option = g
                .current()
                .and_then(|s| s.options.iter().find(|o| Some(o.id) == picked));
            if let Some(option) = option {
                let band = ScoreBand::for_strength(option.strength);
                println!("{}", format!("{} ({})", band.strength_label(), option.strength).color(band.color()));
                println!("{}", option.feedback);
            }
        }
        ActiveGame::FallacyHunt(g) => {
            if let Some(q) = g.current() {
                println!("{}", q.explanation);
            }
            println!("Streak: {}", g.rules().streak());
        }
        ActiveGame::FrameFlame(g) => {
            if let Some(score) = g.rules().last_score() {
                let band = ScoreBand::for_argument(score.score);
                println!("{}", format!("{} ({})", band.argument_label(), score.score).color(band.color()));
                println!(
                    "  strength {} | structure +{} | coherence +{} | {} cards",
                    score.strength_sum, score.structure_bonus, score.coherence_bonus, score.card_count
                );
            }
        }
        ActiveGame::BurdenBrawl(g) => {
            if let Some(s) = g.current() {
                let explanation = s.options.iter().find(|o| Some(o.id) == picked).map(|o| o.explanation);
                if let Some(explanation) = explanation {
                    println!("{}", explanation);
                }
                println!("{}", s.reasoning.bright_black());
            }
        }
        ActiveGame::VerdictRoom(g) => {
            if let (Some(score), Some(case)) = (g.rules().last_score(), g.current()) {
                println!(
                    "  evidence {:.1} | verdict +{:.0} | completeness {:.1}",
                    score.evidence_score, score.verdict_bonus, score.completeness_score
                );
                println!("Correct verdict: {}", case.verdict);
                println!("{}", case.reasoning.bright_black());
            }
        }
    }
}

fn print_summary(summary: &CompletionSummary, args: &Args) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else if args.no_color {
        println!("{}", summary.to_parseable_string());
    } else {
        println!("{}", summary.to_terminal_string());
    }
    Ok(())
}

fn print_notice(message: &str) {
    println!("{}", format!("  ⚠ {}", message).yellow());
}

fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{} > ", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
