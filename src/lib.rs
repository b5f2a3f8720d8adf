//! The Gray Verdict: scoring and progression engine for debate mini-games
//!
//! Input → ScenarioRunner (per-game scoring) → CompletionEvent → ProgressTracker → ProgressStore

pub mod content;
pub mod core;
pub mod types;

// =============================================================================
// ARENA [C]
// =============================================================================

/// Points per round = round(option strength × factor)
pub const ARENA_POINTS_FACTOR: f64 = 0.8;

/// XP at game end = round(total × factor)
pub const ARENA_XP_FACTOR: f64 = 1.2;

// =============================================================================
// FALLACY HUNT [C]
// =============================================================================

/// Base points for a correct identification
pub const FALLACY_BASE_POINTS: u32 = 50;

/// Bonus per second left on the clock
pub const FALLACY_TIME_BONUS_PER_SEC: u32 = 5;

/// Bonus per correct answer already in the streak
pub const FALLACY_STREAK_BONUS: u32 = 10;

/// Seconds allowed per question
pub const FALLACY_ROUND_SECS: u32 = 15;

pub const FALLACY_XP_FACTOR: f64 = 0.8;

// =============================================================================
// FRAME THE FLAME [C]
// =============================================================================

/// Minimum cards before an argument can be evaluated
pub const FLAME_MIN_CARDS: usize = 3;

/// Maximum cards held in an argument at once
pub const FLAME_MAX_CARDS: usize = 4;

/// Claim + evidence + reasoning
pub const FLAME_FULL_STRUCTURE_BONUS: u32 = 50;

/// Claim + evidence, or claim + reasoning
pub const FLAME_PARTIAL_STRUCTURE_BONUS: u32 = 25;

/// All cards argue the same side
pub const FLAME_COHERENCE_BONUS: u32 = 30;

pub const FLAME_XP_FACTOR: f64 = 1.5;

// =============================================================================
// BURDEN BRAWL [C]
// =============================================================================

pub const BURDEN_CORRECT_POINTS: u32 = 100;

pub const BURDEN_XP_FACTOR: f64 = 1.0;

// =============================================================================
// VERDICT ROOM [C]
// =============================================================================

/// Assigned evidence score used when the player never rated a piece
pub const VERDICT_DEFAULT_ASSIGNED_SCORE: u32 = 50;

/// Bonus for matching the canonical verdict
pub const VERDICT_CORRECT_BONUS: f64 = 200.0;

/// Completeness ratio above which the full multiplier applies
pub const VERDICT_COMPLETENESS_THRESHOLD: f64 = 0.5;

/// Deliberation clock (seconds)
pub const VERDICT_DELIBERATION_SECS: u32 = 180;

pub const VERDICT_XP_FACTOR: f64 = 2.0;

// =============================================================================
// PROGRESSION
// =============================================================================

/// XP needed per level: level = floor(xp / XP_PER_LEVEL) + 1
pub const XP_PER_LEVEL: u64 = 100;

/// Session defaults, reset whenever the active game changes
pub const SESSION_LIVES: u32 = 3;
pub const SESSION_HINTS: u32 = 3;
pub const SESSION_TIME_SECS: u32 = 60;

/// Fixed key the progress blob is stored under
pub const PROGRESS_STORE_KEY: &str = "grayVerdictProgress";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
