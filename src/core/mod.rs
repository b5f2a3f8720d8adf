//! Core modules for The Gray Verdict

pub mod achievements;
pub mod countdown;
pub mod games;
pub mod progress;
pub mod runner;
pub mod scoring;
pub mod session;
pub mod store;

pub use achievements::{evaluate as evaluate_achievements, Achievement, AchievementStatus, ACHIEVEMENTS};
pub use countdown::{Countdown, Tick};
pub use games::{ActiveGame, ArgumentBuilder, PlayerInput, TrialBuilder, TrialPhase, TrialSubmission};
pub use progress::{update, ProgressTracker};
pub use runner::{RoundContext, RoundRules, ScenarioRunner};
pub use session::SessionController;
pub use store::{FileStore, MemoryStore, ProgressStore};
