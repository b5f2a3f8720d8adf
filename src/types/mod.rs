//! Core types for The Gray Verdict

mod band;
mod content;
mod error;
mod mode;
mod output;
mod progress;
mod reason;
mod session;

pub use band::ScoreBand;
pub use content::{
    ArenaScenario, ArgumentCard, ArgumentOption, BurdenOption, BurdenScenario, CardType,
    Evidence, EvidenceKind, FallacyOption, FallacyQuestion, FlameTopic, Party, Side, TrialCase,
    Verdict,
};
pub use error::StoreError;
pub use mode::{GameMode, Screen};
pub use output::CompletionSummary;
pub use progress::{level_for_xp, ProgressRecord};
pub use reason::{NavReason, RoundReason};
pub use session::{CompletionEvent, RoundOutcome, RoundPhase, SessionState};
