//! Static content tables, one per mini-game
//!
//! Hand-authored and never mutated. Runners receive copies of the rows.

mod arena;
mod burden;
mod fallacy;
mod flame;
mod verdict;

pub use arena::ARENA_SCENARIOS;
pub use burden::BURDEN_SCENARIOS;
pub use fallacy::FALLACY_QUESTIONS;
pub use flame::FLAME_TOPICS;
pub use verdict::TRIAL_CASES;
