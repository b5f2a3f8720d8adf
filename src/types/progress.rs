//! Durable player progress

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::GameMode;
use crate::XP_PER_LEVEL;

/// Player progress, persisted as a JSON blob
///
/// `level` is derived from `xp` and must never be set on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub level: u32,
    pub xp: u64,
    /// Stored only; nothing in the engine reads it
    pub badges: BTreeSet<String>,
    pub games_completed: u32,
    pub streak_days: u32,
    pub total_points: u64,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self {
            level: 1,
            xp: 0,
            badges: BTreeSet::new(),
            games_completed: 0,
            streak_days: 0,
            total_points: 0,
        }
    }
}

/// level = floor(xp / 100) + 1
pub fn level_for_xp(xp: u64) -> u32 {
    u32::try_from(xp / XP_PER_LEVEL).unwrap_or(u32::MAX - 1) + 1
}

impl ProgressRecord {
    /// Does `level` agree with `xp`?
    pub fn is_consistent(&self) -> bool {
        self.level == level_for_xp(self.xp)
    }

    /// XP earned inside the current level (0..100)
    pub fn xp_into_level(&self) -> u64 {
        self.xp % XP_PER_LEVEL
    }

    /// XP still needed for the next level
    pub fn xp_to_next_level(&self) -> u64 {
        XP_PER_LEVEL - self.xp_into_level()
    }

    /// Can this mode be selected from the menu?
    pub fn is_unlocked(&self, mode: GameMode) -> bool {
        self.level >= mode.unlock_level()
    }
}
