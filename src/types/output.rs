//! Output structures for terminal display

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::types::{CompletionEvent, GameMode, ProgressRecord};

/// What one finished challenge did to the player's progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionSummary {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Mode that was completed
    pub mode: GameMode,
    /// Points scored in the challenge
    pub points: u32,
    /// XP credited
    pub xp_gain: u32,
    /// Level before the XP was applied
    pub level_before: u32,
    /// Level after
    pub level_after: u32,
    /// Total XP after
    pub total_xp: u64,
}

impl CompletionSummary {
    /// Build from the applied event and the record before/after it
    pub fn new(event: &CompletionEvent, before: &ProgressRecord, after: &ProgressRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            mode: event.mode,
            points: event.points_gain,
            xp_gain: event.xp_gain,
            level_before: before.level,
            level_after: after.level,
            total_xp: after.xp,
        }
    }

    pub fn leveled_up(&self) -> bool {
        self.level_after > self.level_before
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let line = format!(
            "✔ {} complete | points={} | +{} XP | level={} | xp={}",
            self.mode.title(),
            self.points,
            self.xp_gain,
            self.level_after,
            self.total_xp,
        );
        if self.leveled_up() {
            format!("{}\n{}", line.green(), format!("★ LEVEL UP → {}", self.level_after).yellow().bold())
        } else {
            line.green().to_string()
        }
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "mode={} | points={} | xp_gain={} | level={}->{} | xp={}",
            self.mode.id(),
            self.points,
            self.xp_gain,
            self.level_before,
            self.level_after,
            self.total_xp,
        )
    }
}
