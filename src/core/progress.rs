//! Progress tracker: the only place the progress record changes
//!
//! Every applied completion is saved immediately. Save failures are logged
//! and swallowed; the in-memory record stays authoritative for the session.

use tracing::{debug, info, warn};

use crate::core::store::ProgressStore;
use crate::types::{level_for_xp, CompletionEvent, CompletionSummary, ProgressRecord, StoreError};

/// Apply one completion: xp, level, points and games completed.
///
/// Badges and streak days are left untouched.
pub fn update(record: &ProgressRecord, xp_gain: u32, points_gain: u32) -> ProgressRecord {
    let xp = record.xp.saturating_add(u64::from(xp_gain));
    ProgressRecord {
        level: level_for_xp(xp),
        xp,
        total_points: record.total_points.saturating_add(u64::from(points_gain)),
        games_completed: record.games_completed.saturating_add(1),
        ..record.clone()
    }
}

/// Parse a stored blob, re-deriving `level` from `xp` when they disagree
pub fn decode(blob: &str) -> Result<ProgressRecord, StoreError> {
    let mut record: ProgressRecord = serde_json::from_str(blob)?;
    if !record.is_consistent() {
        let level = level_for_xp(record.xp);
        warn!(stored = record.level, derived = level, xp = record.xp, "stored level disagrees with xp, normalizing");
        record.level = level;
    }
    Ok(record)
}

pub fn encode(record: &ProgressRecord) -> Result<String, StoreError> {
    Ok(serde_json::to_string(record)?)
}

/// Owns the player's record and its store
#[derive(Debug)]
pub struct ProgressTracker<S: ProgressStore> {
    store: S,
    record: ProgressRecord,
}

impl<S: ProgressStore> ProgressTracker<S> {
    /// Load from the store once, at session start
    pub fn open(store: S) -> Self {
        let mut tracker = Self {
            store,
            record: ProgressRecord::default(),
        };
        tracker.record = tracker.load();
        tracker
    }

    /// Read the stored record. Missing or unreadable blobs give defaults.
    pub fn load(&self) -> ProgressRecord {
        let blob = match self.store.load() {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                debug!("no stored progress, starting fresh");
                return ProgressRecord::default();
            }
            Err(e) => {
                warn!(error = %e, "progress load failed, using defaults");
                return ProgressRecord::default();
            }
        };

        decode(&blob).unwrap_or_else(|e| {
            warn!(error = %e, "stored progress unreadable, using defaults");
            ProgressRecord::default()
        })
    }

    /// Persist the current record
    pub fn save(&mut self) -> Result<(), StoreError> {
        let blob = encode(&self.record)?;
        self.store.save(&blob)
    }

    /// update + save. Returns what changed.
    pub fn apply(&mut self, event: &CompletionEvent) -> CompletionSummary {
        let before = self.record.clone();
        self.record = update(&before, event.xp_gain, event.points_gain);

        if self.record.level > before.level {
            info!(mode = event.mode.id(), from = before.level, to = self.record.level, "level up");
        }
        if let Err(e) = self.save() {
            warn!(error = %e, "progress save failed");
        }

        CompletionSummary::new(event, &before, &self.record)
    }

    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

// =============================================================================
// TESTS
// =============================================================================
