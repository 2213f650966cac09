//! Roll history.
//!
//! Resolved rolls can be appended to a [`RollSink`]. The history is a log
//! for display and export; no calculation ever reads it back.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One resolved roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    /// What was rolled (e.g. "stealth").
    pub label: String,
    /// Pool or check formula as shown to the player.
    pub formula: String,
    /// Face values in roll order.
    pub rolls: Vec<u32>,
    /// Short outcome text.
    pub result: String,
    /// When the roll was resolved.
    pub timestamp: DateTime<Utc>,
}

impl RollRecord {
    /// Create a record stamped with the current time.
    pub fn new(
        label: impl Into<String>,
        formula: impl Into<String>,
        rolls: Vec<u32>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            formula: formula.into(),
            rolls,
            result: result.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Destination for resolved rolls.
pub trait RollSink: Send + Sync {
    /// Append a record.
    fn record(&self, record: RollRecord);
}

/// A sink that drops every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RollSink for NullSink {
    fn record(&self, _record: RollRecord) {}
}

/// An append-only, thread-safe roll log.
#[derive(Debug, Default)]
pub struct RollHistory {
    entries: Mutex<Vec<RollRecord>>,
}

impl RollHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of every record, oldest first.
    pub fn entries(&self) -> Vec<RollRecord> {
        self.lock().clone()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Export the history as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Roll History\n\n");
        for record in self.lock().iter() {
            let vals: Vec<String> = record.rolls.iter().map(|v| v.to_string()).collect();
            out.push_str(&format!(
                "**{}** {}: [{}] = {}\n\n",
                record.label,
                record.formula,
                vals.join(", "),
                record.result
            ));
        }
        out
    }

    // Records are pushed whole, so a poisoned lock still holds a valid log.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<RollRecord>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RollSink for RollHistory {
    fn record(&self, record: RollRecord) {
        tracing::debug!(label = %record.label, result = %record.result, "roll recorded");
        self.lock().push(record);
    }
}
