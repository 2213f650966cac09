//! Clamped resource tracks (power points, spell points).

use serde::{Deserialize, Serialize};

/// A named numeric resource that is clamped between zero and a cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Display name, e.g. "PP".
    pub name: String,
    /// Current value.
    pub current: i32,
    /// Maximum value.
    pub max: i32,
}

impl Track {
    /// Create a track, clamping `current` into `0..=max`. A negative `max`
    /// is treated as zero.
    pub fn new(name: impl Into<String>, current: i32, max: i32) -> Self {
        let max = max.max(0);
        Self {
            name: name.into(),
            current: current.clamp(0, max),
            max,
        }
    }

    /// Adjust the track by a delta, clamping to bounds. Returns the new value.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        self.current = self.current.saturating_add(delta).clamp(0, self.max);
        self.current
    }

    /// Whether at least `amount` is available.
    pub fn has(&self, amount: i32) -> bool {
        self.current >= amount
    }

    /// Returns true if the track is at zero.
    pub fn is_empty(&self) -> bool {
        self.current <= 0
    }

    /// Returns true if the track is at its maximum value.
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}/{}", self.name, self.current, self.max)
    }
}
