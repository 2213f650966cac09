//! Success counting.
//!
//! Every kept die is exactly one of: a cancellation (showing the cancel
//! face), a success (at or above the threshold), or a blank. Each
//! cancellation removes one success; net successes never go below zero.

use serde::{Deserialize, Serialize};

use crate::config::RulesConfig;
use crate::dice::DieResult;

/// Thresholds used to classify a die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountSuccesses {
    /// Roll at or above this value to score a success.
    pub success_threshold: u32,
    /// Rolling exactly this value cancels one success.
    pub cancel_face: u32,
}

impl Default for CountSuccesses {
    fn default() -> Self {
        Self::from(&RulesConfig::default())
    }
}

impl From<&RulesConfig> for CountSuccesses {
    fn from(config: &RulesConfig) -> Self {
        Self {
            success_threshold: config.success_threshold,
            cancel_face: config.cancel_face,
        }
    }
}

/// How one die was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DieClass {
    /// Counts toward the result.
    Success,
    /// Removes one success.
    Cancellation,
    /// Neither.
    Blank,
}

/// Counts for a set of kept dice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Dice at or above the threshold.
    pub successes: u32,
    /// Dice showing the cancel face.
    pub cancellations: u32,
    /// Everything else.
    pub blanks: u32,
}

impl Tally {
    /// Successes left after cancellations, floored at zero.
    pub fn net(&self) -> u32 {
        self.successes.saturating_sub(self.cancellations)
    }
}

impl CountSuccesses {
    /// Classify one face value. The cancel face is checked first.
    pub fn classify(&self, value: u32) -> DieClass {
        if value == self.cancel_face {
            DieClass::Cancellation
        } else if value >= self.success_threshold {
            DieClass::Success
        } else {
            DieClass::Blank
        }
    }

    /// Tally the kept dice.
    pub fn tally(&self, kept: &[DieResult]) -> Tally {
        let mut tally = Tally::default();
        for die in kept {
            match self.classify(die.value) {
                DieClass::Success => tally.successes += 1,
                DieClass::Cancellation => tally.cancellations += 1,
                DieClass::Blank => tally.blanks += 1,
            }
        }
        tally
    }
}
