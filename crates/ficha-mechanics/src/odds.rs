//! Exact odds for a dice pool.
//!
//! Each kept die moves the running tally by +1 (success), -1
//! (cancellation), or 0. The distribution of the tally is built one die at
//! a time, then everything below zero is folded into zero net successes.

use serde::{Deserialize, Serialize};

use crate::builder::DicePoolSpec;
use crate::config::RulesConfig;

/// Probability of each net-success count for one pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolOdds {
    /// `distribution[n]` is the chance of exactly `n` net successes.
    pub distribution: Vec<f64>,
}

#[derive(Debug, Clone, Copy)]
struct FaceOdds {
    success: f64,
    cancel: f64,
}

impl FaceOdds {
    fn blank(self) -> f64 {
        (1.0 - self.success - self.cancel).max(0.0)
    }
}

fn single_die(sides: u32, config: &RulesConfig) -> FaceOdds {
    let sides_f = f64::from(sides);
    let successes = (sides + 1).saturating_sub(config.success_threshold.max(1));
    let cancel = if (1..=sides).contains(&config.cancel_face) { 1.0 } else { 0.0 };
    FaceOdds {
        success: f64::from(successes) / sides_f,
        cancel: cancel / sides_f,
    }
}

// Lower of two dice: P(min >= t) = P(one die >= t)^2.
fn lower_of_two(sides: u32, config: &RulesConfig) -> FaceOdds {
    let sides_f = f64::from(sides);
    let at_or_above = |face: u32| f64::from((sides + 1).saturating_sub(face)) / sides_f;
    let success = at_or_above(config.success_threshold.max(1)).powi(2);
    let cancel = if (1..=sides).contains(&config.cancel_face) {
        at_or_above(config.cancel_face).powi(2) - at_or_above(config.cancel_face + 1).powi(2)
    } else {
        0.0
    };
    FaceOdds { success, cancel }
}

impl PoolOdds {
    /// Compute the odds for `spec`.
    pub fn for_spec(spec: &DicePoolSpec, config: &RulesConfig) -> Self {
        let sides = spec.die.sides();
        let (face, dice) = if spec.is_penalty_roll {
            (lower_of_two(sides, config), 1)
        } else {
            (single_die(sides, config), spec.dice_count as usize)
        };

        // tally[i] is the chance of a running tally of i - dice.
        let mut tally = vec![0.0; 2 * dice + 1];
        tally[dice] = 1.0;
        for _ in 0..dice {
            let mut next = vec![0.0; tally.len()];
            for (i, &p) in tally.iter().enumerate().filter(|(_, p)| **p > 0.0) {
                next[i] += p * face.blank();
                if i + 1 < next.len() {
                    next[i + 1] += p * face.success;
                }
                if i > 0 {
                    next[i - 1] += p * face.cancel;
                }
            }
            tally = next;
        }

        let mut distribution = vec![0.0; dice + 1];
        for (i, p) in tally.into_iter().enumerate() {
            distribution[i.saturating_sub(dice)] += p;
        }
        Self { distribution }
    }

    /// Chance of at least `n` net successes.
    pub fn chance_of_at_least(&self, n: usize) -> f64 {
        self.distribution.iter().skip(n).sum()
    }

    /// Mean net successes.
    pub fn expected_net(&self) -> f64 {
        self.distribution
            .iter()
            .enumerate()
            .map(|(n, p)| n as f64 * p)
            .sum()
    }

    /// Most net successes possible.
    pub fn max_net(&self) -> usize {
        self.distribution.len().saturating_sub(1)
    }
}
