//! Dice pool resolution.
//!
//! Rolling and reading are separate steps: [`resolve`] rolls the dice a
//! [`DicePoolSpec`] asks for and hands the faces to [`classify`], which is
//! pure and can be tested with fixed values. Under a penalty roll both dice
//! are rolled but only the lower one is read.

pub mod count;

pub use count::{CountSuccesses, DieClass, Tally};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::builder::DicePoolSpec;
use crate::config::RulesConfig;
use crate::dice::{DicePool, RollResult};
use crate::history::{RollRecord, RollSink};

/// The outcome of rolling a dice pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePoolResult {
    /// Every die rolled.
    pub rolls: RollResult,
    /// The dice that were read: all of them, or the lower one under penalty.
    pub kept: RollResult,
    /// Kept dice at or above the success threshold.
    pub successes: u32,
    /// Kept dice showing the cancel face.
    pub cancellations: u32,
    /// `max(0, successes - cancellations)`.
    pub net_successes: u32,
}

impl DicePoolResult {
    /// Kept dice that were neither successes nor cancellations.
    pub fn blanks(&self) -> u32 {
        self.kept.count() as u32 - self.successes - self.cancellations
    }

    /// Whether at least one success survived.
    pub fn is_success(&self) -> bool {
        self.net_successes > 0
    }
}

impl std::fmt::Display for DicePoolResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} net", self.net_successes)
    }
}

/// Read a set of rolled dice against `spec`.
pub fn classify(spec: &DicePoolSpec, rolls: RollResult, config: &RulesConfig) -> DicePoolResult {
    let kept = if spec.is_penalty_roll {
        let lowest = rolls.dice.iter().min_by_key(|d| d.value).copied();
        RollResult {
            dice: lowest.into_iter().collect(),
        }
    } else {
        rolls.clone()
    };
    let tally = CountSuccesses::from(config).tally(&kept.dice);
    DicePoolResult {
        rolls,
        kept,
        successes: tally.successes,
        cancellations: tally.cancellations,
        net_successes: tally.net(),
    }
}

/// Roll `spec` and read the result.
pub fn resolve<R: Rng + ?Sized>(
    spec: &DicePoolSpec,
    rng: &mut R,
    config: &RulesConfig,
) -> DicePoolResult {
    let rolls = DicePool::new().add(spec.die, spec.dice_count).roll(rng);
    let result = classify(spec, rolls, config);
    tracing::debug!(
        formula = %spec,
        rolls = %result.rolls,
        net = result.net_successes,
        "resolved pool"
    );
    result
}

/// Roll `spec`, read the result, and append it to `sink`.
pub fn resolve_recorded<R: Rng + ?Sized>(
    label: &str,
    spec: &DicePoolSpec,
    rng: &mut R,
    config: &RulesConfig,
    sink: &dyn RollSink,
) -> DicePoolResult {
    let result = resolve(spec, rng, config);
    sink.record(RollRecord::new(
        label,
        &spec.formula_text,
        result.rolls.values(),
        result.to_string(),
    ));
    result
}
