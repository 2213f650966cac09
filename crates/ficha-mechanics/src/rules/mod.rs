//! Rule revisions and checks.
//!
//! Two revisions of the rules exist side by side. The current one rolls a
//! dice pool and counts successes. The legacy one rolls a single d20 and
//! adds a flat modifier built from attribute multipliers and numeric
//! bonuses. A [`Check`] carries either shape and resolves it.

pub mod legacy;

pub use legacy::{legacy_casting_check, legacy_craft_check, legacy_luck_check, legacy_skill_check};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::builder::DicePoolSpec;
use crate::config::RulesConfig;
use crate::dice::{DicePool, Die};
use crate::history::{RollRecord, RollSink};
use crate::resolution::{self, DicePoolResult};

/// Which revision of the rules a check is built under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleRevision {
    /// Dice pools with success counting.
    #[default]
    Current,
    /// One d20 plus a flat modifier.
    Legacy,
}

impl std::fmt::Display for RuleRevision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Current => write!(f, "current"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}

/// A single die plus a flat modifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatCheck {
    /// The die rolled.
    pub die: Die,
    /// Added to the roll.
    pub modifier: i32,
    /// e.g. `"1d20+4"`.
    pub formula_text: String,
}

impl FlatCheck {
    /// A d20 check with the given modifier.
    pub fn d20(modifier: i32) -> Self {
        let die = Die::D20;
        let formula_text = match modifier {
            0 => format!("1{die}"),
            m if m > 0 => format!("1{die}+{m}"),
            m => format!("1{die}{m}"),
        };
        Self {
            die,
            modifier,
            formula_text,
        }
    }

    /// Roll the die and add the modifier.
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> FlatResult {
        let roll = DicePool::new().add(self.die, 1).roll(rng).total();
        FlatResult {
            roll,
            modifier: self.modifier,
            total: i32::try_from(roll).unwrap_or(i32::MAX).saturating_add(self.modifier),
        }
    }
}

/// The outcome of a flat check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatResult {
    /// The natural roll.
    pub roll: u32,
    /// The modifier added.
    pub modifier: i32,
    /// `roll + modifier`.
    pub total: i32,
}

/// A check ready to roll under either revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Check {
    /// A dice pool (current revision).
    Pool(DicePoolSpec),
    /// A flat d20 check (legacy revision).
    Flat(FlatCheck),
}

impl Check {
    /// The formula shown to the player.
    pub fn formula_text(&self) -> &str {
        match self {
            Self::Pool(spec) => &spec.formula_text,
            Self::Flat(flat) => &flat.formula_text,
        }
    }

    /// Roll the check.
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R, config: &RulesConfig) -> CheckOutcome {
        match self {
            Self::Pool(spec) => CheckOutcome::Pool(resolution::resolve(spec, rng, config)),
            Self::Flat(flat) => {
                let result = flat.resolve(rng);
                tracing::debug!(
                    formula = %flat.formula_text,
                    total = result.total,
                    "resolved flat check"
                );
                CheckOutcome::Flat(result)
            }
        }
    }

    /// Roll the check and append it to `sink`.
    pub fn resolve_recorded<R: Rng + ?Sized>(
        &self,
        label: &str,
        rng: &mut R,
        config: &RulesConfig,
        sink: &dyn RollSink,
    ) -> CheckOutcome {
        let outcome = self.resolve(rng, config);
        sink.record(RollRecord::new(
            label,
            self.formula_text(),
            outcome.faces(),
            outcome.to_string(),
        ));
        outcome
    }
}

/// The outcome of a [`Check`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckOutcome {
    /// Successes counted from a pool.
    Pool(DicePoolResult),
    /// A flat total.
    Flat(FlatResult),
}

impl CheckOutcome {
    /// Every face rolled.
    pub fn faces(&self) -> Vec<u32> {
        match self {
            Self::Pool(result) => result.rolls.values(),
            Self::Flat(result) => vec![result.roll],
        }
    }
}

impl std::fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pool(result) => write!(f, "{result}"),
            Self::Flat(result) => write!(f, "total {}", result.total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::RollHistory;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn current_is_default() {
        assert_eq!(RuleRevision::default(), RuleRevision::Current);
        assert_eq!(RulesConfig::default().revision, RuleRevision::Current);
    }

    #[test]
    fn revision_serde() {
        let json = serde_json::to_string(&RuleRevision::Legacy).unwrap();
        assert_eq!(json, "\"legacy\"");
        let back: RuleRevision = serde_json::from_str("\"current\"").unwrap();
        assert_eq!(back, RuleRevision::Current);
    }

    #[test]
    fn flat_formula_text() {
        assert_eq!(FlatCheck::d20(10).formula_text, "1d20+10");
        assert_eq!(FlatCheck::d20(-2).formula_text, "1d20-2");
        assert_eq!(FlatCheck::d20(0).formula_text, "1d20");
    }

    #[test]
    fn flat_total_adds_modifier() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let result = FlatCheck::d20(5).resolve(&mut rng);
            assert!((1..=20).contains(&result.roll));
            assert_eq!(result.total, result.roll as i32 + 5);
        }
    }

    #[test]
    fn check_dispatches_by_shape() {
        let cfg = RulesConfig::default();
        let mut rng = StdRng::seed_from_u64(11);

        let pool = Check::Pool(DicePoolSpec::from_raw(3, Die::D8, &cfg));
        assert_eq!(pool.formula_text(), "3d8");
        match pool.resolve(&mut rng, &cfg) {
            CheckOutcome::Pool(result) => assert_eq!(result.rolls.count(), 3),
            other => panic!("expected pool outcome, got {other:?}"),
        }

        let flat = Check::Flat(FlatCheck::d20(2));
        assert!(matches!(flat.resolve(&mut rng, &cfg), CheckOutcome::Flat(_)));
    }

    #[test]
    fn recorded_check() {
        let cfg = RulesConfig::default();
        let history = RollHistory::new();
        let check = Check::Flat(FlatCheck::d20(1));
        let outcome = check.resolve_recorded("lore", &mut StdRng::seed_from_u64(5), &cfg, &history);
        let entries = history.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].formula, "1d20+1");
        assert_eq!(entries[0].rolls, outcome.faces());
        assert!(entries[0].result.starts_with("total "));
    }
}
