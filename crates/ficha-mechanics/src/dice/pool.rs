//! Dice pool construction and rolling.

use rand::Rng;

use super::Die;
use super::roll::{DieResult, RollResult};

/// A collection of dice to be rolled together.
#[derive(Debug, Clone, Default)]
pub struct DicePool {
    /// The dice in this pool.
    pub dice: Vec<Die>,
}

impl DicePool {
    /// Create an empty dice pool.
    pub fn new() -> Self {
        Self { dice: Vec::new() }
    }

    /// Add `count` dice of the given type.
    pub fn add(mut self, die: Die, count: u32) -> Self {
        self.dice.extend(std::iter::repeat_n(die, count as usize));
        self
    }

    /// Returns how many dice are in the pool.
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    /// Roll all dice in the pool using the given RNG.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> RollResult {
        let dice = self
            .dice
            .iter()
            .map(|&die| DieResult {
                die,
                value: rng.random_range(1..=die.sides()),
            })
            .collect();
        RollResult { dice }
    }
}
