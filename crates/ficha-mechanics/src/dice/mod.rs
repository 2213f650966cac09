//! Dice types, pools, and rolling.
//!
//! Pools use d6 through d12 depending on proficiency. The d20 is kept for
//! the legacy flat-modifier revision.

pub mod pool;
pub mod roll;

pub use pool::DicePool;
pub use roll::{DieResult, RollResult};

use serde::{Deserialize, Serialize};

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Die {
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
        }
    }

}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn die_sides() {
        assert_eq!(Die::D6.sides(), 6);
        assert_eq!(Die::D8.sides(), 8);
        assert_eq!(Die::D10.sides(), 10);
        assert_eq!(Die::D12.sides(), 12);
        assert_eq!(Die::D20.sides(), 20);
    }

    #[test]
    fn die_display() {
        assert_eq!(Die::D10.to_string(), "d10");
        assert_eq!(Die::D20.to_string(), "d20");
    }

    #[test]
    fn ordered_by_size() {
        assert!(Die::D6 < Die::D8);
        assert!(Die::D12 < Die::D20);
    }
}
