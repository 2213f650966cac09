//! Fixed rule tables: proficiency dice, craft multipliers, and luck.

use ficha_core::{CraftLevel, ProficiencyLevel};
use serde::{Deserialize, Serialize};

use crate::dice::Die;

/// The die rolled for a skill of the given rank.
pub fn die_size_for(proficiency: ProficiencyLevel) -> Die {
    match proficiency {
        ProficiencyLevel::Lay => Die::D6,
        ProficiencyLevel::Adept => Die::D8,
        ProficiencyLevel::Versed => Die::D10,
        ProficiencyLevel::Master => Die::D12,
    }
}

const CRAFT_MULTIPLIERS: [i32; 6] = [0, 1, 1, 2, 2, 3];

/// The attribute multiplier granted by a craft level.
pub fn craft_multiplier_for(level: CraftLevel) -> i32 {
    CRAFT_MULTIPLIERS[usize::from(level.get())]
}

/// Attribute multiplier of the legacy flat revision.
pub fn legacy_proficiency_multiplier(proficiency: ProficiencyLevel) -> i32 {
    match proficiency {
        ProficiencyLevel::Lay => 0,
        ProficiencyLevel::Adept => 1,
        ProficiencyLevel::Versed => 2,
        ProficiencyLevel::Master => 3,
    }
}

/// What a luck level grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckData {
    /// Dice in the luck pool.
    pub dice: i32,
    /// Die size of the luck pool.
    pub die: Die,
    /// Flat bonus in the legacy revision.
    pub bonus: i32,
}

const fn luck(dice: i32, die: Die, bonus: i32) -> LuckData {
    LuckData { dice, die, bonus }
}

const LUCK_TABLE: [LuckData; 8] = [
    luck(0, Die::D6, 0),
    luck(1, Die::D6, 3),
    luck(2, Die::D6, 6),
    luck(3, Die::D8, 9),
    luck(4, Die::D8, 12),
    luck(5, Die::D10, 15),
    luck(6, Die::D10, 18),
    luck(7, Die::D12, 21),
];

/// Luck data for a level. Levels past the table grow linearly.
pub fn luck_data_for(level: u32) -> LuckData {
    match LUCK_TABLE.get(level as usize) {
        Some(data) => *data,
        None => {
            let dice = i32::try_from(level).unwrap_or(i32::MAX);
            luck(dice, LUCK_TABLE[LUCK_TABLE.len() - 1].die, dice.saturating_mul(3))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn die_size_strictly_increases() {
        let dice: Vec<Die> = ProficiencyLevel::ALL
            .into_iter()
            .map(die_size_for)
            .collect();
        assert_eq!(dice, vec![Die::D6, Die::D8, Die::D10, Die::D12]);
        assert!(dice.windows(2).all(|w| w[0].sides() < w[1].sides()));
    }

    #[test]
    fn craft_multipliers() {
        let expected = [0, 1, 1, 2, 2, 3];
        for (level, want) in expected.into_iter().enumerate() {
            let level = CraftLevel::try_from(level as u8).unwrap();
            assert_eq!(craft_multiplier_for(level), want);
        }
    }

    #[test]
    fn luck_table_entries() {
        assert_eq!(luck_data_for(0), luck(0, Die::D6, 0));
        assert_eq!(luck_data_for(3), luck(3, Die::D8, 9));
        assert_eq!(luck_data_for(7), luck(7, Die::D12, 21));
    }

    #[test]
    fn luck_extrapolates_past_table() {
        assert_eq!(luck_data_for(8), luck(8, Die::D12, 24));
        assert_eq!(luck_data_for(12), luck(12, Die::D12, 36));
    }

    #[test]
    fn huge_luck_level_saturates_bonus() {
        assert_eq!(
            luck_data_for(1_000_000_000),
            luck(1_000_000_000, Die::D12, i32::MAX)
        );
        assert_eq!(luck_data_for(u32::MAX), luck(i32::MAX, Die::D12, i32::MAX));
    }

    #[test]
    fn legacy_multipliers_follow_rank() {
        let m: Vec<i32> = ProficiencyLevel::ALL
            .into_iter()
            .map(legacy_proficiency_multiplier)
            .collect();
        assert_eq!(m, vec![0, 1, 2, 3]);
    }
}
