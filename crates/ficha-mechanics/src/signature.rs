//! Signature skill bonus.

use ficha_core::Skill;

/// Most bonus dice a signature skill can gain.
pub const MAX_SIGNATURE_DICE: u32 = 3;

/// Bonus dice for the signature skill: one per started five levels, up to 3.
pub fn signature_bonus(level: u32) -> i32 {
    level.div_ceil(5).min(MAX_SIGNATURE_DICE) as i32
}

/// The superseded flat bonus: two points per signature die.
pub fn legacy_signature_bonus(level: u32) -> i32 {
    signature_bonus(level) * 2
}

/// Signature dice for `skill`, zero unless it is the signature skill.
pub fn skill_signature_bonus(skill: &Skill, level: u32) -> i32 {
    if skill.is_signature {
        signature_bonus(level)
    } else {
        0
    }
}
