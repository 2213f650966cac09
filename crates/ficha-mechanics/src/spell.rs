//! Spell economy: power regeneration, circle costs, channeling, and the
//! two casting pools.
//!
//! Spell points (PF) are the currency spent on spells and are regenerated
//! each round. Power points (PP) are the slower reserve. Casting deducts the
//! circle's cost from both; spell points can never exceed the power-point
//! maximum.

use ficha_core::{AttributeKey, Character, SpellCircle, SpellState};
use serde::{Deserialize, Serialize};

use crate::error::MechError;
use crate::sheet::Track;

const CIRCLE_COSTS: [i32; SpellCircle::MAX as usize] = [0, 1, 2, 4, 6, 9, 12, 16];

/// Spell points regenerated per round.
pub fn power_per_round(level: u32, essence: i32, modifier_sum: i32) -> i32 {
    i32::try_from(level)
        .unwrap_or(i32::MAX)
        .saturating_add(essence)
        .saturating_add(modifier_sum)
}

/// Power per round for a character, from its level, essence, and power
/// modifiers.
pub fn character_power_per_round(character: &Character) -> i32 {
    power_per_round(
        character.level,
        character.attributes.get(AttributeKey::Essence),
        character.spellcasting.power_modifier_sum(),
    )
}

/// Spell-point cost of casting a spell of `circle`.
///
/// First-circle spells are free but still need a power point available.
pub fn spell_circle_cost(circle: SpellCircle) -> i32 {
    CIRCLE_COSTS[usize::from(circle.get() - 1)]
}

/// Actions spent channeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ChannelActions {
    /// One action.
    One,
    /// Two actions.
    Two,
    /// Three actions.
    Three,
}

impl TryFrom<u8> for ChannelActions {
    type Error = MechError;

    fn try_from(actions: u8) -> Result<Self, Self::Error> {
        match actions {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            n => Err(MechError::ChannelActions(n)),
        }
    }
}

impl From<ChannelActions> for u8 {
    fn from(actions: ChannelActions) -> Self {
        match actions {
            ChannelActions::One => 1,
            ChannelActions::Two => 2,
            ChannelActions::Three => 3,
        }
    }
}

/// Spell points generated by channeling.
pub fn channel_mana(actions: ChannelActions) -> i32 {
    match actions {
        ChannelActions::One => 1,
        ChannelActions::Two => 2,
        ChannelActions::Three => 4,
    }
}

/// The live power-point and spell-point pools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellPools {
    /// Power points (PP).
    pub power_points: Track,
    /// Spell points (PF), capped at the power-point maximum.
    pub spell_points: Track,
}

impl SpellPools {
    /// Build the pools from explicit values.
    pub fn new(power_current: i32, power_max: i32, spell_points: i32) -> Self {
        Self {
            power_points: Track::new("PP", power_current, power_max),
            spell_points: Track::new("PF", spell_points, power_max),
        }
    }

    /// Read the pools off a spellcasting snapshot.
    pub fn from_state(state: &SpellState) -> Self {
        Self::new(
            state.power_points.current,
            state.power_points.max,
            state.spell_points,
        )
    }

    /// Regenerate spell points for a new round. Returns the new total.
    pub fn start_round(&mut self, power_per_round: i32) -> i32 {
        self.spell_points.adjust(power_per_round.max(0))
    }

    /// Channel for the given actions. Power points are untouched. Returns
    /// the spell points actually gained after clamping.
    pub fn channel(&mut self, actions: ChannelActions) -> i32 {
        let before = self.spell_points.current;
        let after = self.spell_points.adjust(channel_mana(actions));
        tracing::debug!(?actions, gained = after - before, "channeled");
        after - before
    }

    /// Whether a spell of `circle` can be cast right now.
    pub fn can_cast(&self, circle: SpellCircle) -> bool {
        let cost = spell_circle_cost(circle);
        !self.power_points.is_empty() && self.power_points.has(cost) && self.spell_points.has(cost)
    }

    /// Cast a spell of `circle`, deducting its cost from both pools.
    ///
    /// Returns false and changes nothing if the spell cannot be cast.
    pub fn try_cast(&mut self, circle: SpellCircle) -> bool {
        if !self.can_cast(circle) {
            tracing::debug!(%circle, "cannot cast");
            return false;
        }
        let cost = spell_circle_cost(circle);
        self.power_points.adjust(-cost);
        self.spell_points.adjust(-cost);
        true
    }
}
