//! Character-level entry points.
//!
//! A [`CharacterSheet`] pairs a character snapshot with a [`RulesConfig`]
//! and looks up the skills, crafts, and abilities the pool builders need.
//! Gaps a user can create (a craft skill with nothing selected, a missing
//! skill) come back as [`MechError`]s.

pub mod track;

pub use track::Track;

use ficha_core::{Character, Craft, Skill, SkillId, SpellcastingAbility};

use crate::builder::{
    DicePoolSpec, build_casting_pool, build_craft_pool, build_luck_pool, build_skill_pool,
};
use crate::config::RulesConfig;
use crate::error::{MechError, MechResult};
use crate::modifier::{Aggregate, Situation, aggregate};
use crate::rules::{
    Check, RuleRevision, legacy_casting_check, legacy_craft_check, legacy_luck_check,
    legacy_skill_check,
};
use crate::spell::{SpellPools, character_power_per_round};

/// A read-only rules view over one character.
#[derive(Debug, Clone, Copy)]
pub struct CharacterSheet<'a> {
    character: &'a Character,
    config: RulesConfig,
}

impl<'a> CharacterSheet<'a> {
    /// Wrap `character` under the given rules.
    pub fn new(character: &'a Character, config: RulesConfig) -> Self {
        Self { character, config }
    }

    /// The wrapped character.
    pub fn character(&self) -> &'a Character {
        self.character
    }

    /// The rules in effect.
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Situational state read off the character.
    pub fn situation(&self) -> Situation {
        Situation::from_character(self.character)
    }

    fn skill(&self, id: SkillId) -> MechResult<&'a Skill> {
        self.character.skill(id).ok_or(MechError::UnknownSkill(id))
    }

    // Luck can be rolled without the skill on the sheet; the skill only
    // carries the signature flag.
    fn luck_skill(&self) -> Skill {
        self.character
            .skill(SkillId::Luck)
            .cloned()
            .unwrap_or_else(|| Skill::new(SkillId::Luck))
    }

    /// The craft selected on the craft skill, with the skill itself.
    pub fn selected_craft(&self) -> MechResult<(&'a Craft, &'a Skill)> {
        let skill = self.skill(SkillId::Craft)?;
        let id = skill.selected_craft.ok_or(MechError::NoCraftSelected)?;
        let craft = self.character.craft(id).ok_or(MechError::UnknownCraft(id))?;
        Ok((craft, skill))
    }

    /// Look up a spellcasting ability.
    pub fn ability(&self, id: &str) -> MechResult<&'a SpellcastingAbility> {
        self.character
            .spellcasting
            .ability(id)
            .ok_or_else(|| MechError::UnknownAbility(id.to_string()))
    }

    /// Pool for any skill. The craft skill rolls its selected craft and the
    /// luck skill rolls luck.
    pub fn skill_pool(&self, id: SkillId) -> MechResult<DicePoolSpec> {
        match id {
            SkillId::Craft => self.craft_pool(),
            SkillId::Luck => Ok(self.luck_pool()),
            _ => {
                let skill = self.skill(id)?;
                let c = self.character;
                Ok(build_skill_pool(
                    skill,
                    &c.attributes,
                    c.level,
                    &self.situation(),
                    &self.config,
                ))
            }
        }
    }

    /// The modifier breakdown behind a skill's pool.
    pub fn modifiers(&self, id: SkillId) -> MechResult<Aggregate> {
        Ok(aggregate(self.skill(id)?, &self.situation()))
    }

    /// Pool for the selected craft.
    pub fn craft_pool(&self) -> MechResult<DicePoolSpec> {
        let (craft, skill) = self.selected_craft()?;
        let c = self.character;
        Ok(build_craft_pool(craft, skill, &c.attributes, c.level, &self.config))
    }

    /// Pool for a luck roll.
    pub fn luck_pool(&self) -> DicePoolSpec {
        let c = self.character;
        build_luck_pool(&c.luck, &self.luck_skill(), c.level, &self.config)
    }

    /// Pool for casting through the named ability.
    pub fn casting_pool(&self, ability_id: &str) -> MechResult<DicePoolSpec> {
        let ability = self.ability(ability_id)?;
        let c = self.character;
        Ok(build_casting_pool(ability, &c.skills, &c.attributes, &self.config))
    }

    /// A check for `id` under the configured revision.
    pub fn check(&self, id: SkillId) -> MechResult<Check> {
        if self.config.revision == RuleRevision::Current {
            return self.skill_pool(id).map(Check::Pool);
        }
        let c = self.character;
        let flat = match id {
            SkillId::Craft => {
                let (craft, skill) = self.selected_craft()?;
                legacy_craft_check(craft, skill, &c.attributes, c.level)
            }
            SkillId::Luck => legacy_luck_check(&c.luck, &self.luck_skill(), c.level),
            _ => legacy_skill_check(self.skill(id)?, &c.attributes, c.level),
        };
        Ok(Check::Flat(flat))
    }

    /// A casting check under the configured revision.
    pub fn casting_check(&self, ability_id: &str) -> MechResult<Check> {
        match self.config.revision {
            RuleRevision::Current => self.casting_pool(ability_id).map(Check::Pool),
            RuleRevision::Legacy => {
                let ability = self.ability(ability_id)?;
                let c = self.character;
                Ok(Check::Flat(legacy_casting_check(ability, &c.skills, &c.attributes)))
            }
        }
    }

    /// Spell points regenerated per round.
    pub fn power_per_round(&self) -> i32 {
        character_power_per_round(self.character)
    }

    /// The live spell pools.
    pub fn spell_pools(&self) -> SpellPools {
        SpellPools::from_state(&self.character.spellcasting)
    }
}
