//! Rules engine for Ficha character sheets.
//!
//! Turns a character snapshot into dice pools, rolls them with success
//! counting, and computes the spellcasting economy and spell learning
//! odds. Two rule revisions are supported: the current dice-pool rules
//! and the legacy flat d20 rules.
//!
//! Everything here is a pure calculation except the optional roll
//! history, which callers inject as a [`RollSink`].

pub mod builder;
pub mod config;
pub mod dice;
pub mod error;
pub mod history;
pub mod learning;
pub mod modifier;
pub mod odds;
pub mod resolution;
pub mod rules;
pub mod sheet;
pub mod signature;
pub mod spell;
pub mod table;
pub mod validate;

pub use builder::{
    DicePoolSpec, build_casting_pool, build_craft_pool, build_luck_pool, build_skill_pool,
    legacy_craft_modifier,
};
pub use config::RulesConfig;
pub use dice::{DicePool, Die, DieResult, RollResult};
pub use error::{MechError, MechResult};
pub use history::{NullSink, RollHistory, RollRecord, RollSink};
pub use learning::{LearningInput, spell_learning_chance};
pub use modifier::{Aggregate, Situation, aggregate_dice};
pub use odds::PoolOdds;
pub use resolution::{CountSuccesses, DicePoolResult, classify, resolve, resolve_recorded};
pub use rules::{Check, CheckOutcome, FlatCheck, FlatResult, RuleRevision};
pub use sheet::{CharacterSheet, Track};
pub use signature::signature_bonus;
pub use spell::{ChannelActions, SpellPools, channel_mana, power_per_round, spell_circle_cost};
pub use table::{LuckData, craft_multiplier_for, die_size_for, luck_data_for};
pub use validate::{ValidationIssue, validate_character};
