//! Core record types for Ficha: attributes, skills, crafts, luck, and
//! spellcasting state.
//!
//! This crate defines the character snapshot that the rules engine reads.
//! It carries no rules of its own. You can construct a [`Character`]
//! programmatically or deserialize one from JSON.

/// Attribute keys and the fixed attribute record.
pub mod attribute;
/// The character snapshot and its situational state.
pub mod character;
/// User-defined crafts and the luck record.
pub mod craft;
/// Error types used throughout the crate.
pub mod error;
/// Dice and numeric modifiers.
pub mod modifier;
/// Skills, proficiency ranks, and per-skill static traits.
pub mod skill;
/// Spell circles, known spells, and spellcasting state.
pub mod spell;

/// Re-export attribute types.
pub use attribute::{AttributeKey, Attributes};
/// Re-export character types.
pub use character::{ActiveCondition, ArmorClass, Character, SizeCategory};
/// Re-export craft and luck types.
pub use craft::{Craft, CraftId, CraftLevel, Luck};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export modifier types.
pub use modifier::{Modifier, ModifierKind, ModifierTarget};
/// Re-export skill types.
pub use skill::{CustomUse, ProficiencyLevel, Skill, SkillId, SkillTraits};
/// Re-export spellcasting types.
pub use spell::{KnownSpell, PowerPoints, SpellCircle, SpellState, SpellcastingAbility};
