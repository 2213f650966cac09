//! Error types for the mechanics engine.

use ficha_core::{CraftId, SkillId};

/// Errors that can occur during mechanics operations.
///
/// These cover gaps a user can reach (a craft skill with no craft chosen,
/// a missing skill). Pure calculators never return them.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// The character does not have the requested skill.
    #[error("character has no skill '{0}'")]
    UnknownSkill(SkillId),

    /// A craft skill references a craft that does not exist.
    #[error("craft {0} not found")]
    UnknownCraft(CraftId),

    /// The craft skill has no craft selected and cannot be rolled.
    #[error("no craft selected")]
    NoCraftSelected,

    /// No spellcasting ability has the requested ID.
    #[error("unknown spellcasting ability: {0}")]
    UnknownAbility(String),

    /// Channeling takes 1, 2, or 3 actions.
    #[error("cannot channel for {0} actions (1-3)")]
    ChannelActions(u8),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
