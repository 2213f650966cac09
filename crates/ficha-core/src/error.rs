use crate::modifier::ModifierKind;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building or loading character records.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A modifier's value has the wrong sign for its kind.
    #[error("modifier \"{name}\": value {value} does not match kind {kind}")]
    ModifierSign {
        /// The modifier name.
        name: String,
        /// The offending value.
        value: i32,
        /// The declared kind.
        kind: ModifierKind,
    },

    /// A craft level outside 0..=5.
    #[error("craft level {0} out of range (0-5)")]
    CraftLevel(u8),

    /// A spell circle outside 1..=8.
    #[error("spell circle {0} out of range (1-8)")]
    SpellCircle(u8),

    /// A skill name that does not match any known skill.
    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    /// An attribute name that does not match any attribute key.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// The character snapshot could not be parsed.
    #[error("invalid character record: {0}")]
    Json(#[from] serde_json::Error),
}
