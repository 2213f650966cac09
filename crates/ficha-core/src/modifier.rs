use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Whether a modifier helps or hinders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKind {
    /// A non-negative adjustment.
    Bonus,
    /// A non-positive adjustment.
    Penalty,
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bonus => write!(f, "bonus"),
            Self::Penalty => write!(f, "penalty"),
        }
    }
}

/// What a modifier adjusts.
///
/// Dice modifiers shift the dice count of a pool. Numeric modifiers are the
/// flat additive bonus of the legacy d20 revision. A modifier is always
/// exactly one of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierTarget {
    /// Shifts the dice count.
    Dice,
    /// Adds a flat number (legacy revision).
    Numeric,
}

/// A named, signed adjustment attached to a skill, craft, or power pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawModifier", into = "RawModifier")]
pub struct Modifier {
    name: String,
    value: i32,
    kind: ModifierKind,
    target: ModifierTarget,
}

impl Modifier {
    /// Build a modifier, rejecting a value whose sign disagrees with `kind`.
    pub fn new(
        name: impl Into<String>,
        value: i32,
        kind: ModifierKind,
        target: ModifierTarget,
    ) -> CoreResult<Self> {
        let name = name.into();
        let agrees = match kind {
            ModifierKind::Bonus => value >= 0,
            ModifierKind::Penalty => value <= 0,
        };
        if !agrees {
            return Err(CoreError::ModifierSign { name, value, kind });
        }
        Ok(Self {
            name,
            value,
            kind,
            target,
        })
    }

    /// A dice modifier whose kind follows the sign of `value`.
    pub fn dice(name: impl Into<String>, value: i32) -> Self {
        Self::signed(name, value, ModifierTarget::Dice)
    }

    /// A numeric modifier whose kind follows the sign of `value`.
    pub fn numeric(name: impl Into<String>, value: i32) -> Self {
        Self::signed(name, value, ModifierTarget::Numeric)
    }

    fn signed(name: impl Into<String>, value: i32, target: ModifierTarget) -> Self {
        let kind = if value < 0 {
            ModifierKind::Penalty
        } else {
            ModifierKind::Bonus
        };
        Self {
            name: name.into(),
            value,
            kind,
            target,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Signed value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Bonus or penalty.
    pub fn kind(&self) -> ModifierKind {
        self.kind
    }

    /// Dice or numeric.
    pub fn target(&self) -> ModifierTarget {
        self.target
    }

    /// Returns true if this modifier shifts the dice count.
    pub fn affects_dice(&self) -> bool {
        self.target == ModifierTarget::Dice
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.target {
            ModifierTarget::Dice => "d",
            ModifierTarget::Numeric => "",
        };
        write!(f, "{} {:+}{unit}", self.name, self.value)
    }
}

/// Wire shape of a modifier, checked on the way in.
#[derive(Serialize, Deserialize)]
struct RawModifier {
    name: String,
    value: i32,
    kind: ModifierKind,
    target: ModifierTarget,
}

impl TryFrom<RawModifier> for Modifier {
    type Error = CoreError;

    fn try_from(raw: RawModifier) -> Result<Self, Self::Error> {
        Modifier::new(raw.name, raw.value, raw.kind, raw.target)
    }
}

impl From<Modifier> for RawModifier {
    fn from(m: Modifier) -> Self {
        Self {
            name: m.name,
            value: m.value,
            kind: m.kind,
            target: m.target,
        }
    }
}
