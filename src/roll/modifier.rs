//! Individual to-hit modifiers and roll sentinels

use serde::{Deserialize, Serialize};

/// Non-numeric outcomes that override ordinary summation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RollSentinel {
    /// The action cannot succeed; no roll is made
    Impossible,
    /// The action fails without a roll
    AutomaticFail,
    /// The action succeeds without a roll
    AutomaticSuccess,
    /// No check is required at all; overrides every other sentinel
    CheckFalse,
}

impl RollSentinel {
    /// Designated numeric value reported by a roll locked on this sentinel
    pub const fn value(self) -> i32 {
        match self {
            RollSentinel::Impossible => i32::MAX,
            RollSentinel::AutomaticFail => i32::MAX - 1,
            RollSentinel::AutomaticSuccess => i32::MIN,
            RollSentinel::CheckFalse => i32::MIN + 1,
        }
    }

    /// Automatic success/failure, the sentinels `remove_autos` always strips
    pub fn is_automatic(self) -> bool {
        matches!(self, RollSentinel::AutomaticFail | RollSentinel::AutomaticSuccess)
    }

    pub fn label(self) -> &'static str {
        match self {
            RollSentinel::Impossible => "Impossible",
            RollSentinel::AutomaticFail => "Automatic Failure",
            RollSentinel::AutomaticSuccess => "Automatic Success",
            RollSentinel::CheckFalse => "No Check",
        }
    }
}

/// Either a plain number or a sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierValue {
    Numeric(i32),
    Sentinel(RollSentinel),
}

impl From<i32> for ModifierValue {
    fn from(value: i32) -> Self {
        ModifierValue::Numeric(value)
    }
}

impl From<RollSentinel> for ModifierValue {
    fn from(sentinel: RollSentinel) -> Self {
        ModifierValue::Sentinel(sentinel)
    }
}

/// Which part of the computation contributed a modifier
///
/// Lets callers strip a whole category (swarm retargeting strips
/// `TargetMovement`) without matching on descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ModifierKind {
    #[default]
    General,
    Skill,
    AttackerMovement,
    TargetMovement,
    Range,
    Terrain,
    Electronic,
    Equipment,
    TargetState,
}

/// One entry in a to-hit computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    pub value: ModifierValue,
    pub desc: String,
    pub kind: ModifierKind,
}

impl Modifier {
    pub fn new(value: impl Into<ModifierValue>, desc: impl Into<String>) -> Self {
        Self { value: value.into(), desc: desc.into(), kind: ModifierKind::General }
    }

    pub fn with_kind(mut self, kind: ModifierKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn sentinel(&self) -> Option<RollSentinel> {
        match self.value {
            ModifierValue::Sentinel(s) => Some(s),
            ModifierValue::Numeric(_) => None,
        }
    }

    pub fn numeric(&self) -> Option<i32> {
        match self.value {
            ModifierValue::Numeric(v) => Some(v),
            ModifierValue::Sentinel(_) => None,
        }
    }
}
