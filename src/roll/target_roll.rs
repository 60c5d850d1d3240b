//! Modifier aggregate for a single to-hit or check computation
//!
//! A `TargetRoll` keeps every modifier in insertion order and a derived
//! state: either an accumulating numeric sum or locked on a sentinel.
//! Numeric modifiers added while locked are recorded but do not move the
//! value. The state is always the fold of the recorded history, so removing
//! entries is done by replaying what remains.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::roll::modifier::{Modifier, ModifierKind, ModifierValue, RollSentinel};

/// Derived aggregate state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollState {
    /// Sum of numeric modifiers (empty rolls accumulate to 0)
    Accumulating { total: i32 },
    /// Locked on a sentinel established by `modifiers[entry]`
    Locked { sentinel: RollSentinel, entry: usize },
}

impl Default for RollState {
    fn default() -> Self {
        RollState::Accumulating { total: 0 }
    }
}

impl RollState {
    /// Transition on one appended modifier.
    ///
    /// CheckFalse overrides any state and is never displaced. Other
    /// sentinels replace whatever sentinel came before.
    fn apply(self, entry: usize, value: ModifierValue) -> Self {
        match (self, value) {
            (_, ModifierValue::Sentinel(RollSentinel::CheckFalse)) => {
                RollState::Locked { sentinel: RollSentinel::CheckFalse, entry }
            }
            (RollState::Locked { sentinel: RollSentinel::CheckFalse, .. }, _) => self,
            (_, ModifierValue::Sentinel(sentinel)) => RollState::Locked { sentinel, entry },
            (RollState::Accumulating { total }, ModifierValue::Numeric(v)) => {
                RollState::Accumulating { total: total.saturating_add(v) }
            }
            (RollState::Locked { .. }, ModifierValue::Numeric(_)) => self,
        }
    }
}

/// Ordered modifier list plus its aggregate state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRoll {
    modifiers: Vec<Modifier>,
    state: RollState,
}

impl TargetRoll {
    pub fn new() -> Self {
        Self::default()
    }

    /// A roll starting from a single numeric base
    pub fn with_base(value: i32, desc: impl Into<String>) -> Self {
        let mut roll = Self::new();
        roll.add_modifier(value, desc);
        roll
    }

    pub fn impossible(desc: impl Into<String>) -> Self {
        Self::from_sentinel(RollSentinel::Impossible, desc)
    }

    pub fn automatic_success(desc: impl Into<String>) -> Self {
        Self::from_sentinel(RollSentinel::AutomaticSuccess, desc)
    }

    pub fn automatic_fail(desc: impl Into<String>) -> Self {
        Self::from_sentinel(RollSentinel::AutomaticFail, desc)
    }

    pub fn check_false(desc: impl Into<String>) -> Self {
        Self::from_sentinel(RollSentinel::CheckFalse, desc)
    }

    fn from_sentinel(sentinel: RollSentinel, desc: impl Into<String>) -> Self {
        let mut roll = Self::new();
        roll.add_modifier(sentinel, desc);
        roll
    }

    /// Rebuild a roll from a modifier history
    pub fn from_modifiers(modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        let mut roll = Self::new();
        for modifier in modifiers {
            roll.add(modifier);
        }
        roll
    }

    /// Append a numeric value or sentinel with a general kind
    pub fn add_modifier(&mut self, value: impl Into<ModifierValue>, desc: impl Into<String>) {
        self.add(Modifier::new(value, desc));
    }

    /// Append a numeric value tagged with the part of the computation it came from
    pub fn add_kind(&mut self, value: i32, desc: impl Into<String>, kind: ModifierKind) {
        self.add(Modifier::new(value, desc).with_kind(kind));
    }

    pub fn add(&mut self, modifier: Modifier) {
        let entry = self.modifiers.len();
        self.state = self.state.apply(entry, modifier.value);
        self.modifiers.push(modifier);
    }

    /// Append every modifier of `other`, in order
    pub fn append(&mut self, other: TargetRoll) {
        for modifier in other.modifiers {
            self.add(modifier);
        }
    }

    /// Effective value: the sentinel's designated value when locked, else the sum
    pub fn value(&self) -> i32 {
        match self.state {
            RollState::Accumulating { total } => total,
            RollState::Locked { sentinel, .. } => sentinel.value(),
        }
    }

    pub fn state(&self) -> RollState {
        self.state
    }

    pub fn sentinel(&self) -> Option<RollSentinel> {
        match self.state {
            RollState::Locked { sentinel, .. } => Some(sentinel),
            RollState::Accumulating { .. } => None,
        }
    }

    pub fn needs_roll(&self) -> bool {
        self.sentinel().is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Keep only the modifiers matching `keep`, recomputing the state
    pub fn retain(self, keep: impl Fn(&Modifier) -> bool) -> Self {
        Self::from_modifiers(self.modifiers.into_iter().filter(|m| keep(m)))
    }

    /// Drop every modifier contributed by `kind`
    pub fn without_kind(self, kind: ModifierKind) -> Self {
        self.retain(|m| m.kind != kind)
    }

    /// Strip automatic success/failure sentinels.
    ///
    /// With `clear_impossible_and_check_false` the Impossible and CheckFalse
    /// sentinels go too, which always returns the roll to plain summation.
    pub fn remove_autos(self, clear_impossible_and_check_false: bool) -> Self {
        self.retain(|m| match m.sentinel() {
            Some(s) if s.is_automatic() => false,
            Some(_) => !clear_impossible_and_check_false,
            None => true,
        })
    }

    /// Description of the roll.
    ///
    /// When locked, the description of the entry that set the sentinel.
    /// Otherwise the full chain, e.g. `+4 (gunnery skill) + 1 (walked) - 1 (guidance)`,
    /// where the first entry always carries its sign.
    pub fn desc(&self) -> String {
        if let RollState::Locked { entry, .. } = self.state {
            return self.modifiers[entry].desc.clone();
        }
        let mut out = String::new();
        for (i, (value, desc)) in self
            .modifiers
            .iter()
            .filter_map(|m| m.numeric().map(|v| (v, &m.desc)))
            .enumerate()
        {
            if i == 0 {
                out.push_str(&format!("{:+} ({})", value, desc));
            } else if value < 0 {
                out.push_str(&format!(" - {} ({})", -value, desc));
            } else {
                out.push_str(&format!(" + {} ({})", value, desc));
            }
        }
        out
    }

    /// The value as shown to players: the number, or the sentinel's label
    pub fn value_as_string(&self) -> String {
        match self.state {
            RollState::Accumulating { total } => total.to_string(),
            RollState::Locked { sentinel, .. } => sentinel.label().to_string(),
        }
    }
}

impl fmt::Display for TargetRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.value_as_string(), self.desc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_sentinels_then_check_false() -> TargetRoll {
        let mut roll = TargetRoll::new();
        roll.add_modifier(RollSentinel::Impossible, "impossible");
        roll.add_modifier(RollSentinel::AutomaticSuccess, "auto success");
        roll.add_modifier(RollSentinel::AutomaticFail, "auto fail");
        roll.add_modifier(RollSentinel::CheckFalse, "no check");
        roll
    }

    #[test]
    fn test_basic_sum() {
        let mut roll = TargetRoll::new();
        roll.add_modifier(-2, "a");
        roll.add_modifier(2, "b");
        roll.add_modifier(1, "c");
        roll.add_modifier(-1, "d");
        assert_eq!(roll.value(), 0);
        assert!(roll.needs_roll());
    }

    #[test]
    fn test_empty_roll_accumulates_zero() {
        let roll = TargetRoll::new();
        assert!(roll.is_empty());
        assert_eq!(roll.value(), 0);
        assert!(roll.needs_roll());
        assert_eq!(roll.desc(), "");
    }

    #[test]
    fn test_check_false_added_last_wins() {
        let roll = all_sentinels_then_check_false();
        assert!(!roll.needs_roll());
        assert_eq!(roll.value(), RollSentinel::CheckFalse.value());
        assert_eq!(roll.desc(), "no check");
    }

    #[test]
    fn test_check_false_added_first_still_wins() {
        let mut roll = TargetRoll::new();
        roll.add_modifier(RollSentinel::CheckFalse, "no check");
        roll.add_modifier(RollSentinel::Impossible, "impossible");
        roll.add_modifier(RollSentinel::AutomaticSuccess, "auto success");
        roll.add_modifier(RollSentinel::AutomaticFail, "auto fail");
        assert!(!roll.needs_roll());
        assert_eq!(roll.value(), RollSentinel::CheckFalse.value());
        assert_eq!(roll.desc(), "no check");
    }

    #[test]
    fn test_last_plain_sentinel_wins() {
        let mut roll = TargetRoll::new();
        roll.add_modifier(RollSentinel::Impossible, "impossible");
        roll.add_modifier(RollSentinel::AutomaticSuccess, "auto success");
        assert_eq!(roll.sentinel(), Some(RollSentinel::AutomaticSuccess));

        let mut roll = TargetRoll::new();
        roll.add_modifier(RollSentinel::AutomaticSuccess, "auto success");
        roll.add_modifier(RollSentinel::Impossible, "impossible");
        assert_eq!(roll.sentinel(), Some(RollSentinel::Impossible));
    }

    #[test]
    fn test_remove_autos_keeps_impossible() {
        let mut roll = TargetRoll::new();
        roll.add_modifier(4, "gunnery");
        roll.add_modifier(RollSentinel::Impossible, "impossible");
        roll.add_modifier(RollSentinel::AutomaticSuccess, "auto success");
        roll.add_modifier(RollSentinel::AutomaticFail, "auto fail");

        let stripped = roll.clone().remove_autos(false);
        assert!(!stripped.needs_roll());
        assert_eq!(stripped.sentinel(), Some(RollSentinel::Impossible));

        let cleared = roll.remove_autos(true);
        assert!(cleared.needs_roll());
        assert_eq!(cleared.value(), 4);
    }

    #[test]
    fn test_remove_autos_on_full_sentinel_sequence() {
        let roll = all_sentinels_then_check_false();
        assert!(!roll.clone().remove_autos(false).needs_roll());
        let cleared = roll.remove_autos(true);
        assert!(cleared.needs_roll());
        assert_eq!(cleared.value(), 0);
        assert!(cleared.is_empty());
    }

    #[test]
    fn test_remove_autos_restores_sum() {
        let mut roll = TargetRoll::new();
        roll.add_modifier(3, "a");
        roll.add_modifier(RollSentinel::AutomaticSuccess, "adjacent building");
        roll.add_modifier(2, "b");
        assert_eq!(roll.value(), RollSentinel::AutomaticSuccess.value());

        let restored = roll.remove_autos(false);
        assert!(restored.needs_roll());
        assert_eq!(restored.value(), 5);
    }

    #[test]
    fn test_numeric_after_impossible_is_recorded_not_counted() {
        let mut roll = TargetRoll::impossible("out of range");
        roll.add_modifier(3, "range");
        assert_eq!(roll.value(), RollSentinel::Impossible.value());
        assert_eq!(roll.modifiers().len(), 2);
        assert_eq!(roll.desc(), "out of range");
    }

    #[test]
    fn test_value_as_string_signs() {
        let mut negative = TargetRoll::new();
        for (v, d) in [(-1, "a"), (2, "b"), (-3, "c"), (0, "d")] {
            negative.add_modifier(v, d);
        }
        assert_eq!(negative.value(), -2);
        assert_eq!(negative.value_as_string(), "-2");

        let mut positive = TargetRoll::new();
        for (v, d) in [(1, "a"), (-2, "b"), (3, "c"), (0, "d")] {
            positive.add_modifier(v, d);
        }
        assert_eq!(positive.value(), 2);
        assert_eq!(positive.value_as_string(), "2");
    }

    #[test]
    fn test_desc_chain_leading_sign() {
        let mut roll = TargetRoll::new();
        roll.add_modifier(1, "a");
        roll.add_modifier(-2, "b");
        roll.add_modifier(0, "c");
        assert_eq!(roll.desc(), "+1 (a) - 2 (b) + 0 (c)");
    }

    #[test]
    fn test_locked_value_as_string_is_label() {
        assert_eq!(TargetRoll::impossible("x").value_as_string(), "Impossible");
        assert_eq!(TargetRoll::automatic_success("x").value_as_string(), "Automatic Success");
    }

    #[test]
    fn test_without_kind_strips_only_that_kind() {
        let mut roll = TargetRoll::new();
        roll.add_kind(4, "gunnery", ModifierKind::Skill);
        roll.add_kind(2, "target moved 5 hexes", ModifierKind::TargetMovement);
        roll.add_kind(2, "medium range", ModifierKind::Range);
        roll.add_kind(1, "target jumped", ModifierKind::TargetMovement);

        let stripped = roll.without_kind(ModifierKind::TargetMovement);
        assert_eq!(stripped.value(), 6);
        assert_eq!(stripped.modifiers().len(), 2);
        assert!(stripped
            .modifiers()
            .iter()
            .all(|m| m.kind != ModifierKind::TargetMovement));
    }

    #[test]
    fn test_append_preserves_order_and_locks() {
        let mut roll = TargetRoll::with_base(4, "gunnery");
        let mut other = TargetRoll::new();
        other.add_modifier(1, "walked");
        other.add_modifier(RollSentinel::Impossible, "no line of sight");
        roll.append(other);
        assert_eq!(roll.modifiers().len(), 3);
        assert_eq!(roll.sentinel(), Some(RollSentinel::Impossible));
    }

    #[test]
    fn test_display() {
        let roll = TargetRoll::with_base(4, "gunnery skill");
        assert_eq!(roll.to_string(), "4 [+4 (gunnery skill)]");
    }
}
