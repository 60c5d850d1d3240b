//! To-hit modifier aggregation and dice

pub mod dice;
pub mod modifier;
pub mod target_roll;

pub use dice::{roll_2d6, Dice};
pub use modifier::{Modifier, ModifierKind, ModifierValue, RollSentinel};
pub use target_roll::{RollState, TargetRoll};
