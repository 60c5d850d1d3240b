//! Derived unit statistics

pub mod battle_value;

pub use battle_value::{BattleValueNetwork, NetworkKind, NetworkMember};
