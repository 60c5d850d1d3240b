//! Hexfire - hex-grid wargame combat resolution
//!
//! Computes to-hit numbers from geometry, movement, terrain and equipment,
//! and interprets dice against them. Callers own all game state and pass it
//! in by reference; nothing here is global.

pub mod board;
pub mod combat;
pub mod core;
pub mod effects;
pub mod equipment;
pub mod roll;
pub mod scenario;
pub mod stats;

pub use crate::board::{is_inside_arc, Board, Coords, Facing, FacingArc, Terrain};
pub use crate::combat::{
    adjust_for_swarm, compute_to_hit, interpret_roll, resolve_infantry_combat, CombatContext,
    Combatant, InfantryCombatResult, Target,
};
pub use crate::core::{CombatError, GameOptions, Result};
pub use crate::effects::{FieldTracker, TemporaryEcmField};
pub use crate::equipment::{can_switch_to_ammo, is_ammo_valid, EquipmentCatalog};
pub use crate::roll::{Dice, TargetRoll};
pub use crate::scenario::Scenario;
