//! Attack resolution: to-hit numbers, outcomes and special attacks

pub mod artillery;
pub mod constants;
pub mod infantry;
pub mod movement;
pub mod outcome;
pub mod to_hit;
pub mod unit;
pub mod volley;

pub use artillery::{lead_for, predict_artillery_lead};
pub use infantry::{resolve_infantry_combat, InfantryCombatResult, InfantryOutcome};
pub use movement::{attacker_movement_modifier, target_movement_for, target_movement_modifier};
pub use outcome::{interpret_roll, AttackOutcome, AttackResult};
pub use to_hit::{adjust_for_swarm, compute_to_hit, CombatContext};
pub use unit::{Combatant, MovementMode, Target, UnitKind};
pub use volley::{resolve_volley, AttackDeclaration};
