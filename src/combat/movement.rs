//! Movement contributions to a to-hit roll

use crate::combat::constants::*;
use crate::combat::unit::{Combatant, MovementMode};
use crate::roll::modifier::ModifierKind;
use crate::roll::target_roll::TargetRoll;

/// Base modifier for the distance a target moved this turn
pub fn distance_modifier(hexes_moved: u32) -> i32 {
    TARGET_MOVEMENT_TABLE
        .iter()
        .find(|(max, _)| hexes_moved <= *max)
        .map_or(TARGET_MOVEMENT_CAP, |(_, modifier)| *modifier)
}

/// Attacker movement modifier. Sprinting forbids firing altogether.
pub fn attacker_movement_modifier(mode: MovementMode) -> TargetRoll {
    let mut roll = TargetRoll::new();
    match mode {
        MovementMode::Stationary => {}
        MovementMode::Walked => {
            roll.add_kind(ATTACKER_WALKED_MODIFIER, "attacker walked", ModifierKind::AttackerMovement)
        }
        MovementMode::Ran => {
            roll.add_kind(ATTACKER_RAN_MODIFIER, "attacker ran", ModifierKind::AttackerMovement)
        }
        MovementMode::Jumped => {
            roll.add_kind(ATTACKER_JUMPED_MODIFIER, "attacker jumped", ModifierKind::AttackerMovement)
        }
        MovementMode::Sprinted => {
            roll = TargetRoll::impossible("attacker sprinted");
        }
    }
    roll
}

/// Target movement modifier.
///
/// Grounded targets use the distance table alone. Jumping and airborne
/// targets add a flat +1 on top, so they are harder to hit even after
/// moving only a hex or two.
pub fn target_movement_modifier(hexes_moved: u32, jumped: bool, airborne: bool) -> TargetRoll {
    let mut roll = TargetRoll::new();
    let base = distance_modifier(hexes_moved);
    if base != 0 {
        roll.add_kind(base, format!("target moved {} hexes", hexes_moved), ModifierKind::TargetMovement);
    }
    if jumped {
        roll.add_kind(TARGET_JUMPED_MODIFIER, "target jumped", ModifierKind::TargetMovement);
    }
    if airborne {
        roll.add_kind(TARGET_AIRBORNE_MODIFIER, "target is airborne VTOL", ModifierKind::TargetMovement);
    }
    roll
}

/// Target movement modifier for a unit snapshot
pub fn target_movement_for(target: &Combatant) -> TargetRoll {
    target_movement_modifier(
        target.hexes_moved,
        target.movement == MovementMode::Jumped,
        target.is_airborne(),
    )
}
