//! To-hit resolution for a single weapon attack
//!
//! `compute_to_hit` checks preconditions (equipment legality, ammo, arc,
//! range, line of sight)
//! and short-circuits with a sentinel roll when the shot cannot be taken.
//! Otherwise it builds the modifier chain in a fixed order: gunnery,
//! attacker movement, target movement and state, range, terrain, equipment.
//! The function never mutates its inputs; the returned roll is owned by the
//! caller.

use crate::board::map::Board;
use crate::combat::constants::*;
use crate::combat::movement::{attacker_movement_modifier, target_movement_for};
use crate::combat::unit::{Combatant, MovementMode, Target};
use crate::core::config::GameOptions;
use crate::core::types::{Phase, Round, Teams};
use crate::effects::ecm::FieldTracker;
use crate::equipment::ammo::{is_ammo_valid, WeaponMount};
use crate::roll::modifier::{ModifierKind, RollSentinel};
use crate::roll::target_roll::TargetRoll;

/// Shared, read-only state every attack in a phase resolves against
#[derive(Debug, Clone, Copy)]
pub struct CombatContext<'a> {
    pub board: &'a Board,
    pub fields: &'a FieldTracker,
    pub options: &'a GameOptions,
    pub teams: &'a Teams,
    pub round: Round,
    pub phase: Phase,
}

impl<'a> CombatContext<'a> {
    pub fn new(
        board: &'a Board,
        fields: &'a FieldTracker,
        options: &'a GameOptions,
        teams: &'a Teams,
    ) -> Self {
        Self { board, fields, options, teams, round: 1, phase: Phase::Firing }
    }

    pub fn at(mut self, round: Round, phase: Phase) -> Self {
        self.round = round;
        self.phase = phase;
        self
    }

    /// Is `attacker` or `target` inside a live ECM field hostile to `attacker`?
    fn ecm_hostile(&self, attacker: &Combatant, target: &Target<'_>) -> bool {
        let is_enemy = |owner, player| self.teams.is_enemy(owner, player);
        [attacker.position, target.position()].iter().any(|hex| {
            self.fields
                .is_hostile_at(hex, attacker.owner, self.round, self.phase, is_enemy)
        })
    }
}

/// Compute the to-hit roll for `attacker` firing `mount` at `target`
pub fn compute_to_hit(
    ctx: &CombatContext<'_>,
    attacker: &Combatant,
    target: Target<'_>,
    mount: &WeaponMount,
) -> TargetRoll {
    let weapon = &mount.weapon;

    if attacker.destroyed {
        return TargetRoll::impossible("attacker destroyed");
    }
    if mount.destroyed {
        return TargetRoll::impossible("weapon destroyed");
    }
    if !weapon.is_available(ctx.options) {
        return TargetRoll::impossible("weapon unavailable under game options");
    }
    if mount.ammo.as_ref().map_or(false, |bin| !bin.ammo.is_available(ctx.options)) {
        return TargetRoll::impossible("ammunition unavailable under game options");
    }
    if weapon.uses_ammo() && !is_ammo_valid(mount.ammo.as_ref(), Some(&**weapon)) {
        tracing::warn!(
            attacker = %attacker.name,
            weapon = %weapon.name,
            "Rejected attack: no usable ammunition"
        );
        return TargetRoll::impossible("no usable ammunition");
    }
    if let Target::Unit(unit) = target {
        if unit.id == attacker.id {
            return TargetRoll::impossible("cannot target self");
        }
        if unit.destroyed {
            return TargetRoll::impossible("target already destroyed");
        }
    }
    if attacker.movement == MovementMode::Sprinted {
        return TargetRoll::impossible("attacker sprinted");
    }

    let target_pos = target.position();
    let distance = attacker.position.distance(&target_pos);
    let Some(bracket) = weapon.ranges.bracket(distance, ctx.options.extreme_range) else {
        return TargetRoll::impossible("target out of range");
    };
    if !mount.arc.contains(attacker.position, attacker.facing, target_pos) {
        return TargetRoll::impossible("target not in arc");
    }

    let mut los = ctx.board.line_of_sight(
        attacker.position,
        attacker.height(),
        target_pos,
        target.height(),
    );
    let indirect = los.blocked && weapon.indirect;
    if los.blocked && !indirect {
        return TargetRoll::impossible("no line of sight");
    }

    if distance <= 1 && matches!(target, Target::Building(_) | Target::Hex(_)) {
        return TargetRoll::automatic_success("targeting adjacent building or hex");
    }

    let mut roll = TargetRoll::new();
    roll.add_kind(attacker.gunnery, "gunnery skill", ModifierKind::Skill);
    roll.append(attacker_movement_modifier(attacker.movement));

    match target {
        Target::Unit(unit) => {
            roll.append(target_movement_for(unit));
            let state = ModifierKind::TargetState;
            if unit.immobile {
                roll.add_kind(IMMOBILE_TARGET_MODIFIER, "target immobile", state);
            }
            if unit.prone && distance <= 1 {
                roll.add_kind(PRONE_ADJACENT_MODIFIER, "target prone and adjacent", state);
            } else if unit.prone {
                roll.add_kind(PRONE_AT_RANGE_MODIFIER, "target prone", state);
            }
        }
        Target::Hex(_) | Target::Building(_) => {
            roll.add_kind(
                IMMOBILE_TARGET_MODIFIER,
                "target immobile",
                ModifierKind::TargetState,
            );
            los.partial_cover = false;
            los.target_terrain = Default::default();
        }
    }

    roll.add_kind(bracket.modifier(), bracket.label(), ModifierKind::Range);
    let minimum = weapon.ranges.minimum_range_penalty(distance);
    if minimum > 0 {
        roll.add_kind(minimum, "minimum range", ModifierKind::Range);
    }

    if indirect {
        roll.add_kind(INDIRECT_FIRE_MODIFIER, "indirect fire", ModifierKind::Terrain);
    } else {
        roll.append(los.modifiers());
    }

    if weapon.guided {
        if ctx.options.ecm_negates_guidance && ctx.ecm_hostile(attacker, &target) {
            tracing::trace!(weapon = %weapon.name, "Guidance negated by hostile ECM");
            roll.add_kind(0, "guidance negated by ECM", ModifierKind::Electronic);
        } else {
            roll.add_kind(GUIDANCE_MODIFIER, "guidance system", ModifierKind::Equipment);
        }
    }

    if roll.needs_roll() && roll.value() > MAX_2D6_ROLL {
        roll.add_modifier(RollSentinel::Impossible, "target number above 12");
    }

    tracing::debug!(
        attacker = %attacker.name,
        target = %target.label(),
        weapon = %weapon.name,
        distance,
        value = %roll.value_as_string(),
        "Resolved to-hit"
    );
    roll
}

/// Re-aim a swarm attack at a new target.
///
/// Every target-movement entry of the original roll is stripped and the new
/// target's movement modifiers are appended; the rest of the chain stays.
pub fn adjust_for_swarm(roll: TargetRoll, new_target: &Combatant) -> TargetRoll {
    let mut adjusted = roll.without_kind(ModifierKind::TargetMovement);
    adjusted.append(target_movement_for(new_target));
    adjusted
}
