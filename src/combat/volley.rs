//! Resolving a phase's worth of declared attacks at once
//!
//! Every attack reads the same context and owns its own roll, so large
//! volleys are split across the rayon pool.

use rayon::prelude::*;

use crate::combat::constants::PARALLEL_VOLLEY_THRESHOLD;
use crate::combat::to_hit::{compute_to_hit, CombatContext};
use crate::combat::unit::{Combatant, Target};
use crate::roll::target_roll::TargetRoll;

/// One declared weapon attack
#[derive(Debug, Clone, Copy)]
pub struct AttackDeclaration<'a> {
    pub attacker: &'a Combatant,
    pub target: Target<'a>,
    /// Index into the attacker's weapon list
    pub weapon: usize,
}

fn resolve_one(ctx: &CombatContext<'_>, attack: &AttackDeclaration<'_>) -> TargetRoll {
    match attack.attacker.weapon(attack.weapon) {
        Some(mount) => compute_to_hit(ctx, attack.attacker, attack.target, mount),
        None => TargetRoll::impossible("no such weapon"),
    }
}

/// To-hit rolls for every attack, in declaration order
pub fn resolve_volley(ctx: &CombatContext<'_>, attacks: &[AttackDeclaration<'_>]) -> Vec<TargetRoll> {
    if attacks.len() < PARALLEL_VOLLEY_THRESHOLD {
        attacks.iter().map(|a| resolve_one(ctx, a)).collect()
    } else {
        tracing::debug!(attacks = attacks.len(), round = ctx.round, "Resolving volley in parallel");
        attacks.par_iter().map(|a| resolve_one(ctx, a)).collect()
    }
}
