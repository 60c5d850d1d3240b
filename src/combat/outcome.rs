//! Turning a to-hit roll and dice into an attack result

use serde::{Deserialize, Serialize};

use crate::core::error::{CombatError, Result};
use crate::roll::modifier::RollSentinel;
use crate::roll::target_roll::TargetRoll;

/// What happened when the attack was rolled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackOutcome {
    Hit,
    Miss,
    AutomaticHit,
    AutomaticMiss,
    /// The shot could not be taken at all
    Impossible,
    /// No check was required
    NoCheck,
}

impl AttackOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, AttackOutcome::Hit | AttackOutcome::AutomaticHit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackResult {
    pub outcome: AttackOutcome,
    /// Number needed on 2d6, when a roll was required
    pub target_number: Option<i32>,
    pub roll: Option<u32>,
    /// Roll minus target number; negative on a miss
    pub margin: Option<i32>,
    pub desc: String,
}

impl AttackResult {
    pub fn is_hit(&self) -> bool {
        self.outcome.is_hit()
    }

    fn decided(outcome: AttackOutcome, to_hit: &TargetRoll) -> Self {
        Self { outcome, target_number: None, roll: None, margin: None, desc: to_hit.desc() }
    }
}

/// Interpret a to-hit roll.
///
/// Sentinel rolls are decided without dice. A roll that needs dice but gets
/// none is a caller error.
pub fn interpret_roll(to_hit: &TargetRoll, dice: Option<u32>) -> Result<AttackResult> {
    if let Some(sentinel) = to_hit.sentinel() {
        let outcome = match sentinel {
            RollSentinel::Impossible => AttackOutcome::Impossible,
            RollSentinel::AutomaticSuccess => AttackOutcome::AutomaticHit,
            RollSentinel::AutomaticFail => AttackOutcome::AutomaticMiss,
            RollSentinel::CheckFalse => AttackOutcome::NoCheck,
        };
        return Ok(AttackResult::decided(outcome, to_hit));
    }

    let rolled = dice.ok_or(CombatError::MissingRoll)?;
    let target_number = to_hit.value();
    let margin = rolled as i32 - target_number;
    let outcome = if margin >= 0 { AttackOutcome::Hit } else { AttackOutcome::Miss };
    Ok(AttackResult {
        outcome,
        target_number: Some(target_number),
        roll: Some(rolled),
        margin: Some(margin),
        desc: to_hit.desc(),
    })
}
