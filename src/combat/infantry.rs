//! Infantry-versus-infantry combat results
//!
//! Infantry assaults (boarding actions, building clearance) resolve on a
//! single 2d6 roll adjusted by the force ratio. The result is categorical;
//! each category fixes how casualties are split between the two sides.

use serde::{Deserialize, Serialize};

/// Category of an infantry engagement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfantryOutcome {
    /// Defender wiped out at no cost
    Eliminated,
    /// Attacker thrown back
    Repulsed,
    /// Attacker gains partial control of the contested area
    Partial { defender_eliminated: bool },
    /// Both sides bleed
    Casualties,
}

/// Outcome plus casualty percentages for each side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfantryCombatResult {
    pub outcome: InfantryOutcome,
    pub attacker_casualties: u32,
    pub defender_casualties: u32,
}

impl InfantryCombatResult {
    pub fn eliminated() -> Self {
        Self {
            outcome: InfantryOutcome::Eliminated,
            attacker_casualties: 0,
            defender_casualties: 100,
        }
    }

    /// Attacker falls back having suffered half the given casualties
    pub fn repulsed(attacker_casualties: u32) -> Self {
        Self {
            outcome: InfantryOutcome::Repulsed,
            attacker_casualties: attacker_casualties / 2,
            defender_casualties: 0,
        }
    }

    /// Defender either wiped out or takes half the attacker's losses
    pub fn partial(attacker_casualties: u32, defender_eliminated: bool) -> Self {
        let defender_casualties =
            if defender_eliminated { 100 } else { attacker_casualties / 2 };
        Self {
            outcome: InfantryOutcome::Partial { defender_eliminated },
            attacker_casualties,
            defender_casualties,
        }
    }

    pub fn casualties(attacker_casualties: u32, defender_casualties: u32) -> Self {
        Self { outcome: InfantryOutcome::Casualties, attacker_casualties, defender_casualties }
    }

    pub fn is_defender_eliminated(&self) -> bool {
        self.defender_casualties >= 100
    }

    pub fn is_attacker_repulsed(&self) -> bool {
        self.outcome == InfantryOutcome::Repulsed
    }

    pub fn is_partial_control(&self) -> bool {
        matches!(self.outcome, InfantryOutcome::Partial { .. })
    }
}

/// Roll modifier from the attacker-to-defender trooper ratio
pub fn force_ratio_modifier(attackers: u32, defenders: u32) -> i32 {
    let (a, d) = (attackers as u64, defenders as u64);
    if a >= 3 * d {
        3
    } else if a >= 2 * d {
        2
    } else if 2 * a >= 3 * d {
        1
    } else if a >= d {
        0
    } else if 2 * a >= d {
        -1
    } else {
        -2
    }
}

/// Resolve an infantry assault from a 2d6 roll.
///
/// `modifier` carries situational adjustments (fortified defenders, elite
/// troops) on top of the force ratio.
pub fn resolve_infantry_combat(
    attackers: u32,
    defenders: u32,
    roll: u32,
    modifier: i32,
) -> InfantryCombatResult {
    if defenders == 0 {
        return InfantryCombatResult::eliminated();
    }
    if attackers == 0 {
        return InfantryCombatResult::repulsed(0);
    }

    let total = roll as i32 + force_ratio_modifier(attackers, defenders) + modifier;
    let result = match total {
        i32::MIN..=3 => InfantryCombatResult::repulsed(60),
        4..=5 => InfantryCombatResult::repulsed(40),
        6..=7 => InfantryCombatResult::casualties(30, 30),
        8..=9 => InfantryCombatResult::partial(20, false),
        10..=11 => InfantryCombatResult::partial(10, true),
        _ => InfantryCombatResult::eliminated(),
    };
    tracing::debug!(attackers, defenders, roll, total, outcome = ?result.outcome, "Infantry combat");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eliminated() {
        let r = InfantryCombatResult::eliminated();
        assert_eq!((r.attacker_casualties, r.defender_casualties), (0, 100));
        assert!(r.is_defender_eliminated());
        assert!(!r.is_attacker_repulsed());
        assert!(!r.is_partial_control());
    }

    #[test]
    fn test_repulsed_halves_attacker_losses() {
        let r = InfantryCombatResult::repulsed(30);
        assert_eq!((r.attacker_casualties, r.defender_casualties), (15, 0));
        assert!(r.is_attacker_repulsed());
        assert!(!r.is_defender_eliminated());
        assert!(!r.is_partial_control());
    }

    #[test]
    fn test_partial_variants() {
        let r = InfantryCombatResult::partial(25, true);
        assert_eq!((r.attacker_casualties, r.defender_casualties), (25, 100));
        assert!(r.is_partial_control());
        assert!(r.is_defender_eliminated());

        let r = InfantryCombatResult::partial(40, false);
        assert_eq!((r.attacker_casualties, r.defender_casualties), (40, 20));
        assert!(r.is_partial_control());
        assert!(!r.is_defender_eliminated());
        assert!(!r.is_attacker_repulsed());
    }

    #[test]
    fn test_casualties_pass_through() {
        let r = InfantryCombatResult::casualties(45, 55);
        assert_eq!((r.attacker_casualties, r.defender_casualties), (45, 55));
        assert!(!r.is_defender_eliminated());
        assert!(!r.is_attacker_repulsed());
        assert!(!r.is_partial_control());
    }

    #[test]
    fn test_force_ratio_brackets() {
        assert_eq!(force_ratio_modifier(30, 10), 3);
        assert_eq!(force_ratio_modifier(20, 10), 2);
        assert_eq!(force_ratio_modifier(15, 10), 1);
        assert_eq!(force_ratio_modifier(10, 10), 0);
        assert_eq!(force_ratio_modifier(5, 10), -1);
        assert_eq!(force_ratio_modifier(4, 10), -2);
    }

    #[test]
    fn test_resolution_table() {
        // Even odds: the roll alone decides
        assert!(resolve_infantry_combat(10, 10, 2, 0).is_attacker_repulsed());
        assert_eq!(resolve_infantry_combat(10, 10, 7, 0), InfantryCombatResult::casualties(30, 30));
        assert_eq!(resolve_infantry_combat(10, 10, 9, 0), InfantryCombatResult::partial(20, false));
        assert!(resolve_infantry_combat(10, 10, 12, 0).is_defender_eliminated());
        // Overwhelming numbers turn a middling roll into a rout
        assert_eq!(resolve_infantry_combat(30, 10, 9, 0), InfantryCombatResult::eliminated());
        // Situational modifier applies on top
        assert!(resolve_infantry_combat(10, 10, 7, -3).is_attacker_repulsed());
    }

    #[test]
    fn test_empty_sides() {
        assert_eq!(resolve_infantry_combat(10, 0, 2, 0), InfantryCombatResult::eliminated());
        assert!(resolve_infantry_combat(0, 10, 12, 0).is_attacker_repulsed());
    }
}
