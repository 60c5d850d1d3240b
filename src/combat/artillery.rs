//! Leading moving targets with artillery
//!
//! The predicted impact point extrapolates the target's last move along
//! its direction of travel. Homing rounds are pulled back toward the
//! shooter since their terminal guidance corrects for overshoot.

use crate::board::hex::Coords;
use crate::combat::unit::Combatant;

/// Predict where a moving target will be when the shot lands.
///
/// `speed` is the hexes the target moved last turn and `flight_time` the
/// hexes it can cover before impact; the lead is the smaller of the two.
/// A target that did not change hex is predicted in place.
pub fn predict_artillery_lead(
    shooter: Coords,
    current: Coords,
    previous: Coords,
    speed: u32,
    flight_time: u32,
    homing: bool,
) -> Coords {
    let lead = speed.min(flight_time);
    if lead == 0 || current == previous {
        return current;
    }

    let heading = previous.direction(&current);
    let predicted = current.translated(heading, lead);
    if !homing {
        return predicted;
    }

    let pull = (lead / 2).max(1) as usize;
    let line = predicted.line_to(&shooter);
    line[pull.min(line.len() - 1)]
}

/// Lead prediction for a target snapshot
pub fn lead_for(shooter: &Combatant, target: &Combatant, flight_time: u32, homing: bool) -> Coords {
    predict_artillery_lead(
        shooter.position,
        target.position,
        target.previous_position.unwrap_or(target.position),
        target.hexes_moved,
        flight_time,
        homing,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::hex::Facing;
    use crate::combat::unit::{MovementMode, UnitKind};
    use crate::core::types::PlayerId;

    #[test]
    fn test_stationary_target_predicts_own_position() {
        let shooter = Coords::new(10, 30);
        let target = Coords::new(10, 10);
        assert_eq!(predict_artillery_lead(shooter, target, target, 0, 8, false), target);
        assert_eq!(predict_artillery_lead(shooter, target, target, 6, 8, true), target);
    }

    #[test]
    fn test_full_lead_along_heading() {
        let shooter = Coords::new(10, 30);
        let previous = Coords::new(10, 10);
        let current = Coords::new(10, 9);
        let predicted = predict_artillery_lead(shooter, current, previous, 8, 8, false);
        assert_eq!(predicted, Coords::new(10, 1));
        assert_eq!(current.distance(&predicted), 8);
        assert_eq!(current.direction(&predicted), Facing::North);
    }

    #[test]
    fn test_lead_capped_by_flight_time() {
        let shooter = Coords::new(0, 0);
        let previous = Coords::new(4, 4);
        let current = previous.translated(Facing::SouthEast, 3);
        let predicted = predict_artillery_lead(shooter, current, previous, 8, 2, false);
        assert_eq!(current.distance(&predicted), 2);
    }

    #[test]
    fn test_homing_lands_closer_to_shooter() {
        let shooter = Coords::new(10, 30);
        let previous = Coords::new(10, 10);
        let current = Coords::new(10, 9);
        let plain = predict_artillery_lead(shooter, current, previous, 8, 8, false);
        let homing = predict_artillery_lead(shooter, current, previous, 8, 8, true);
        assert!(shooter.distance(&homing) < shooter.distance(&plain));
    }

    #[test]
    fn test_homing_closer_for_every_heading() {
        let shooter = Coords::new(20, 20);
        let current = Coords::new(12, 14);
        for facing in Facing::all() {
            let previous = current.translated(facing.opposite(), 1);
            for speed in 1..=10 {
                let plain = predict_artillery_lead(shooter, current, previous, speed, 10, false);
                let homing = predict_artillery_lead(shooter, current, previous, speed, 10, true);
                assert!(
                    shooter.distance(&homing) < shooter.distance(&plain),
                    "{:?} speed {}",
                    facing,
                    speed
                );
            }
        }
    }

    #[test]
    fn test_snapshot_lead() {
        let shooter = Combatant::new("Catapult", PlayerId(1), UnitKind::Mek, Coords::new(10, 30));
        let mut target = Combatant::new("Wasp", PlayerId(2), UnitKind::Mek, Coords::new(10, 9))
            .moved(MovementMode::Ran, 8);
        target.previous_position = Some(Coords::new(10, 10));
        assert_eq!(lead_for(&shooter, &target, 8, false), Coords::new(10, 1));
    }
}
