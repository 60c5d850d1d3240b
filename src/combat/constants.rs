//! Combat resolution constants - all tunable values in one place
//!
//! These values are ADDITIVE, never multiplicative. Every modifier lands in a
//! to-hit roll as a signed integer.

// Dice
pub const MAX_2D6_ROLL: i32 = 12;

// Attacker movement
pub const ATTACKER_WALKED_MODIFIER: i32 = 1;
pub const ATTACKER_RAN_MODIFIER: i32 = 2;
pub const ATTACKER_JUMPED_MODIFIER: i32 = 3;

// Target movement: (max hexes moved, modifier); anything further gets the cap
pub const TARGET_MOVEMENT_TABLE: [(u32, i32); 6] = [(2, 0), (4, 1), (6, 2), (9, 3), (17, 4), (24, 5)];
pub const TARGET_MOVEMENT_CAP: i32 = 6;
pub const TARGET_JUMPED_MODIFIER: i32 = 1;
pub const TARGET_AIRBORNE_MODIFIER: i32 = 1;

// Target state
pub const IMMOBILE_TARGET_MODIFIER: i32 = -4;
pub const PRONE_ADJACENT_MODIFIER: i32 = -2;
pub const PRONE_AT_RANGE_MODIFIER: i32 = 1;

// Equipment
pub const GUIDANCE_MODIFIER: i32 = -1;
pub const INDIRECT_FIRE_MODIFIER: i32 = 1;

// Batches smaller than this resolve sequentially
pub const PARALLEL_VOLLEY_THRESHOLD: usize = 32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_table_ascending() {
        for pair in TARGET_MOVEMENT_TABLE.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert!(pair[0].1 < pair[1].1);
        }
        assert!(TARGET_MOVEMENT_TABLE[5].1 < TARGET_MOVEMENT_CAP);
    }

    #[test]
    fn test_attacker_movement_ordering() {
        assert!(ATTACKER_WALKED_MODIFIER < ATTACKER_RAN_MODIFIER);
        assert!(ATTACKER_RAN_MODIFIER < ATTACKER_JUMPED_MODIFIER);
    }

    #[test]
    fn test_bonuses_are_negative() {
        assert!(IMMOBILE_TARGET_MODIFIER < 0);
        assert!(PRONE_ADJACENT_MODIFIER < 0);
        assert!(GUIDANCE_MODIFIER < 0);
    }
}
