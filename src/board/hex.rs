//! Hex coordinate system for the game board (offset coordinates)
//!
//! Boards are addressed by column/row with odd columns shifted half a hex
//! down. Arithmetic is done in axial/cube space and converted back.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Angles closer than this to a whole degree are snapped to it, so that
/// hexes lying exactly on an arc boundary classify deterministically.
const ANGLE_SNAP_EPSILON: f64 = 1e-6;

/// Board coordinate: column `x`, row `y`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Coords {
    pub x: i32,
    pub y: i32,
}

impl Coords {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Axial (q, r) form of this coordinate
    fn to_axial(self) -> (i32, i32) {
        let q = self.x;
        let r = self.y - (self.x - (self.x & 1)) / 2;
        (q, r)
    }

    fn from_axial(q: i32, r: i32) -> Self {
        Self::new(q, r + (q - (q & 1)) / 2)
    }

    /// Center of the hex in board units (hex edge length 1, north is -y)
    fn pixel_center(self) -> (f64, f64) {
        let (q, r) = self.to_axial();
        let px = 1.5 * q as f64;
        let py = 3f64.sqrt() * (r as f64 + q as f64 / 2.0);
        (px, py)
    }

    /// Hex-grid distance
    pub fn distance(&self, other: &Self) -> u32 {
        let (q1, r1) = self.to_axial();
        let (q2, r2) = other.to_axial();
        let dq = (q1 - q2).abs();
        let dr = (r1 - r2).abs();
        let ds = ((-q1 - r1) - (-q2 - r2)).abs();
        ((dq + dr + ds) / 2) as u32
    }

    /// The coordinate `distance` hexes away in direction `facing`
    pub fn translated(&self, facing: Facing, distance: u32) -> Self {
        let (q, r) = self.to_axial();
        let (dq, dr) = facing.axial_offset();
        let n = distance as i32;
        Self::from_axial(q + dq * n, r + dr * n)
    }

    /// Get all 6 neighboring coordinates, indexed by facing
    pub fn neighbors(&self) -> [Coords; 6] {
        Facing::all().map(|facing| self.translated(facing, 1))
    }

    /// Bearing from this hex to `other`, clockwise from north, in [0, 360)
    ///
    /// Returns 0 when both coordinates are the same.
    pub fn degree(&self, other: &Self) -> f64 {
        let (x1, y1) = self.pixel_center();
        let (x2, y2) = other.pixel_center();
        let mut degrees = (x2 - x1).atan2(y1 - y2).to_degrees();
        if degrees < 0.0 {
            degrees += 360.0;
        }
        let snapped = degrees.round();
        if (degrees - snapped).abs() < ANGLE_SNAP_EPSILON {
            degrees = snapped;
        }
        if degrees >= 360.0 {
            degrees -= 360.0;
        }
        degrees
    }

    /// Classify `other` into one of six 60° sectors centred on the facings.
    ///
    /// A target exactly on a sector boundary (30° off a facing) belongs to
    /// the clockwise sector. The same coordinate yields `Facing::North`.
    pub fn direction(&self, other: &Self) -> Facing {
        if self == other {
            return Facing::North;
        }
        let sector = ((self.degree(other) + 30.0) / 60.0).floor() as i32;
        Facing::from_index(sector)
    }

    /// Every coordinate exactly `distance` hexes away, walked clockwise
    /// starting from the hex due north. Distance 0 yields only `self`.
    pub fn all_at_distance(&self, distance: u32) -> Vec<Coords> {
        if distance == 0 {
            return vec![*self];
        }
        let mut ring = Vec::with_capacity(6 * distance as usize);
        let mut current = self.translated(Facing::North, distance);
        for side in 0..6 {
            let step = Facing::from_index(side + 2);
            for _ in 0..distance {
                ring.push(current);
                current = current.translated(step, 1);
            }
        }
        ring
    }

    /// Get all coordinates within range (inclusive)
    pub fn within_distance(&self, range: u32) -> Vec<Coords> {
        (0..=range).flat_map(|d| self.all_at_distance(d)).collect()
    }

    /// Get hex coordinates in a line from self to other (inclusive)
    ///
    /// The line is nudged by a tiny constant so that paths running exactly
    /// along a hex edge always resolve to the same side.
    pub fn line_to(&self, other: &Self) -> Vec<Coords> {
        let n = self.distance(other) as i32;
        if n == 0 {
            return vec![*self];
        }

        let (q1, r1) = self.to_axial();
        let (q2, r2) = other.to_axial();
        let (nq, nr) = (1e-6, 2e-6);
        let mut results = Vec::with_capacity((n + 1) as usize);
        for i in 0..=n {
            let t = i as f64 / n as f64;
            let q = q1 as f64 + nq + (q2 - q1) as f64 * t;
            let r = r1 as f64 + nr + (r2 - r1) as f64 * t;
            results.push(Self::round(q, r));
        }
        results
    }

    /// Round fractional axial coordinates to the nearest hex
    fn round(q: f64, r: f64) -> Self {
        let s = -q - r;
        let mut rq = q.round();
        let mut rr = r.round();
        let rs = s.round();

        let q_diff = (rq - q).abs();
        let r_diff = (rr - r).abs();
        let s_diff = (rs - s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            rq = -rr - rs;
        } else if r_diff > s_diff {
            rr = -rq - rs;
        }

        Self::from_axial(rq as i32, rr as i32)
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the six hex facings, clockwise from north
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    #[default]
    North,
    NorthEast,
    SouthEast,
    South,
    SouthWest,
    NorthWest,
}

impl Facing {
    /// All facings in clockwise order
    pub fn all() -> [Facing; 6] {
        [
            Facing::North,
            Facing::NorthEast,
            Facing::SouthEast,
            Facing::South,
            Facing::SouthWest,
            Facing::NorthWest,
        ]
    }

    /// Facing for any integer, taken modulo 6
    pub fn from_index(index: i32) -> Self {
        Self::all()[index.rem_euclid(6) as usize]
    }

    pub fn index(&self) -> i32 {
        *self as i32
    }

    /// Bearing of this facing in degrees
    pub fn degrees(&self) -> f64 {
        self.index() as f64 * 60.0
    }

    /// Rotate clockwise by `steps` hexsides (negative rotates counter-clockwise)
    pub fn rotate(&self, steps: i32) -> Self {
        Self::from_index(self.index() + steps)
    }

    pub fn opposite(&self) -> Self {
        self.rotate(3)
    }

    fn axial_offset(&self) -> (i32, i32) {
        match self {
            Facing::North => (0, -1),
            Facing::NorthEast => (1, -1),
            Facing::SouthEast => (1, 0),
            Facing::South => (0, 1),
            Facing::SouthWest => (-1, 1),
            Facing::NorthWest => (-1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_distance_same() {
        let a = Coords::new(4, 7);
        assert_eq!(a.distance(&a), 0);
    }

    #[test]
    fn test_distance_adjacent_even_and_odd_columns() {
        let even = Coords::new(2, 2);
        for neighbor in even.neighbors() {
            assert_eq!(even.distance(&neighbor), 1);
        }
        let odd = Coords::new(3, 2);
        for neighbor in odd.neighbors() {
            assert_eq!(odd.distance(&neighbor), 1);
        }
    }

    #[test]
    fn test_odd_column_shifted_down() {
        // Even column: NE neighbour is one row up, odd column: same row
        assert_eq!(Coords::new(0, 0).translated(Facing::NorthEast, 1), Coords::new(1, -1));
        assert_eq!(Coords::new(1, 0).translated(Facing::NorthEast, 1), Coords::new(2, 0));
        assert_eq!(Coords::new(1, 0).translated(Facing::SouthEast, 1), Coords::new(2, 1));
        assert_eq!(Coords::new(0, 0).translated(Facing::SouthWest, 1), Coords::new(-1, 0));
    }

    #[test]
    fn test_distance_along_row() {
        assert_eq!(Coords::new(0, 0).distance(&Coords::new(0, 5)), 5);
        assert_eq!(Coords::new(0, 0).distance(&Coords::new(4, 0)), 4);
    }

    #[test]
    fn test_ring_sizes() {
        let center = Coords::new(5, 5);
        assert_eq!(center.all_at_distance(0), vec![center]);
        for n in 1..=5 {
            let ring = center.all_at_distance(n);
            assert_eq!(ring.len(), 6 * n as usize);
            let unique: HashSet<_> = ring.iter().collect();
            assert_eq!(unique.len(), ring.len());
            assert!(ring.iter().all(|c| center.distance(c) == n));
        }
    }

    #[test]
    fn test_within_distance_count() {
        let center = Coords::new(0, 0);
        assert_eq!(center.within_distance(1).len(), 7);
        assert_eq!(center.within_distance(2).len(), 19);
    }

    #[test]
    fn test_degree_of_neighbors() {
        let center = Coords::new(3, 3);
        for facing in Facing::all() {
            let neighbor = center.translated(facing, 1);
            assert_eq!(center.degree(&neighbor), facing.degrees());
        }
    }

    #[test]
    fn test_direction_of_neighbors() {
        let center = Coords::new(6, 3);
        for facing in Facing::all() {
            assert_eq!(center.direction(&center.translated(facing, 3)), facing);
        }
    }

    #[test]
    fn test_direction_tie_breaks_clockwise() {
        // Ring index 1 at distance 2 lies at exactly 30 degrees
        let center = Coords::new(0, 0);
        let between = center.all_at_distance(2)[1];
        assert_eq!(center.degree(&between), 30.0);
        assert_eq!(center.direction(&between), Facing::NorthEast);

        // 330 degrees wraps to north
        let wrap = center.all_at_distance(2)[11];
        assert_eq!(center.degree(&wrap), 330.0);
        assert_eq!(center.direction(&wrap), Facing::North);
    }

    #[test]
    fn test_facing_rotation_wraps() {
        assert_eq!(Facing::NorthWest.rotate(1), Facing::North);
        assert_eq!(Facing::North.rotate(-1), Facing::NorthWest);
        assert_eq!(Facing::from_index(-7), Facing::NorthWest);
        assert_eq!(Facing::NorthEast.opposite(), Facing::SouthWest);
    }

    #[test]
    fn test_line_endpoints_and_length() {
        let a = Coords::new(0, 0);
        let b = Coords::new(0, 4);
        let line = a.line_to(&b);
        assert_eq!(line.len(), 5);
        assert_eq!(line[0], a);
        assert_eq!(line[4], b);
        for pair in line.windows(2) {
            assert_eq!(pair[0].distance(&pair[1]), 1);
        }
    }

    #[test]
    fn test_ordering_is_value_based() {
        assert!(Coords::new(1, 5) < Coords::new(2, 0));
        assert!(Coords::new(2, 0) < Coords::new(2, 1));
    }
}
