//! Firing arcs relative to a unit's facing
//!
//! An arc is an angular span measured clockwise from the unit's facing.
//! Spans that cross 0° (e.g. forward, 300°..60°) wrap around.

use serde::{Deserialize, Serialize};

use crate::board::hex::{Coords, Facing};

/// Angular span of an arc, in degrees relative to facing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpan {
    pub start: f64,
    pub end: f64,
    /// Whether the boundary angles themselves are inside the arc
    pub inclusive: bool,
}

impl ArcSpan {
    const fn closed(start: f64, end: f64) -> Self {
        Self { start, end, inclusive: true }
    }

    const fn open(start: f64, end: f64) -> Self {
        Self { start, end, inclusive: false }
    }

    /// Membership for a relative angle in [0, 360)
    pub fn contains(&self, angle: f64) -> bool {
        let (after_start, before_end) = if self.inclusive {
            (angle >= self.start, angle <= self.end)
        } else {
            (angle > self.start, angle < self.end)
        };
        if self.start <= self.end {
            after_start && before_end
        } else {
            after_start || before_end
        }
    }
}

/// Named firing arc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FacingArc {
    #[default]
    Forward,
    Rear,
    LeftSide,
    RightSide,
    /// Forward plus left side (left arm / left torso mounts)
    ForwardLeft,
    /// Forward plus right side
    ForwardRight,
    /// Turret and pintle mounts
    Full,
}

impl FacingArc {
    /// The six directional arcs (excludes `Full`)
    pub fn directional() -> [FacingArc; 6] {
        [
            FacingArc::Forward,
            FacingArc::Rear,
            FacingArc::LeftSide,
            FacingArc::RightSide,
            FacingArc::ForwardLeft,
            FacingArc::ForwardRight,
        ]
    }

    pub fn span(&self) -> ArcSpan {
        match self {
            FacingArc::Forward => ArcSpan::closed(300.0, 60.0),
            FacingArc::Rear => ArcSpan::open(120.0, 240.0),
            FacingArc::LeftSide => ArcSpan::closed(240.0, 300.0),
            FacingArc::RightSide => ArcSpan::closed(60.0, 120.0),
            FacingArc::ForwardLeft => ArcSpan::closed(240.0, 60.0),
            FacingArc::ForwardRight => ArcSpan::closed(300.0, 120.0),
            FacingArc::Full => ArcSpan::closed(0.0, 360.0),
        }
    }

    /// Is `target` inside this arc for a unit at `source` facing `facing`?
    ///
    /// A target in the same hex is inside every arc.
    pub fn contains(&self, source: Coords, facing: Facing, target: Coords) -> bool {
        if source == target {
            return true;
        }
        let relative = (source.degree(&target) - facing.degrees()).rem_euclid(360.0);
        self.span().contains(relative)
    }
}

/// Free-function form of [`FacingArc::contains`]
pub fn is_inside_arc(source: Coords, facing: Facing, target: Coords, arc: FacingArc) -> bool {
    arc.contains(source, facing, target)
}
