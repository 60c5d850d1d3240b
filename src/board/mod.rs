//! Board geometry: hex coordinates, firing arcs, terrain and line of sight

pub mod arc;
pub mod hex;
pub mod map;
pub mod terrain;

pub use arc::{is_inside_arc, ArcSpan, FacingArc};
pub use hex::{Coords, Facing};
pub use map::{Board, BoardHex, LosEffects, WOODS_BLOCKING_POINTS};
pub use terrain::Terrain;
