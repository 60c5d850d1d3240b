//! Read-only snapshots of the units taking part in an attack

use serde::{Deserialize, Serialize};

use crate::board::hex::{Coords, Facing};
use crate::core::types::{EntityId, PlayerId};
use crate::equipment::ammo::WeaponMount;

/// Broad unit categories; height and some modifiers depend on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    #[default]
    Mek,
    ProtoMek,
    Vehicle,
    Vtol,
    Infantry,
    BattleArmor,
}

impl UnitKind {
    /// Levels the unit stands above its hex
    pub fn height(&self) -> i32 {
        match self {
            UnitKind::Mek => 1,
            _ => 0,
        }
    }
}

/// How a unit moved this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MovementMode {
    #[default]
    Stationary,
    Walked,
    Ran,
    Jumped,
    Sprinted,
}

/// A unit as seen by the resolver
#[derive(Debug, Clone)]
pub struct Combatant {
    pub id: EntityId,
    pub name: String,
    pub owner: PlayerId,
    pub kind: UnitKind,
    pub position: Coords,
    /// Where the unit started its move; used to lead artillery
    pub previous_position: Option<Coords>,
    pub facing: Facing,
    pub movement: MovementMode,
    pub hexes_moved: u32,
    /// Levels above the ground for VTOLs in flight
    pub altitude: i32,
    pub gunnery: i32,
    pub immobile: bool,
    pub prone: bool,
    pub destroyed: bool,
    pub weapons: Vec<WeaponMount>,
}

impl Combatant {
    pub fn new(name: impl Into<String>, owner: PlayerId, kind: UnitKind, position: Coords) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            owner,
            kind,
            position,
            previous_position: None,
            facing: Facing::North,
            movement: MovementMode::Stationary,
            hexes_moved: 0,
            altitude: 0,
            gunnery: 4,
            immobile: false,
            prone: false,
            destroyed: false,
            weapons: Vec::new(),
        }
    }

    pub fn facing(mut self, facing: Facing) -> Self {
        self.facing = facing;
        self
    }

    pub fn gunnery(mut self, gunnery: i32) -> Self {
        self.gunnery = gunnery;
        self
    }

    /// Record this turn's movement
    pub fn moved(mut self, mode: MovementMode, hexes: u32) -> Self {
        self.movement = mode;
        self.hexes_moved = hexes;
        self
    }

    pub fn arm(mut self, mount: WeaponMount) -> Self {
        self.weapons.push(mount);
        self
    }

    pub fn is_airborne(&self) -> bool {
        self.kind == UnitKind::Vtol && self.altitude > 0
    }

    /// Height above the hex floor used for line of sight; prone units lie flat
    pub fn height(&self) -> i32 {
        let standing = if self.prone { 0 } else { self.kind.height() };
        standing + self.altitude.max(0)
    }

    pub fn weapon(&self, index: usize) -> Option<&WeaponMount> {
        self.weapons.get(index)
    }
}

/// What an attack is aimed at
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    Unit(&'a Combatant),
    /// Empty hex, e.g. an artillery strike or clearing woods
    Hex(Coords),
    Building(Coords),
}

impl Target<'_> {
    pub fn position(&self) -> Coords {
        match self {
            Target::Unit(unit) => unit.position,
            Target::Hex(coords) | Target::Building(coords) => *coords,
        }
    }

    pub fn height(&self) -> i32 {
        match self {
            Target::Unit(unit) => unit.height(),
            Target::Hex(_) => 0,
            Target::Building(_) => 1,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Target::Unit(unit) => unit.name.clone(),
            Target::Hex(coords) => format!("hex {}", coords),
            Target::Building(coords) => format!("building {}", coords),
        }
    }
}
