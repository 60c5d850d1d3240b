//! Game board with terrain, elevation and line of sight
//!
//! Hexes not explicitly stored are clear terrain at elevation 0.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::board::hex::Coords;
use crate::board::terrain::Terrain;
use crate::roll::{ModifierKind, TargetRoll};

/// Woods points along a line at which sight is blocked
pub const WOODS_BLOCKING_POINTS: u32 = 3;

/// A single hex on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardHex {
    #[serde(default)]
    pub terrain: Terrain,
    #[serde(default)]
    pub elevation: i32,
}

impl BoardHex {
    pub fn new(terrain: Terrain, elevation: i32) -> Self {
        Self { terrain, elevation }
    }
}

/// What lies between an attacker and its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LosEffects {
    /// Sight is blocked by a building, high ground or dense woods
    pub blocked: bool,
    pub light_woods: u32,
    pub heavy_woods: u32,
    /// Hex adjacent to the target is one level higher than it
    pub partial_cover: bool,
    /// Terrain the target is standing in
    pub target_terrain: Terrain,
}

impl LosEffects {
    pub fn woods_points(&self) -> u32 {
        self.light_woods + 2 * self.heavy_woods
    }

    /// Terrain and cover modifiers for an attack along this line
    pub fn modifiers(&self) -> TargetRoll {
        let mut roll = TargetRoll::new();
        if self.light_woods > 0 {
            roll.add_kind(self.light_woods as i32, "intervening light woods", ModifierKind::Terrain);
        }
        if self.heavy_woods > 0 {
            roll.add_kind(
                2 * self.heavy_woods as i32,
                "intervening heavy woods",
                ModifierKind::Terrain,
            );
        }
        let occupant = self.target_terrain.occupant_modifier();
        if occupant > 0 {
            roll.add_kind(occupant, "target in woods", ModifierKind::Terrain);
        }
        if self.partial_cover {
            roll.add_kind(1, "target has partial cover", ModifierKind::Terrain);
        }
        roll
    }
}

/// The full game board
#[derive(Debug, Clone, Default)]
pub struct Board {
    pub width: u32,
    pub height: u32,
    hexes: AHashMap<Coords, BoardHex>,
}

impl Board {
    /// Create a board of clear terrain
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, hexes: AHashMap::new() }
    }

    /// Get the hex at the given coordinate (clear ground if unset)
    pub fn hex(&self, coords: Coords) -> BoardHex {
        self.hexes.get(&coords).copied().unwrap_or_default()
    }

    /// Check if coordinate is within board bounds
    pub fn in_bounds(&self, coords: Coords) -> bool {
        coords.x >= 0
            && coords.y >= 0
            && coords.x < self.width as i32
            && coords.y < self.height as i32
    }

    pub fn set_hex(&mut self, coords: Coords, hex: BoardHex) {
        self.hexes.insert(coords, hex);
    }

    /// Set terrain at a coordinate, keeping its elevation
    pub fn set_terrain(&mut self, coords: Coords, terrain: Terrain) {
        self.hexes.entry(coords).or_default().terrain = terrain;
    }

    /// Set elevation at a coordinate, keeping its terrain
    pub fn set_elevation(&mut self, coords: Coords, elevation: i32) {
        self.hexes.entry(coords).or_default().elevation = elevation;
    }

    pub fn elevation(&self, coords: Coords) -> i32 {
        self.hex(coords).elevation
    }

    /// Trace line of sight between two units.
    ///
    /// Heights are the units' heights above their hex (a mek stands one
    /// level tall, vehicles and infantry zero). An intervening hex higher
    /// than both ends blocks, as do buildings and three woods points.
    pub fn line_of_sight(
        &self,
        from: Coords,
        from_height: i32,
        to: Coords,
        to_height: i32,
    ) -> LosEffects {
        let from_level = self.elevation(from) + from_height;
        let to_ground = self.elevation(to);
        let to_level = to_ground + to_height;
        let top = from_level.max(to_level);

        let mut effects = LosEffects { target_terrain: self.hex(to).terrain, ..Default::default() };

        let line = from.line_to(&to);
        let intervening = line.iter().skip(1).take(line.len().saturating_sub(2));
        for coords in intervening {
            let hex = self.hex(*coords);
            if hex.elevation > top || hex.terrain.blocks_los() {
                effects.blocked = true;
            }
            match hex.terrain {
                Terrain::LightWoods => effects.light_woods += 1,
                Terrain::HeavyWoods => effects.heavy_woods += 1,
                _ => {}
            }
        }
        if effects.woods_points() >= WOODS_BLOCKING_POINTS {
            effects.blocked = true;
        }

        if line.len() > 2 && to_height >= 1 && from_level <= to_level {
            let adjacent = self.hex(line[line.len() - 2]);
            effects.partial_cover = adjacent.elevation == to_ground + 1;
        }

        effects
    }
}
