//! Board terrain types and their effect on line of sight

use serde::{Deserialize, Serialize};

/// Primary terrain type for a board hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    #[default]
    Clear,
    Rough,
    Pavement,
    LightWoods,
    HeavyWoods,
    Water,
    Building,
}

impl Terrain {
    /// Woods points this hex contributes when LOS passes through it
    ///
    /// Three accumulated points block line of sight.
    pub fn woods_points(&self) -> u32 {
        match self {
            Terrain::LightWoods => 1,
            Terrain::HeavyWoods => 2,
            _ => 0,
        }
    }

    /// Does this terrain block line of sight on its own?
    pub fn blocks_los(&self) -> bool {
        matches!(self, Terrain::Building)
    }

    /// To-hit modifier for a target standing in this terrain
    pub fn occupant_modifier(&self) -> i32 {
        self.woods_points() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_woods_points() {
        assert_eq!(Terrain::Clear.woods_points(), 0);
        assert_eq!(Terrain::LightWoods.woods_points(), 1);
        assert_eq!(Terrain::HeavyWoods.woods_points(), 2);
    }

    #[test]
    fn test_only_buildings_block_alone() {
        assert!(Terrain::Building.blocks_los());
        assert!(!Terrain::HeavyWoods.blocks_los());
        assert!(!Terrain::Water.blocks_los());
    }

    #[test]
    fn test_occupant_modifier_matches_woods() {
        for terrain in [Terrain::Clear, Terrain::LightWoods, Terrain::HeavyWoods] {
            assert_eq!(terrain.occupant_modifier(), terrain.woods_points() as i32);
        }
    }

    #[test]
    fn test_terrain_deserializes_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            terrain: Terrain,
        }
        let parsed: Wrapper = toml::from_str("terrain = \"heavy_woods\"").unwrap();
        assert_eq!(parsed.terrain, Terrain::HeavyWoods);
    }
}
