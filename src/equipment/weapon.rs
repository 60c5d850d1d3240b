//! Weapon types and range brackets

use serde::{Deserialize, Serialize};

use crate::core::config::GameOptions;
use crate::equipment::ammo::AmmoFamily;

/// Broad weapon class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponClass {
    Energy,
    Ballistic,
    Missile,
    Artillery,
}

/// Rules level of a piece of equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TechLevel {
    Introductory,
    #[default]
    Standard,
    Advanced,
    Experimental,
}

/// Era and tech-level gate shared by weapons and ammunition
pub fn is_available(intro_year: u32, tech_level: TechLevel, options: &GameOptions) -> bool {
    if tech_level == TechLevel::Experimental && !options.allow_experimental {
        return false;
    }
    options.era_year.map_or(true, |year| intro_year <= year)
}

/// Range bracket an attack falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RangeBracket {
    Short,
    Medium,
    Long,
    Extreme,
}

impl RangeBracket {
    pub fn modifier(&self) -> i32 {
        match self {
            RangeBracket::Short => 0,
            RangeBracket::Medium => 2,
            RangeBracket::Long => 4,
            RangeBracket::Extreme => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RangeBracket::Short => "short range",
            RangeBracket::Medium => "medium range",
            RangeBracket::Long => "long range",
            RangeBracket::Extreme => "extreme range",
        }
    }
}

/// Upper bound (in hexes) of each range bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeBrackets {
    #[serde(default)]
    pub minimum: u32,
    pub short: u32,
    pub medium: u32,
    pub long: u32,
    pub extreme: u32,
}

impl RangeBrackets {
    pub const fn new(minimum: u32, short: u32, medium: u32, long: u32, extreme: u32) -> Self {
        Self { minimum, short, medium, long, extreme }
    }

    /// Bracket for a distance, or `None` when out of range
    pub fn bracket(&self, distance: u32, extreme_allowed: bool) -> Option<RangeBracket> {
        if distance <= self.short {
            Some(RangeBracket::Short)
        } else if distance <= self.medium {
            Some(RangeBracket::Medium)
        } else if distance <= self.long {
            Some(RangeBracket::Long)
        } else if extreme_allowed && distance <= self.extreme {
            Some(RangeBracket::Extreme)
        } else {
            None
        }
    }

    /// Penalty for firing inside minimum range: `minimum - distance + 1`
    pub fn minimum_range_penalty(&self, distance: u32) -> i32 {
        if self.minimum > 0 && distance <= self.minimum {
            (self.minimum - distance + 1) as i32
        } else {
            0
        }
    }
}

/// Catalog entry describing a weapon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponType {
    pub name: String,
    pub class: WeaponClass,
    /// Ammunition family this weapon loads; `None` for energy weapons
    #[serde(default)]
    pub ammo_family: Option<AmmoFamily>,
    /// Rack size or caliber; ammunition must match exactly
    #[serde(default)]
    pub rack_size: u32,
    pub ranges: RangeBrackets,
    /// Fire-control guidance (Artemis-style), suppressed by hostile ECM
    #[serde(default)]
    pub guided: bool,
    /// Can fire without line of sight
    #[serde(default)]
    pub indirect: bool,
    pub intro_year: u32,
    #[serde(default)]
    pub tech_level: TechLevel,
}

impl WeaponType {
    pub fn uses_ammo(&self) -> bool {
        self.ammo_family.is_some()
    }

    /// Legal under the era restriction and experimental toggle?
    pub fn is_available(&self, options: &GameOptions) -> bool {
        is_available(self.intro_year, self.tech_level, options)
    }
}
