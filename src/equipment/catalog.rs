//! Shared, read-only equipment catalog
//!
//! Built once (from TOML or the built-in standard set) and passed by
//! reference into every resolution. Entries are `Arc`s so mounts can hold
//! them without borrowing the catalog.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use ahash::AHashMap;
use serde::Deserialize;

use crate::core::error::{CombatError, Result};
use crate::equipment::ammo::{AmmoFamily, AmmoType, Munition};
use crate::equipment::weapon::{RangeBrackets, TechLevel, WeaponClass, WeaponType};

/// On-disk catalog layout: `[[weapon]]` and `[[ammo]]` tables
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    weapon: Vec<WeaponType>,
    #[serde(default)]
    ammo: Vec<AmmoType>,
}

#[derive(Debug, Clone, Default)]
pub struct EquipmentCatalog {
    weapons: AHashMap<String, Arc<WeaponType>>,
    ammo: AHashMap<String, Arc<AmmoType>>,
}

impl EquipmentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        let mut catalog = Self::new();
        for weapon in file.weapon {
            catalog.insert_weapon(weapon);
        }
        for ammo in file.ammo {
            catalog.insert_ammo(ammo);
        }
        tracing::debug!(
            weapons = catalog.weapons.len(),
            ammo = catalog.ammo.len(),
            "Loaded equipment catalog"
        );
        Ok(catalog)
    }

    /// Load a catalog from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn insert_weapon(&mut self, weapon: WeaponType) {
        self.weapons.insert(weapon.name.clone(), Arc::new(weapon));
    }

    pub fn insert_ammo(&mut self, ammo: AmmoType) {
        self.ammo.insert(ammo.name.clone(), Arc::new(ammo));
    }

    pub fn weapon(&self, name: &str) -> Result<Arc<WeaponType>> {
        self.weapons
            .get(name)
            .cloned()
            .ok_or_else(|| CombatError::UnknownWeapon(name.to_string()))
    }

    pub fn ammo(&self, name: &str) -> Result<Arc<AmmoType>> {
        self.ammo
            .get(name)
            .cloned()
            .ok_or_else(|| CombatError::UnknownAmmo(name.to_string()))
    }

    pub fn weapon_count(&self) -> usize {
        self.weapons.len()
    }

    pub fn ammo_count(&self) -> usize {
        self.ammo.len()
    }

    /// Every ammunition type the weapon can load, sorted by name
    pub fn ammo_for(&self, weapon: &WeaponType) -> Vec<Arc<AmmoType>> {
        let mut compatible: Vec<_> = self.ammo.values().filter(|a| a.fits(weapon)).cloned().collect();
        compatible.sort_by(|a, b| a.name.cmp(&b.name));
        compatible
    }

    /// Other munitions interchangeable with `ammo`, excluding itself
    pub fn alternatives_to(&self, ammo: &AmmoType) -> Vec<Arc<AmmoType>> {
        let mut alternatives: Vec<_> = self
            .ammo
            .values()
            .filter(|a| a.name != ammo.name && a.is_interchangeable_with(ammo))
            .cloned()
            .collect();
        alternatives.sort_by(|a, b| a.name.cmp(&b.name));
        alternatives
    }

    /// The built-in reference set of common weapons and ammunition
    pub fn standard() -> Self {
        let mut catalog = Self::new();

        let weapons = [
            ("Medium Laser", WeaponClass::Energy, None, 0, RangeBrackets::new(0, 3, 6, 9, 12), 2300),
            ("Large Laser", WeaponClass::Energy, None, 0, RangeBrackets::new(0, 5, 10, 15, 20), 2316),
            ("PPC", WeaponClass::Energy, None, 0, RangeBrackets::new(3, 6, 12, 18, 24), 2460),
            ("Machine Gun", WeaponClass::Ballistic, Some(AmmoFamily::MachineGun), 1, RangeBrackets::new(0, 1, 2, 3, 4), 1950),
            ("AC/5", WeaponClass::Ballistic, Some(AmmoFamily::Autocannon), 5, RangeBrackets::new(3, 6, 12, 18, 24), 2250),
            ("AC/10", WeaponClass::Ballistic, Some(AmmoFamily::Autocannon), 10, RangeBrackets::new(0, 5, 10, 15, 20), 2460),
            ("AC/20", WeaponClass::Ballistic, Some(AmmoFamily::Autocannon), 20, RangeBrackets::new(0, 3, 6, 9, 12), 2500),
            ("Gauss Rifle", WeaponClass::Ballistic, Some(AmmoFamily::Gauss), 1, RangeBrackets::new(2, 7, 15, 22, 30), 2590),
            ("SRM 4", WeaponClass::Missile, Some(AmmoFamily::Srm), 4, RangeBrackets::new(0, 3, 6, 9, 12), 2370),
            ("SRM 6", WeaponClass::Missile, Some(AmmoFamily::Srm), 6, RangeBrackets::new(0, 3, 6, 9, 12), 2370),
            ("LRM 10", WeaponClass::Missile, Some(AmmoFamily::Lrm), 10, RangeBrackets::new(6, 7, 14, 21, 28), 2400),
            ("Arrow IV", WeaponClass::Artillery, Some(AmmoFamily::ArrowIv), 20, RangeBrackets::new(0, 17, 34, 51, 68), 2600),
        ];
        for (name, class, ammo_family, rack_size, ranges, intro_year) in weapons {
            catalog.insert_weapon(WeaponType {
                name: name.to_string(),
                class,
                ammo_family,
                rack_size,
                ranges,
                guided: false,
                indirect: class == WeaponClass::Artillery,
                intro_year,
                tech_level: TechLevel::Standard,
            });
        }

        catalog.insert_weapon(WeaponType {
            name: "LRM 10 (Artemis IV)".to_string(),
            class: WeaponClass::Missile,
            ammo_family: Some(AmmoFamily::Lrm),
            rack_size: 10,
            ranges: RangeBrackets::new(6, 7, 14, 21, 28),
            guided: true,
            indirect: false,
            intro_year: 2598,
            tech_level: TechLevel::Advanced,
        });
        catalog.insert_weapon(WeaponType {
            name: "Binary Laser Cannon".to_string(),
            class: WeaponClass::Energy,
            ammo_family: None,
            rack_size: 0,
            ranges: RangeBrackets::new(0, 5, 10, 15, 20),
            guided: false,
            indirect: false,
            intro_year: 2812,
            tech_level: TechLevel::Experimental,
        });

        let ammo = [
            ("Machine Gun Ammo", AmmoFamily::MachineGun, 1, Munition::Standard, 200, 1950),
            ("AC/5 Ammo", AmmoFamily::Autocannon, 5, Munition::Standard, 20, 2250),
            ("AC/5 AP Ammo", AmmoFamily::Autocannon, 5, Munition::ArmorPiercing, 10, 3059),
            ("AC/10 Ammo", AmmoFamily::Autocannon, 10, Munition::Standard, 10, 2460),
            ("AC/20 Ammo", AmmoFamily::Autocannon, 20, Munition::Standard, 5, 2500),
            ("Gauss Ammo", AmmoFamily::Gauss, 1, Munition::Standard, 8, 2590),
            ("SRM 4 Ammo", AmmoFamily::Srm, 4, Munition::Standard, 25, 2370),
            ("SRM 4 Inferno Ammo", AmmoFamily::Srm, 4, Munition::Inferno, 25, 2380),
            ("SRM 6 Ammo", AmmoFamily::Srm, 6, Munition::Standard, 15, 2370),
            ("SRM 6 Inferno Ammo", AmmoFamily::Srm, 6, Munition::Inferno, 15, 2380),
            ("LRM 10 Ammo", AmmoFamily::Lrm, 10, Munition::Standard, 12, 2400),
            ("LRM 10 Fragmentation Ammo", AmmoFamily::Lrm, 10, Munition::Fragmentation, 12, 2377),
            ("Arrow IV Ammo", AmmoFamily::ArrowIv, 20, Munition::Standard, 5, 2600),
            ("Arrow IV Homing Ammo", AmmoFamily::ArrowIv, 20, Munition::Homing, 5, 2600),
        ];
        for (name, family, rack_size, munition, shots_per_ton, intro_year) in ammo {
            catalog.insert_ammo(AmmoType {
                name: name.to_string(),
                family,
                rack_size,
                munition,
                shots_per_ton,
                intro_year,
                tech_level: TechLevel::Standard,
            });
        }

        catalog
    }
}
