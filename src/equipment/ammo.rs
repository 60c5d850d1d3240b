//! Ammunition types, bins, weapon mounts and the validity rules between them
//!
//! Validity checks return plain booleans: mismatches are routine while a
//! player is picking weapons, so they are not errors.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::board::arc::FacingArc;
use crate::core::config::GameOptions;
use crate::equipment::weapon::{is_available, TechLevel, WeaponType};

/// Ammunition family shared by a weapon and the rounds it accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmmoFamily {
    Autocannon,
    MachineGun,
    Gauss,
    Srm,
    Lrm,
    ArrowIv,
}

/// Munition subtype; irrelevant to family matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Munition {
    #[default]
    Standard,
    Inferno,
    ArmorPiercing,
    Fragmentation,
    Homing,
}

/// Catalog entry describing a type of ammunition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmoType {
    pub name: String,
    pub family: AmmoFamily,
    pub rack_size: u32,
    #[serde(default)]
    pub munition: Munition,
    pub shots_per_ton: u32,
    pub intro_year: u32,
    #[serde(default)]
    pub tech_level: TechLevel,
}

impl AmmoType {
    /// Same family and rack size, munition ignored
    pub fn is_interchangeable_with(&self, other: &AmmoType) -> bool {
        self.family == other.family && self.rack_size == other.rack_size
    }

    /// Does a weapon of this type load this ammunition?
    pub fn fits(&self, weapon: &WeaponType) -> bool {
        weapon.ammo_family == Some(self.family) && weapon.rack_size == self.rack_size
    }

    pub fn is_available(&self, options: &GameOptions) -> bool {
        is_available(self.intro_year, self.tech_level, options)
    }
}

/// A loaded ammunition bin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmmoBin {
    pub ammo: Arc<AmmoType>,
    pub shots_left: u32,
    /// False once the bin is destroyed, breached or being dumped
    pub usable: bool,
}

impl AmmoBin {
    /// A full ton of the given ammunition
    pub fn full(ammo: Arc<AmmoType>) -> Self {
        let shots_left = ammo.shots_per_ton;
        Self { ammo, shots_left, usable: true }
    }

    pub fn with_shots(ammo: Arc<AmmoType>, shots_left: u32) -> Self {
        Self { ammo, shots_left, usable: true }
    }

    pub fn is_empty(&self) -> bool {
        self.shots_left == 0
    }
}

/// A weapon installed on a unit, with the bin currently feeding it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaponMount {
    pub weapon: Arc<WeaponType>,
    pub arc: FacingArc,
    pub ammo: Option<AmmoBin>,
    pub destroyed: bool,
}

impl WeaponMount {
    pub fn new(weapon: Arc<WeaponType>, arc: FacingArc) -> Self {
        Self { weapon, arc, ammo: None, destroyed: false }
    }

    pub fn with_ammo(mut self, bin: AmmoBin) -> Self {
        self.ammo = Some(bin);
        self
    }

    /// Load a different munition into this mount.
    ///
    /// Returns false and leaves the mount untouched if the switch is not allowed.
    pub fn switch_ammo(&mut self, bin: AmmoBin) -> bool {
        if !can_switch_to_ammo(self, &bin.ammo) {
            return false;
        }
        self.ammo = Some(bin);
        true
    }
}

/// Can `ammo` be fired from `weapon`?
///
/// Fails closed: missing references, an empty or unusable bin, a family
/// mismatch or a rack-size mismatch all yield false. Munition subtype is
/// not considered.
pub fn is_ammo_valid(ammo: Option<&AmmoBin>, weapon: Option<&WeaponType>) -> bool {
    let (Some(bin), Some(weapon)) = (ammo, weapon) else {
        return false;
    };
    if !bin.usable || bin.is_empty() {
        return false;
    }
    bin.ammo.fits(weapon)
}

/// May the mount switch to `candidate` ammunition?
///
/// Allowed only when the candidate belongs to the ammo family and rack size
/// the mounted weapon loads; munition subtype may differ.
pub fn can_switch_to_ammo(mount: &WeaponMount, candidate: &AmmoType) -> bool {
    candidate.fits(&mount.weapon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::catalog::EquipmentCatalog;

    fn bin(catalog: &EquipmentCatalog, name: &str) -> AmmoBin {
        AmmoBin::full(catalog.ammo(name).unwrap())
    }

    #[test]
    fn test_matching_autocannon_ammo_valid() {
        let catalog = EquipmentCatalog::standard();
        let ac5 = catalog.weapon("AC/5").unwrap();
        assert!(is_ammo_valid(Some(&bin(&catalog, "AC/5 Ammo")), Some(&*ac5)));
    }

    #[test]
    fn test_munition_subtype_irrelevant() {
        let catalog = EquipmentCatalog::standard();
        let srm4 = catalog.weapon("SRM 4").unwrap();
        assert!(is_ammo_valid(Some(&bin(&catalog, "SRM 4 Ammo")), Some(&*srm4)));
        assert!(is_ammo_valid(Some(&bin(&catalog, "SRM 4 Inferno Ammo")), Some(&*srm4)));
    }

    #[test]
    fn test_rack_size_mismatch_rejected() {
        let catalog = EquipmentCatalog::standard();
        let ac5 = catalog.weapon("AC/5").unwrap();
        assert!(!is_ammo_valid(Some(&bin(&catalog, "AC/10 Ammo")), Some(&*ac5)));
    }

    #[test]
    fn test_family_mismatch_rejected() {
        let catalog = EquipmentCatalog::standard();
        let ac5 = catalog.weapon("AC/5").unwrap();
        let laser = catalog.weapon("Medium Laser").unwrap();
        assert!(!is_ammo_valid(Some(&bin(&catalog, "SRM 4 Ammo")), Some(&*ac5)));
        assert!(!is_ammo_valid(Some(&bin(&catalog, "AC/5 Ammo")), Some(&*laser)));
    }

    #[test]
    fn test_empty_bin_always_rejected() {
        let catalog = EquipmentCatalog::standard();
        let ac5 = catalog.weapon("AC/5").unwrap();
        let empty = AmmoBin::with_shots(catalog.ammo("AC/5 Ammo").unwrap(), 0);
        assert!(!is_ammo_valid(Some(&empty), Some(&*ac5)));
    }

    #[test]
    fn test_unusable_bin_rejected() {
        let catalog = EquipmentCatalog::standard();
        let ac5 = catalog.weapon("AC/5").unwrap();
        let mut dumping = bin(&catalog, "AC/5 Ammo");
        dumping.usable = false;
        assert!(!is_ammo_valid(Some(&dumping), Some(&*ac5)));
    }

    #[test]
    fn test_missing_references_rejected() {
        let catalog = EquipmentCatalog::standard();
        let ac5 = catalog.weapon("AC/5").unwrap();
        assert!(!is_ammo_valid(None, Some(&*ac5)));
        assert!(!is_ammo_valid(Some(&bin(&catalog, "AC/5 Ammo")), None));
        assert!(!is_ammo_valid(None, None));
    }

    #[test]
    fn test_switch_between_srm_munitions() {
        let catalog = EquipmentCatalog::standard();
        let mut mount = WeaponMount::new(catalog.weapon("SRM 4").unwrap(), FacingArc::Forward)
            .with_ammo(bin(&catalog, "SRM 4 Ammo"));
        let inferno = catalog.ammo("SRM 4 Inferno Ammo").unwrap();
        assert!(can_switch_to_ammo(&mount, &inferno));
        assert!(mount.switch_ammo(AmmoBin::full(inferno)));
        assert_eq!(mount.ammo.as_ref().map(|b| b.ammo.munition), Some(Munition::Inferno));
    }

    #[test]
    fn test_switch_to_other_rack_size_rejected() {
        let catalog = EquipmentCatalog::standard();
        let mut mount = WeaponMount::new(catalog.weapon("SRM 4").unwrap(), FacingArc::Forward)
            .with_ammo(bin(&catalog, "SRM 4 Ammo"));
        let srm6 = catalog.ammo("SRM 6 Ammo").unwrap();
        assert!(!can_switch_to_ammo(&mount, &srm6));
        assert!(!mount.switch_ammo(AmmoBin::full(srm6)));
        assert_eq!(mount.ammo.as_ref().map(|b| b.ammo.rack_size), Some(4));
    }
}
