//! Weapons, ammunition and the shared equipment catalog

pub mod ammo;
pub mod catalog;
pub mod weapon;

pub use ammo::{
    can_switch_to_ammo, is_ammo_valid, AmmoBin, AmmoFamily, AmmoType, Munition, WeaponMount,
};
pub use catalog::EquipmentCatalog;
pub use weapon::{is_available, RangeBracket, RangeBrackets, TechLevel, WeaponClass, WeaponType};
