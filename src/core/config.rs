//! Game options consumed by the combat core
//!
//! Rule toggles are supplied by the orchestrator, usually from a TOML file.
//! Every field has a default so a partial file is valid.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{CombatError, Result};

/// Earliest year an era restriction may name (start of the Age of War)
pub const EARLIEST_ERA_YEAR: u32 = 2005;

/// Rule toggles that alter combat resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    /// Allow attacks in the extreme range bracket (+6)
    ///
    /// When disabled, anything beyond long range is impossible.
    pub extreme_range: bool,

    /// Restrict equipment to what exists in this year
    ///
    /// `None` disables the era restriction entirely.
    pub era_year: Option<u32>,

    /// Permit experimental-level equipment
    pub allow_experimental: bool,

    /// Hostile ECM cancels the guidance bonus of guided weapons
    pub ecm_negates_guidance: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            extreme_range: false,
            era_year: None,
            allow_experimental: false,
            ecm_negates_guidance: true,
        }
    }
}

impl GameOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from TOML text and validate them
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let options: GameOptions = toml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Validate options for internal consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(year) = self.era_year {
            if year < EARLIEST_ERA_YEAR {
                return Err(CombatError::InvalidConfig(format!(
                    "era_year ({}) precedes the earliest supported era ({})",
                    year, EARLIEST_ERA_YEAR
                )));
            }
        }
        Ok(())
    }
}
