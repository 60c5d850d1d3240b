use thiserror::Error;

#[derive(Error, Debug)]
pub enum CombatError {
    #[error("Unknown weapon type: {0}")]
    UnknownWeapon(String),

    #[error("Unknown ammunition type: {0}")]
    UnknownAmmo(String),

    #[error("Unknown unit in scenario: {0}")]
    UnknownUnit(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Roll requires a die result but none was supplied")]
    MissingRoll,

    #[error("Field expiration phase {expiration:?} precedes its creation in round {round}")]
    InvalidPhaseOrder {
        round: crate::core::types::Round,
        expiration: crate::core::types::Phase,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CombatError>;
