pub mod config;
pub mod error;
pub mod types;

pub use config::GameOptions;
pub use error::{CombatError, Result};
pub use types::{EntityId, Phase, PlayerId, Round, TeamId, Teams};
