//! Core type definitions used throughout the codebase

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for combat entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// Game round counter (one full initiative-to-end cycle)
pub type Round = u32;

/// Player identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Team identifier; players on the same team are allies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

/// Team membership; players on no team are hostile to everyone else
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Teams {
    members: AHashMap<PlayerId, TeamId>,
}

impl Teams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, player: PlayerId, team: TeamId) {
        self.members.insert(player, team);
    }

    pub fn team_of(&self, player: PlayerId) -> Option<TeamId> {
        self.members.get(&player).copied()
    }

    pub fn is_enemy(&self, a: PlayerId, b: PlayerId) -> bool {
        if a == b {
            return false;
        }
        match (self.team_of(a), self.team_of(b)) {
            (Some(ta), Some(tb)) => ta != tb,
            _ => true,
        }
    }
}

/// Phases of a game round, in the order they occur.
///
/// Ordering is meaningful: field expiration compares phases with `>=`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Initiative,
    Deployment,
    Movement,
    Targeting,
    Firing,
    Physical,
    End,
    EndReport,
}
