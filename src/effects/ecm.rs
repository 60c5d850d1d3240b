//! Temporary ECM fields and the tracker that owns them
//!
//! Fields are inserted by the orchestrator when a source activates and
//! pruned once per phase transition. Resolution only reads them.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::board::hex::Coords;
use crate::core::error::{CombatError, Result};
use crate::core::types::{Phase, PlayerId, Round};

/// A time-boxed electronic countermeasure field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporaryEcmField {
    pub position: Coords,
    /// Radius in hexes; 0 covers only `position`
    pub range: u32,
    pub creation_round: Round,
    pub expiration_round: Round,
    pub expiration_phase: Phase,
    pub owner: PlayerId,
    pub source: String,
}

impl TemporaryEcmField {
    /// A field with an explicit lifetime.
    ///
    /// The expiration must fall after the creation round, otherwise the
    /// field would never be observable. Any later round is accepted, so an
    /// explicit lifetime may run well past the round after creation.
    pub fn new(
        position: Coords,
        range: u32,
        creation_round: Round,
        expiration_round: Round,
        expiration_phase: Phase,
        owner: PlayerId,
        source: impl Into<String>,
    ) -> Result<Self> {
        if expiration_round <= creation_round {
            return Err(CombatError::InvalidPhaseOrder {
                round: expiration_round,
                expiration: expiration_phase,
            });
        }
        Ok(Self {
            position,
            range,
            creation_round,
            expiration_round,
            expiration_phase,
            owner,
            source: source.into(),
        })
    }

    /// Single-hex field from an instantaneous source (e.g. an exploding pod).
    ///
    /// Lasts until the end phase of the following round.
    pub fn from_point_source(position: Coords, round: Round, owner: PlayerId) -> Self {
        Self {
            position,
            range: 0,
            creation_round: round,
            expiration_round: round + 1,
            expiration_phase: Phase::End,
            owner,
            source: "point source".to_string(),
        }
    }

    pub fn with_range(mut self, range: u32) -> Self {
        self.range = range;
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Never expired in its creation round; expired after the expiration
    /// round, or within it once the expiration phase is reached.
    pub fn is_expired(&self, round: Round, phase: Phase) -> bool {
        if round <= self.creation_round {
            return false;
        }
        round > self.expiration_round
            || (round == self.expiration_round && phase >= self.expiration_phase)
    }

    /// Does the field cover `coords`? A missing coordinate never matches.
    pub fn affects(&self, coords: Option<&Coords>) -> bool {
        coords.map_or(false, |c| self.affects_hex(c))
    }

    pub fn affects_hex(&self, coords: &Coords) -> bool {
        self.position.distance(coords) <= self.range
    }
}

impl PartialEq for TemporaryEcmField {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
            && self.creation_round == other.creation_round
            && self.owner == other.owner
    }
}

impl Eq for TemporaryEcmField {}

impl Hash for TemporaryEcmField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
        self.creation_round.hash(state);
        self.owner.hash(state);
    }
}

/// The collection of live fields for one game
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldTracker {
    fields: Vec<TemporaryEcmField>,
}

impl FieldTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field; returns false if an equal field is already tracked
    pub fn insert(&mut self, field: TemporaryEcmField) -> bool {
        if self.fields.contains(&field) {
            return false;
        }
        tracing::debug!(
            position = %field.position,
            range = field.range,
            owner = field.owner.0,
            source = %field.source,
            "ECM field added"
        );
        self.fields.push(field);
        true
    }

    /// Drop every field expired at this point; returns how many went
    pub fn prune(&mut self, round: Round, phase: Phase) -> usize {
        let before = self.fields.len();
        self.fields.retain(|f| !f.is_expired(round, phase));
        let removed = before - self.fields.len();
        if removed > 0 {
            tracing::debug!(round, ?phase, removed, "Pruned expired ECM fields");
        }
        removed
    }

    pub fn fields(&self) -> &[TemporaryEcmField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields covering a hex
    pub fn affecting<'a>(
        &'a self,
        coords: &'a Coords,
    ) -> impl Iterator<Item = &'a TemporaryEcmField> + 'a {
        self.fields.iter().filter(move |f| f.affects_hex(coords))
    }

    /// Is the hex inside a live field owned by a player hostile to `player`?
    ///
    /// Fields already expired at `round`/`phase` are ignored even if the
    /// tracker has not been pruned yet.
    pub fn is_hostile_at(
        &self,
        coords: &Coords,
        player: PlayerId,
        round: Round,
        phase: Phase,
        is_enemy: impl Fn(PlayerId, PlayerId) -> bool,
    ) -> bool {
        self.affecting(coords)
            .filter(|f| !f.is_expired(round, phase))
            .any(|f| is_enemy(f.owner, player))
    }
}
