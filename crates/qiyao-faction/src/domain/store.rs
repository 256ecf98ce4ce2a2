//! The fixed faction store.

use std::collections::BTreeMap;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::identity::{FACTION_COUNT, FactionId};
use qiyao_track::domain::locations::Location;

use super::state::FactionState;
use super::stats::{DEFAULT_STARTING_STATS, StatName, Stats};

/// Reasons a serialized store is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A faction has no record.
    #[error("faction store is missing {0}")]
    Missing(FactionId),

    /// A record is filed under another faction's key.
    #[error("record for {found} is filed under {key}")]
    Misfiled {
        /// The map key.
        key: FactionId,
        /// The id inside the record.
        found: FactionId,
    },

    /// A record violates a per-faction invariant.
    #[error("invalid faction record: {0}")]
    Invalid(String),
}

/// Every faction's record, keyed by the closed set of faction ids.
///
/// Populated completely at construction; factions are never added or
/// removed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<FactionId, FactionState>",
    into = "BTreeMap<FactionId, FactionState>"
)]
pub struct FactionStore {
    factions: [FactionState; FACTION_COUNT],
}

impl FactionStore {
    /// Builds a store with each faction's starting stats supplied by
    /// `starting_stats`.
    #[must_use]
    pub fn new(starting_stats: impl Fn(FactionId) -> Stats) -> Self {
        Self {
            factions: FactionId::ALL.map(|id| FactionState::new(id, starting_stats(id))),
        }
    }

    /// Reads one faction's record.
    #[must_use]
    pub fn get(&self, id: FactionId) -> &FactionState {
        &self.factions[id.index()]
    }

    /// Write access to one faction's record.
    ///
    /// The handle only exposes the record's own mutators, so a record can
    /// never be replaced wholesale or moved into another faction's slot.
    pub fn get_mut(&mut self, id: FactionId) -> FactionMut<'_> {
        FactionMut(&mut self.factions[id.index()])
    }

    /// Every record, in canonical faction order.
    pub fn iter(&self) -> impl Iterator<Item = &FactionState> {
        self.factions.iter()
    }

    /// Directly overrides one stat. Leaves history untouched; this is the
    /// arbiter's manual-correction path.
    pub fn set_stat(&mut self, id: FactionId, stat: StatName, value: i32) {
        self.get_mut(id).set_stat(stat, value);
    }
}

/// A borrowed faction record that can be changed in place but not swapped.
#[derive(Debug)]
pub struct FactionMut<'a>(&'a mut FactionState);

impl FactionMut<'_> {
    /// See [`FactionState::relocate`].
    pub fn relocate(&mut self, progress: i32) -> &'static Location {
        self.0.relocate(progress)
    }

    pub fn set_last_move(&mut self, descriptor: impl Into<String>) {
        self.0.set_last_move(descriptor);
    }

    pub fn record_history(&mut self, day: u32, text: &str) {
        self.0.record_history(day, text);
    }

    pub fn set_skip_next_turn(&mut self, skip: bool) {
        self.0.set_skip_next_turn(skip);
    }

    pub fn apply_stat_delta(&mut self, delta: Stats) {
        self.0.apply_stat_delta(delta);
    }

    pub fn set_stat(&mut self, stat: StatName, value: i32) {
        self.0.set_stat(stat, value);
    }
}

impl Deref for FactionMut<'_> {
    type Target = FactionState;

    fn deref(&self) -> &FactionState {
        self.0
    }
}

impl Default for FactionStore {
    fn default() -> Self {
        Self::new(|_| DEFAULT_STARTING_STATS)
    }
}

impl TryFrom<BTreeMap<FactionId, FactionState>> for FactionStore {
    type Error = StoreError;

    fn try_from(mut records: BTreeMap<FactionId, FactionState>) -> Result<Self, Self::Error> {
        let mut ordered = Vec::with_capacity(FACTION_COUNT);
        for id in FactionId::ALL {
            let record = records.remove(&id).ok_or(StoreError::Missing(id))?;
            if record.id() != id {
                return Err(StoreError::Misfiled {
                    key: id,
                    found: record.id(),
                });
            }
            record.validate().map_err(StoreError::Invalid)?;
            ordered.push(record);
        }
        let factions: [FactionState; FACTION_COUNT] = ordered
            .try_into()
            .map_err(|_| StoreError::Invalid("wrong number of factions".to_owned()))?;
        Ok(Self { factions })
    }
}

impl From<FactionStore> for BTreeMap<FactionId, FactionState> {
    fn from(store: FactionStore) -> Self {
        store
            .factions
            .into_iter()
            .map(|record| (record.id(), record))
            .collect()
    }
}
