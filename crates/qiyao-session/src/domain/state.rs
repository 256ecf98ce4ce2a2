//! The game state aggregate.
//!
//! A single writer owns the state: every change after construction goes
//! through the turn commit (see [`commit`](super::commit)) or the arbiter's
//! stat edit.

use qiyao_core::error::DomainError;
use qiyao_core::rng::DeterministicRng;
use qiyao_faction::domain::identity::{FACTION_COUNT, FactionId};
use qiyao_faction::domain::stats::StatName;
use qiyao_faction::domain::store::FactionStore;
use qiyao_track::domain::path::Point;
use qiyao_track::domain::weather::Weather;
use serde::{Deserialize, Serialize};

use super::log::{LogCategory, LogEntry};

/// Log line opening every race.
pub const OPENING_LOG: &str =
    "The Seven Luminaries align and the Reversed Scale surfaces. Seven sects make ready to set out.";

/// Draws a weather condition uniformly from the fixed set.
pub fn sample_weather(rng: &mut dyn DeterministicRng) -> Weather {
    let last = u32::try_from(Weather::ALL.len() - 1).unwrap_or(0);
    Weather::from_index(usize::try_from(rng.next_u32_range(0, last)).unwrap_or(0))
}

/// Checks that `order` names every faction exactly once.
///
/// # Errors
///
/// Returns a description of the problem.
pub fn validate_turn_order(order: &[FactionId]) -> Result<(), String> {
    if order.len() != FACTION_COUNT {
        return Err(format!(
            "turn order must list {FACTION_COUNT} factions, got {}",
            order.len()
        ));
    }
    for id in FactionId::ALL {
        if !order.contains(&id) {
            return Err(format!("turn order is missing {id}"));
        }
    }
    Ok(())
}

/// The whole race: calendar, scheduler, factions and log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) day: u32,
    pub(crate) weather: Weather,
    pub(crate) turn_queue: Vec<FactionId>,
    pub(crate) active_index: usize,
    pub(crate) day_complete: bool,
    pub(crate) factions: FactionStore,
    pub(crate) log: Vec<LogEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) path: Option<Vec<Point>>,
}

impl GameState {
    /// Starts a race on day 1 with freshly sampled weather.
    ///
    /// A path with fewer than two points is dropped.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `turn_order` is not a
    /// permutation of all factions.
    pub fn new(
        turn_order: Vec<FactionId>,
        factions: FactionStore,
        path: Option<Vec<Point>>,
        rng: &mut dyn DeterministicRng,
    ) -> Result<Self, DomainError> {
        validate_turn_order(&turn_order).map_err(DomainError::Validation)?;
        Ok(Self {
            day: 1,
            weather: sample_weather(rng),
            turn_queue: turn_order,
            active_index: 0,
            day_complete: false,
            factions,
            log: vec![LogEntry::new(1, LogCategory::System, OPENING_LOG)],
            path: path.filter(|points| points.len() > 1),
        })
    }

    /// Current day, starting at 1.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.day
    }

    #[must_use]
    pub fn weather(&self) -> Weather {
        self.weather
    }

    /// The fixed turn order.
    #[must_use]
    pub fn turn_queue(&self) -> &[FactionId] {
        &self.turn_queue
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The faction whose turn it is.
    #[must_use]
    pub fn active_faction(&self) -> FactionId {
        self.turn_queue[self.active_index]
    }

    /// `true` only right after the commit that closed a day.
    #[must_use]
    pub fn day_complete(&self) -> bool {
        self.day_complete
    }

    #[must_use]
    pub fn factions(&self) -> &FactionStore {
        &self.factions
    }

    /// The global log, oldest first.
    #[must_use]
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// The drawn path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&[Point]> {
        self.path.as_deref()
    }

    /// The arbiter's manual stat correction. Touches nothing else.
    pub fn set_stat(&mut self, faction: FactionId, stat: StatName, value: i32) {
        self.factions.set_stat(faction, stat, value);
    }

    /// Checks the invariants that deserialization alone cannot enforce.
    ///
    /// # Errors
    ///
    /// Returns a description of the first violated invariant.
    pub fn validate(&self) -> Result<(), String> {
        if self.day == 0 {
            return Err("day must start at 1".to_owned());
        }
        validate_turn_order(&self.turn_queue)?;
        if self.active_index >= self.turn_queue.len() {
            return Err(format!(
                "active index {} is outside the turn queue",
                self.active_index
            ));
        }
        Ok(())
    }
}
