//! The mutable per-faction record.

use qiyao_track::domain::locations::{self, GOAL_PROGRESS, Location, START_PROGRESS};
use serde::{Deserialize, Serialize};

use super::identity::FactionId;
use super::stats::{StatName, Stats};

/// Move descriptor shown before a faction's first turn.
pub const OPENING_MOVE: &str = "poised to set out";

/// Formats a day-stamped history line.
#[must_use]
pub fn history_line(day: u32, text: &str) -> String {
    format!("[Day {day}] {text}")
}

/// One faction's state in the race.
///
/// The current location is never stored: it is always derived from
/// `progress` through the location table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionState {
    id: FactionId,
    progress: i32,
    stats: Stats,
    visited_locations: Vec<String>,
    last_move: String,
    skip_next_turn: bool,
    history: Vec<String>,
}

impl FactionState {
    /// Creates a faction standing at the start with the given stats.
    #[must_use]
    pub fn new(id: FactionId, stats: Stats) -> Self {
        Self {
            id,
            progress: START_PROGRESS,
            stats,
            visited_locations: vec![locations::location_of(START_PROGRESS).name.to_owned()],
            last_move: OPENING_MOVE.to_owned(),
            skip_next_turn: false,
            history: Vec::new(),
        }
    }

    /// The faction this record belongs to.
    #[must_use]
    pub fn id(&self) -> FactionId {
        self.id
    }

    /// Progress along the track, always within `[0, 120]`.
    #[must_use]
    pub fn progress(&self) -> i32 {
        self.progress
    }

    /// The waypoint the faction currently stands on.
    #[must_use]
    pub fn location(&self) -> &'static Location {
        locations::location_of(self.progress)
    }

    /// Current stats.
    #[must_use]
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Every waypoint visited so far, in discovery order.
    #[must_use]
    pub fn visited_locations(&self) -> &[String] {
        &self.visited_locations
    }

    /// Summary of the faction's last committed move.
    #[must_use]
    pub fn last_move(&self) -> &str {
        &self.last_move
    }

    /// Whether the faction's next turn will be consumed without acting.
    #[must_use]
    pub fn skip_next_turn(&self) -> bool {
        self.skip_next_turn
    }

    /// Day-stamped history lines, oldest first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// `true` once the faction stands on the goal.
    #[must_use]
    pub fn has_arrived(&self) -> bool {
        self.progress == GOAL_PROGRESS
    }

    /// Moves the faction to `progress` (clamped onto the track) and records
    /// the destination as visited if it is new. Returns the destination.
    pub fn relocate(&mut self, progress: i32) -> &'static Location {
        self.progress = progress.clamp(START_PROGRESS, GOAL_PROGRESS);
        let location = self.location();
        if !self.visited_locations.iter().any(|name| name == location.name) {
            self.visited_locations.push(location.name.to_owned());
        }
        location
    }

    /// Replaces the last-move descriptor.
    pub fn set_last_move(&mut self, descriptor: impl Into<String>) {
        self.last_move = descriptor.into();
    }

    /// Appends a day-stamped line to the history.
    pub fn record_history(&mut self, day: u32, text: &str) {
        self.history.push(history_line(day, text));
    }

    /// Sets or clears the skip flag.
    pub fn set_skip_next_turn(&mut self, skip: bool) {
        self.skip_next_turn = skip;
    }

    /// Adds `delta` to the current stats.
    pub fn apply_stat_delta(&mut self, delta: Stats) {
        self.stats = self.stats.plus(delta);
    }

    /// Overwrites a single stat.
    pub fn set_stat(&mut self, stat: StatName, value: i32) {
        self.stats.set(stat, value);
    }

    /// Checks the record's invariants; used when accepting external data.
    ///
    /// # Errors
    ///
    /// Returns a description of the first violated invariant.
    pub fn validate(&self) -> Result<(), String> {
        if !(START_PROGRESS..=GOAL_PROGRESS).contains(&self.progress) {
            return Err(format!(
                "{}: progress {} is off the track",
                self.id, self.progress
            ));
        }
        let start = locations::location_of(START_PROGRESS).name;
        if !self.visited_locations.iter().any(|name| name == start) {
            return Err(format!("{}: visited locations omit the start", self.id));
        }
        for (i, name) in self.visited_locations.iter().enumerate() {
            if self.visited_locations[..i].contains(name) {
                return Err(format!("{}: location {name} visited twice", self.id));
            }
        }
        Ok(())
    }
}
