//! Faction stats.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four signed, unbounded faction stats.
///
/// The same shape doubles as a set of deltas when an opportunity adjusts
/// several stats at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Fighting strength.
    pub martial: i32,
    /// Cunning and planning.
    pub strategy: i32,
    /// Coin and supplies.
    pub wealth: i32,
    /// Standing in the martial world.
    pub prestige: i32,
}

/// Stats every faction starts the race with unless the arbiter overrides
/// them.
pub const DEFAULT_STARTING_STATS: Stats = Stats {
    martial: 20,
    strategy: 20,
    wealth: 20,
    prestige: 0,
};

/// Names one of the four stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatName {
    /// [`Stats::martial`].
    Martial,
    /// [`Stats::strategy`].
    Strategy,
    /// [`Stats::wealth`].
    Wealth,
    /// [`Stats::prestige`].
    Prestige,
}

impl Stats {
    /// Reads one stat.
    #[must_use]
    pub fn get(&self, stat: StatName) -> i32 {
        match stat {
            StatName::Martial => self.martial,
            StatName::Strategy => self.strategy,
            StatName::Wealth => self.wealth,
            StatName::Prestige => self.prestige,
        }
    }

    /// Overwrites one stat.
    pub fn set(&mut self, stat: StatName, value: i32) {
        match stat {
            StatName::Martial => self.martial = value,
            StatName::Strategy => self.strategy = value,
            StatName::Wealth => self.wealth = value,
            StatName::Prestige => self.prestige = value,
        }
    }

    /// Returns these stats with `delta` added component-wise (saturating).
    #[must_use]
    pub fn plus(self, delta: Stats) -> Stats {
        Stats {
            martial: self.martial.saturating_add(delta.martial),
            strategy: self.strategy.saturating_add(delta.strategy),
            wealth: self.wealth.saturating_add(delta.wealth),
            prestige: self.prestige.saturating_add(delta.prestige),
        }
    }

    /// `true` when every component is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Stats::default()
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "martial {}, strategy {}, wealth {}, prestige {}",
            self.martial, self.strategy, self.wealth, self.prestige
        )
    }
}
