//! The day's weather over the whole track.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the fixed weather conditions, resampled at the start of every day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    #[default]
    ClearSkies,
    Overcast,
    Drizzle,
    Downpour,
    DenseFog,
    Gale,
    Snowfall,
    Thunderstorm,
}

impl Weather {
    /// Every condition, in sampling order.
    pub const ALL: [Weather; 8] = [
        Weather::ClearSkies,
        Weather::Overcast,
        Weather::Drizzle,
        Weather::Downpour,
        Weather::DenseFog,
        Weather::Gale,
        Weather::Snowfall,
        Weather::Thunderstorm,
    ];

    /// Human-readable label used in narration and the read model.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Weather::ClearSkies => "Clear Skies",
            Weather::Overcast => "Overcast",
            Weather::Drizzle => "Drizzle",
            Weather::Downpour => "Downpour",
            Weather::DenseFog => "Dense Fog",
            Weather::Gale => "Gale",
            Weather::Snowfall => "Snowfall",
            Weather::Thunderstorm => "Thunderstorm",
        }
    }

    /// Picks the condition at `index` in [`Weather::ALL`], wrapping around.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
