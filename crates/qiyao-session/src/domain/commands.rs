//! Commands the arbiter issues to the game session.

use std::collections::BTreeMap;

use qiyao_core::command::Command;
use qiyao_faction::domain::identity::FactionId;
use qiyao_faction::domain::stats::{StatName, Stats};
use qiyao_track::domain::path::Point;
use uuid::Uuid;

use super::input::ArbiterNumber;
use super::resolution::{PvpMode, RewardDirection};

/// Command to start a new race, replacing any game in progress.
#[derive(Debug, Clone)]
pub struct InitializeGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Turn order; canonical order when absent.
    pub turn_order: Option<Vec<FactionId>>,
    /// Per-faction starting stats; factions left out get the defaults.
    pub starting_stats: BTreeMap<FactionId, Stats>,
    /// Path drawn over the map, used only for display.
    pub path: Option<Vec<Point>>,
}

impl Command for InitializeGame {
    fn command_type(&self) -> &'static str {
        "session.initialize_game"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to play the active faction's turn.
#[derive(Debug, Clone)]
pub struct AdvanceTurn {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Distance the arbiter rolled for the move.
    pub distance: ArbiterNumber,
}

impl Command for AdvanceTurn {
    fn command_type(&self) -> &'static str {
        "session.advance_turn"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to settle an open meeting between two factions.
#[derive(Debug, Clone)]
pub struct ResolvePvp {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The prevailing faction; must be the actor or the target.
    pub winner: FactionId,
    pub mode: PvpMode,
    /// How far the loser falls back.
    pub distance: ArbiterNumber,
}

impl Command for ResolvePvp {
    fn command_type(&self) -> &'static str {
        "session.resolve_pvp"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to settle an open chance encounter.
#[derive(Debug, Clone)]
pub struct ResolveOpportunity {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    pub success: bool,
    pub direction: RewardDirection,
    pub distance: ArbiterNumber,
    /// Added to the actor's stats whatever the outcome.
    pub stat_deltas: Stats,
    pub skip_next_turn: bool,
    pub extra_action: bool,
}

impl Command for ResolveOpportunity {
    fn command_type(&self) -> &'static str {
        "session.resolve_opportunity"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to overwrite one stat of one faction.
#[derive(Debug, Clone)]
pub struct EditStat {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    pub faction: FactionId,
    pub stat: StatName,
    pub value: ArbiterNumber,
}

impl Command for EditStat {
    fn command_type(&self) -> &'static str {
        "session.edit_stat"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to export the game as a saved document.
#[derive(Debug, Clone)]
pub struct SaveGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for SaveGame {
    fn command_type(&self) -> &'static str {
        "session.save_game"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to replace the game with a saved document.
#[derive(Debug, Clone)]
pub struct LoadGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    pub document: String,
}

impl Command for LoadGame {
    fn command_type(&self) -> &'static str {
        "session.load_game"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to write the saved document into a named slot.
#[derive(Debug, Clone)]
pub struct StoreSave {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    pub slot: String,
}

impl Command for StoreSave {
    fn command_type(&self) -> &'static str {
        "session.store_save"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to load the document held in a named slot.
#[derive(Debug, Clone)]
pub struct LoadSave {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    pub slot: String,
}

impl Command for LoadSave {
    fn command_type(&self) -> &'static str {
        "session.load_save"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
