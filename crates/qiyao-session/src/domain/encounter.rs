//! Classifies what a move runs into.

use qiyao_core::rng::DeterministicRng;
use qiyao_faction::domain::identity::FactionId;
use qiyao_track::domain::locations::Location;
use tracing::debug;

use super::state::GameState;

/// Chance that a move without a collision opens an opportunity.
pub const OPPORTUNITY_CHANCE: f64 = 0.70;

/// Outcome of encounter detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encounter {
    /// Nothing happens; the move commits directly.
    None,
    /// The destination is occupied by this faction.
    Collision(FactionId),
    /// The opportunity roll succeeded.
    OpportunityRoll,
}

/// Classifies a move of `actor` onto `destination`.
///
/// Collisions are never checked on the start or the goal;
/// other factions are scanned in canonical order and the first one standing
/// on the destination wins. Skip-flagged factions count. Without a
/// collision one roll decides whether an opportunity opens; the RNG is not
/// touched when a collision is found.
pub fn detect(
    state: &GameState,
    actor: FactionId,
    destination: &Location,
    rng: &mut dyn DeterministicRng,
) -> Encounter {
    if !destination.is_terminus() {
        let occupant = state
            .factions()
            .iter()
            .filter(|faction| faction.id() != actor)
            .find(|faction| faction.location().name == destination.name);
        if let Some(occupant) = occupant {
            debug!(%actor, target = %occupant.id(), location = destination.name, "collision detected");
            return Encounter::Collision(occupant.id());
        }
    }

    if rng.next_f64() < OPPORTUNITY_CHANCE {
        debug!(%actor, location = destination.name, "opportunity rolled");
        Encounter::OpportunityRoll
    } else {
        debug!(%actor, location = destination.name, "no encounter");
        Encounter::None
    }
}
