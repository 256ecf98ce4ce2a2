//! Turning an arbiter ruling into state changes.
//!
//! Planning only reads the state and yields a [`ResolvedTurn`]; applying it
//! (see [`commit`](super::commit)) cannot fail. A rejected ruling therefore
//! never leaves a half-applied turn behind.

use qiyao_core::error::DomainError;
use qiyao_faction::domain::identity::FactionId;
use qiyao_faction::domain::stats::Stats;
use qiyao_track::domain::locations::{self, GOAL_PROGRESS, START_PROGRESS};
use serde::{Deserialize, Serialize};

use super::interaction::{Interaction, InteractionKind};
use super::log::LogCategory;
use super::state::GameState;

/// How a meeting between two factions ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PvpMode {
    /// The loser is beaten back.
    Battle,
    /// The loser gives way.
    Negotiate,
    /// Both sides join forces; nobody moves.
    Coop,
}

/// Which way a successful opportunity moves the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardDirection {
    #[default]
    Forward,
    Backward,
}

/// The arbiter's ruling on a meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PvpRuling {
    pub winner: FactionId,
    pub mode: PvpMode,
    /// Retreat distance, already coerced to be non-negative.
    pub distance: i32,
}

/// The arbiter's ruling on a chance encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpportunityRuling {
    pub success: bool,
    pub direction: RewardDirection,
    /// Distance, already coerced to be non-negative.
    pub distance: i32,
    pub stat_deltas: Stats,
    pub skip_next_turn: bool,
    pub extra_action: bool,
}

/// The losing side of a meeting, pushed back before the actor commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retreat {
    pub faction: FactionId,
    pub progress: i32,
    pub descriptor: String,
}

/// Every change one turn makes, ready to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTurn {
    pub actor: FactionId,
    pub final_progress: i32,
    pub log_text: String,
    pub category: LogCategory,
    pub retreat: Option<Retreat>,
    pub stat_deltas: Stats,
    pub force_skip: bool,
    /// The turn consumed the actor's skip flag.
    pub was_skipped: bool,
    /// The actor acts again; the scheduler does not advance.
    pub action_again: bool,
}

impl ResolvedTurn {
    fn commit_only(actor: FactionId, final_progress: i32, log_text: String) -> Self {
        Self {
            actor,
            final_progress,
            log_text,
            category: LogCategory::Move,
            retreat: None,
            stat_deltas: Stats::default(),
            force_skip: false,
            was_skipped: false,
            action_again: false,
        }
    }

    /// A plain move with no encounter.
    #[must_use]
    pub fn plain_move(actor: FactionId, final_progress: i32, narrative: impl Into<String>) -> Self {
        Self::commit_only(actor, final_progress, narrative.into())
    }

    /// A turn consumed by the actor's skip flag: no movement.
    #[must_use]
    pub fn skipped(state: &GameState, actor: FactionId) -> Self {
        let progress = state.factions().get(actor).progress();
        Self {
            was_skipped: true,
            ..Self::commit_only(
                actor,
                progress,
                format!(
                    "[Stalled] Still reeling from earlier events, {} cannot act this turn.",
                    actor.name()
                ),
            )
        }
    }
}

fn check_actor(state: &GameState, interaction: &Interaction) -> Result<(), DomainError> {
    if interaction.actor == state.active_faction() {
        Ok(())
    } else {
        Err(DomainError::Validation(format!(
            "interaction belongs to {}, but it is {}'s turn",
            interaction.actor,
            state.active_faction()
        )))
    }
}

/// Plans the resolution of an open meeting.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the interaction is not a meeting or
/// the winner is neither of the two factions involved.
pub fn plan_pvp(
    state: &GameState,
    interaction: &Interaction,
    ruling: PvpRuling,
) -> Result<ResolvedTurn, DomainError> {
    let InteractionKind::Pvp { target } = interaction.kind else {
        return Err(DomainError::Validation(
            "the open interaction is not a meeting".to_owned(),
        ));
    };
    check_actor(state, interaction)?;
    let actor = interaction.actor;
    if ruling.winner != actor && ruling.winner != target {
        return Err(DomainError::Validation(format!(
            "winner {} is not part of this meeting",
            ruling.winner
        )));
    }

    let loser = if ruling.winner == actor { target } else { actor };
    let distance = ruling.distance.max(0);
    let place = &interaction.location_name;

    let (log_text, retreat_label) = match ruling.mode {
        PvpMode::Coop => (
            format!(
                "[Alliance] At {place}, {} and {} set aside old grudges and face the danger together. Neither side gives ground.",
                actor.name(),
                target.name()
            ),
            None,
        ),
        PvpMode::Negotiate => (
            format!(
                "[Encounter] At {place}, {} chooses to yield and falls back {distance} li.",
                loser.name()
            ),
            Some("yielded"),
        ),
        PvpMode::Battle => (
            format!(
                "[Battle] Fierce fighting breaks out at {place}! {} prevails and {} is driven back {distance} li.",
                ruling.winner.name(),
                loser.name()
            ),
            Some("defeated"),
        ),
    };

    let retreat = retreat_label.map(|label| Retreat {
        faction: loser,
        progress: (state.factions().get(loser).progress() - distance).max(START_PROGRESS),
        descriptor: format!("-{distance} li ({label})"),
    });

    Ok(ResolvedTurn {
        category: LogCategory::Conflict,
        retreat,
        ..ResolvedTurn::commit_only(actor, interaction.pending_progress, log_text)
    })
}

/// Plans the resolution of an open chance encounter.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the interaction is not an
/// opportunity.
pub fn plan_opportunity(
    state: &GameState,
    interaction: &Interaction,
    ruling: OpportunityRuling,
) -> Result<ResolvedTurn, DomainError> {
    if !matches!(interaction.kind, InteractionKind::Opportunity { .. }) {
        return Err(DomainError::Validation(
            "the open interaction is not an opportunity".to_owned(),
        ));
    }
    check_actor(state, interaction)?;
    let actor = interaction.actor;
    let distance = ruling.distance.max(0);

    let forward = ruling.success && ruling.direction == RewardDirection::Forward;
    let moved = if forward {
        interaction.pending_progress.saturating_add(distance)
    } else {
        interaction.pending_progress.saturating_sub(distance)
    };
    let final_progress = moved.clamp(START_PROGRESS, GOAL_PROGRESS);
    let destination = locations::location_of(final_progress);

    let mut extras = Vec::new();
    if ruling.skip_next_turn {
        extras.push("stalled next turn");
    }
    if ruling.extra_action {
        extras.push("moves again");
    }
    let extras = if extras.is_empty() {
        String::new()
    } else {
        format!(", {}", extras.join(", "))
    };

    let log_text = format!(
        "[Fortune] At {}, {} meets {}. {} {distance} li to {}{extras}.",
        interaction.location_name,
        actor.name(),
        if ruling.success {
            "great fortune"
        } else {
            "ill fortune"
        },
        if forward { "Advances" } else { "Falls back" },
        destination.name,
    );

    Ok(ResolvedTurn {
        category: LogCategory::Event,
        stat_deltas: ruling.stat_deltas,
        force_skip: ruling.skip_next_turn,
        action_again: ruling.extra_action,
        ..ResolvedTurn::commit_only(actor, final_progress, log_text)
    })
}

#[cfg(test)]
mod tests {
    use qiyao_faction::domain::store::FactionStore;
    use qiyao_test_support::MockRng;
    use qiyao_track::domain::locations::location_of;

    use super::*;

    fn state() -> GameState {
        let mut state =
            GameState::new(FactionId::ALL.to_vec(), FactionStore::default(), None, &mut MockRng)
                .unwrap();
        state.factions.get_mut(FactionId::Tianhe).relocate(35);
        state.factions.get_mut(FactionId::Beige).relocate(40);
        state
    }

    fn meeting() -> Interaction {
        Interaction {
            kind: InteractionKind::Pvp {
                target: FactionId::Beige,
            },
            actor: FactionId::Tianhe,
            location_name: location_of(40).name.to_owned(),
            narrative: String::new(),
            pending_progress: 40,
        }
    }

    fn fortune(pending_progress: i32) -> Interaction {
        Interaction {
            kind: InteractionKind::Opportunity {
                title: "Lost Letter".to_owned(),
            },
            actor: FactionId::Tianhe,
            location_name: location_of(pending_progress).name.to_owned(),
            narrative: String::new(),
            pending_progress,
        }
    }

    fn ruling(success: bool, direction: RewardDirection, distance: i32) -> OpportunityRuling {
        OpportunityRuling {
            success,
            direction,
            distance,
            stat_deltas: Stats::default(),
            skip_next_turn: false,
            extra_action: false,
        }
    }

    #[test]
    fn test_battle_pushes_loser_back_and_actor_keeps_pending() {
        // Arrange
        let ruling = PvpRuling {
            winner: FactionId::Tianhe,
            mode: PvpMode::Battle,
            distance: 10,
        };

        // Act
        let turn = plan_pvp(&state(), &meeting(), ruling).unwrap();

        // Assert
        assert_eq!(turn.final_progress, 40);
        assert_eq!(turn.category, LogCategory::Conflict);
        assert_eq!(
            turn.retreat,
            Some(Retreat {
                faction: FactionId::Beige,
                progress: 30,
                descriptor: "-10 li (defeated)".to_owned(),
            })
        );
    }

    #[test]
    fn test_negotiation_marks_loser_as_yielding() {
        let ruling = PvpRuling {
            winner: FactionId::Beige,
            mode: PvpMode::Negotiate,
            distance: 50,
        };

        let turn = plan_pvp(&state(), &meeting(), ruling).unwrap();

        let retreat = turn.retreat.unwrap();
        assert_eq!(retreat.faction, FactionId::Tianhe);
        assert_eq!(retreat.progress, 0);
        assert_eq!(retreat.descriptor, "-50 li (yielded)");
        assert_eq!(turn.final_progress, 40);
    }

    #[test]
    fn test_coop_moves_nobody() {
        let ruling = PvpRuling {
            winner: FactionId::Tianhe,
            mode: PvpMode::Coop,
            distance: 9,
        };

        let turn = plan_pvp(&state(), &meeting(), ruling).unwrap();

        assert!(turn.retreat.is_none());
        assert!(turn.log_text.starts_with("[Alliance]"));
    }

    #[test]
    fn test_outsider_cannot_win() {
        let ruling = PvpRuling {
            winner: FactionId::Dari,
            mode: PvpMode::Battle,
            distance: 3,
        };

        let result = plan_pvp(&state(), &meeting(), ruling);

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_pvp_ruling_on_opportunity_is_rejected() {
        let ruling = PvpRuling {
            winner: FactionId::Tianhe,
            mode: PvpMode::Battle,
            distance: 3,
        };

        let result = plan_pvp(&state(), &fortune(40), ruling);

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_opportunity_directions() {
        let state = state();
        let cases = [
            (true, RewardDirection::Forward, 50),
            (true, RewardDirection::Backward, 30),
            (false, RewardDirection::Forward, 30),
            (false, RewardDirection::Backward, 30),
        ];

        for (success, direction, expected) in cases {
            let turn =
                plan_opportunity(&state, &fortune(40), ruling(success, direction, 10)).unwrap();
            assert_eq!(turn.final_progress, expected, "{success} {direction:?}");
            assert_eq!(turn.category, LogCategory::Event);
        }
    }

    #[test]
    fn test_opportunity_progress_is_clamped() {
        let state = state();

        let past_goal =
            plan_opportunity(&state, &fortune(115), ruling(true, RewardDirection::Forward, 30))
                .unwrap();
        let past_start =
            plan_opportunity(&state, &fortune(5), ruling(false, RewardDirection::Forward, 30))
                .unwrap();

        assert_eq!(past_goal.final_progress, 120);
        assert_eq!(past_start.final_progress, 0);
    }

    #[test]
    fn test_opportunity_carries_flags_and_deltas() {
        let deltas = Stats {
            martial: -5,
            prestige: 3,
            ..Stats::default()
        };
        let ruling = OpportunityRuling {
            stat_deltas: deltas,
            skip_next_turn: true,
            extra_action: true,
            ..ruling(false, RewardDirection::Forward, 0)
        };

        let turn = plan_opportunity(&state(), &fortune(40), ruling).unwrap();

        assert_eq!(turn.stat_deltas, deltas);
        assert!(turn.force_skip);
        assert!(turn.action_again);
        assert!(turn.log_text.ends_with("stalled next turn, moves again."));
    }

    #[test]
    fn test_opportunity_ruling_on_meeting_is_rejected() {
        let result = plan_opportunity(
            &state(),
            &meeting(),
            ruling(true, RewardDirection::Forward, 1),
        );
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
