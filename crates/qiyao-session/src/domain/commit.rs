//! Turn commit and the scheduler.

use qiyao_core::rng::DeterministicRng;
use tracing::debug;

use super::log::LogEntry;
use super::resolution::ResolvedTurn;
use super::state::{GameState, sample_weather};

/// Describes a committed move for the faction card.
#[must_use]
pub fn move_descriptor(delta: i32, was_skipped: bool, action_again: bool) -> String {
    let mut descriptor = if was_skipped {
        "skip".to_owned()
    } else if delta > 0 {
        format!("+{delta} li")
    } else if delta < 0 {
        format!("{delta} li")
    } else {
        "unchanged".to_owned()
    };
    if action_again {
        descriptor.push_str(" (extra action)");
    }
    descriptor
}

impl GameState {
    /// Applies a planned turn and advances the scheduler.
    ///
    /// A retreat is applied first, then the actor's stat deltas and skip
    /// flag, then the actor's move. The move descriptor is measured from the
    /// actor's progress at that point, so an actor that lost its own
    /// meeting sees the delta from its retreated position.
    pub(crate) fn apply_turn(&mut self, turn: ResolvedTurn, rng: &mut dyn DeterministicRng) {
        let day = self.day;

        if let Some(retreat) = &turn.retreat {
            let mut loser = self.factions.get_mut(retreat.faction);
            loser.relocate(retreat.progress);
            loser.set_last_move(retreat.descriptor.clone());
            loser.record_history(day, &turn.log_text);
        }

        let mut actor = self.factions.get_mut(turn.actor);
        actor.apply_stat_delta(turn.stat_deltas);
        if turn.force_skip {
            actor.set_skip_next_turn(true);
        }

        let previous = actor.progress();
        actor.relocate(turn.final_progress);
        let delta = actor.progress() - previous;
        actor.set_last_move(move_descriptor(delta, turn.was_skipped, turn.action_again));
        if turn.was_skipped {
            actor.set_skip_next_turn(false);
        }
        actor.record_history(day, &turn.log_text);

        self.log
            .push(LogEntry::new(day, turn.category, turn.log_text));
        self.advance_scheduler(turn.action_again, rng);
    }

    fn advance_scheduler(&mut self, action_again: bool, rng: &mut dyn DeterministicRng) {
        self.day_complete = false;
        if action_again {
            debug!(faction = %self.active_faction(), "extra action; scheduler holds");
            return;
        }

        self.active_index += 1;
        if self.active_index >= self.turn_queue.len() {
            self.active_index = 0;
            self.day += 1;
            self.day_complete = true;
            self.weather = sample_weather(rng);
            debug!(day = self.day, weather = %self.weather, "new day");
        }
        debug!(next = %self.active_faction(), "scheduler advanced");
    }
}
