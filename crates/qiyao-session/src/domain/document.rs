//! The saved-game document.
//!
//! A document is the pretty-printed JSON of the game state with a
//! `saved_at` timestamp alongside. The open interaction is never saved.

use chrono::{DateTime, Utc};
use qiyao_core::clock::Clock;
use qiyao_core::error::DomainError;
use serde::Serialize;
use serde_json::Value;

use super::state::GameState;

/// Fields a document must carry to be considered at all.
const REQUIRED_FIELDS: [&str; 2] = ["factions", "log"];

#[derive(Serialize)]
struct SaveDocument<'a> {
    saved_at: DateTime<Utc>,
    #[serde(flatten)]
    state: &'a GameState,
}

/// Serializes `state` into a saved document.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if serialization fails.
pub fn save(state: &GameState, clock: &dyn Clock) -> Result<String, DomainError> {
    let document = SaveDocument {
        saved_at: clock.now(),
        state,
    };
    serde_json::to_string_pretty(&document)
        .map_err(|e| DomainError::Infrastructure(format!("save serialization failed: {e}")))
}

/// Parses a saved document back into a game state.
///
/// # Errors
///
/// Returns `DomainError::Format` if the text is not a JSON object, lacks
/// the faction table or the log, or describes an inconsistent state.
pub fn load(document: &str) -> Result<GameState, DomainError> {
    let value: Value = serde_json::from_str(document)
        .map_err(|e| DomainError::Format(format!("document is not valid JSON: {e}")))?;
    let Some(object) = value.as_object() else {
        return Err(DomainError::Format("document is not a JSON object".to_owned()));
    };
    for field in REQUIRED_FIELDS {
        if !object.contains_key(field) {
            return Err(DomainError::Format(format!("document has no `{field}` field")));
        }
    }

    let state: GameState = serde_json::from_value(value)
        .map_err(|e| DomainError::Format(format!("document is malformed: {e}")))?;
    state.validate().map_err(DomainError::Format)?;
    Ok(state)
}

/// File name offered when the arbiter downloads a save.
#[must_use]
pub fn suggested_file_name(state: &GameState) -> String {
    format!("qiyao_day_{}.json", state.day())
}
