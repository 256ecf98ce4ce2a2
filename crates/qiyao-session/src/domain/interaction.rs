//! The interaction awaiting the arbiter's ruling.

use qiyao_faction::domain::identity::FactionId;

/// What kind of interaction is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionKind {
    /// The actor arrived where `target` stands.
    Pvp { target: FactionId },
    /// A chance encounter.
    Opportunity { title: String },
}

/// A suspended turn: the actor's move is computed but not committed.
///
/// At most one is open at a time. It blocks new turn starts and is dropped
/// as soon as the arbiter resolves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub kind: InteractionKind,
    pub actor: FactionId,
    pub location_name: String,
    /// Narrative text; for opportunities, story and arbiter notes packed
    /// with the reserved delimiter.
    pub narrative: String,
    /// Where the actor ends up unless the resolution moves it further.
    pub pending_progress: i32,
}
