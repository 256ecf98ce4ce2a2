//! Qiyao race engine: narrative generation.
//!
//! Responsible for the flavour text attached to every move, conflict and
//! opportunity. The engine talks to a [`NarrativeGenerator`]; a text model
//! sits behind it when one is configured, and deterministic fallback text
//! covers every failure.
//!
//! [`NarrativeGenerator`]: application::generator::NarrativeGenerator

pub mod application;
pub mod domain;
