//! Qiyao race engine: the shared race track.
//!
//! Responsible for the static table of named waypoints indexed by progress,
//! the weather hanging over the track, and for projecting a progress value
//! onto a drawn path for visualization.

pub mod domain;
