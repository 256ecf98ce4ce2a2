//! Qiyao Core: shared domain abstractions.
//!
//! This crate defines the fundamental traits and types that every other
//! crate in the race engine depends on. It contains no infrastructure code.

pub mod clock;
pub mod command;
pub mod error;
pub mod repository;
pub mod rng;
