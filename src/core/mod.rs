//! Core domain types for the guessing game
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear semantics.

mod answer;
mod entity;

pub use answer::{Answer, ResponsePolicy};
pub use entity::{Entity, EntityError};
