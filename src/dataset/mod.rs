//! Built-in character data
//!
//! The game plays over a fixed in-memory list of characters compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{CHARACTERS, CHARACTERS_COUNT};

use crate::core::Entity;

/// Build the default character list
#[must_use]
pub fn characters() -> Vec<Entity> {
    loader::entities_from_slice(CHARACTERS)
}
