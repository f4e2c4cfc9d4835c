//! Console abstraction for interactive play
//!
//! The game loop talks to the player only through [`Console`], so it can be
//! driven by a terminal or by a script in tests.

mod console;

pub use console::{Console, LineConsole, ScriptedConsole};
