//! Question selection and game state
//!
//! This module contains the scoring, selection strategies and the session state machine.

pub mod entropy;
pub mod minimax;
mod session;
pub mod strategy;

pub use session::{Round, Session, SessionState};
pub use strategy::{EntropyStrategy, MinimaxStrategy, RandomStrategy, Strategy, StrategyType};
