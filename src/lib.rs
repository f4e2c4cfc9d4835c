//! Trait Guesser
//!
//! A character guessing game that always asks the yes/no question carrying the most information.
//!
//! # Quick Start
//!
//! ```rust
//! use trait_guesser::core::Answer;
//! use trait_guesser::dataset::characters;
//! use trait_guesser::solver::{EntropyStrategy, Session, SessionState};
//!
//! let entities = characters();
//! let mut session = Session::new(EntropyStrategy, &entities);
//!
//! let question = session.next_question().unwrap();
//! session.apply_answer(&question.attribute, Answer::Yes);
//!
//! assert!(matches!(session.state(), SessionState::Guessed(_)));
//! ```

// Core domain types
pub mod core;

// Question selection and session state
pub mod solver;

// Built-in character data
pub mod dataset;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Console abstraction for interactive play
pub mod interactive;
