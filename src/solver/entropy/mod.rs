//! Entropy-based attribute selection
//!
//! Implements binary entropy scoring of yes/no questions.
//! This is the foundation of information-theoretic questioning.

mod calculator;
mod selector;

pub use calculator::{AttributeScore, binary_entropy, count_with_attribute, score_attribute};
pub use selector::{attribute_pool, select_best_attribute};
