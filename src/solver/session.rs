//! Guessing session state machine
//!
//! A session narrows a candidate set one yes/no question at a time.

use super::entropy::{AttributeScore, attribute_pool};
use super::strategy::Strategy;
use crate::core::{Answer, Entity};
use rustc_hash::FxHashSet;
use tracing::info;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState<'a> {
    /// More than one candidate and at least one question left
    Running,
    /// Exactly one candidate remains
    Guessed(&'a Entity),
    /// No candidates left, or no question can tell the remaining ones apart
    Exhausted,
}

impl SessionState<'_> {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Record of one answered question
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub attribute: String,
    pub answer: Answer,
    pub entropy: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// A single game over a borrowed list of entities
///
/// The candidate set only ever shrinks and keeps the original order.
/// Every asked attribute is recorded and never selected again.
pub struct Session<'a, S: Strategy> {
    strategy: S,
    candidates: Vec<&'a Entity>,
    asked: FxHashSet<String>,
    rounds: Vec<Round>,
}

impl<'a, S: Strategy> Session<'a, S> {
    /// Start a session with every entity as a candidate
    pub fn new(strategy: S, entities: &'a [Entity]) -> Self {
        Self {
            strategy,
            candidates: entities.iter().collect(),
            asked: FxHashSet::default(),
            rounds: Vec::new(),
        }
    }

    /// Current state of the game
    pub fn state(&self) -> SessionState<'a> {
        match self.candidates.as_slice() {
            [only] => SessionState::Guessed(*only),
            [] => SessionState::Exhausted,
            candidates if attribute_pool(candidates, &self.asked).is_empty() => {
                SessionState::Exhausted
            }
            _ => SessionState::Running,
        }
    }

    /// Choose the next question, or `None` once the session is over
    pub fn next_question(&self) -> Option<AttributeScore> {
        if self.state().is_terminal() {
            return None;
        }

        let question = self.strategy.select_attribute(&self.candidates, &self.asked)?;
        info!(
            attribute = %question.attribute,
            entropy = question.entropy,
            "selected question"
        );
        Some(question)
    }

    /// Filter the candidates by an answer and mark the attribute as asked
    ///
    /// A `Yes` keeps the candidates that carry the attribute, a `No` keeps the rest.
    pub fn apply_answer(&mut self, attribute: &str, answer: Answer) -> Round {
        let candidates_before = self.candidates.len();
        let count = self
            .candidates
            .iter()
            .filter(|c| c.has_attribute(attribute))
            .count();
        let entropy = super::entropy::binary_entropy(count, candidates_before);

        self.candidates
            .retain(|candidate| candidate.has_attribute(attribute) == answer.is_affirmative());
        self.asked.insert(attribute.to_string());

        let round = Round {
            attribute: attribute.to_string(),
            answer,
            entropy,
            candidates_before,
            candidates_after: self.candidates.len(),
        };
        info!(
            attribute,
            %answer,
            before = round.candidates_before,
            after = round.candidates_after,
            "filtered candidates"
        );

        self.rounds.push(round.clone());
        round
    }

    /// Candidates still consistent with every answer
    pub fn candidates(&self) -> &[&'a Entity] {
        &self.candidates
    }

    pub fn asked(&self) -> &FxHashSet<String> {
        &self.asked
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }
}
