//! Simulation command
//!
//! Plays a full game for every character with a truthful automated player
//! and reports how many questions each one took.

use crate::core::{Answer, Entity};
use crate::solver::{Session, SessionState, Strategy, StrategyType};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::warn;

/// Result from simulating a single character
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub target: String,
    pub guess: Option<String>,
    pub questions: Vec<String>,
    pub success: bool,
}

/// Statistics from simulating every character
#[derive(Debug)]
pub struct SimulationStatistics {
    pub strategy: &'static str,
    pub total: usize,
    pub solved: usize,
    pub failed: usize,
    pub average_questions: f64,
    pub max_questions: usize,
    pub results: Vec<SimulationResult>,
    pub duration: Duration,
}

/// Play one game where the player is thinking of `target`
///
/// Every question is answered truthfully from the target's attributes.
pub fn simulate_entity<S: Strategy>(
    strategy: S,
    entities: &[Entity],
    target: &Entity,
) -> SimulationResult {
    let mut session = Session::new(strategy, entities);
    let mut questions = Vec::new();

    while let Some(question) = session.next_question() {
        let answer = Answer::from_bool(target.has_attribute(&question.attribute));
        session.apply_answer(&question.attribute, answer);
        questions.push(question.attribute);
    }

    let guess = match session.state() {
        SessionState::Guessed(entity) => Some(entity.name().to_string()),
        SessionState::Running | SessionState::Exhausted => None,
    };
    let success = guess.as_deref() == Some(target.name());
    if !success {
        warn!(character = target.name(), "simulation failed to identify character");
    }

    SimulationResult {
        target: target.name().to_string(),
        guess,
        questions,
        success,
    }
}

/// Simulate a game for every character in `entities`
///
/// Games are independent and run in parallel; results keep the input order.
#[must_use]
pub fn run_simulation(
    entities: &[Entity],
    strategy: StrategyType,
    show_progress: bool,
) -> SimulationStatistics {
    let pb = if show_progress {
        let pb = ProgressBar::new(entities.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )
            .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░")),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let results: Vec<SimulationResult> = entities
        .par_iter()
        .map(|target| {
            let result = simulate_entity(strategy, entities, target);
            pb.set_message(result.target.clone());
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();

    let total = results.len();
    let solved = results.iter().filter(|r| r.success).count();
    let total_questions: usize = results.iter().map(|r| r.questions.len()).sum();

    SimulationStatistics {
        strategy: strategy.name(),
        total,
        solved,
        failed: total - solved,
        average_questions: if total == 0 {
            0.0
        } else {
            total_questions as f64 / total as f64
        },
        max_questions: results.iter().map(|r| r.questions.len()).max().unwrap_or(0),
        results,
        duration: start.elapsed(),
    }
}
