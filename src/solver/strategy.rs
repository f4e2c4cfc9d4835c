//! Question selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::entropy::{AttributeScore, attribute_pool, score_attribute};
use crate::core::Entity;
use rustc_hash::FxHashSet;

/// A strategy for selecting the next attribute to ask about
pub trait Strategy {
    /// Select the next attribute given the current candidates and the attributes already asked
    ///
    /// Returns the chosen attribute with its score, or `None` if no unasked attribute remains.
    fn select_attribute(
        &self,
        candidates: &[&Entity],
        asked: &FxHashSet<String>,
    ) -> Option<AttributeScore>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Pure entropy maximization (default)
    Entropy(EntropyStrategy),
    /// Pure minimax optimization
    Minimax(MinimaxStrategy),
    /// Random selection from the attribute pool
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_attribute(
        &self,
        candidates: &[&Entity],
        asked: &FxHashSet<String>,
    ) -> Option<AttributeScore> {
        match self {
            Self::Entropy(s) => s.select_attribute(candidates, asked),
            Self::Minimax(s) => s.select_attribute(candidates, asked),
            Self::Random(s) => s.select_attribute(candidates, asked),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "entropy", "minimax", "random".
    /// Defaults to entropy if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "minimax" => Self::Minimax(MinimaxStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Entropy(EntropyStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Entropy(_) => "entropy",
            Self::Minimax(_) => "minimax",
            Self::Random(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Entropy(EntropyStrategy)
    }
}

/// Pure entropy maximization strategy
///
/// Always selects the attribute with the highest binary entropy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select_attribute(
        &self,
        candidates: &[&Entity],
        asked: &FxHashSet<String>,
    ) -> Option<AttributeScore> {
        super::entropy::select_best_attribute(candidates, asked)
    }
}

/// Pure minimax strategy
///
/// Always selects the attribute that minimizes worst-case remaining candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_attribute(
        &self,
        candidates: &[&Entity],
        asked: &FxHashSet<String>,
    ) -> Option<AttributeScore> {
        super::minimax::select_min_worst_case(candidates, asked)
    }
}

/// Random strategy
///
/// Picks any unasked attribute uniformly. Useful as a baseline when simulating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_attribute(
        &self,
        candidates: &[&Entity],
        asked: &FxHashSet<String>,
    ) -> Option<AttributeScore> {
        use rand::prelude::IndexedRandom;

        let pool: Vec<&str> = attribute_pool(candidates, asked).into_iter().collect();
        pool.choose(&mut rand::rng())
            .map(|attribute| score_attribute(candidates, attribute))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_data() -> Vec<Entity> {
        vec![
            Entity::new("Thor", ["Hammer", "Avenger"]).unwrap(),
            Entity::new("Hulk", ["Avenger", "Green"]).unwrap(),
            Entity::new("Harry Potter", ["Wizard"]).unwrap(),
        ]
    }

    #[test]
    fn entropy_strategy_selects_attribute() {
        let entities = setup_test_data();
        let candidates: Vec<&Entity> = entities.iter().collect();

        let result = EntropyStrategy.select_attribute(&candidates, &FxHashSet::default());

        // Every attribute splits 1/3 or 2/3, so the tie goes to "Avenger"
        assert_eq!(result.unwrap().attribute, "Avenger");
    }

    #[test]
    fn minimax_strategy_selects_attribute() {
        let entities = setup_test_data();
        let candidates: Vec<&Entity> = entities.iter().collect();

        let result = MinimaxStrategy.select_attribute(&candidates, &FxHashSet::default());
        assert_eq!(result.unwrap().worst_case_remaining(), 2);
    }

    #[test]
    fn random_strategy_selects_from_pool() {
        let entities = setup_test_data();
        let candidates: Vec<&Entity> = entities.iter().collect();
        let asked: FxHashSet<String> = ["Hammer", "Avenger", "Green"]
            .into_iter()
            .map(str::to_string)
            .collect();

        let result = RandomStrategy.select_attribute(&candidates, &asked);

        // Should select the only unasked attribute
        assert_eq!(result.unwrap().attribute, "Wizard");
    }

    #[test]
    fn random_strategy_empty_pool() {
        let result = RandomStrategy.select_attribute(&[], &FxHashSet::default());
        assert!(result.is_none());
    }

    #[test]
    fn strategy_from_name() {
        assert_eq!(StrategyType::from_name("minimax").name(), "minimax");
        assert_eq!(StrategyType::from_name("random").name(), "random");
        assert_eq!(StrategyType::from_name("entropy").name(), "entropy");
        assert_eq!(StrategyType::from_name("bogus").name(), "entropy");
        assert_eq!(StrategyType::default(), StrategyType::Entropy(EntropyStrategy));
    }

    #[test]
    fn strategy_type_dispatches() {
        let entities = setup_test_data();
        let candidates: Vec<&Entity> = entities.iter().collect();
        let asked = FxHashSet::default();

        let direct = EntropyStrategy.select_attribute(&candidates, &asked);
        let wrapped = StrategyType::from_name("entropy").select_attribute(&candidates, &asked);
        assert_eq!(direct, wrapped);
    }
}
