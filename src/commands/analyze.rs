//! Attribute analysis command
//!
//! Scores every attribute against the full character list.

use crate::core::Entity;
use crate::solver::entropy::{AttributeScore, attribute_pool, score_attribute};
use rustc_hash::FxHashSet;

/// Result of analyzing a character list
pub struct AnalysisResult {
    pub total_candidates: usize,
    /// Every attribute, most informative first (ties by name)
    pub scores: Vec<AttributeScore>,
}

impl AnalysisResult {
    /// The question entropy selection would ask first
    #[must_use]
    pub fn best(&self) -> Option<&AttributeScore> {
        self.scores.first()
    }
}

/// Score every attribute of `entities` against the whole list
#[must_use]
pub fn analyze_attributes(entities: &[Entity]) -> AnalysisResult {
    let candidates: Vec<&Entity> = entities.iter().collect();

    let mut scores: Vec<AttributeScore> = attribute_pool(&candidates, &FxHashSet::default())
        .into_iter()
        .map(|attribute| score_attribute(&candidates, attribute))
        .collect();

    // Pool is name-ordered and the sort is stable, so ties stay alphabetical
    scores.sort_by(|a, b| b.entropy.total_cmp(&a.entropy));

    AnalysisResult {
        total_candidates: candidates.len(),
        scores,
    }
}
