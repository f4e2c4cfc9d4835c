//! Pure entropy-based attribute selection
//!
//! Selects the unasked attribute that maximizes binary entropy (expected information gain).

use super::calculator::{AttributeScore, score_attribute};
use crate::core::Entity;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use tracing::debug;

/// Collect every attribute carried by at least one candidate and not yet asked
///
/// The pool is ordered by attribute name, which fixes the tie-break order of selection.
#[must_use]
pub fn attribute_pool<'a>(
    candidates: &[&'a Entity],
    asked: &FxHashSet<String>,
) -> BTreeSet<&'a str> {
    candidates
        .iter()
        .flat_map(|&candidate| candidate.attributes())
        .filter(|attribute| !asked.contains(*attribute))
        .collect()
}

/// Select best attribute by maximizing entropy
///
/// Returns the highest-scoring unasked attribute, or `None` if every attribute
/// on the remaining candidates has already been asked. Ties go to the
/// lexicographically smallest attribute name.
///
/// # Examples
/// ```
/// use rustc_hash::FxHashSet;
/// use trait_guesser::core::Entity;
/// use trait_guesser::solver::entropy::select_best_attribute;
///
/// let thor = Entity::new("Thor", ["Hammer", "Avenger"]).unwrap();
/// let hulk = Entity::new("Hulk", ["Avenger"]).unwrap();
/// let candidates = vec![&thor, &hulk];
///
/// let best = select_best_attribute(&candidates, &FxHashSet::default()).unwrap();
/// assert_eq!(best.attribute, "Hammer"); // Avenger is shared by everyone
/// assert!((best.entropy - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn select_best_attribute(
    candidates: &[&Entity],
    asked: &FxHashSet<String>,
) -> Option<AttributeScore> {
    let mut best: Option<AttributeScore> = None;

    for attribute in attribute_pool(candidates, asked) {
        let score = score_attribute(candidates, attribute);
        debug!(
            attribute,
            entropy = score.entropy,
            count = score.count,
            total = score.total,
            "scored attribute"
        );

        if best.as_ref().is_none_or(|b| score.entropy > b.entropy) {
            best = Some(score);
        }
    }

    best
}
