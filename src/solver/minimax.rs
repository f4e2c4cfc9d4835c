//! Minimax attribute selection
//!
//! Picks the question whose worse answer leaves the fewest candidates.

use super::entropy::{AttributeScore, attribute_pool, score_attribute};
use crate::core::Entity;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Select the attribute minimizing the worst-case remaining candidates
///
/// Ties go to the lexicographically smallest attribute name, as with entropy selection.
/// Returns `None` if no unasked attribute remains.
#[must_use]
pub fn select_min_worst_case(
    candidates: &[&Entity],
    asked: &FxHashSet<String>,
) -> Option<AttributeScore> {
    let mut best: Option<AttributeScore> = None;

    for attribute in attribute_pool(candidates, asked) {
        let score = score_attribute(candidates, attribute);
        debug!(
            attribute,
            worst_case = score.worst_case_remaining(),
            total = score.total,
            "scored attribute"
        );

        if best
            .as_ref()
            .is_none_or(|b| score.worst_case_remaining() < b.worst_case_remaining())
        {
            best = Some(score);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimizes_worst_case() {
        let entities = vec![
            Entity::new("A", ["x", "y"]).unwrap(),
            Entity::new("B", ["y"]).unwrap(),
            Entity::new("C", ["z"]).unwrap(),
            Entity::new("D", ["z"]).unwrap(),
        ];
        let candidates: Vec<&Entity> = entities.iter().collect();

        let best = select_min_worst_case(&candidates, &FxHashSet::default()).unwrap();

        // x leaves 3 in the worst case, y and z leave 2; y sorts first
        assert_eq!(best.attribute, "y");
        assert_eq!(best.worst_case_remaining(), 2);
    }

    #[test]
    fn skips_asked_attributes() {
        let entities = vec![
            Entity::new("A", ["x", "y"]).unwrap(),
            Entity::new("B", ["y"]).unwrap(),
        ];
        let candidates: Vec<&Entity> = entities.iter().collect();
        let asked: FxHashSet<String> = std::iter::once("x".to_string()).collect();

        let best = select_min_worst_case(&candidates, &asked).unwrap();
        assert_eq!(best.attribute, "y");
    }

    #[test]
    fn returns_none_on_empty_pool() {
        let entity = Entity::new("A", ["x"]).unwrap();
        let asked: FxHashSet<String> = std::iter::once("x".to_string()).collect();

        assert!(select_min_worst_case(&[&entity], &asked).is_none());
    }
}
