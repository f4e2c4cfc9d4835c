//! Binary entropy calculation for yes/no questions
//!
//! Given an attribute and set of candidates, computes the expected information gain
//! of asking whether the secret character has that attribute.

use crate::core::Entity;

/// Score of a single attribute against a candidate set
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeScore {
    /// The attribute being scored
    pub attribute: String,
    /// Number of candidates carrying the attribute
    pub count: usize,
    /// Size of the candidate set
    pub total: usize,
    /// Binary entropy of the split (bits)
    pub entropy: f64,
}

impl AttributeScore {
    /// Worst-case number of candidates left after asking this question
    #[must_use]
    pub fn worst_case_remaining(&self) -> usize {
        self.count.max(self.total - self.count)
    }
}

/// Calculate the binary entropy of splitting `total` candidates into `count` and `total - count`
///
/// # Formula
/// H(p) = -p * log₂(p) - (1 - p) * log₂(1 - p), with p = count / total
///
/// # Properties
/// - Returns 0.0 when nobody or everybody has the attribute
/// - Maximized at p = 0.5 (exactly 1 bit)
/// - Symmetric: H(count, total) == H(total - count, total)
///
/// # Examples
/// ```
/// use trait_guesser::solver::entropy::binary_entropy;
///
/// assert!((binary_entropy(2, 4) - 1.0).abs() < 1e-12);
/// assert!((binary_entropy(1, 3) - 0.918_295_834).abs() < 1e-6);
/// assert_eq!(binary_entropy(0, 3), 0.0);
/// assert_eq!(binary_entropy(3, 3), 0.0);
/// ```
#[must_use]
pub fn binary_entropy(count: usize, total: usize) -> f64 {
    if count == 0 || count >= total {
        return 0.0;
    }

    // Evaluate from the minority side so both halves of a split score bit-identically
    let minority = count.min(total - count);
    let p = minority as f64 / total as f64;
    let q = 1.0 - p;

    -p * p.log2() - q * q.log2()
}

/// Count how many candidates carry an attribute
#[must_use]
pub fn count_with_attribute(candidates: &[&Entity], attribute: &str) -> usize {
    candidates
        .iter()
        .filter(|candidate| candidate.has_attribute(attribute))
        .count()
}

/// Score an attribute against the candidate set
///
/// # Examples
/// ```
/// use trait_guesser::core::Entity;
/// use trait_guesser::solver::entropy::score_attribute;
///
/// let thor = Entity::new("Thor", ["Hammer"]).unwrap();
/// let hulk = Entity::new("Hulk", ["Avenger"]).unwrap();
/// let candidates = vec![&thor, &hulk];
///
/// let score = score_attribute(&candidates, "Hammer");
/// assert_eq!(score.count, 1);
/// assert_eq!(score.total, 2);
/// assert!((score.entropy - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn score_attribute(candidates: &[&Entity], attribute: &str) -> AttributeScore {
    let count = count_with_attribute(candidates, attribute);
    let total = candidates.len();

    AttributeScore {
        attribute: attribute.to_string(),
        count,
        total,
        entropy: binary_entropy(count, total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_THIRD_ENTROPY: f64 = 0.918_295_834_054_489_6;

    #[test]
    fn binary_entropy_perfect_split() {
        assert!((binary_entropy(1, 2) - 1.0).abs() < 1e-12);
        assert!((binary_entropy(5, 10) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn binary_entropy_one_third() {
        assert!((binary_entropy(1, 3) - ONE_THIRD_ENTROPY).abs() < 1e-12);
    }

    #[test]
    fn binary_entropy_non_discriminating() {
        for total in 1..20 {
            assert!(binary_entropy(0, total).abs() < f64::EPSILON);
            assert!(binary_entropy(total, total).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn binary_entropy_empty_set() {
        assert!(binary_entropy(0, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn binary_entropy_bounds() {
        for total in 2..40 {
            for count in 1..total {
                let h = binary_entropy(count, total);
                assert!(h > 0.0, "H({count}, {total}) should be positive");
                assert!(h <= 1.0 + 1e-12, "H({count}, {total}) exceeds 1 bit");
            }
        }
    }

    #[test]
    fn binary_entropy_symmetric() {
        for total in 2..40 {
            for count in 1..total {
                let a = binary_entropy(count, total);
                let b = binary_entropy(total - count, total);
                assert!((a - b).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn binary_entropy_prefers_even_splits() {
        assert!(binary_entropy(5, 10) > binary_entropy(3, 10));
        assert!(binary_entropy(3, 10) > binary_entropy(1, 10));
    }

    #[test]
    fn score_attribute_counts_holders() {
        let thor = Entity::new("Thor", ["Hammer", "Avenger"]).unwrap();
        let hulk = Entity::new("Hulk", ["Avenger"]).unwrap();
        let harry = Entity::new("Harry Potter", ["Wizard"]).unwrap();
        let candidates = vec![&thor, &hulk, &harry];

        let score = score_attribute(&candidates, "Avenger");
        assert_eq!(score.attribute, "Avenger");
        assert_eq!(score.count, 2);
        assert_eq!(score.total, 3);
        assert!((score.entropy - ONE_THIRD_ENTROPY).abs() < 1e-12);
        assert_eq!(score.worst_case_remaining(), 2);
    }

    #[test]
    fn score_attribute_unknown_attribute() {
        let thor = Entity::new("Thor", ["Hammer"]).unwrap();
        let candidates = vec![&thor];

        let score = score_attribute(&candidates, "Wizard");
        assert_eq!(score.count, 0);
        assert!(score.entropy.abs() < f64::EPSILON);
    }

    #[test]
    fn score_attribute_empty_candidates() {
        let candidates: Vec<&Entity> = vec![];
        let score = score_attribute(&candidates, "Hammer");
        assert_eq!(score.total, 0);
        assert_eq!(score.worst_case_remaining(), 0);
        assert!(score.entropy.abs() < f64::EPSILON);
    }
}
