//! Formatting utilities for terminal output

use crate::core::Entity;

/// Join candidate names for display
#[must_use]
pub fn format_candidates(candidates: &[&Entity]) -> String {
    if candidates.is_empty() {
        return "(none)".to_string();
    }

    candidates
        .iter()
        .map(|candidate| candidate.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar; a yes/no question carries at most 1 bit
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    create_progress_bar(entropy, 1.0, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_candidates_joins_names() {
        let thor = Entity::new("Thor", ["Hammer"]).unwrap();
        let hulk = Entity::new("Hulk", ["Avenger"]).unwrap();
        assert_eq!(format_candidates(&[&thor, &hulk]), "Thor, Hulk");
    }

    #[test]
    fn format_candidates_empty() {
        assert_eq!(format_candidates(&[]), "(none)");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn entropy_bar_one_bit_is_full() {
        assert_eq!(entropy_bar(1.0, 4), "████");
        assert_eq!(entropy_bar(0.0, 4), "░░░░");
    }
}
