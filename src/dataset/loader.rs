//! Entity list construction utilities

use crate::core::Entity;
use rustc_hash::FxHashSet;
use tracing::warn;

/// Convert a static `(name, traits)` slice to an Entity vector
///
/// Invalid entries and repeated names are skipped with a warning; the first
/// occurrence of a name wins and declaration order is preserved.
///
/// # Examples
/// ```
/// use trait_guesser::dataset::loader::entities_from_slice;
/// use trait_guesser::dataset::CHARACTERS;
///
/// let entities = entities_from_slice(CHARACTERS);
/// assert_eq!(entities.len(), CHARACTERS.len());
/// ```
#[must_use]
pub fn entities_from_slice(slice: &[(&str, &[&str])]) -> Vec<Entity> {
    let mut seen: FxHashSet<String> = FxHashSet::default();

    slice
        .iter()
        .filter_map(|&(name, traits)| match Entity::new(name, traits.iter().copied()) {
            Ok(entity) => Some(entity),
            Err(e) => {
                warn!("skipping entity: {e}");
                None
            }
        })
        .filter(|entity| {
            let fresh = seen.insert(entity.name().to_string());
            if !fresh {
                warn!("skipping duplicate entity '{}'", entity.name());
            }
            fresh
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entities_from_slice_converts_valid_entries() {
        let input: &[(&str, &[&str])] = &[("Thor", &["Hammer"]), ("Hulk", &["Avenger"])];
        let entities = entities_from_slice(input);

        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].name(), "Thor");
        assert_eq!(entities[1].name(), "Hulk");
    }

    #[test]
    fn entities_from_slice_skips_invalid() {
        let input: &[(&str, &[&str])] = &[
            ("Thor", &["Hammer"]),
            ("", &["Nameless"]),
            ("Loki", &[""]),
            ("Hulk", &["Avenger"]),
        ];
        let entities = entities_from_slice(input);

        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].name(), "Thor");
        assert_eq!(entities[1].name(), "Hulk");
    }

    #[test]
    fn entities_from_slice_skips_duplicate_names() {
        let input: &[(&str, &[&str])] = &[("Thor", &["Hammer"]), ("Thor", &["Cape"])];
        let entities = entities_from_slice(input);

        assert_eq!(entities.len(), 1);
        assert!(entities[0].has_attribute("Hammer"));
        assert!(!entities[0].has_attribute("Cape"));
    }

    #[test]
    fn entities_from_slice_empty() {
        let input: &[(&str, &[&str])] = &[];
        assert!(entities_from_slice(input).is_empty());
    }
}
