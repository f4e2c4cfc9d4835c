//! Entity representation
//!
//! An Entity is a named candidate answer (a character) tagged with a set of attributes.

use rustc_hash::FxHashSet;
use std::fmt;

/// A named candidate with a set of boolean attributes
///
/// Attributes are stored as a set: duplicates collapse and order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    name: String,
    attributes: FxHashSet<String>,
}

/// Error type for invalid entities
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityError {
    EmptyName,
    EmptyAttribute { entity: String },
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Entity name must not be empty"),
            Self::EmptyAttribute { entity } => {
                write!(f, "Entity '{entity}' has an empty attribute")
            }
        }
    }
}

impl std::error::Error for EntityError {}

impl Entity {
    /// Create a new Entity from a name and its attributes
    ///
    /// Names and attributes are trimmed; repeated attributes are kept once.
    ///
    /// # Errors
    /// Returns `EntityError` if:
    /// - The name is empty after trimming
    /// - Any attribute is empty after trimming
    ///
    /// # Examples
    /// ```
    /// use trait_guesser::core::Entity;
    ///
    /// let thor = Entity::new("Thor", ["Hammer", "Asgardian", "Hammer"]).unwrap();
    /// assert_eq!(thor.name(), "Thor");
    /// assert_eq!(thor.attribute_count(), 2);
    /// assert!(thor.has_attribute("Hammer"));
    ///
    /// assert!(Entity::new("  ", ["Hammer"]).is_err());
    /// ```
    pub fn new<I, A>(name: impl Into<String>, attributes: I) -> Result<Self, EntityError>
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(EntityError::EmptyName);
        }

        let mut set = FxHashSet::default();
        for attribute in attributes {
            let attribute = attribute.into().trim().to_string();
            if attribute.is_empty() {
                return Err(EntityError::EmptyAttribute { entity: name });
            }
            set.insert(attribute);
        }

        Ok(Self {
            name,
            attributes: set,
        })
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check whether this entity carries an attribute (exact, case-sensitive)
    #[inline]
    #[must_use]
    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.attributes.contains(attribute)
    }

    /// Iterate over the attributes in unspecified order
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
