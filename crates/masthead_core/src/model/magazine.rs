//! Magazine domain model.
//!
//! # Responsibility
//! - Hold a publication venue's name and category.
//! - Enforce the asymmetric write policy: first assignment fails on an
//!   invalid value, later writes silently keep the prior valid value.
//!
//! # Invariants
//! - `name` is always within [`MAGAZINE_NAME_MIN_CHARS`,
//!   `MAGAZINE_NAME_MAX_CHARS`] characters inclusive.
//! - `category` is always non-empty.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::ValidationError;

/// Stable identifier for a magazine.
pub type MagazineId = Uuid;

/// Minimum magazine name length, in characters, inclusive.
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
/// Maximum magazine name length, in characters, inclusive.
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;

/// A named, categorized publication venue. Leaf entity with no outgoing
/// references; contributors and articles are derived from the article
/// registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
}

impl Magazine {
    /// Creates a magazine with a generated stable ID.
    ///
    /// # Errors
    /// - `ValidationError::MagazineNameLength` when `name` is outside the
    ///   allowed character range.
    /// - `ValidationError::EmptyMagazineCategory` when `category` is empty.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), name, category)
    }

    /// Creates a magazine with a caller-provided stable ID.
    pub fn with_id(
        id: MagazineId,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let category = category.into();
        validate_name(&name)?;
        validate_category(&category)?;
        Ok(Self { id, name, category })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Replaces the name when the new value is valid.
    ///
    /// An invalid value is dropped and the prior valid name retained, with
    /// no error raised; the returned bool reports whether the write was
    /// applied.
    pub fn try_set_name(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if validate_name(&value).is_err() {
            return false;
        }
        self.name = value;
        true
    }

    /// Replaces the category when the new value is valid.
    ///
    /// Same contract as [`Magazine::try_set_name`].
    pub fn try_set_category(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if validate_category(&value).is_err() {
            return false;
        }
        self.category = value;
        true
    }
}

fn validate_name(value: &str) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&length) {
        return Err(ValidationError::MagazineNameLength(length));
    }
    Ok(())
}

fn validate_category(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyMagazineCategory);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_category, validate_name};
    use crate::model::ValidationError;

    #[test]
    fn name_bounds_are_inclusive() {
        assert!(validate_name("AB").is_ok());
        assert!(validate_name("ExactlySixteenCh").is_ok());
        assert_eq!(
            validate_name("A"),
            Err(ValidationError::MagazineNameLength(1))
        );
        assert_eq!(
            validate_name("SeventeenChars!!!"),
            Err(ValidationError::MagazineNameLength(17))
        );
    }

    #[test]
    fn name_length_counts_chars_not_bytes() {
        // Two chars, six bytes.
        assert!(validate_name("日本").is_ok());
    }

    #[test]
    fn category_must_be_non_empty() {
        assert!(validate_category("Tech").is_ok());
        assert_eq!(
            validate_category(""),
            Err(ValidationError::EmptyMagazineCategory)
        );
    }
}
