//! Author domain model.
//!
//! # Invariants
//! - `name` is non-empty and fixed at construction.
//! - Which articles an author owns is never stored here; it is derived
//!   from the article registry on every query.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::ValidationError;

/// Stable identifier for an author.
pub type AuthorId = Uuid;

/// A named contributor. Leaf entity with no outgoing references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    id: AuthorId,
    name: String,
}

impl Author {
    /// Creates an author with a generated stable ID.
    ///
    /// # Errors
    /// - `ValidationError::EmptyAuthorName` when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates an author with a caller-provided stable ID.
    pub fn with_id(id: AuthorId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyAuthorName);
        }
        Ok(Self { id, name })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    /// Returns the author's name, fixed at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attempts to rename the author.
    ///
    /// The name is immutable for the author's lifetime: the write is
    /// dropped and `false` is returned. This never raises and never
    /// mutates; callers that must detect the rejection branch on the
    /// returned bool.
    pub fn try_rename(&mut self, _new_name: &str) -> bool {
        false
    }
}
