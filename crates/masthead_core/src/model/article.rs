//! Article domain model.
//!
//! # Invariants
//! - `title` is non-empty and fixed at construction.
//! - An article always references exactly one author and one magazine.
//!   Associations are reassigned only through the repository, which
//!   checks that the target id is registered before the write lands.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use crate::model::ValidationError;

/// Stable identifier for an article.
pub type ArticleId = Uuid;

/// Join entity linking exactly one author and one magazine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    id: ArticleId,
    author: AuthorId,
    magazine: MagazineId,
    title: String,
}

impl Article {
    /// Creates an article with a generated stable ID.
    ///
    /// # Errors
    /// - `ValidationError::EmptyArticleTitle` when `title` is empty.
    pub fn new(
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), author, magazine, title)
    }

    /// Creates an article with a caller-provided stable ID.
    pub fn with_id(
        id: ArticleId,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ValidationError::EmptyArticleTitle);
        }
        Ok(Self {
            id,
            author,
            magazine,
            title,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    /// Returns the title, fixed at construction.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn set_author(&mut self, author: AuthorId) {
        self.author = author;
    }

    pub(crate) fn set_magazine(&mut self, magazine: MagazineId) {
        self.magazine = magazine;
    }
}
