//! Press registry contract and in-memory implementation.
//!
//! # Responsibility
//! - Register authors, magazines and articles into ordered registries.
//! - Validate association targets on every write.
//!
//! # Invariants
//! - A registered article's author/magazine ids always refer to
//!   registered entities.
//! - Registries preserve insertion order, grow monotonically, and are
//!   only emptied by `clear`.
//! - A failed registration leaves every registry untouched.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::ValidationError;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Registry error for registration, lookup and association operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    AuthorNotFound(AuthorId),
    MagazineNotFound(MagazineId),
    ArticleNotFound(ArticleId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::AuthorNotFound(id) => write!(f, "author not found: {id}"),
            Self::MagazineNotFound(id) => write!(f, "magazine not found: {id}"),
            Self::ArticleNotFound(id) => write!(f, "article not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Registry interface for entity registration and lookup.
///
/// Reads borrow from the registry; writes take `&mut self`. A concurrent
/// host must serialize access externally, no internal locking is done.
pub trait PressRepository {
    /// Registers a new author, returning its stable id.
    fn add_author(&mut self, name: &str) -> RepoResult<AuthorId>;
    /// Registers a new magazine, returning its stable id.
    fn add_magazine(&mut self, name: &str, category: &str) -> RepoResult<MagazineId>;
    /// Registers a new article for an existing author and magazine.
    fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: &str,
    ) -> RepoResult<ArticleId>;

    fn get_author(&self, id: AuthorId) -> Option<&Author>;
    fn get_magazine(&self, id: MagazineId) -> Option<&Magazine>;
    fn get_article(&self, id: ArticleId) -> Option<&Article>;

    /// Every registered author, in registration order.
    fn authors(&self) -> &[Author];
    /// Every registered magazine, in registration order.
    fn magazines(&self) -> &[Magazine];
    /// Every registered article, in registration order.
    fn articles(&self) -> &[Article];

    /// Attempts to rename an author. Author names are immutable, so this
    /// returns `Ok(false)` for any registered author; only an unknown id
    /// is an error.
    fn rename_author(&mut self, id: AuthorId, new_name: &str) -> RepoResult<bool>;
    /// Attempts to rename a magazine. An invalid name is silently ignored
    /// (`Ok(false)`), a valid one replaces the prior value (`Ok(true)`).
    fn rename_magazine(&mut self, id: MagazineId, new_name: &str) -> RepoResult<bool>;
    /// Attempts to recategorize a magazine, with the same contract as
    /// `rename_magazine`.
    fn recategorize_magazine(&mut self, id: MagazineId, new_category: &str) -> RepoResult<bool>;

    /// Repoints an article at another registered author.
    fn set_article_author(&mut self, article: ArticleId, author: AuthorId) -> RepoResult<()>;
    /// Repoints an article at another registered magazine.
    fn set_article_magazine(&mut self, article: ArticleId, magazine: MagazineId)
        -> RepoResult<()>;

    /// Empties every registry. Meant for test isolation between
    /// independent scenarios.
    fn clear(&mut self);
}

/// In-memory registry holding all constructed entities for the lifetime
/// of the repository. This object *is* the data store; relationship
/// queries scan it live and no denormalized state exists to drift.
#[derive(Debug, Default)]
pub struct InMemoryPressRepository {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
}

impl InMemoryPressRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PressRepository for InMemoryPressRepository {
    fn add_author(&mut self, name: &str) -> RepoResult<AuthorId> {
        let author = Author::new(name)?;
        let id = author.id();
        self.authors.push(author);
        Ok(id)
    }

    fn add_magazine(&mut self, name: &str, category: &str) -> RepoResult<MagazineId> {
        let magazine = Magazine::new(name, category)?;
        let id = magazine.id();
        self.magazines.push(magazine);
        Ok(id)
    }

    fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: &str,
    ) -> RepoResult<ArticleId> {
        if self.get_author(author).is_none() {
            return Err(RepoError::AuthorNotFound(author));
        }
        if self.get_magazine(magazine).is_none() {
            return Err(RepoError::MagazineNotFound(magazine));
        }

        let article = Article::new(author, magazine, title)?;
        let id = article.id();
        self.articles.push(article);
        Ok(id)
    }

    fn get_author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.iter().find(|author| author.id() == id)
    }

    fn get_magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.iter().find(|magazine| magazine.id() == id)
    }

    fn get_article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|article| article.id() == id)
    }

    fn authors(&self) -> &[Author] {
        &self.authors
    }

    fn magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    fn articles(&self) -> &[Article] {
        &self.articles
    }

    fn rename_author(&mut self, id: AuthorId, new_name: &str) -> RepoResult<bool> {
        let author = self
            .authors
            .iter_mut()
            .find(|author| author.id() == id)
            .ok_or(RepoError::AuthorNotFound(id))?;
        Ok(author.try_rename(new_name))
    }

    fn rename_magazine(&mut self, id: MagazineId, new_name: &str) -> RepoResult<bool> {
        let magazine = self
            .magazines
            .iter_mut()
            .find(|magazine| magazine.id() == id)
            .ok_or(RepoError::MagazineNotFound(id))?;
        Ok(magazine.try_set_name(new_name))
    }

    fn recategorize_magazine(&mut self, id: MagazineId, new_category: &str) -> RepoResult<bool> {
        let magazine = self
            .magazines
            .iter_mut()
            .find(|magazine| magazine.id() == id)
            .ok_or(RepoError::MagazineNotFound(id))?;
        Ok(magazine.try_set_category(new_category))
    }

    fn set_article_author(&mut self, article: ArticleId, author: AuthorId) -> RepoResult<()> {
        if self.get_author(author).is_none() {
            return Err(RepoError::AuthorNotFound(author));
        }
        let article = self
            .articles
            .iter_mut()
            .find(|candidate| candidate.id() == article)
            .ok_or(RepoError::ArticleNotFound(article))?;
        article.set_author(author);
        Ok(())
    }

    fn set_article_magazine(
        &mut self,
        article: ArticleId,
        magazine: MagazineId,
    ) -> RepoResult<()> {
        if self.get_magazine(magazine).is_none() {
            return Err(RepoError::MagazineNotFound(magazine));
        }
        let article = self
            .articles
            .iter_mut()
            .find(|candidate| candidate.id() == article)
            .ok_or(RepoError::ArticleNotFound(article))?;
        article.set_magazine(magazine);
        Ok(())
    }

    fn clear(&mut self) {
        info!(
            "event=registry_clear module=repo status=ok authors={} magazines={} articles={}",
            self.authors.len(),
            self.magazines.len(),
            self.articles.len()
        );
        self.authors.clear();
        self.magazines.clear();
        self.articles.clear();
    }
}
