//! Press use-case service.
//!
//! # Responsibility
//! - Provide creation entry points over the registry.
//! - Answer relationship queries (author↔magazines, magazine↔authors,
//!   magazine↔articles, author↔articles) by scanning the registries.
//!
//! # Invariants
//! - No relationship state is cached; every query reflects the registries
//!   as they are at call time.
//! - Distinct-set results are deduplicated by entity id in
//!   first-contribution order, so output is deterministic.
//! - Queries that answer "nothing to report" return `None`, which is
//!   distinct from an empty collection of matches.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::press_repo::{PressRepository, RepoError, RepoResult};
use std::collections::{BTreeSet, HashSet};

/// Use-case service wrapper over a press registry.
pub struct PressService<R: PressRepository> {
    repo: R,
}

impl<R: PressRepository> PressService<R> {
    /// Creates a service using the provided registry implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new author.
    pub fn register_author(&mut self, name: &str) -> RepoResult<AuthorId> {
        self.repo.add_author(name)
    }

    /// Registers a new magazine.
    pub fn register_magazine(&mut self, name: &str, category: &str) -> RepoResult<MagazineId> {
        self.repo.add_magazine(name, category)
    }

    /// Creates and registers a new article by `author` in `magazine`.
    ///
    /// Returns registry-level validation and not-found errors unchanged.
    pub fn publish_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: &str,
    ) -> RepoResult<ArticleId> {
        self.repo.add_article(author, magazine, title)
    }

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.repo.get_author(id)
    }

    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.repo.get_magazine(id)
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.repo.get_article(id)
    }

    /// Every article by `author`, in registration order.
    pub fn articles_by_author(&self, author: AuthorId) -> RepoResult<Vec<Article>> {
        self.require_author(author)?;
        Ok(self
            .repo
            .articles()
            .iter()
            .filter(|article| article.author() == author)
            .cloned()
            .collect())
    }

    /// Distinct magazines `author` has contributed to, in
    /// first-contribution order. Empty when the author has no articles.
    pub fn magazines_for_author(&self, author: AuthorId) -> RepoResult<Vec<Magazine>> {
        self.require_author(author)?;
        let mut seen = HashSet::new();
        Ok(self
            .repo
            .articles()
            .iter()
            .filter(|article| article.author() == author)
            .filter(|article| seen.insert(article.magazine()))
            .filter_map(|article| self.repo.get_magazine(article.magazine()))
            .cloned()
            .collect())
    }

    /// Distinct categories across `author`'s magazines, or `None` when
    /// the author has no magazines at all. An empty category set cannot
    /// occur since category is mandatory.
    pub fn topic_areas(&self, author: AuthorId) -> RepoResult<Option<BTreeSet<String>>> {
        let magazines = self.magazines_for_author(author)?;
        if magazines.is_empty() {
            return Ok(None);
        }
        Ok(Some(
            magazines
                .iter()
                .map(|magazine| magazine.category().to_string())
                .collect(),
        ))
    }

    /// Every article published in `magazine`, in registration order.
    pub fn articles_in_magazine(&self, magazine: MagazineId) -> RepoResult<Vec<Article>> {
        self.require_magazine(magazine)?;
        Ok(self
            .repo
            .articles()
            .iter()
            .filter(|article| article.magazine() == magazine)
            .cloned()
            .collect())
    }

    /// Distinct authors who have written for `magazine`, in
    /// first-contribution order.
    pub fn contributors(&self, magazine: MagazineId) -> RepoResult<Vec<Author>> {
        self.require_magazine(magazine)?;
        let mut seen = HashSet::new();
        Ok(self
            .repo
            .articles()
            .iter()
            .filter(|article| article.magazine() == magazine)
            .filter(|article| seen.insert(article.author()))
            .filter_map(|article| self.repo.get_author(article.author()))
            .cloned()
            .collect())
    }

    /// Titles of `magazine`'s articles in registration order, or `None`
    /// when the magazine has no articles. An empty title list cannot
    /// occur since titles are mandatory.
    pub fn article_titles(&self, magazine: MagazineId) -> RepoResult<Option<Vec<String>>> {
        let articles = self.articles_in_magazine(magazine)?;
        if articles.is_empty() {
            return Ok(None);
        }
        Ok(Some(
            articles
                .iter()
                .map(|article| article.title().to_string())
                .collect(),
        ))
    }

    /// Contributors with strictly more than 2 articles in `magazine`, in
    /// first-contribution order, or `None` when no author qualifies.
    pub fn contributing_authors(&self, magazine: MagazineId) -> RepoResult<Option<Vec<Author>>> {
        let articles = self.articles_in_magazine(magazine)?;

        let mut counts: Vec<(AuthorId, usize)> = Vec::new();
        for article in &articles {
            match counts.iter_mut().find(|(id, _)| *id == article.author()) {
                Some((_, count)) => *count += 1,
                None => counts.push((article.author(), 1)),
            }
        }

        let qualified: Vec<Author> = counts
            .iter()
            .filter(|(_, count)| *count > 2)
            .filter_map(|(id, _)| self.repo.get_author(*id))
            .cloned()
            .collect();

        if qualified.is_empty() {
            return Ok(None);
        }
        Ok(Some(qualified))
    }

    /// The magazine with the most registered articles, or `None` when no
    /// magazine exists or no article has been published anywhere. The
    /// first-registered magazine wins ties.
    pub fn top_publisher(&self) -> Option<Magazine> {
        let mut best: Option<(&Magazine, usize)> = None;
        for magazine in self.repo.magazines() {
            let count = self
                .repo
                .articles()
                .iter()
                .filter(|article| article.magazine() == magazine.id())
                .count();
            // Strictly-greater keeps the earliest magazine on ties.
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((magazine, count));
            }
        }
        match best {
            Some((_, 0)) | None => None,
            Some((magazine, _)) => Some(magazine.clone()),
        }
    }

    /// Attempts to rename an author. See `PressRepository::rename_author`.
    pub fn rename_author(&mut self, id: AuthorId, new_name: &str) -> RepoResult<bool> {
        self.repo.rename_author(id, new_name)
    }

    /// Attempts to rename a magazine; `Ok(false)` means the value was
    /// silently ignored.
    pub fn rename_magazine(&mut self, id: MagazineId, new_name: &str) -> RepoResult<bool> {
        self.repo.rename_magazine(id, new_name)
    }

    /// Attempts to recategorize a magazine; same contract as
    /// [`PressService::rename_magazine`].
    pub fn recategorize_magazine(
        &mut self,
        id: MagazineId,
        new_category: &str,
    ) -> RepoResult<bool> {
        self.repo.recategorize_magazine(id, new_category)
    }

    /// Repoints an article at another registered author.
    pub fn set_article_author(&mut self, article: ArticleId, author: AuthorId) -> RepoResult<()> {
        self.repo.set_article_author(article, author)
    }

    /// Repoints an article at another registered magazine.
    pub fn set_article_magazine(
        &mut self,
        article: ArticleId,
        magazine: MagazineId,
    ) -> RepoResult<()> {
        self.repo.set_article_magazine(article, magazine)
    }

    /// Empties the underlying registries for test isolation.
    pub fn reset(&mut self) {
        self.repo.clear();
    }

    fn require_author(&self, id: AuthorId) -> RepoResult<()> {
        if self.repo.get_author(id).is_none() {
            return Err(RepoError::AuthorNotFound(id));
        }
        Ok(())
    }

    fn require_magazine(&self, id: MagazineId) -> RepoResult<()> {
        if self.repo.get_magazine(id).is_none() {
            return Err(RepoError::MagazineNotFound(id));
        }
        Ok(())
    }
}
