//! Core domain logic for Masthead, an in-memory author/magazine/article
//! relationship model.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId};
pub use model::magazine::{
    Magazine, MagazineId, MAGAZINE_NAME_MAX_CHARS, MAGAZINE_NAME_MIN_CHARS,
};
pub use model::ValidationError;
pub use repo::press_repo::{InMemoryPressRepository, PressRepository, RepoError, RepoResult};
pub use service::press_service::PressService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
