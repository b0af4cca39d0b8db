//! Domain model for the author/magazine/article relationship graph.
//!
//! # Responsibility
//! - Define the three entity kinds and their field validation rules.
//! - Keep construction-time validation (fallible) separate from later
//!   try-set writes (best-effort, silently ignored when invalid).
//!
//! # Invariants
//! - Every entity is identified by a stable UUID, never reused.
//! - A constructed entity is always in a valid state; no later write can
//!   move it out of one.

pub mod article;
pub mod author;
pub mod magazine;

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::magazine::{MAGAZINE_NAME_MAX_CHARS, MAGAZINE_NAME_MIN_CHARS};

/// Field-level validation error raised by entity constructors.
///
/// Only first-time assignment surfaces these; later invalid writes go
/// through the try-set operations and are silently ignored instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Author name must be non-empty.
    EmptyAuthorName,
    /// Magazine name length is outside the allowed character range.
    /// Carries the offending length.
    MagazineNameLength(usize),
    /// Magazine category must be non-empty.
    EmptyMagazineCategory,
    /// Article title must be non-empty.
    EmptyArticleTitle,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAuthorName => write!(f, "author name must be non-empty"),
            Self::MagazineNameLength(length) => write!(
                f,
                "magazine name must be {MAGAZINE_NAME_MIN_CHARS} to {MAGAZINE_NAME_MAX_CHARS} characters long, got {length}"
            ),
            Self::EmptyMagazineCategory => write!(f, "magazine category must be non-empty"),
            Self::EmptyArticleTitle => write!(f, "article title must be non-empty"),
        }
    }
}

impl Error for ValidationError {}
