//! Registry layer abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define the data-access contract for entity registration and lookup.
//! - Own the append-only registries that back every relationship query.
//!
//! # Invariants
//! - Writes enforce model validation before anything is registered.
//! - Registry APIs return semantic errors (`AuthorNotFound`, ...) rather
//!   than panicking on unknown ids.

pub mod press_repo;
