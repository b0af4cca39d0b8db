//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate registry calls into use-case level APIs.
//! - Derive every relationship query live from the registries.

pub mod press_service;
