//! Domain model for the question/answer/tag board.
//!
//! # Responsibility
//! - Define the canonical entity records held by the store.
//! - Define the seed records accepted at store construction.
//!
//! # Invariants
//! - Every entity is identified by a stable string id, unique per kind.
//! - Entities reference each other by id only; there are no back-pointers.
//! - Entities are never deleted or re-parented.

pub mod answer;
pub mod question;
pub mod seed;
pub mod tag;

use chrono::{DateTime, Utc};

/// Point in time used for every entity timestamp.
pub type Timestamp = DateTime<Utc>;

/// Generates a fresh opaque id for a newly created entity.
pub(crate) fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
