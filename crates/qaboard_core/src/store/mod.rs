//! In-memory board store.
//!
//! # Responsibility
//! - Own every question, answer and tag for the lifetime of the process.
//! - Answer filtered, ordered, paginated question queries.
//! - Propagate new answers to their question through subscriptions.
//!
//! # Invariants
//! - Mutations never re-validate input; callers validate first.
//! - Reads hand out owned snapshots, never live references.
//! - Dangling tag/answer ids on a question are skipped by every read path.

pub mod application;
pub mod page;
pub mod shared;
