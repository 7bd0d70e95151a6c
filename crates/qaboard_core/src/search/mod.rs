//! Search query handling.
//!
//! # Responsibility
//! - Split raw search input into required tags and free text.
//! - Decide whether a question matches a parsed query.

pub mod query;
