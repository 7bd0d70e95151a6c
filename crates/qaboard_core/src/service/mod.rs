//! Board use-case services.
//!
//! # Responsibility
//! - Validate user input before it reaches the store.
//! - Keep rendering layers decoupled from store internals.

pub mod board_service;
pub mod validation;
