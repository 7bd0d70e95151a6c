//! Tag domain model.

use serde::{Deserialize, Serialize};

/// Stable identifier for a tag.
pub type TagId = String;

/// Named label attached to questions.
///
/// Immutable after creation. Name uniqueness is case-insensitive and is
/// enforced by the store, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    id: TagId,
    name: String,
}

impl Tag {
    pub fn new(id: impl Into<TagId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether `name` refers to this tag, ignoring case.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
