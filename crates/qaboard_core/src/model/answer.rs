//! Answer domain model.

use crate::elapsed::{format_elapsed, time_elapsed_since};
use crate::model::Timestamp;
use serde::{Deserialize, Serialize};

/// Stable identifier for an answer.
pub type AnswerId = String;

/// Reply posted to a question. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    id: AnswerId,
    text: String,
    authored_by: String,
    posted_at: Timestamp,
}

impl Answer {
    pub fn new(
        id: impl Into<AnswerId>,
        text: impl Into<String>,
        authored_by: impl Into<String>,
        posted_at: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            authored_by: authored_by.into(),
            posted_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn authored_by(&self) -> &str {
        &self.authored_by
    }

    pub fn posted_at(&self) -> Timestamp {
        self.posted_at
    }

    /// Display string for the time since this answer was posted.
    pub fn time_elapsed(&self) -> String {
        time_elapsed_since(self.posted_at)
    }

    /// Same as [`Answer::time_elapsed`], against a caller-provided clock.
    pub fn time_elapsed_at(&self, now: Timestamp) -> String {
        format_elapsed(&self.posted_at, &now)
    }
}
