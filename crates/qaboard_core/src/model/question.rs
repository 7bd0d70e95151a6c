//! Question domain model.
//!
//! # Responsibility
//! - Hold question content plus its denormalized answer state.
//! - Apply answer attachments delivered through the subscription registry.
//!
//! # Invariants
//! - `answer_ids` keeps attachment order.
//! - `latest_answer_at`, when set, is the max `posted_at` of attached answers.
//! - `tag_ids` holds no duplicates.

use crate::elapsed::{format_elapsed, time_elapsed_since};
use crate::model::answer::{Answer, AnswerId};
use crate::model::tag::TagId;
use crate::model::Timestamp;
use crate::subscription::Subscriber;
use serde::{Deserialize, Serialize};

/// Stable identifier for a question.
pub type QuestionId = String;

/// Question posted to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    title: String,
    text: String,
    tag_ids: Vec<TagId>,
    asked_by: String,
    asked_at: Timestamp,
    answer_ids: Vec<AnswerId>,
    views: u64,
    latest_answer_at: Option<Timestamp>,
}

/// Construction parameters for [`Question`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionParams {
    pub id: QuestionId,
    pub title: String,
    pub text: String,
    pub tag_ids: Vec<TagId>,
    pub asked_by: String,
    pub asked_at: Timestamp,
    pub answer_ids: Vec<AnswerId>,
    pub views: u64,
}

impl Question {
    /// Builds a question from parameters.
    ///
    /// Duplicate tag ids are dropped, keeping the first occurrence.
    /// `latest_answer_at` starts unset; the store derives it from the
    /// resolved answers.
    pub fn new(params: QuestionParams) -> Self {
        let mut tag_ids: Vec<TagId> = Vec::with_capacity(params.tag_ids.len());
        for tag_id in params.tag_ids {
            if !tag_ids.contains(&tag_id) {
                tag_ids.push(tag_id);
            }
        }

        Self {
            id: params.id,
            title: params.title,
            text: params.text,
            tag_ids,
            asked_by: params.asked_by,
            asked_at: params.asked_at,
            answer_ids: params.answer_ids,
            views: params.views,
            latest_answer_at: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tag_ids(&self) -> &[TagId] {
        &self.tag_ids
    }

    pub fn asked_by(&self) -> &str {
        &self.asked_by
    }

    pub fn asked_at(&self) -> Timestamp {
        self.asked_at
    }

    pub fn answer_ids(&self) -> &[AnswerId] {
        &self.answer_ids
    }

    pub fn answer_count(&self) -> usize {
        self.answer_ids.len()
    }

    pub fn view_count(&self) -> u64 {
        self.views
    }

    pub fn latest_answer_at(&self) -> Option<Timestamp> {
        self.latest_answer_at
    }

    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tag_ids.iter().any(|id| id == tag_id)
    }

    /// Increments the view counter and returns the new value.
    pub fn add_view(&mut self) -> u64 {
        self.views = self.views.saturating_add(1);
        self.views
    }

    /// Display string for the time since this question was asked.
    pub fn time_elapsed(&self) -> String {
        time_elapsed_since(self.asked_at)
    }

    /// Same as [`Question::time_elapsed`], against a caller-provided clock.
    pub fn time_elapsed_at(&self, now: Timestamp) -> String {
        format_elapsed(&self.asked_at, &now)
    }

    /// Appends an answer and folds its timestamp into `latest_answer_at`.
    ///
    /// Not idempotent: attaching the same answer twice records it twice.
    pub fn attach_answer(&mut self, answer: &Answer) {
        self.answer_ids.push(answer.id().to_string());
        self.bump_latest_answer_at(answer.posted_at());
    }

    pub(crate) fn bump_latest_answer_at(&mut self, posted_at: Timestamp) {
        self.latest_answer_at = Some(match self.latest_answer_at {
            Some(current) if current >= posted_at => current,
            _ => posted_at,
        });
    }
}

impl Subscriber<Answer> for Question {
    fn notify(&mut self, answer: &Answer) {
        self.attach_answer(answer);
    }
}
