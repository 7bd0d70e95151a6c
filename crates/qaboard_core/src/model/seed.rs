//! Seed records accepted when the store is first constructed.
//!
//! Field names use snake_case on the wire. Missing id lists and view counts
//! default to empty/zero so hand-written fixtures stay short.

use crate::model::answer::Answer;
use crate::model::question::{Question, QuestionParams};
use crate::model::tag::Tag;
use crate::model::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSeed {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSeed {
    pub id: String,
    pub text: String,
    pub authored_by: String,
    pub posted_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSeed {
    pub id: String,
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub tag_ids: Vec<String>,
    pub asked_by: String,
    pub asked_at: Timestamp,
    #[serde(default)]
    pub answer_ids: Vec<String>,
    #[serde(default)]
    pub views: u64,
}

/// Initial dataset for [`crate::Application`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub questions: Vec<QuestionSeed>,
    #[serde(default)]
    pub tags: Vec<TagSeed>,
    #[serde(default)]
    pub answers: Vec<AnswerSeed>,
}

impl From<TagSeed> for Tag {
    fn from(value: TagSeed) -> Self {
        Tag::new(value.id, value.name)
    }
}

impl From<AnswerSeed> for Answer {
    fn from(value: AnswerSeed) -> Self {
        Answer::new(value.id, value.text, value.authored_by, value.posted_at)
    }
}

impl From<QuestionSeed> for Question {
    fn from(value: QuestionSeed) -> Self {
        Question::new(QuestionParams {
            id: value.id,
            title: value.title,
            text: value.text,
            tag_ids: value.tag_ids,
            asked_by: value.asked_by,
            asked_at: value.asked_at,
            answer_ids: value.answer_ids,
            views: value.views,
        })
    }
}
