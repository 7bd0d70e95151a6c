//! Form validation for new questions and answers.
//!
//! # Responsibility
//! - Check raw form input before it reaches the store.
//! - Convert valid input into trimmed store payloads.
//!
//! # Invariants
//! - Every field is checked; at most one error is reported per field.
//! - Emptiness is judged after trimming.
//! - Tags are whitespace-separated in the raw form.

use crate::store::application::{NewAnswer, NewQuestion};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_TAGS: usize = 5;
pub const MAX_TAG_CHARS: usize = 20;

/// One rejected form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyTitle,
    TitleTooLong { chars: usize },
    EmptyText,
    MissingTags,
    TooManyTags { count: usize },
    TagTooLong { tag: String },
    EmptyUsername,
    EmptyAnswerText,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Question Title cannot be empty"),
            Self::TitleTooLong { .. } => {
                write!(f, "Title cannot be more than {MAX_TITLE_CHARS} characters")
            }
            Self::EmptyText => write!(f, "Question text cannot be empty"),
            Self::MissingTags => write!(f, "At least one tag is required"),
            Self::TooManyTags { .. } => write!(f, "Cannot have more than {MAX_TAGS} tags"),
            Self::TagTooLong { .. } => {
                write!(f, "New tag length cannot be more than {MAX_TAG_CHARS}")
            }
            Self::EmptyUsername => write!(f, "Username cannot be empty"),
            Self::EmptyAnswerText => write!(f, "Answer text cannot be empty"),
        }
    }
}

impl Error for ValidationError {}

/// All field errors found in one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn contains(&self, error: &ValidationError) -> bool {
        self.0.contains(error)
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let messages = self.0.iter().map(ToString::to_string).collect::<Vec<_>>();
        write!(f, "{}", messages.join("; "))
    }
}

impl Error for ValidationErrors {}

/// Raw new-question form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewQuestionForm {
    pub title: String,
    pub text: String,
    /// Whitespace-separated tag names.
    pub tags: String,
    pub username: String,
}

/// Raw new-answer form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAnswerForm {
    pub username: String,
    pub text: String,
}

/// Validates a question form and returns the trimmed store payload.
pub fn validate_question_form(form: &NewQuestionForm) -> Result<NewQuestion, ValidationErrors> {
    let mut errors = Vec::new();

    let title_chars = form.title.chars().count();
    if form.title.trim().is_empty() {
        errors.push(ValidationError::EmptyTitle);
    } else if title_chars > MAX_TITLE_CHARS {
        errors.push(ValidationError::TitleTooLong { chars: title_chars });
    }

    if form.text.trim().is_empty() {
        errors.push(ValidationError::EmptyText);
    }

    let tags = split_tags(&form.tags);
    if tags.is_empty() {
        errors.push(ValidationError::MissingTags);
    } else if tags.len() > MAX_TAGS {
        errors.push(ValidationError::TooManyTags { count: tags.len() });
    } else if let Some(tag) = tags.iter().find(|tag| tag.chars().count() > MAX_TAG_CHARS) {
        errors.push(ValidationError::TagTooLong {
            tag: (*tag).to_string(),
        });
    }

    if form.username.trim().is_empty() {
        errors.push(ValidationError::EmptyUsername);
    }

    if !errors.is_empty() {
        return Err(ValidationErrors(errors));
    }

    Ok(NewQuestion {
        title: form.title.trim().to_string(),
        text: form.text.trim().to_string(),
        asked_by: form.username.trim().to_string(),
        tags: tags.into_iter().map(str::to_string).collect(),
    })
}

/// Validates an answer form and returns the trimmed store payload.
pub fn validate_answer_form(form: &NewAnswerForm) -> Result<NewAnswer, ValidationErrors> {
    let mut errors = Vec::new();
    if form.username.trim().is_empty() {
        errors.push(ValidationError::EmptyUsername);
    }
    if form.text.trim().is_empty() {
        errors.push(ValidationError::EmptyAnswerText);
    }
    if !errors.is_empty() {
        return Err(ValidationErrors(errors));
    }

    Ok(NewAnswer {
        text: form.text.trim().to_string(),
        answered_by: form.username.trim().to_string(),
    })
}

fn split_tags(raw: &str) -> Vec<&str> {
    raw.split_whitespace().collect()
}
