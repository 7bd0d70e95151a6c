//! Board use-case service.
//!
//! # Responsibility
//! - Validate form input before mutating the store.
//! - Shape store reads into list/detail views for the rendering layer.
//!
//! # Invariants
//! - Invalid forms never reach the store.
//! - Answers are only posted to questions that exist.
//! - Opening a question counts one view.

use crate::model::answer::{Answer, AnswerId};
use crate::model::question::{Question, QuestionId};
use crate::model::seed::SeedData;
use crate::model::tag::{Tag, TagId};
use crate::service::validation::{
    validate_answer_form, validate_question_form, NewAnswerForm, NewQuestionForm,
    ValidationErrors,
};
use crate::sort::SortOrder;
use crate::store::application::Application;
use crate::store::page::{Pagination, QuestionPage};
use crate::store::shared::get_instance;
use log::warn;
use std::borrow::BorrowMut;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for board use-cases.
#[derive(Debug)]
pub enum BoardServiceError {
    /// Form input was rejected.
    Validation(ValidationErrors),
    QuestionNotFound(QuestionId),
    TagNotFound(TagId),
    /// A previous holder of the shared store lock panicked.
    StorePoisoned,
}

impl Display for BoardServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => write!(f, "invalid input: {errors}"),
            Self::QuestionNotFound(id) => write!(f, "question not found: {id}"),
            Self::TagNotFound(id) => write!(f, "tag not found: {id}"),
            Self::StorePoisoned => write!(f, "shared store lock is poisoned"),
        }
    }
}

impl Error for BoardServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for BoardServiceError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

/// One page of questions plus navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionListing {
    pub page: QuestionPage,
    pub pagination: Pagination,
    pub order: SortOrder,
}

/// Question detail view: the question with its answers, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDetail {
    pub question: Question,
    pub answers: Vec<Answer>,
    pub tags: Vec<Tag>,
}

/// Tag list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSummary {
    pub tag: Tag,
    pub question_count: usize,
}

/// Board service over an owned or borrowed store.
pub struct BoardService<A: BorrowMut<Application>> {
    app: A,
}

impl<A: BorrowMut<Application>> BoardService<A> {
    pub fn new(app: A) -> Self {
        Self { app }
    }

    pub fn store(&self) -> &Application {
        self.app.borrow()
    }

    pub fn into_inner(self) -> A {
        self.app
    }

    /// Validates a question form and stores the question.
    pub fn ask_question(&mut self, form: &NewQuestionForm) -> Result<QuestionId, BoardServiceError> {
        let question = validate_question_form(form).map_err(|errors| {
            warn!(
                "event=question_rejected module=service status=error error_count={}",
                errors.errors().len()
            );
            errors
        })?;
        Ok(self.app.borrow_mut().add_question(question))
    }

    /// Validates an answer form and attaches the answer to `question_id`.
    pub fn post_answer(
        &mut self,
        question_id: &str,
        form: &NewAnswerForm,
    ) -> Result<AnswerId, BoardServiceError> {
        let answer = validate_answer_form(form)?;
        if self.store().get_question_by_id(question_id).is_none() {
            return Err(BoardServiceError::QuestionNotFound(question_id.to_string()));
        }
        Ok(self.app.borrow_mut().add_answer(question_id, answer))
    }

    /// Lists one page of questions.
    pub fn list_questions(
        &self,
        start_index: usize,
        order: Option<&str>,
        search: Option<&str>,
    ) -> QuestionListing {
        let order = SortOrder::from_name(order);
        let page = self.store().get_questions_page(start_index, order, search);
        QuestionListing {
            pagination: Pagination::new(start_index, page.total_count),
            page,
            order,
        }
    }

    /// Lists one page of questions carrying the tag `tag_id`.
    pub fn list_questions_by_tag(
        &self,
        tag_id: &str,
        start_index: usize,
        order: Option<&str>,
    ) -> Result<QuestionListing, BoardServiceError> {
        let tag = self
            .store()
            .get_tag_by_id(tag_id)
            .ok_or_else(|| BoardServiceError::TagNotFound(tag_id.to_string()))?;
        let search = format!("[{}]", tag.name());
        Ok(self.list_questions(start_index, order, Some(search.as_str())))
    }

    /// Counts a view and returns the question with its answers and tags.
    pub fn open_question(&mut self, question_id: &str) -> Result<QuestionDetail, BoardServiceError> {
        let not_found = || BoardServiceError::QuestionNotFound(question_id.to_string());
        self.app.borrow_mut().add_view(question_id).ok_or_else(not_found)?;

        let app = self.store();
        let question = app.get_question_by_id(question_id).ok_or_else(not_found)?;
        Ok(QuestionDetail {
            answers: app.get_question_answers(&question),
            tags: app.get_question_tags(&question),
            question,
        })
    }

    /// Returns every tag with the number of questions carrying it.
    pub fn list_tags(&self) -> Vec<TagSummary> {
        let app = self.store();
        app.get_tags()
            .into_iter()
            .map(|tag| TagSummary {
                question_count: app.get_question_count_by_tag(tag.id()),
                tag,
            })
            .collect()
    }
}

/// Runs `f` against the process-wide store, building it from `seed` on
/// first use.
pub fn with_shared_board<T, F>(seed: SeedData, f: F) -> Result<T, BoardServiceError>
where
    F: FnOnce(&mut BoardService<&mut Application>) -> Result<T, BoardServiceError>,
{
    let mut guard = get_instance(seed)
        .lock()
        .map_err(|_| BoardServiceError::StorePoisoned)?;
    let mut service = BoardService::new(&mut *guard);
    f(&mut service)
}
