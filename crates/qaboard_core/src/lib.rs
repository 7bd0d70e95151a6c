//! Core domain logic for the question/answer board.
//! This crate holds every entity in memory and is the single source of truth
//! for query, ordering and answer-propagation rules.

pub mod elapsed;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod sort;
pub mod store;
pub mod subscription;

pub use elapsed::{format_elapsed, time_elapsed_since};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::answer::{Answer, AnswerId};
pub use model::question::{Question, QuestionId, QuestionParams};
pub use model::seed::{AnswerSeed, QuestionSeed, SeedData, TagSeed};
pub use model::tag::{Tag, TagId};
pub use model::Timestamp;
pub use search::query::{parse_search_query, ParsedQuery};
pub use service::board_service::{
    with_shared_board, BoardService, BoardServiceError, QuestionDetail, QuestionListing,
    TagSummary,
};
pub use service::validation::{
    validate_answer_form, validate_question_form, NewAnswerForm, NewQuestionForm,
    ValidationError, ValidationErrors,
};
pub use sort::{SortOrder, UnknownSortOrder};
pub use store::application::{Application, NewAnswer, NewQuestion};
pub use store::page::{Pagination, QuestionPage, PAGE_SIZE};
pub use store::shared::{get_instance, try_instance};
pub use subscription::{Subscriber, SubscriptionRegistry};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
