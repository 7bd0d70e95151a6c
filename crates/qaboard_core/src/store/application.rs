//! Application store: entity collections plus query and mutation APIs.
//!
//! # Responsibility
//! - Build entities from seed data and derive each question's
//!   `latest_answer_at` from its pre-existing answers.
//! - Create questions, answers and tags with fresh ids.
//! - Filter, order and page questions for list views.
//!
//! # Invariants
//! - Every question is subscribed under its own id at creation.
//! - A new answer is published exactly once to the question it targets.
//! - Tag names are unique ignoring case; lookups reuse the first match.
//! - Lookups by id return the first entity inserted under that id.

use crate::model::answer::{Answer, AnswerId};
use crate::model::question::{Question, QuestionId, QuestionParams};
use crate::model::seed::SeedData;
use crate::model::tag::{Tag, TagId};
use crate::model::{generate_id, Timestamp};
use crate::search::query::parse_search_query;
use crate::sort::SortOrder;
use crate::store::page::{QuestionPage, PAGE_SIZE};
use crate::subscription::SubscriptionRegistry;
use chrono::Utc;
use log::{info, warn};
use std::collections::HashMap;

/// Payload for [`Application::add_question`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewQuestion {
    pub title: String,
    pub text: String,
    pub asked_by: String,
    /// Tag names; existing tags are reused ignoring case.
    pub tags: Vec<String>,
}

/// Payload for [`Application::add_answer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAnswer {
    pub text: String,
    pub answered_by: String,
}

/// Process data for the board.
#[derive(Debug, Clone, Default)]
pub struct Application {
    questions: Vec<Question>,
    tags: Vec<Tag>,
    answers: Vec<Answer>,
    question_index: HashMap<QuestionId, usize>,
    tag_index: HashMap<TagId, usize>,
    answer_index: HashMap<AnswerId, usize>,
    subscriptions: SubscriptionRegistry,
}

impl Application {
    /// Builds a store from an initial dataset.
    pub fn new(seed: SeedData) -> Self {
        let SeedData {
            questions,
            tags,
            answers,
        } = seed;

        let mut app = Self::default();
        for tag in tags {
            app.insert_tag(tag.into());
        }
        for answer in answers {
            app.insert_answer(answer.into());
        }
        for question in questions {
            app.insert_question(question.into());
        }

        for slot in 0..app.questions.len() {
            if let Some(latest) = app.latest_posted_at(&app.questions[slot]) {
                app.questions[slot].bump_latest_answer_at(latest);
            }
        }

        info!(
            "event=store_init module=store status=ok questions={} tags={} answers={}",
            app.questions.len(),
            app.tags.len(),
            app.answers.len()
        );
        app
    }

    /// Creates a question asked now and returns its id.
    pub fn add_question(&mut self, question: NewQuestion) -> QuestionId {
        self.add_question_at(question, Utc::now())
    }

    /// Creates a question with an explicit `asked_at` and returns its id.
    ///
    /// The payload is stored as given. Tag names resolve through
    /// [`Application::add_tag`] and repeated tags collapse to one id.
    pub fn add_question_at(&mut self, question: NewQuestion, asked_at: Timestamp) -> QuestionId {
        let tag_ids = question
            .tags
            .iter()
            .map(|name| self.add_tag(name))
            .collect::<Vec<_>>();

        let id = generate_id();
        let question = Question::new(QuestionParams {
            id: id.clone(),
            title: question.title,
            text: question.text,
            tag_ids,
            asked_by: question.asked_by,
            asked_at,
            answer_ids: Vec::new(),
            views: 0,
        });
        let tag_count = question.tag_ids().len();
        self.insert_question(question);

        info!(
            "event=question_add module=store status=ok question_id={} tag_count={}",
            id, tag_count
        );
        id
    }

    /// Creates an answer posted now and returns its id.
    pub fn add_answer(&mut self, question_id: &str, answer: NewAnswer) -> AnswerId {
        self.add_answer_at(question_id, answer, Utc::now())
    }

    /// Creates an answer with an explicit `posted_at` and returns its id.
    ///
    /// The answer is stored even when no question is subscribed under
    /// `question_id`; it then stays unattached.
    pub fn add_answer_at(
        &mut self,
        question_id: &str,
        answer: NewAnswer,
        posted_at: Timestamp,
    ) -> AnswerId {
        let id = generate_id();
        let answer = Answer::new(id.clone(), answer.text, answer.answered_by, posted_at);
        let delivered = self
            .subscriptions
            .publish(question_id, &mut self.questions, &answer);
        self.insert_answer(answer);

        if delivered {
            info!(
                "event=answer_add module=store status=ok answer_id={} question_id={}",
                id, question_id
            );
        } else {
            warn!(
                "event=answer_add module=store status=orphaned answer_id={} question_id={}",
                id, question_id
            );
        }
        id
    }

    /// Returns the id of the tag named `name` ignoring case, creating it
    /// when absent.
    pub fn add_tag(&mut self, name: &str) -> TagId {
        if let Some(existing) = self.tags.iter().find(|tag| tag.matches_name(name)) {
            return existing.id().to_string();
        }

        let id = generate_id();
        self.insert_tag(Tag::new(id.clone(), name));
        info!("event=tag_add module=store status=ok tag_id={}", id);
        id
    }

    /// Increments a question's view counter, returning the new count.
    pub fn add_view(&mut self, question_id: &str) -> Option<u64> {
        let slot = *self.question_index.get(question_id)?;
        self.questions.get_mut(slot).map(Question::add_view)
    }

    /// Filters, orders and pages questions.
    ///
    /// `order` is resolved by [`SortOrder::from_name`]. An empty or absent
    /// `search` keeps every question; any other search goes through
    /// [`ParsedQuery::matches`](crate::search::query::ParsedQuery::matches).
    pub fn get_questions_by_filter(
        &self,
        start_index: usize,
        order: Option<&str>,
        search: Option<&str>,
    ) -> QuestionPage {
        self.get_questions_page(start_index, SortOrder::from_name(order), search)
    }

    /// Typed-order variant of [`Application::get_questions_by_filter`].
    pub fn get_questions_page(
        &self,
        start_index: usize,
        order: SortOrder,
        search: Option<&str>,
    ) -> QuestionPage {
        let matching: Vec<&Question> = match search.filter(|raw| !raw.is_empty()) {
            Some(raw) => {
                let query = parse_search_query(raw);
                self.questions
                    .iter()
                    .filter(|q| {
                        query.matches(q.title(), q.text(), self.resolve_tags(q).map(Tag::name))
                    })
                    .collect()
            }
            None => self.questions.iter().collect(),
        };

        let ordered = order.apply(matching);
        let total_count = ordered.len();
        let items = ordered
            .into_iter()
            .skip(start_index)
            .take(PAGE_SIZE)
            .cloned()
            .collect();

        QuestionPage { items, total_count }
    }

    pub fn get_question_by_id(&self, id: &str) -> Option<Question> {
        self.question(id).cloned()
    }

    /// Resolves a question's answers, newest first. Dangling ids are skipped.
    pub fn get_question_answers(&self, question: &Question) -> Vec<Answer> {
        let mut answers = question
            .answer_ids()
            .iter()
            .filter_map(|id| self.answer(id))
            .cloned()
            .collect::<Vec<_>>();
        answers.sort_by(|a, b| b.posted_at().cmp(&a.posted_at()));
        answers
    }

    /// Resolves a question's tags in attachment order. Dangling ids are skipped.
    pub fn get_question_tags(&self, question: &Question) -> Vec<Tag> {
        self.resolve_tags(question).cloned().collect()
    }

    pub fn get_tags(&self) -> Vec<Tag> {
        self.tags.clone()
    }

    pub fn get_tag_by_id(&self, id: &str) -> Option<Tag> {
        self.tag(id).cloned()
    }

    pub fn get_tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Number of questions carrying `tag_id`.
    pub fn get_question_count_by_tag(&self, tag_id: &str) -> usize {
        self.questions.iter().filter(|q| q.has_tag(tag_id)).count()
    }

    pub fn questions(&self) -> Vec<Question> {
        self.questions.clone()
    }

    pub fn answers(&self) -> Vec<Answer> {
        self.answers.clone()
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    fn question(&self, id: &str) -> Option<&Question> {
        self.question_index
            .get(id)
            .and_then(|slot| self.questions.get(*slot))
    }

    fn answer(&self, id: &str) -> Option<&Answer> {
        self.answer_index
            .get(id)
            .and_then(|slot| self.answers.get(*slot))
    }

    fn tag(&self, id: &str) -> Option<&Tag> {
        self.tag_index.get(id).and_then(|slot| self.tags.get(*slot))
    }

    fn resolve_tags<'a>(&'a self, question: &'a Question) -> impl Iterator<Item = &'a Tag> + 'a {
        question.tag_ids().iter().filter_map(move |id| self.tag(id))
    }

    fn latest_posted_at(&self, question: &Question) -> Option<Timestamp> {
        question
            .answer_ids()
            .iter()
            .filter_map(|id| self.answer(id))
            .map(Answer::posted_at)
            .max()
    }

    fn insert_question(&mut self, question: Question) {
        let slot = self.questions.len();
        self.question_index
            .entry(question.id().to_string())
            .or_insert(slot);
        self.subscriptions.subscribe(question.id(), slot);
        self.questions.push(question);
    }

    fn insert_answer(&mut self, answer: Answer) {
        let slot = self.answers.len();
        self.answer_index
            .entry(answer.id().to_string())
            .or_insert(slot);
        self.answers.push(answer);
    }

    fn insert_tag(&mut self, tag: Tag) {
        let slot = self.tags.len();
        self.tag_index.entry(tag.id().to_string()).or_insert(slot);
        self.tags.push(tag);
    }
}
