//! Named display orders for question lists.
//!
//! # Invariants
//! - Every order is a stable sort; ties keep their input order.
//! - `Unanswered` also filters, so it can shrink the result set.
//! - Unknown or missing names fall back to `Newest`.

use crate::model::question::Question;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Display order selected by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// `asked_at` descending.
    #[default]
    Newest,
    /// Answered questions first by latest answer, then the rest by `asked_at`.
    Active,
    /// Only questions without answers, `asked_at` descending.
    Unanswered,
}

/// Raised by the strict [`FromStr`] parse for an unknown order name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortOrder(pub String);

impl Display for UnknownSortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown sort order `{}`; expected newest|active|unanswered",
            self.0
        )
    }
}

impl Error for UnknownSortOrder {}

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "newest" => Ok(Self::Newest),
            "active" => Ok(Self::Active),
            "unanswered" => Ok(Self::Unanswered),
            other => Err(UnknownSortOrder(other.to_string())),
        }
    }
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [Self::Newest, Self::Active, Self::Unanswered];

    /// Resolves an order name, falling back to [`SortOrder::Newest`].
    ///
    /// Names are matched exactly; `"Active"` is not `"active"`.
    pub fn from_name(name: Option<&str>) -> Self {
        name.and_then(|value| value.parse().ok()).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Active => "active",
            Self::Unanswered => "unanswered",
        }
    }

    /// Orders (and for `Unanswered`, filters) `questions`.
    pub fn apply<'a>(self, mut questions: Vec<&'a Question>) -> Vec<&'a Question> {
        match self {
            Self::Newest => questions.sort_by(|a, b| newest_first(a, b)),
            Self::Active => questions.sort_by(|a, b| most_active_first(a, b)),
            Self::Unanswered => {
                questions.retain(|q| q.answer_count() == 0);
                questions.sort_by(|a, b| newest_first(a, b));
            }
        }
        questions
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn newest_first(a: &Question, b: &Question) -> Ordering {
    b.asked_at().cmp(&a.asked_at())
}

fn most_active_first(a: &Question, b: &Question) -> Ordering {
    match (a.latest_answer_at(), b.latest_answer_at()) {
        (Some(a_latest), Some(b_latest)) => b_latest.cmp(&a_latest),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => newest_first(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::SortOrder;
    use crate::model::answer::Answer;
    use crate::model::question::{Question, QuestionParams};
    use chrono::{Duration, TimeZone, Utc};

    fn question(id: &str, asked_hours_ago: i64) -> Question {
        let base = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        Question::new(QuestionParams {
            id: id.to_string(),
            title: format!("title {id}"),
            text: String::new(),
            tag_ids: Vec::new(),
            asked_by: "bob".to_string(),
            asked_at: base - Duration::hours(asked_hours_ago),
            answer_ids: Vec::new(),
            views: 0,
        })
    }

    fn answered(mut q: Question, answer_id: &str, hours_after_base: i64) -> Question {
        let base = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        q.attach_answer(&Answer::new(
            answer_id,
            "text",
            "alice",
            base + Duration::hours(hours_after_base),
        ));
        q
    }

    fn ids(questions: &[&Question]) -> Vec<String> {
        questions.iter().map(|q| q.id().to_string()).collect()
    }

    #[test]
    fn from_name_falls_back_to_newest() {
        assert_eq!(SortOrder::from_name(Some("active")), SortOrder::Active);
        assert_eq!(
            SortOrder::from_name(Some("unanswered")),
            SortOrder::Unanswered
        );
        assert_eq!(SortOrder::from_name(Some("Active")), SortOrder::Newest);
        assert_eq!(SortOrder::from_name(Some("bogus")), SortOrder::Newest);
        assert_eq!(SortOrder::from_name(None), SortOrder::Newest);
    }

    #[test]
    fn strict_parse_rejects_unknown_names() {
        assert!("votes".parse::<SortOrder>().is_err());
        for order in SortOrder::ALL {
            assert_eq!(order.as_str().parse::<SortOrder>(), Ok(order));
        }
    }

    #[test]
    fn newest_orders_by_asked_at_descending() {
        let old = question("old", 10);
        let new = question("new", 1);
        let mid = question("mid", 5);
        let sorted = SortOrder::Newest.apply(vec![&old, &new, &mid]);
        assert_eq!(ids(&sorted), ["new", "mid", "old"]);
    }

    #[test]
    fn active_puts_answered_first_by_latest_answer() {
        let unanswered_new = question("u-new", 1);
        let unanswered_old = question("u-old", 9);
        let answered_early = answered(question("a-early", 20), "a1", 1);
        let answered_late = answered(question("a-late", 30), "a2", 3);

        let sorted = SortOrder::Active.apply(vec![
            &unanswered_old,
            &answered_early,
            &unanswered_new,
            &answered_late,
        ]);
        assert_eq!(ids(&sorted), ["a-late", "a-early", "u-new", "u-old"]);
    }

    #[test]
    fn unanswered_filters_then_orders() {
        let a = question("a", 3);
        let b = answered(question("b", 1), "a1", 1);
        let c = question("c", 2);
        let sorted = SortOrder::Unanswered.apply(vec![&a, &b, &c]);
        assert_eq!(ids(&sorted), ["c", "a"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let first = question("first", 4);
        let second = question("second", 4);
        let sorted = SortOrder::Newest.apply(vec![&first, &second]);
        assert_eq!(ids(&sorted), ["first", "second"]);
    }
}
