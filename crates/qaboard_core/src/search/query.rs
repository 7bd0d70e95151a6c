//! Bracket-tag search query parsing and matching.
//!
//! # Invariants
//! - Parsing lowercases its input; tags and free text are compared
//!   case-insensitively.
//! - Every `[...]` span is removed from the free text, including `[]`.
//! - Blank bracket contents never become tags.
//! - Matching is an OR between the free-text clause and the tag clause.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static TAG_SPAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]").expect("valid tag span regex"));

/// Parsed form of a raw search string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Lowercased tag names that must all be present on a question.
    pub required_tags: BTreeSet<String>,
    /// Lowercased, trimmed text left after removing bracket spans.
    pub free_text: String,
}

impl ParsedQuery {
    /// Returns whether the query constrains nothing.
    pub fn is_empty(&self) -> bool {
        self.required_tags.is_empty() && self.free_text.is_empty()
    }

    /// Returns whether a question with the given content matches.
    ///
    /// A question matches when its title or body contains the free text, or
    /// when its tag names include every required tag. An empty clause never
    /// matches on its own.
    pub fn matches<'a, I>(&self, title: &str, text: &str, tag_names: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if !self.free_text.is_empty()
            && (title.to_lowercase().contains(&self.free_text)
                || text.to_lowercase().contains(&self.free_text))
        {
            return true;
        }

        if self.required_tags.is_empty() {
            return false;
        }
        let present: BTreeSet<String> = tag_names
            .into_iter()
            .map(|name| name.to_lowercase())
            .collect();
        self.required_tags.iter().all(|tag| present.contains(tag))
    }
}

/// Splits `raw` into required tags and free text.
pub fn parse_search_query(raw: &str) -> ParsedQuery {
    let lowered = raw.to_lowercase();

    let required_tags = TAG_SPAN_RE
        .captures_iter(&lowered)
        .filter_map(|caps| caps.get(1))
        .map(|inner| inner.as_str().trim())
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();
    let free_text = TAG_SPAN_RE.replace_all(&lowered, "").trim().to_string();

    ParsedQuery {
        required_tags,
        free_text,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_search_query, ParsedQuery};
    use std::collections::BTreeSet;

    fn tags(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parses_tags_and_free_text() {
        let parsed = parse_search_query("[C++][java] pointer arithmetic");
        assert_eq!(parsed.required_tags, tags(&["c++", "java"]));
        assert_eq!(parsed.free_text, "pointer arithmetic");
    }

    #[test]
    fn no_brackets_is_all_free_text() {
        let parsed = parse_search_query("  how to sort  ");
        assert!(parsed.required_tags.is_empty());
        assert_eq!(parsed.free_text, "how to sort");
    }

    #[test]
    fn empty_brackets_yield_empty_query() {
        let parsed = parse_search_query("[]");
        assert!(parsed.required_tags.is_empty());
        assert_eq!(parsed.free_text, "");
        assert!(parsed.is_empty());
    }

    #[test]
    fn brackets_anywhere_are_extracted_and_trimmed() {
        let parsed = parse_search_query("sort [ rust ] fast [react]");
        assert_eq!(parsed.required_tags, tags(&["rust", "react"]));
        assert_eq!(parsed.free_text, "sort  fast");
    }

    #[test]
    fn unmatched_bracket_stays_in_free_text() {
        let parsed = parse_search_query("[rust] vec[");
        assert_eq!(parsed.required_tags, tags(&["rust"]));
        assert_eq!(parsed.free_text, "vec[");
    }

    #[test]
    fn matches_is_or_between_text_and_tags() {
        let query = parse_search_query("[java] pointer");
        assert!(query.matches("Pointer basics", "", ["python"]));
        assert!(query.matches("Loops", "no overlap", ["Java", "spring"]));
        assert!(!query.matches("Loops", "no overlap", ["python"]));
    }

    #[test]
    fn all_required_tags_must_be_present() {
        let query = parse_search_query("[java][spring]");
        assert!(query.matches("t", "b", ["spring", "JAVA"]));
        assert!(!query.matches("t", "b", ["java"]));
    }

    #[test]
    fn empty_query_matches_nothing() {
        let query = ParsedQuery::default();
        assert!(!query.matches("anything", "at all", ["rust"]));
    }
}
