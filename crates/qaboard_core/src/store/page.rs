//! Fixed-size question pages and page navigation.

use crate::model::question::Question;
use serde::Serialize;

/// Number of questions per page.
pub const PAGE_SIZE: usize = 5;

/// One page of a filtered question query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionPage {
    /// At most [`PAGE_SIZE`] questions, in the requested order.
    pub items: Vec<Question>,
    /// Size of the filtered set before slicing.
    pub total_count: usize,
}

impl QuestionPage {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Navigation state over a result set of `total_count` questions.
///
/// `start_index` is the index of the first question on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub start_index: usize,
    pub total_count: usize,
}

impl Pagination {
    pub fn new(start_index: usize, total_count: usize) -> Self {
        Self {
            start_index,
            total_count,
        }
    }

    /// Start index of the next page, wrapping to 0 after the last page.
    pub fn next_start(&self) -> usize {
        match self.start_index.checked_add(PAGE_SIZE) {
            Some(next) if next < self.total_count => next,
            _ => 0,
        }
    }

    /// Start index of the previous page, `None` on the first page.
    pub fn prev_start(&self) -> Option<usize> {
        self.start_index.checked_sub(PAGE_SIZE)
    }

    pub fn has_prev(&self) -> bool {
        self.prev_start().is_some()
    }

    /// 1-based number of the current page, 0 when there are no pages.
    pub fn page_number(&self) -> usize {
        if self.total_pages() == 0 {
            0
        } else {
            self.start_index / PAGE_SIZE + 1
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::Pagination;

    #[test]
    fn next_wraps_after_last_page() {
        assert_eq!(Pagination::new(0, 12).next_start(), 5);
        assert_eq!(Pagination::new(5, 12).next_start(), 10);
        assert_eq!(Pagination::new(10, 12).next_start(), 0);
        assert_eq!(Pagination::new(0, 5).next_start(), 0);
        assert_eq!(Pagination::new(0, 0).next_start(), 0);
    }

    #[test]
    fn next_from_huge_start_wraps_without_overflow() {
        assert_eq!(Pagination::new(usize::MAX - 2, 3).next_start(), 0);
        assert_eq!(Pagination::new(usize::MAX, usize::MAX).next_start(), 0);
        assert_eq!(Pagination::new(usize::MAX, 0).page_number(), 0);
    }

    #[test]
    fn prev_is_absent_on_first_page() {
        assert_eq!(Pagination::new(0, 12).prev_start(), None);
        assert!(!Pagination::new(4, 12).has_prev());
        assert_eq!(Pagination::new(10, 12).prev_start(), Some(5));
    }

    #[test]
    fn page_numbers() {
        assert_eq!(Pagination::new(0, 0).page_number(), 0);
        assert_eq!(Pagination::new(0, 0).total_pages(), 0);
        assert_eq!(Pagination::new(0, 11).page_number(), 1);
        assert_eq!(Pagination::new(10, 11).page_number(), 3);
        assert_eq!(Pagination::new(10, 11).total_pages(), 3);
    }
}
