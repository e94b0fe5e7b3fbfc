//! Shared types used across the codebase

use serde::{Deserialize, Serialize};

pub type CandidateId = i64;
pub type ListId = i64;
pub type SearchId = i64;
pub type UserId = i64;

/// Which concrete candidate-source a [`SourceRef`] points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    List,
    Search,
}

impl SourceKind {
    pub fn name(&self) -> &'static str {
        match self {
            SourceKind::List => "saved list",
            SourceKind::Search => "saved search",
        }
    }
}

/// Typed handle to a candidate source (saved list or saved search).
///
/// Lists and searches live in separate id spaces, so the kind is part of
/// the identity everywhere sources are referenced generically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourceRef {
    pub kind: SourceKind,
    pub id: i64,
}

impl SourceRef {
    pub fn list(id: ListId) -> Self {
        Self { kind: SourceKind::List, id }
    }

    pub fn search(id: SearchId) -> Self {
        Self { kind: SourceKind::Search, id }
    }
}

/// Zero-based page window for store queries
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    pub number: usize,
    pub size: usize,
}

impl PageRequest {
    pub fn new(number: usize, size: usize) -> Self {
        Self { number, size }
    }

    pub fn offset(&self) -> usize {
        self.number * self.size.max(1)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { number: 0, size: 25 }
    }
}

/// One page of results plus the totals needed for pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: usize,
    pub size: usize,
    pub total_elements: usize,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: usize) -> Self {
        Self { content, number: request.number, size: request.size.max(1), total_elements }
    }

    /// Build a page by slicing an already-filtered full result set
    pub fn from_complete(mut all: Vec<T>, request: PageRequest) -> Self {
        let total_elements = all.len();
        let size = request.size.max(1);
        let start = request.number * size;
        let content: Vec<T> = if start >= all.len() {
            Vec::new()
        } else {
            all.drain(start..).take(size).collect()
        };
        Self { content, number: request.number, size, total_elements }
    }

    pub fn total_pages(&self) -> usize {
        self.total_elements.div_ceil(self.size)
    }

    pub fn is_first(&self) -> bool {
        self.number == 0
    }

    pub fn is_last(&self) -> bool {
        self.number + 1 >= self.total_pages().max(1)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_math() {
        let page = Page::new(vec![1, 2, 3], PageRequest::new(0, 3), 7);
        assert_eq!(page.total_pages(), 3);
        assert!(page.is_first());
        assert!(!page.is_last());

        let last = Page::new(vec![7], PageRequest::new(2, 3), 7);
        assert!(last.is_last());
        assert!(!last.is_first());
    }

    #[test]
    fn from_complete_slices_requested_window() {
        let page = Page::from_complete((1..=10).collect(), PageRequest::new(1, 4));
        assert_eq!(page.content, vec![5, 6, 7, 8]);
        assert_eq!(page.total_elements, 10);
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn from_complete_past_the_end_is_empty() {
        let page: Page<i32> = Page::from_complete(vec![1, 2], PageRequest::new(5, 10));
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 2);
        assert!(page.is_last());
    }

    #[test]
    fn empty_page_is_both_first_and_last() {
        let page: Page<i32> = Page::from_complete(Vec::new(), PageRequest::default());
        assert_eq!(page.total_pages(), 0);
        assert!(page.is_first());
        assert!(page.is_last());
    }
}
