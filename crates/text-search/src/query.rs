use std::ops::Range;

use crate::SearchError;

/// A validated search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    /// Length of `text` in characters
    char_len: usize,
    match_whole_word: bool,
}

impl Query {
    /// Build a query, rejecting empty text.
    pub fn new(text: impl Into<String>, match_whole_word: bool) -> Result<Self, SearchError> {
        let text = text.into();
        if text.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        Ok(Self {
            char_len: text.chars().count(),
            text,
            match_whole_word,
        })
    }

    /// Literal text to look for.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the query text in characters (never zero).
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// Whether matches must be delimited by whitespace or buffer boundaries.
    pub fn match_whole_word(&self) -> bool {
        self.match_whole_word
    }
}

/// A match location in the buffer: the half-open range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Match {
    /// First character of the match.
    pub start: usize,
    /// One past the last character of the match.
    pub end: usize,
}

impl Match {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Match length in characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}
