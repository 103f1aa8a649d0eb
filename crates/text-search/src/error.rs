use std::fmt;

use crate::Focus;

/// User-recoverable find/replace errors.
///
/// None of these leave the buffer modified: every check runs before the
/// first edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The query input is empty.
    EmptyQuery,
    /// The query is valid but nothing in the buffer matches it.
    NotFound,
    /// The replacement input is empty.
    EmptyReplacement,
}

impl SearchError {
    /// Notice text shown to the user.
    pub fn message(self) -> &'static str {
        match self {
            SearchError::EmptyQuery => "No text to find.",
            SearchError::NotFound => "Text not found in document.",
            SearchError::EmptyReplacement => "No text to replace.",
        }
    }

    /// Dialog input that should receive focus after the notice.
    pub fn focus(self) -> Focus {
        match self {
            SearchError::EmptyQuery | SearchError::NotFound => Focus::FindInput,
            SearchError::EmptyReplacement => Focus::ReplaceInput,
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for SearchError {}
