//! Find-and-replace dialog state.
//!
//! The session owns no buffer. It tracks which state the dialog is in, which
//! input has focus, and the last inputs, and it drives the engine with the
//! buffer the host passes in.

use crate::engine;
use crate::{Match, Query, SearchBuffer, SearchError};

/// Dialog lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Dialog closed, no tags.
    #[default]
    Closed,
    /// Dialog open, no tags.
    Open,
    /// `Found` tags visible.
    Searched,
    /// `Replaced` tags visible.
    Replaced,
}

/// Dialog input that holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    FindInput,
    ReplaceInput,
}

/// Find-and-replace session for one document.
#[derive(Debug, Default)]
pub struct FindReplaceSession {
    state: SessionState,
    focus: Focus,
    /// Last non-empty find text
    last_find: Option<String>,
    /// Last non-empty replacement text
    last_replace_with: Option<String>,
}

impl FindReplaceSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != SessionState::Closed
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn last_find(&self) -> Option<&str> {
        self.last_find.as_deref()
    }

    pub fn last_replace_with(&self) -> Option<&str> {
        self.last_replace_with.as_deref()
    }

    /// Open the dialog. Reopening an open dialog only refocuses the find input.
    pub fn open(&mut self) {
        if self.state == SessionState::Closed {
            notepad_logger::debug("Find/replace dialog opened");
            self.state = SessionState::Open;
        }
        self.focus = Focus::FindInput;
    }

    /// Find all matches of `text` and highlight them.
    ///
    /// Returns [`SearchError::NotFound`] when nothing matches. Previous
    /// highlights are cleared in that case too, so no stale tags from an
    /// older query stay on screen next to the notice.
    pub fn find<B: SearchBuffer + ?Sized>(
        &mut self,
        buffer: &mut B,
        text: &str,
        match_whole_word: bool,
    ) -> Result<Vec<Match>, SearchError> {
        self.open();

        let query = Query::new(text, match_whole_word).map_err(|e| self.fail(e))?;
        self.last_find = Some(text.to_string());

        let matches = engine::find(&*buffer, &query);
        engine::highlight(buffer, &matches);

        if matches.is_empty() {
            self.state = SessionState::Open;
            return Err(self.fail(SearchError::NotFound));
        }

        notepad_logger::info(format!(
            "Find '{}' (whole word: {}): {} match(es)",
            text,
            match_whole_word,
            matches.len()
        ));
        self.state = SessionState::Searched;
        self.focus = Focus::FindInput;
        Ok(matches)
    }

    /// Replace every match of `text` with `replacement`.
    pub fn replace<B: SearchBuffer + ?Sized>(
        &mut self,
        buffer: &mut B,
        text: &str,
        replacement: &str,
        match_whole_word: bool,
    ) -> Result<usize, SearchError> {
        self.open();

        let query = Query::new(text, match_whole_word).map_err(|e| self.fail(e))?;
        self.last_find = Some(text.to_string());
        if !replacement.is_empty() {
            self.last_replace_with = Some(replacement.to_string());
        }

        let count = engine::replace(buffer, &query, replacement).map_err(|e| self.fail(e))?;

        notepad_logger::info(format!(
            "Replace '{}' with '{}' (whole word: {}): {} replacement(s)",
            text, replacement, match_whole_word, count
        ));
        self.state = SessionState::Replaced;
        self.focus = Focus::FindInput;
        Ok(count)
    }

    /// The document text changed outside the dialog: drop highlights.
    pub fn text_changed<B: SearchBuffer + ?Sized>(&mut self, buffer: &mut B) {
        if matches!(self.state, SessionState::Searched | SessionState::Replaced) {
            notepad_logger::debug("Text changed, dropping highlights");
            engine::clear_highlights(buffer);
            self.state = SessionState::Open;
        }
    }

    /// Close the dialog, clearing all highlights regardless of state.
    pub fn close<B: SearchBuffer + ?Sized>(&mut self, buffer: &mut B) {
        engine::clear_highlights(buffer);
        if self.state != SessionState::Closed {
            notepad_logger::debug("Find/replace dialog closed");
        }
        self.state = SessionState::Closed;
        self.focus = Focus::FindInput;
    }

    fn fail(&mut self, error: SearchError) -> SearchError {
        notepad_logger::warn(format!("Find/replace: {}", error));
        self.focus = error.focus();
        error
    }
}
