//! Text buffer with rope data structure for notepad.
//!
//! Provides text storage and editing on top of ropey, line/column cursors,
//! and highlight tags that keep their place as the text changes. The buffer
//! implements [`notepad_text_search::SearchBuffer`] so the find-and-replace
//! engine can work on it directly.

mod buffer;
mod cursor;
mod tags;

pub use buffer::TextBuffer;
pub use cursor::Cursor;
pub use tags::TagSet;

/// Line ending type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::upper_case_acronyms)]
pub enum LineEnding {
    #[default]
    LF, // Unix \n
    CRLF, // Windows \r\n
}
