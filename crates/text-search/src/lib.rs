//! Find and replace for notepad.
//!
//! Literal, case-sensitive search over a host-owned [`SearchBuffer`], with
//! an optional whole-word mode, highlighting through [`Tag`]s, and in-place
//! replacement. [`FindReplaceSession`] adds the dialog state on top.

mod buffer;
pub mod engine;
mod error;
mod query;
mod session;

#[cfg(test)]
mod testing;

pub use buffer::{SearchBuffer, Tag};
pub use engine::{clear_highlights, find, highlight, is_whole_word, replace};
pub use error::SearchError;
pub use query::{Match, Query};
pub use session::{FindReplaceSession, Focus, SessionState};
