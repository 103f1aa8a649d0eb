//! The buffer interface the search engine reads and writes through.

/// Visual marker applied to a range of the buffer.
///
/// `Found` and `Replaced` are never visible at the same time: the engine
/// clears both across the whole buffer before applying either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    /// Matches of the last search.
    Found,
    /// Text inserted by the last replace.
    Replaced,
}

impl Tag {
    /// All tags, in a stable order.
    pub const ALL: [Tag; 2] = [Tag::Found, Tag::Replaced];
}

/// Text buffer owned by the host editor.
///
/// Positions are linear character offsets. A position is only meaningful
/// until the next call to [`delete`](SearchBuffer::delete) or
/// [`insert`](SearchBuffer::insert); callers recompute positions after every
/// edit instead of holding on to them.
pub trait SearchBuffer {
    /// Total length in characters. This is the end position.
    fn len_chars(&self) -> usize;

    /// Text in `[start, end)`.
    fn get_text(&self, start: usize, end: usize) -> String;

    /// Character at `position`, or `None` past the end of the buffer.
    fn char_at(&self, position: usize) -> Option<char>;

    /// Start of the first case-sensitive literal occurrence of `needle`
    /// that begins at or after `from` and ends no later than `to`.
    fn search_literal(&self, needle: &str, from: usize, to: usize) -> Option<usize>;

    /// Remove `[start, end)`.
    fn delete(&mut self, start: usize, end: usize);

    /// Insert `text` so that it starts at `position`.
    fn insert(&mut self, position: usize, text: &str);

    /// Add `tag` to `[start, end)`.
    fn apply_tag(&mut self, tag: Tag, start: usize, end: usize);

    /// Remove `tag` from `[start, end)`.
    fn clear_tag(&mut self, tag: Tag, start: usize, end: usize);
}
