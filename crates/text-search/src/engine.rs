//! Scan, highlight and replace over a [`SearchBuffer`].
//!
//! The engine holds no state. Every call takes the buffer explicitly and
//! recomputes positions after each edit.
//!
//! Known quirk: in whole-word mode a rejected occurrence moves the scan to
//! its end, so overlapping candidates are never retried. Searching `"aa"` in
//! `"aaa b"` rejects `[0, 2)` and resumes at offset 2, where `"a b"` holds no
//! further occurrence.

use crate::{Match, Query, SearchBuffer, SearchError, Tag};

/// Whether `[start, end)` is delimited by whitespace or a buffer boundary.
pub fn is_whole_word<B: SearchBuffer + ?Sized>(buffer: &B, start: usize, end: usize) -> bool {
    let before_ok = start == 0
        || buffer
            .char_at(start - 1)
            .map_or(true, |c| c.is_whitespace());
    let after_ok = buffer.char_at(end).map_or(true, |c| c.is_whitespace());
    before_ok && after_ok
}

/// First accepted occurrence starting at or after `from`.
fn next_match<B: SearchBuffer + ?Sized>(buffer: &B, query: &Query, mut from: usize) -> Option<Match> {
    loop {
        let start = buffer.search_literal(query.text(), from, buffer.len_chars())?;
        let end = start + query.char_len();

        if !query.match_whole_word() || is_whole_word(buffer, start, end) {
            return Some(Match::new(start, end));
        }

        from = end;
    }
}

/// Find all matches of `query`, in increasing order and non-overlapping.
///
/// Does not touch the buffer or its tags.
pub fn find<B: SearchBuffer + ?Sized>(buffer: &B, query: &Query) -> Vec<Match> {
    let mut matches = Vec::new();
    let mut cursor = 0;

    while let Some(m) = next_match(buffer, query, cursor) {
        cursor = m.end;
        matches.push(m);
    }

    matches
}

/// Remove both highlight tags from the whole buffer.
pub fn clear_highlights<B: SearchBuffer + ?Sized>(buffer: &mut B) {
    let end = buffer.len_chars();
    for tag in Tag::ALL {
        buffer.clear_tag(tag, 0, end);
    }
}

/// Replace existing highlights with a `Found` tag on every match.
pub fn highlight<B: SearchBuffer + ?Sized>(buffer: &mut B, matches: &[Match]) {
    clear_highlights(buffer);
    for m in matches {
        buffer.apply_tag(Tag::Found, m.start, m.end);
    }
}

/// Replace every match of `query` with `replacement`, tagging each inserted
/// range `Replaced`. Returns the number of replacements.
///
/// Validation happens before the first edit. The query text must occur
/// somewhere, ignoring whole-word mode, or the result is
/// [`SearchError::NotFound`]; then an empty replacement gives
/// [`SearchError::EmptyReplacement`]. A whole-word pass that accepts no
/// occurrence is also `NotFound`, with the buffer and its tags untouched.
///
/// Scanning resumes right after each inserted replacement, so a replacement
/// containing the query is never matched again in the same pass.
pub fn replace<B: SearchBuffer + ?Sized>(
    buffer: &mut B,
    query: &Query,
    replacement: &str,
) -> Result<usize, SearchError> {
    if buffer
        .search_literal(query.text(), 0, buffer.len_chars())
        .is_none()
    {
        return Err(SearchError::NotFound);
    }
    if replacement.is_empty() {
        return Err(SearchError::EmptyReplacement);
    }
    let Some(mut next) = next_match(&*buffer, query, 0) else {
        return Err(SearchError::NotFound);
    };

    clear_highlights(buffer);

    let replacement_len = replacement.chars().count();
    let mut count = 0;

    loop {
        buffer.delete(next.start, next.end);
        buffer.insert(next.start, replacement);

        let inserted_end = next.start + replacement_len;
        buffer.apply_tag(Tag::Replaced, next.start, inserted_end);
        count += 1;

        match next_match(&*buffer, query, inserted_end) {
            Some(m) => next = m,
            None => break,
        }
    }

    Ok(count)
}
