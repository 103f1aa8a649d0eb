//! In-memory buffer used by the engine and session tests.

use crate::{SearchBuffer, Tag};

pub(crate) struct MemoryBuffer {
    chars: Vec<char>,
    tags: Vec<(Tag, usize, usize)>,
}

impl MemoryBuffer {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            tags: Vec::new(),
        }
    }

    pub(crate) fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub(crate) fn tag_ranges(&self, tag: Tag) -> Vec<(usize, usize)> {
        let mut ranges: Vec<_> = self
            .tags
            .iter()
            .filter(|(t, _, _)| *t == tag)
            .map(|(_, start, end)| (*start, *end))
            .collect();
        ranges.sort_unstable();
        ranges.dedup();
        ranges
    }
}

impl SearchBuffer for MemoryBuffer {
    fn len_chars(&self) -> usize {
        self.chars.len()
    }

    fn get_text(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }

    fn char_at(&self, position: usize) -> Option<char> {
        self.chars.get(position).copied()
    }

    fn search_literal(&self, needle: &str, from: usize, to: usize) -> Option<usize> {
        let needle: Vec<char> = needle.chars().collect();
        let to = to.min(self.chars.len());
        if needle.is_empty() || from + needle.len() > to {
            return None;
        }
        (from..=to - needle.len()).find(|&i| self.chars[i..i + needle.len()] == needle[..])
    }

    fn delete(&mut self, start: usize, end: usize) {
        self.chars.drain(start..end);
    }

    fn insert(&mut self, position: usize, text: &str) {
        self.chars.splice(position..position, text.chars());
    }

    fn apply_tag(&mut self, tag: Tag, start: usize, end: usize) {
        self.tags.push((tag, start, end));
    }

    // Drops every range of `tag` that overlaps `[start, end)`.
    fn clear_tag(&mut self, tag: Tag, start: usize, end: usize) {
        self.tags
            .retain(|(t, s, e)| *t != tag || *e <= start || *s >= end);
    }
}
