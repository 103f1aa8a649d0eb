use anyhow::{Context, Result};
use regex::Regex;
use ropey::Rope;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use notepad_text_search::{SearchBuffer, Tag};

use crate::{Cursor, LineEnding, TagSet};

/// Text buffer based on Rope, with highlight tags that follow edits
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    /// Rope structure for storing text, always with `\n` line breaks
    rope: Rope,
    /// File path (if exists)
    file_path: Option<PathBuf>,
    /// Modified flag
    modified: bool,
    /// Line ending type (for saving)
    line_ending: LineEnding,
    tags: TagSet,
}

impl TextBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unmodified buffer holding `text`
    pub fn from_text(text: &str) -> Self {
        let (contents, line_ending) = normalize_line_endings(text);
        Self {
            rope: Rope::from_str(&contents),
            line_ending,
            ..Self::default()
        }
    }

    /// Load file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let mut buffer = Self::from_text(&contents);
        buffer.file_path = Some(path.to_path_buf());
        Ok(buffer)
    }

    /// Save file
    pub fn save(&mut self) -> Result<()> {
        if let Some(path) = self.file_path.clone() {
            self.save_to(&path)
        } else {
            anyhow::bail!("No file path set")
        }
    }

    /// Save to specified file, restoring the original line endings
    pub fn save_to<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = self.rope.to_string();
        let contents = match self.line_ending {
            LineEnding::LF => text,
            LineEnding::CRLF => text.replace('\n', "\r\n"),
        };

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    /// Get line count
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get line by index, including its trailing newline
    pub fn line(&self, index: usize) -> Option<String> {
        if index < self.line_count() {
            Some(self.rope.line(index).to_string())
        } else {
            None
        }
    }

    /// Line length in characters, without the newline
    pub fn line_len(&self, index: usize) -> usize {
        if index >= self.line_count() {
            return 0;
        }
        let line = self.rope.line(index);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// Get all text
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Convert cursor position to character index in Rope
    pub fn cursor_to_char_idx(&self, cursor: &Cursor) -> Result<usize> {
        if cursor.line >= self.line_count() {
            anyhow::bail!("Line {} out of range", cursor.line);
        }
        let line_len = self.line_len(cursor.line);
        if cursor.column > line_len {
            anyhow::bail!(
                "Column {} out of range for line {} (length {})",
                cursor.column,
                cursor.line,
                line_len
            );
        }
        Ok(self.rope.line_to_char(cursor.line) + cursor.column)
    }

    /// Convert character index to cursor, clamping to the end of the buffer
    pub fn char_idx_to_cursor(&self, char_idx: usize) -> Cursor {
        let char_idx = char_idx.min(self.rope.len_chars());
        let line = self.rope.char_to_line(char_idx);
        Cursor::at(line, char_idx - self.rope.line_to_char(line))
    }

    /// Insert text at cursor position, returning the cursor after it
    pub fn insert(&mut self, cursor: &Cursor, text: &str) -> Result<Cursor> {
        let char_idx = self.cursor_to_char_idx(cursor)?;
        self.insert_chars(char_idx, text);
        Ok(self.char_idx_to_cursor(char_idx + text.chars().count()))
    }

    /// Delete text range
    pub fn delete_range(&mut self, start: &Cursor, end: &Cursor) -> Result<()> {
        let start_idx = self.cursor_to_char_idx(start)?;
        let end_idx = self.cursor_to_char_idx(end)?;
        self.remove_chars(start_idx, end_idx);
        Ok(())
    }

    /// Delete the word before the cursor.
    ///
    /// Removes the run of non-whitespace characters that ends at the cursor.
    /// When the cursor follows whitespace, everything from the line start to
    /// the cursor is removed instead. Returns the new cursor.
    pub fn delete_word_before(&mut self, cursor: &Cursor) -> Result<Cursor> {
        let cursor_idx = self.cursor_to_char_idx(cursor)?;
        let line_start = self.rope.line_to_char(cursor.line);
        let before: Cow<str> = self.rope.slice(line_start..cursor_idx).into();

        let delete_from = match word_before_regex()?.find(&before) {
            Some(word) => cursor_idx - word.as_str().chars().count(),
            None => line_start,
        };

        self.remove_chars(delete_from, cursor_idx);
        Ok(self.char_idx_to_cursor(delete_from))
    }

    /// Check if buffer is modified
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Set modified flag
    pub fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }

    /// Get file path
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Get file name
    pub fn file_name(&self) -> Option<&str> {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
    }

    fn insert_chars(&mut self, char_idx: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let char_idx = char_idx.min(self.rope.len_chars());
        self.rope.insert(char_idx, text);
        self.tags.shift_for_insert(char_idx, text.chars().count());
        self.modified = true;
    }

    fn remove_chars(&mut self, start: usize, end: usize) {
        let end = end.min(self.rope.len_chars());
        if start >= end {
            return;
        }
        self.rope.remove(start..end);
        self.tags.shift_for_delete(start, end);
        self.modified = true;
    }
}

/// Trailing run of non-whitespace, compiled once
fn word_before_regex() -> Result<&'static Regex> {
    static WORD_BEFORE: OnceLock<Regex> = OnceLock::new();
    if let Some(regex) = WORD_BEFORE.get() {
        return Ok(regex);
    }
    let regex = Regex::new(r"\S+$").context("Failed to compile word regex")?;
    Ok(WORD_BEFORE.get_or_init(|| regex))
}

/// Split `text` into `\n`-only contents and its detected line ending
fn normalize_line_endings(text: &str) -> (Cow<'_, str>, LineEnding) {
    if text.contains("\r\n") {
        (Cow::Owned(text.replace("\r\n", "\n")), LineEnding::CRLF)
    } else {
        (Cow::Borrowed(text), LineEnding::LF)
    }
}

impl SearchBuffer for TextBuffer {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn get_text(&self, start: usize, end: usize) -> String {
        let end = end.min(self.rope.len_chars());
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    fn char_at(&self, position: usize) -> Option<char> {
        self.rope.get_char(position)
    }

    fn search_literal(&self, needle: &str, from: usize, to: usize) -> Option<usize> {
        let to = to.min(self.rope.len_chars());
        if needle.is_empty() || from >= to {
            return None;
        }

        let from_byte = self.rope.char_to_byte(from);
        let to_byte = self.rope.char_to_byte(to);
        if to_byte - from_byte < needle.len() {
            return None;
        }

        // Walk the rope chunk by chunk from `from`, carrying a tail shorter
        // than the needle so matches across chunk boundaries are seen.
        let (chunks, mut chunk_start, _, _) = self.rope.chunks_at_byte(from_byte);
        let mut window = String::new();
        let mut window_start = from_byte;
        for chunk in chunks {
            let chunk_end = chunk_start + chunk.len();
            let lo = from_byte.saturating_sub(chunk_start);
            let hi = to_byte.min(chunk_end) - chunk_start;
            if lo < hi {
                window.push_str(&chunk[lo..hi]);
            }

            if let Some(idx) = window.find(needle) {
                return Some(self.rope.byte_to_char(window_start + idx));
            }
            if chunk_end >= to_byte {
                break;
            }

            let keep = needle.len() - 1;
            if window.len() > keep {
                let mut cut = window.len() - keep;
                while !window.is_char_boundary(cut) {
                    cut += 1;
                }
                window.drain(..cut);
                window_start += cut;
            }
            chunk_start = chunk_end;
        }
        None
    }

    fn delete(&mut self, start: usize, end: usize) {
        self.remove_chars(start, end);
    }

    fn insert(&mut self, position: usize, text: &str) {
        self.insert_chars(position, text);
    }

    fn apply_tag(&mut self, tag: Tag, start: usize, end: usize) {
        let end = end.min(self.rope.len_chars());
        self.tags.apply(tag, start, end);
    }

    fn clear_tag(&mut self, tag: Tag, start: usize, end: usize) {
        self.tags.clear(tag, start, end);
    }
}
