//! Highlight tag ranges that follow buffer edits.

use std::collections::BTreeMap;
use std::ops::Range;

use notepad_text_search::Tag;

/// Character ranges per tag.
///
/// Each tag's ranges are kept sorted, non-empty, and merged when they
/// overlap or touch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    ranges: BTreeMap<Tag, Vec<Range<usize>>>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ranges carrying `tag`, in order.
    pub fn ranges(&self, tag: Tag) -> &[Range<usize>] {
        match self.ranges.get(&tag) {
            Some(ranges) => ranges,
            None => &[],
        }
    }

    /// Whether the character at `position` carries `tag`.
    pub fn is_tagged(&self, tag: Tag, position: usize) -> bool {
        let ranges = self.ranges(tag);
        let idx = ranges.partition_point(|r| r.end <= position);
        ranges.get(idx).is_some_and(|r| r.contains(&position))
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.values().all(Vec::is_empty)
    }

    /// Add `tag` to `[start, end)`.
    ///
    /// Only the ranges overlapping or touching the new one are merged, so
    /// tagging in increasing order appends in constant time.
    pub fn apply(&mut self, tag: Tag, start: usize, end: usize) {
        if start >= end {
            return;
        }
        let ranges = self.ranges.entry(tag).or_default();

        let first = ranges.partition_point(|r| r.end < start);
        let last = ranges.partition_point(|r| r.start <= end);
        if first == last {
            ranges.insert(first, start..end);
            return;
        }

        let merged = start.min(ranges[first].start)..end.max(ranges[last - 1].end);
        ranges.splice(first..last, std::iter::once(merged));
    }

    /// Remove `tag` from `[start, end)`, splitting ranges that straddle it.
    pub fn clear(&mut self, tag: Tag, start: usize, end: usize) {
        if start >= end {
            return;
        }
        let Some(ranges) = self.ranges.get_mut(&tag) else {
            return;
        };

        let mut kept = Vec::with_capacity(ranges.len());
        for r in ranges.drain(..) {
            if r.end <= start || r.start >= end {
                kept.push(r);
                continue;
            }
            if r.start < start {
                kept.push(r.start..start);
            }
            if r.end > end {
                kept.push(end..r.end);
            }
        }
        *ranges = kept;
    }

    /// Adjust ranges for `len` characters inserted at `at`.
    ///
    /// Text inserted at a range's start or end is not tagged; text inserted
    /// strictly inside a range is.
    pub(crate) fn shift_for_insert(&mut self, at: usize, len: usize) {
        if len == 0 {
            return;
        }
        for ranges in self.ranges.values_mut() {
            let first = ranges.partition_point(|r| r.end <= at);
            for r in &mut ranges[first..] {
                if r.start >= at {
                    r.start += len;
                    r.end += len;
                } else if r.end > at {
                    r.end += len;
                }
            }
        }
    }

    /// Adjust ranges for the removal of `[start, end)`.
    pub(crate) fn shift_for_delete(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        let removed = end - start;
        let map = |x: usize| {
            if x <= start {
                x
            } else if x >= end {
                x - removed
            } else {
                start
            }
        };

        // The mapping keeps order, so only the tail past the edit can
        // collapse or come to touch its neighbour.
        for ranges in self.ranges.values_mut() {
            let first = ranges.partition_point(|r| r.end <= start);
            let tail = ranges.split_off(first);
            for r in tail {
                let r = map(r.start)..map(r.end);
                if r.is_empty() {
                    continue;
                }
                match ranges.last_mut() {
                    Some(last) if r.start <= last.end => last.end = last.end.max(r.end),
                    _ => ranges.push(r),
                }
            }
        }
    }
}
