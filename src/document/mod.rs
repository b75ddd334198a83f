mod marker;


pub use marker::{Insertion, MarkerId};

use crate::error::{Error, Result};
use marker::Marker;
use regex::Regex;
use ropey::Rope;
use std::ops::Range;

/// Description of a single mutation, reported back to whoever routes edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit {
    /// Character offset where the edit happened
    pub start: usize,
    /// Number of characters inserted at `start`
    pub inserted: usize,
    /// Number of characters removed at `start`
    pub removed: usize,
}

impl Edit {
    /// Position just after the inserted text
    pub fn end(&self) -> usize {
        self.start + self.inserted
    }
}

/// Mutable text buffer with position markers that follow edits
///
/// All positions are character offsets in `0..=len_chars()`.
#[derive(Debug, Clone, Default)]
pub struct Document {
    text: Rope,
    markers: Vec<Option<Marker>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len_chars(&self) -> usize {
        self.text.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Character at `position`, if any
    pub fn char_at(&self, position: usize) -> Option<char> {
        if position < self.len_chars() {
            Some(self.text.char(position))
        } else {
            None
        }
    }

    /// Copy of the text in `range`
    pub fn slice(&self, range: Range<usize>) -> Result<String> {
        self.check_range(&range)?;
        Ok(self.text.slice(range).to_string())
    }

    /// Copy of the whole text
    pub fn text(&self) -> String {
        self.text.to_string()
    }

    pub fn insert(&mut self, position: usize, text: &str) -> Result<Edit> {
        self.check_position(position)?;
        let inserted = text.chars().count();
        self.text.insert(position, text);
        for marker in self.markers.iter_mut().flatten() {
            marker.shift_for_insert(position, inserted);
        }
        Ok(Edit {
            start: position,
            inserted,
            removed: 0,
        })
    }

    pub fn delete(&mut self, range: Range<usize>) -> Result<Edit> {
        self.check_range(&range)?;
        let removed = range.end - range.start;
        self.text.remove(range.clone());
        for marker in self.markers.iter_mut().flatten() {
            marker.shift_for_delete(range.start, range.end);
        }
        Ok(Edit {
            start: range.start,
            inserted: 0,
            removed,
        })
    }

    /// Delete `range`, then insert `text` at its start
    pub fn replace(&mut self, range: Range<usize>, text: &str) -> Result<Edit> {
        let removed = self.delete(range.clone())?.removed;
        let inserted = self.insert(range.start, text)?.inserted;
        Ok(Edit {
            start: range.start,
            inserted,
            removed,
        })
    }

    /// First match of `pattern` lying entirely within `from..bound`
    pub fn search_forward(&self, pattern: &Regex, from: usize, bound: usize) -> Option<Range<usize>> {
        let bound = bound.min(self.len_chars());
        if from > bound {
            return None;
        }
        let haystack = self.text.slice(from..bound).to_string();
        pattern
            .find(&haystack)
            .map(|m| to_char_range(&haystack, from, m.start()..m.end()))
    }

    /// Last match of `pattern` lying entirely within `bound..from`
    pub fn search_backward(&self, pattern: &Regex, from: usize, bound: usize) -> Option<Range<usize>> {
        let from = from.min(self.len_chars());
        if bound > from {
            return None;
        }
        let haystack = self.text.slice(bound..from).to_string();
        pattern
            .find_iter(&haystack)
            .last()
            .map(|m| to_char_range(&haystack, bound, m.start()..m.end()))
    }

    /// Track `position` across later edits
    pub fn add_marker(&mut self, position: usize, insertion: Insertion) -> Result<MarkerId> {
        self.check_position(position)?;
        let marker = Marker {
            position,
            insertion,
        };
        match self.markers.iter().position(Option::is_none) {
            Some(slot) => {
                self.markers[slot] = Some(marker);
                Ok(MarkerId(slot))
            }
            None => {
                self.markers.push(Some(marker));
                Ok(MarkerId(self.markers.len() - 1))
            }
        }
    }

    /// Current position of a marker, `None` once it has been removed
    pub fn marker(&self, id: MarkerId) -> Option<usize> {
        self.markers
            .get(id.0)
            .and_then(|m| m.as_ref())
            .map(|m| m.position)
    }

    pub fn remove_marker(&mut self, id: MarkerId) {
        if let Some(slot) = self.markers.get_mut(id.0) {
            *slot = None;
        }
    }

    fn check_position(&self, position: usize) -> Result<()> {
        if position > self.len_chars() {
            return Err(Error::OutOfBounds {
                position,
                len: self.len_chars(),
            });
        }
        Ok(())
    }

    fn check_range(&self, range: &Range<usize>) -> Result<()> {
        if range.start > range.end {
            return Err(Error::InvalidRegion {
                begin: range.start,
                end: range.end,
                len: self.len_chars(),
            });
        }
        self.check_position(range.end)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self {
            text: Rope::from_str(text),
            markers: Vec::new(),
        }
    }
}

/// Convert a byte range within `haystack` into document character offsets
fn to_char_range(haystack: &str, base: usize, bytes: Range<usize>) -> Range<usize> {
    let start = base + haystack[..bytes.start].chars().count();
    let end = start + haystack[bytes].chars().count();
    start..end
}
