use crate::document::Document;
use crate::segmenter::{skip_blank_backward, skip_blank_forward};
use crate::separator::{self, Located};
use serde::Serialize;
use std::ops::Range;

/// Measured extent of one chunk body and the separator that fronts it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkBounds {
    /// First non-whitespace character after the fronting separator
    pub start: usize,
    /// One past the last non-whitespace character before the next separator
    pub end: usize,
    /// Range of the fronting separator
    pub front: Range<usize>,
    /// Range of the separator that closes the chunk
    pub back: Range<usize>,
}

impl ChunkBounds {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Measure the body between two consecutive separators, `None` if it holds
/// only whitespace
pub fn bounds_between(doc: &Document, front: &Located, back: &Located) -> Option<ChunkBounds> {
    let start = skip_blank_forward(doc, front.range.end, back.range.start);
    let end = skip_blank_backward(doc, back.range.start, start);
    let bounds = ChunkBounds {
        start,
        end,
        front: front.range.clone(),
        back: back.range.clone(),
    };
    (!bounds.is_empty()).then_some(bounds)
}

/// Find the chunk enclosing `position`
///
/// The chunk must be bounded by a separator on both sides, and `position`
/// must lie between them; a position inside a separator, before the first
/// one or after the last one is not in any chunk.
pub fn boundaries_of_chunk_at(doc: &Document, position: usize) -> Option<ChunkBounds> {
    chunk_at(doc, position).map(|(_, bounds)| bounds)
}

pub(crate) fn chunk_at(doc: &Document, position: usize) -> Option<(Located, ChunkBounds)> {
    let front = separator::find_prev(doc, position, 0)?;
    let back = separator::find_next(doc, front.range.end, doc.len_chars())?;
    if position > back.range.start {
        return None;
    }
    bounds_between(doc, &front, &back).map(|bounds| (front, bounds))
}

/// Every non-empty chunk in the document, in order, with its fronting
/// separator
pub fn all_chunks(doc: &Document) -> Vec<(Located, ChunkBounds)> {
    let separators = separator::find_all(doc, 0..doc.len_chars());
    separators
        .windows(2)
        .filter_map(|pair| bounds_between(doc, &pair[0], &pair[1]).map(|b| (pair[0].clone(), b)))
        .collect()
}
