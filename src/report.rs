use crate::document::Document;
use crate::tracker::all_chunks;
use serde::Serialize;

/// Snapshot of one chunk as it currently stands in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkView {
    /// 1-based position among the document's chunks
    pub index: usize,
    pub start: usize,
    pub end: usize,
    /// Measured length in characters
    pub length: usize,
    /// `NUM` currently shown by the fronting separator
    pub readout: usize,
    /// `DEN` of the fronting separator
    pub max_len: usize,
    pub over_budget: bool,
    pub text: String,
}

impl ChunkView {
    /// Whether the separator readout matches the measured length
    pub fn is_in_sync(&self) -> bool {
        self.readout == self.length
    }
}

/// All non-empty chunks of `doc`, in order
pub fn chunks(doc: &Document) -> Vec<ChunkView> {
    all_chunks(doc)
        .into_iter()
        .enumerate()
        .map(|(i, (front, bounds))| ChunkView {
            index: i + 1,
            start: bounds.start,
            end: bounds.end,
            length: bounds.len(),
            readout: front.separator.num,
            max_len: front.separator.den,
            over_budget: bounds.len() > front.separator.den,
            text: doc.slice(bounds.start..bounds.end).unwrap_or_default(),
        })
        .collect()
}
