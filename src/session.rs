//! Host-facing coordinator for edits, chunking and live tracking

use crate::chunker::{self, ChunkOutcome};
use crate::config::Config;
use crate::document::{Document, Edit};
use crate::error::Result;
use crate::numbering;
use crate::report::{self, ChunkView};
use crate::tracker::{self, LiveTracker};
use std::ops::Range;

/// Owns a document and routes every edit through the live tracker
///
/// Chunking runs with tracking suspended so the tracker never sees
/// half-written separators; the previous tracking state is restored
/// afterwards, also when chunking fails.
#[derive(Debug, Clone)]
pub struct Session {
    doc: Document,
    tracker: LiveTracker,
    config: Config,
}

impl Session {
    pub fn new(text: &str, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            doc: Document::from(text),
            tracker: LiveTracker::new(),
            config,
        })
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    pub fn text(&self) -> String {
        self.doc.text()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Chunk `begin..end` with budget `max_len`, then number the result
    pub fn chunk_region(&mut self, begin: usize, end: usize, max_len: usize) -> Result<ChunkOutcome> {
        let config = Config {
            max_len,
            ..self.config.clone()
        };
        self.without_tracking(|doc| {
            let outcome = chunker::chunk_region(doc, begin, end, &config)?;
            let numbered = numbering::number(doc, begin, outcome.end, outcome.chunks, &config)?;
            Ok(ChunkOutcome {
                chunks: outcome.chunks,
                end: numbered.end,
            })
        })
    }

    pub fn chunk_whole_document(&mut self, max_len: usize) -> Result<ChunkOutcome> {
        let end = self.doc.len_chars();
        self.chunk_region(0, end, max_len)
    }

    pub fn enable_live_tracking(&mut self) {
        self.tracker.enable();
    }

    pub fn disable_live_tracking(&mut self) {
        self.tracker.disable();
    }

    pub fn is_tracking(&self) -> bool {
        self.tracker.is_enabled()
    }

    /// Notify the tracker of an edit the host applied at `position`
    pub fn on_edit(&mut self, position: usize) {
        self.tracker.on_edit(&mut self.doc, position);
    }

    pub fn insert(&mut self, position: usize, text: &str) -> Result<Edit> {
        let edit = self.doc.insert(position, text)?;
        self.on_edit(edit.start);
        Ok(edit)
    }

    pub fn delete(&mut self, range: Range<usize>) -> Result<Edit> {
        let edit = self.doc.delete(range)?;
        self.on_edit(edit.start);
        Ok(edit)
    }

    pub fn chunks(&self) -> Vec<ChunkView> {
        report::chunks(&self.doc)
    }

    /// Resynchronise every readout, e.g. after edits made with tracking off
    pub fn refresh_all(&mut self) -> Result<usize> {
        tracker::refresh_all(&mut self.doc)
    }

    fn without_tracking<T>(&mut self, f: impl FnOnce(&mut Document) -> Result<T>) -> Result<T> {
        let was_enabled = self.tracker.is_enabled();
        self.tracker.disable();
        let result = f(&mut self.doc);
        if was_enabled {
            self.tracker.enable();
        }
        result
    }
}
