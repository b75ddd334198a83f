//! Live length tracking for chunks under edit
//!
//! After every document mutation the tracker finds the chunk around the edit
//! and rewrites the `NUM` field of the separator in front of it. Edits that do
//! not land inside a chunk are ignored.

mod bounds;


pub use bounds::{all_chunks, boundaries_of_chunk_at, bounds_between, ChunkBounds};

use crate::document::Document;
use crate::error::Result;
use crate::separator;
use tracing::debug;

/// Edit observer that keeps separator readouts in sync with chunk lengths
///
/// Tracking starts disabled; whoever routes edits decides when to switch it
/// on.
#[derive(Debug, Clone, Default)]
pub struct LiveTracker {
    enabled: bool,
}

impl LiveTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// React to a mutation at `position`
    ///
    /// Never fails: a position outside any chunk is a no-op, and internal
    /// errors are logged and dropped so the observer stays installed.
    pub fn on_edit(&self, doc: &mut Document, position: usize) {
        if !self.enabled {
            return;
        }
        match update_readout(doc, position) {
            Ok(Some(length)) => debug!(position, length, "updated chunk readout"),
            Ok(None) => {}
            Err(e) => debug!(position, error = %e, "chunk readout update failed"),
        }
    }
}

/// Rewrite the readout of the chunk enclosing `position`
///
/// Returns the new length, or `None` when `position` is not inside a chunk.
/// Running it twice without an edit in between leaves the text unchanged.
pub fn update_readout(doc: &mut Document, position: usize) -> Result<Option<usize>> {
    let Some((front, bounds)) = bounds::chunk_at(doc, position) else {
        return Ok(None);
    };
    separator::write_num(doc, &front, bounds.len())?;
    Ok(Some(bounds.len()))
}

/// Recompute every readout in the document; returns how many changed
pub fn refresh_all(doc: &mut Document) -> Result<usize> {
    let mut changed = 0;
    // later chunks first, so rewriting a readout never shifts a pending one
    for (front, bounds) in all_chunks(doc).into_iter().rev() {
        if separator::write_num(doc, &front, bounds.len())?.is_some() {
            changed += 1;
        }
    }
    Ok(changed)
}
