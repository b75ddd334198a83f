mod fill;
mod splitter;

#[cfg(test)]
mod tests;

pub use fill::{fill_chunks, wrap_text};
pub use splitter::chunk_region;

use serde::Serialize;

/// Result of one chunker run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChunkOutcome {
    /// Number of chunks produced
    pub chunks: usize,
    /// Position just after the closing separator
    pub end: usize,
}
