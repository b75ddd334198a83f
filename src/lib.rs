// Public API exports
pub mod chunker;
pub mod config;
pub mod document;
pub mod error;
pub mod numbering;
pub mod report;
pub mod segmenter;
pub mod separator;
pub mod session;
pub mod telemetry;
pub mod tracker;

// Re-export main types for convenience
pub use error::{Error, Result};

pub use config::Config;
pub use document::{Document, Edit, Insertion, MarkerId};

pub use segmenter::{advance, Direction, Unit};
pub use separator::{Glyph, Located, Separator};

pub use chunker::{chunk_region, ChunkOutcome};
pub use numbering::{number, ordinal_tag};
pub use tracker::{boundaries_of_chunk_at, refresh_all, update_readout, ChunkBounds, LiveTracker};

pub use report::{chunks, ChunkView};
pub use session::Session;
