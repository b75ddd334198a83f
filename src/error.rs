use thiserror::Error;

/// Result type alias for tweetstorm operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Token at position {position} does not fit in a chunk of {available} characters")]
    UnchunkableToken { position: usize, available: usize },

    #[error("Invalid region {begin}..{end} (document length {len})")]
    InvalidRegion { begin: usize, end: usize, len: usize },

    #[error("Region {begin}..{end} contains no text to chunk")]
    EmptyRegion { begin: usize, end: usize },

    #[error("Region already contains a separator at position {0}")]
    RegionHasSeparators(usize),

    #[error("Max length {max_len} leaves no room after reserving {fuzz} characters for the ordinal tag")]
    BudgetTooSmall { max_len: usize, fuzz: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Position {position} is out of bounds (document length {len})")]
    OutOfBounds { position: usize, len: usize },

    #[error("Malformed separator: {0}")]
    MalformedSeparator(String),
}
