//! Digest error types

use thiserror::Error;

/// Digest engine errors
#[derive(Error, Debug)]
pub enum Error {
    /// Non-final chunk was not block-aligned
    #[error("unaligned chunk: {len} bytes is not a multiple of 64")]
    UnalignedChunk {
        /// Offending chunk length
        len: usize,
    },

    /// Ingestion attempted after finalization
    #[error("session closed: no chunks accepted after finalization")]
    SessionClosed,

    /// Word codec was handed a buffer not divisible by the word size
    #[error("malformed word conversion: {len} bytes is not a multiple of 4")]
    MalformedWordConversion {
        /// Offending buffer length
        len: usize,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
