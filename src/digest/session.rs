//! Streaming digest session
//!
//! Orchestrates chunk ingestion: block-aligned non-final chunks flow
//! straight to the compression engine, the final chunk goes through the
//! padding stage with the session-wide bit length, and the rendered
//! digest is cached so finalization is idempotent.

use tracing::{debug, trace};

use super::codec::words_to_hex;
use super::compress::{self, INITIAL_STATE};
use super::padding::pad_final_chunk;
use super::{BLOCK_SIZE, Error, Result, STATE_WORDS};

/// Streaming SHA-1 digest session.
///
/// A session is a single-use accumulator: feed zero or more block-aligned
/// non-final chunks, then one final chunk of any length (possibly empty),
/// then read the digest. A finalized session rejects further input but
/// keeps its digest queryable.
///
/// The session never buffers partial blocks; callers that read in
/// arbitrary sizes buffer up to alignment themselves (see
/// [`crate::io::hash_reader`]).
#[derive(Debug, Clone)]
pub struct Session {
    state: [u32; STATE_WORDS],
    bit_len: u64,
    digest: Option<String>,
}

impl Session {
    /// Create a fresh session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            bit_len: 0,
            digest: None,
        }
    }

    /// Feed a chunk of message bytes.
    ///
    /// Non-final chunks must be an exact multiple of the 64-byte block
    /// size. The final chunk may be any length and triggers padding and
    /// finalization.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionClosed`] after finalization and
    /// [`Error::UnalignedChunk`] for an unaligned non-final chunk; in
    /// both cases the running state is left untouched.
    pub fn ingest_chunk(&mut self, bytes: &[u8], is_final: bool) -> Result<()> {
        if self.digest.is_some() {
            return Err(Error::SessionClosed);
        }

        if !is_final && bytes.len() % BLOCK_SIZE != 0 {
            return Err(Error::UnalignedChunk { len: bytes.len() });
        }

        trace!(len = bytes.len(), is_final, "ingesting chunk");
        self.bit_len += (bytes.len() as u64) * 8;

        if is_final {
            let padded = pad_final_chunk(bytes, self.bit_len);
            compress::process_blocks(&mut self.state, &padded)?;
            self.digest = Some(words_to_hex(&self.state));
            debug!(total_bits = self.bit_len, "session finalized");
        } else {
            compress::process_blocks(&mut self.state, bytes)?;
        }

        Ok(())
    }

    /// Whether the final chunk has been ingested.
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.digest.is_some()
    }

    /// Total message bits fed so far, across all chunks.
    #[must_use]
    pub fn bits_ingested(&self) -> u64 {
        self.bit_len
    }

    /// Render the digest as 40 lowercase hex characters.
    ///
    /// Calling this on an unfinalized session ingests an implicit empty
    /// final chunk first, so whole-message callers never deal with the
    /// chunking contract. Repeated calls return the same string without
    /// recomputation.
    pub fn finalize_to_hex(&mut self) -> String {
        if self.digest.is_none() {
            self.ingest_chunk(&[], true)
                .expect("empty final chunk on an open session cannot fail");
        }
        self.digest.clone().expect("digest cached at finalization")
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash a whole in-memory message in one call.
///
/// Equivalent to a fresh session fed the message as its sole final chunk.
#[must_use]
pub fn hash_whole(data: impl AsRef<[u8]>) -> String {
    let mut session = Session::new();
    session
        .ingest_chunk(data.as_ref(), true)
        .expect("fresh session accepts a final chunk");
    session.finalize_to_hex()
}
