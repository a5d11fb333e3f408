//! Byte/word codec
//!
//! Converts byte buffers into big-endian 32-bit words and renders digest
//! words as lowercase hex. Both directions are pure and stateless.

use super::{Error, Result, WORD_SIZE};

/// Decode a buffer into big-endian 32-bit words.
///
/// The buffer must already hold a whole number of words (every caller
/// hands this function padded or block-aligned data); anything else is
/// reported as [`Error::MalformedWordConversion`] rather than silently
/// truncated.
pub fn bytes_to_words(bytes: &[u8]) -> Result<Vec<u32>> {
    if bytes.len() % WORD_SIZE != 0 {
        return Err(Error::MalformedWordConversion { len: bytes.len() });
    }

    Ok(bytes
        .chunks_exact(WORD_SIZE)
        .map(|chunk| u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

/// Render each word as 8 lowercase zero-padded hex digits, concatenated.
#[must_use]
pub fn words_to_hex(words: &[u32]) -> String {
    words.iter().map(|word| format!("{word:08x}")).collect()
}
