//! SHA-1 digest core
//!
//! This module provides the byte/word codec, final-chunk padding stage,
//! compression engine, and streaming session for RFC 3174.

mod codec;
mod compress;
mod error;
mod padding;
mod session;

pub use codec::{bytes_to_words, words_to_hex};
pub use error::{Error, Result};
pub use padding::pad_final_chunk;
pub use session::{Session, hash_whole};

/// Block size in bytes (512 bits).
pub const BLOCK_SIZE: usize = 64;

/// Word size in bytes.
pub const WORD_SIZE: usize = 4;

/// Words per block.
pub const BLOCK_WORDS: usize = BLOCK_SIZE / WORD_SIZE;

/// Message schedule length in words.
pub const SCHEDULE_WORDS: usize = 80;

/// Running hash state size in words.
pub const STATE_WORDS: usize = 5;

/// Digest size in bytes (160 bits).
pub const DIGEST_SIZE: usize = 20;

/// Size of the big-endian length suffix appended by the padding stage.
pub const LENGTH_SUFFIX_SIZE: usize = 8;
