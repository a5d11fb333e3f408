//! SHA-1 (RFC 3174) message digest engine with a streaming session API.
//!
//! This library implements the complete RFC 3174 pipeline: final-chunk
//! padding, big-endian word conversion, and the 80-round compression
//! function, driven either over a whole in-memory buffer or chunk by chunk
//! through a [`Session`].
//!
//! # Quick Start
//!
//! ```rust
//! use rfc3174::{Session, hash_whole};
//!
//! // One-shot hashing
//! let hex = hash_whole(b"abc");
//! assert_eq!(hex, "a9993e364706816aba3e25717850c26c9cd0d89d");
//!
//! // Streaming: non-final chunks must be block-aligned
//! let mut session = Session::new();
//! session.ingest_chunk(&[b'a'; 64], false)?;
//! session.ingest_chunk(b"tail", true)?;
//! let hex = session.finalize_to_hex();
//! assert_eq!(hex.len(), rfc3174::DIGEST_HEX_LEN);
//! # Ok::<(), rfc3174::Error>(())
//! ```
//!
//! # Features
//!
//! - **Streaming sessions** - Block-aligned chunk ingestion with
//!   session-wide length accounting
//! - **Strict contract** - Unaligned or post-finalization input is a typed
//!   error, never silent state corruption
//! - **Stream drivers** - [`hash_reader`] and [`hash_file`] buffer
//!   arbitrary-size reads up to block alignment

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod digest;
pub mod io;

pub use digest::{BLOCK_SIZE, DIGEST_SIZE, Error, Result, Session, hash_whole};
pub use io::{CHUNK_SIZE, hash_file, hash_reader};

/// Hex digest length in characters.
pub const DIGEST_HEX_LEN: usize = 40;
