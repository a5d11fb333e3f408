//! Stream and file digest drivers
//!
//! Pulls arbitrary-size reads from any [`Read`] source, buffers them up
//! to block alignment, and feeds the digest session. This is the
//! buffering adapter the session itself refuses to be.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use bytes::BytesMut;
use tracing::debug;

use crate::digest::{BLOCK_SIZE, Result, Session};

/// Read granularity for stream hashing (16 blocks).
pub const CHUNK_SIZE: usize = 1024;

/// Hash everything a reader yields.
///
/// Reads accumulate in a carry buffer; the block-aligned prefix is fed to
/// the session as non-final chunks and the unaligned remainder (possibly
/// empty) becomes the final chunk at EOF.
pub fn hash_reader<R: Read>(mut reader: R) -> Result<String> {
    let mut session = Session::new();
    let mut carry = BytesMut::with_capacity(CHUNK_SIZE + BLOCK_SIZE);
    let mut scratch = [0u8; CHUNK_SIZE];

    loop {
        let n = match reader.read(&mut scratch) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        carry.extend_from_slice(&scratch[..n]);

        let aligned = carry.len() - carry.len() % BLOCK_SIZE;
        if aligned > 0 {
            let blocks = carry.split_to(aligned);
            session.ingest_chunk(&blocks, false)?;
        }
    }

    session.ingest_chunk(&carry, true)?;
    debug!(total_bits = session.bits_ingested(), "stream hashed");
    Ok(session.finalize_to_hex())
}

/// Hash a file's contents.
pub fn hash_file(path: impl AsRef<Path>) -> Result<String> {
    let file = File::open(path)?;
    hash_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::{Error, hash_whole};
    use std::io::Cursor;

    /// Reader that yields fixed-size short reads to exercise the carry
    /// buffer's alignment handling.
    struct Dribble<'a> {
        data: &'a [u8],
        step: usize,
    }

    impl Read for Dribble<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let take = self.step.min(self.data.len()).min(buf.len());
            buf[..take].copy_from_slice(&self.data[..take]);
            self.data = &self.data[take..];
            Ok(take)
        }
    }

    #[test]
    fn empty_reader_matches_empty_message() {
        let hex = hash_reader(Cursor::new(Vec::new())).unwrap();
        assert_eq!(hex, hash_whole(b""));
    }

    #[test]
    fn cursor_matches_single_shot() {
        let message = vec![0xC3u8; 5000];
        let hex = hash_reader(Cursor::new(message.clone())).unwrap();
        assert_eq!(hex, hash_whole(&message));
    }

    #[test]
    fn short_reads_match_single_shot() {
        let message: Vec<u8> = (0..=255u8).cycle().take(3001).collect();
        let reader = Dribble {
            data: &message,
            step: 37,
        };
        assert_eq!(hash_reader(reader).unwrap(), hash_whole(&message));
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir().join(format!("rfc3174-io-test-{}", std::process::id()));
        std::fs::write(&path, b"The quick brown fox jumps over the lazy dog").unwrap();

        let hex = hash_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(hex, "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12");
    }

    #[test]
    fn missing_file_reports_io_error() {
        let result = hash_file("/nonexistent/rfc3174-io-test");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
