//! Final-chunk padding stage
//!
//! RFC 3174 section 4: append a single one bit (`0x80` in byte-aligned
//! form), zero bytes until the length is 64 bits short of a block
//! boundary, then the total message bit length as a 64-bit big-endian
//! integer.

use super::{BLOCK_SIZE, LENGTH_SUFFIX_SIZE};

/// Pad the final chunk of a message out to a whole number of blocks.
///
/// `total_bits` is the bit length of the entire message across every
/// chunk fed to the session, not of this chunk alone; the suffix must
/// encode the original, unpadded length.
#[must_use]
pub fn pad_final_chunk(chunk: &[u8], total_bits: u64) -> Vec<u8> {
    let capacity = (chunk.len() + 1 + LENGTH_SUFFIX_SIZE).next_multiple_of(BLOCK_SIZE);
    let mut padded = Vec::with_capacity(capacity);
    padded.extend_from_slice(chunk);
    padded.push(0x80);

    // Checked after the marker byte: a chunk already at the residue still
    // gets a full extra block of zeros.
    while padded.len() % BLOCK_SIZE != BLOCK_SIZE - LENGTH_SUFFIX_SIZE {
        padded.push(0x00);
    }

    padded.extend_from_slice(&total_bits.to_be_bytes());
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suffix(padded: &[u8]) -> u64 {
        u64::from_be_bytes(padded[padded.len() - LENGTH_SUFFIX_SIZE..].try_into().unwrap())
    }

    #[test]
    fn empty_chunk_pads_to_one_block() {
        let padded = pad_final_chunk(&[], 0);
        assert_eq!(padded.len(), BLOCK_SIZE);
        assert_eq!(padded[0], 0x80);
        assert!(padded[1..56].iter().all(|&b| b == 0));
        assert_eq!(suffix(&padded), 0);
    }

    #[test]
    fn residue_chunk_skips_zero_fill() {
        // 55 bytes plus the marker lands exactly on the 56 mod 64 residue.
        let chunk = [0xABu8; 55];
        let padded = pad_final_chunk(&chunk, 55 * 8);
        assert_eq!(padded.len(), BLOCK_SIZE);
        assert_eq!(padded[55], 0x80);
        assert_eq!(suffix(&padded), 55 * 8);
    }

    #[test]
    fn boundary_chunk_rolls_into_extra_block() {
        // At 56 bytes the marker overshoots the residue, forcing a second block.
        let chunk = [0x11u8; 56];
        let padded = pad_final_chunk(&chunk, 56 * 8);
        assert_eq!(padded.len(), 2 * BLOCK_SIZE);
        assert_eq!(padded[56], 0x80);
        assert!(padded[57..120].iter().all(|&b| b == 0));
        assert_eq!(suffix(&padded), 56 * 8);
    }

    #[test]
    fn suffix_carries_stream_total_not_chunk_length() {
        // A 4-byte tail of a 68-byte streamed message.
        let padded = pad_final_chunk(b"tail", 68 * 8);
        assert_eq!(suffix(&padded), 68 * 8);
    }

    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn chunk_strategy() -> impl Strategy<Value = Vec<u8>> {
            prop::collection::vec(any::<u8>(), 0..=512)
        }

        proptest! {
            /// Property: padded output is always a whole number of blocks
            #[test]
            fn prop_padded_length_is_block_multiple(chunk in chunk_strategy()) {
                let padded = pad_final_chunk(&chunk, (chunk.len() as u64) * 8);
                prop_assert_eq!(padded.len() % BLOCK_SIZE, 0);
            }

            /// Property: the message prefix survives padding unchanged
            #[test]
            fn prop_message_prefix_preserved(chunk in chunk_strategy()) {
                let padded = pad_final_chunk(&chunk, (chunk.len() as u64) * 8);
                prop_assert_eq!(&padded[..chunk.len()], chunk.as_slice());
            }

            /// Property: the marker byte immediately follows the message
            #[test]
            fn prop_marker_follows_message(chunk in chunk_strategy()) {
                let padded = pad_final_chunk(&chunk, (chunk.len() as u64) * 8);
                prop_assert_eq!(padded[chunk.len()], 0x80);
            }

            /// Property: the trailing 8 bytes encode the stream-wide bit length
            #[test]
            fn prop_suffix_encodes_bit_length(
                chunk in chunk_strategy(),
                earlier_blocks in 0u64..=4,
            ) {
                let total_bits = (chunk.len() as u64 + earlier_blocks * 64) * 8;
                let padded = pad_final_chunk(&chunk, total_bits);
                let tail = u64::from_be_bytes(
                    padded[padded.len() - LENGTH_SUFFIX_SIZE..].try_into().unwrap(),
                );
                prop_assert_eq!(tail, total_bits);
            }
        }
    }
}
