//! SHA-1 compression engine
//!
//! Folds successive 512-bit blocks into the running five-word state with
//! the message-schedule expansion and 80-round transform from RFC 3174
//! section 6.1.

use super::codec::bytes_to_words;
use super::{BLOCK_WORDS, Result, SCHEDULE_WORDS, STATE_WORDS};

/// RFC 3174 section 6.1 initialization vector.
pub(crate) const INITIAL_STATE: [u32; STATE_WORDS] = [
    0x6745_2301,
    0xEFCD_AB89,
    0x98BA_DCFE,
    0x1032_5476,
    0xC3D2_E1F0,
];

const K1: u32 = 0x5A82_7999;
const K2: u32 = 0x6ED9_EBA1;
const K3: u32 = 0x8F1B_BCDC;
const K4: u32 = 0xCA62_C1D6;

/// Fold one or more whole blocks into the running state.
///
/// Callers hand this either the padding stage's output or an
/// already-validated block-aligned chunk, so the word conversion cannot
/// fail in practice; a malformed length still surfaces as an error
/// instead of dropping trailing bytes.
pub(crate) fn process_blocks(state: &mut [u32; STATE_WORDS], data: &[u8]) -> Result<()> {
    let words = bytes_to_words(data)?;
    debug_assert_eq!(words.len() % BLOCK_WORDS, 0);

    for block in words.chunks_exact(BLOCK_WORDS) {
        process_block(state, block);
    }
    Ok(())
}

fn process_block(state: &mut [u32; STATE_WORDS], block: &[u32]) {
    // Schedule scratch is rebuilt from scratch per block; words 16..80 are
    // derived purely from this block's first 16.
    let mut w = [0u32; SCHEDULE_WORDS];
    w[..BLOCK_WORDS].copy_from_slice(block);
    for t in BLOCK_WORDS..SCHEDULE_WORDS {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    for (t, &w_t) in w.iter().enumerate() {
        let (f, k) = match t {
            0..=19 => (choice(b, c, d), K1),
            20..=39 => (parity(b, c, d), K2),
            40..=59 => (majority(b, c, d), K3),
            60..=79 => (parity(b, c, d), K4),
            _ => unreachable!("schedule index out of range"),
        };

        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(w_t)
            .wrapping_add(k);

        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

#[inline(always)]
fn choice(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
fn parity(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
fn majority(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}
