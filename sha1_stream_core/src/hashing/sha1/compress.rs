//! SHA-1 compression function

use super::block::{BLOCK_LEN, BLOCK_WORDS};

/// Initial digest state
pub(crate) const INITIAL_STATE: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Round constants, one per stage of 20 rounds
const K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

/// Words in the expanded message schedule
const SCHEDULE_LEN: usize = 80;

/// Rounds per stage
const STAGE_LEN: usize = 20;

/// Fold one 64-byte block into `state`.
///
/// The schedule lives on the stack of each call, so concurrent engines on
/// different threads never share scratch memory.
pub(crate) fn compress(state: &mut [u32; 5], block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_LEN);

    let mut w = [0u32; SCHEDULE_LEN];
    for (slot, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    for i in BLOCK_WORDS..SCHEDULE_LEN {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (i, &word) in w.iter().enumerate() {
        let stage = i / STAGE_LEN;
        let t = a
            .rotate_left(5)
            .wrapping_add(round_function(stage, b, c, d))
            .wrapping_add(e)
            .wrapping_add(word)
            .wrapping_add(K[stage]);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = t;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

#[inline]
fn round_function(stage: usize, b: u32, c: u32, d: u32) -> u32 {
    match stage {
        0 => (b & c) | (!b & d),
        2 => (b & c) | (b & d) | (c & d),
        _ => b ^ c ^ d,
    }
}
