//! Staging buffer for the message block being filled

use crate::memory::Parcel;

/// Bytes per message block
pub const BLOCK_LEN: usize = 64;

/// 32-bit words per message block
pub const BLOCK_WORDS: usize = BLOCK_LEN / 4;

/// Word slot holding the high half of the 64-bit message length
pub(crate) const LENGTH_HIGH_WORD: usize = BLOCK_WORDS - 2;

/// Word slot holding the low half of the 64-bit message length
pub(crate) const LENGTH_LOW_WORD: usize = BLOCK_WORDS - 1;

/// A 64-byte block addressable as bytes or as big-endian words.
///
/// The fill position is not stored here; the engine derives it from its
/// byte cursor. Consumed blocks are overwritten in place, never cleared.
pub(crate) struct BlockBuffer {
    parcel: Parcel,
}

impl BlockBuffer {
    pub(crate) fn new(parcel: Parcel) -> Self {
        debug_assert!(parcel.len() >= BLOCK_LEN);
        Self { parcel }
    }

    /// The block as compression input
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.parcel[..BLOCK_LEN]
    }

    pub(crate) fn set(&mut self, index: usize, byte: u8) {
        self.parcel[index] = byte;
    }

    /// Copy `bytes` in starting at `offset`
    pub(crate) fn write(&mut self, offset: usize, bytes: &[u8]) {
        self.parcel[offset..offset + bytes.len()].copy_from_slice(bytes);
    }

    /// Read word `index` as big-endian
    pub(crate) fn word(&self, index: usize) -> u32 {
        let start = index * 4;
        let bytes = &self.parcel[start..start + 4];
        u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Store word `index` as big-endian
    pub(crate) fn set_word(&mut self, index: usize, word: u32) {
        self.write(index * 4, &word.to_be_bytes());
    }

    /// Zero words in `from..BLOCK_WORDS`
    pub(crate) fn zero_words_from(&mut self, from: usize) {
        self.parcel[from * 4..BLOCK_LEN].fill(0);
    }
}
