//! Incremental SHA-1 engine
//!
//! [`Sha1`] accepts input in any chunking through [`Sha1::update`] and
//! produces the digest once through [`Sha1::digest`]. Text, UTF-16 and byte
//! input all flow into the same 64-byte block buffer; every time it fills
//! the block is compressed into the running state.

use super::digest::{DIGEST_LEN, Digest, DigestFormat, state_to_bytes, state_to_hex};
use super::input::{Chunk, Element};
use crate::Result;
use crate::error::ValidationError;
use crate::memory::{ArenaPool, Parcel};
use log::trace;

mod block;
mod compress;
mod utf8;

pub use block::{BLOCK_LEN, BLOCK_WORDS};

use block::{BlockBuffer, LENGTH_HIGH_WORD, LENGTH_LOW_WORD};
use compress::{INITIAL_STATE, compress};
use utf8::Utf8Encoder;

/// Streaming SHA-1 digest engine
pub struct Sha1 {
    /// Running state words A..E
    state: [u32; 5],
    /// Block being filled
    block: BlockBuffer,
    /// Total bytes absorbed; `cursor % 64` is the fill offset of `block`
    cursor: u64,
    /// UTF-16 encoder, holding a high surrogate across text chunks
    encoder: Utf8Encoder,
}

impl Sha1 {
    /// Create an engine with its own block buffer
    pub fn new() -> Self {
        Self::with_parcel(Parcel::standalone())
    }

    /// Create an engine whose block buffer is sliced from `pool`
    pub fn with_pool(pool: &ArenaPool) -> Self {
        Self::with_parcel(pool.acquire())
    }

    fn with_parcel(parcel: Parcel) -> Self {
        Self {
            state: INITIAL_STATE,
            block: BlockBuffer::new(parcel),
            cursor: 0,
            encoder: Utf8Encoder::default(),
        }
    }

    /// Absorb one chunk of input
    pub fn update<'a>(&mut self, chunk: impl Into<Chunk<'a>>) -> &mut Self {
        match chunk.into() {
            // Already UTF-8 with no lone surrogates: identical to encoding its UTF-16 form
            Chunk::Text(text) => self.absorb(text.as_bytes()),
            Chunk::Utf16(units) => self.absorb_utf16(units),
            Chunk::Bytes(bytes) => self.absorb(bytes),
        }
        self
    }

    /// Absorb a chunk that may be missing
    ///
    /// Fails with an invalid input error when `chunk` is `None`, leaving the
    /// engine untouched.
    pub fn try_update(&mut self, chunk: Option<Chunk<'_>>) -> Result<&mut Self> {
        let chunk = chunk.ok_or_else(|| {
            ValidationError::invalid_input("data", "expected text or a buffer, got nothing")
        })?;
        Ok(self.update(chunk))
    }

    /// Absorb the raw memory of a numeric slice, element by element
    pub fn update_elements<T: Element>(&mut self, elements: &[T]) -> &mut Self {
        for &element in elements {
            self.absorb(element.ne_bytes().as_ref());
        }
        self
    }

    /// Total bytes absorbed so far
    pub fn len(&self) -> u64 {
        self.cursor
    }

    /// Whether no bytes have been absorbed yet
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Whether a high surrogate is waiting for its low half
    pub fn has_pending_surrogate(&self) -> bool {
        self.encoder.pending().is_some()
    }

    /// Pad, compress the final block(s) and encode the digest
    ///
    /// A high surrogate still pending at this point is dropped.
    pub fn digest(mut self, format: DigestFormat) -> Digest {
        self.finish();
        Digest::from_state(&self.state, format)
    }

    /// Finalize into the raw 20-byte digest
    pub fn digest_bytes(mut self) -> [u8; DIGEST_LEN] {
        self.finish();
        state_to_bytes(&self.state)
    }

    /// Finalize into 40 lowercase hex characters
    pub fn digest_hex(mut self) -> String {
        self.finish();
        state_to_hex(&self.state)
    }

    #[inline]
    fn fill(&self) -> usize {
        (self.cursor % BLOCK_LEN as u64) as usize
    }

    /// Binary ingestion path
    fn absorb(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            let fill = self.fill();

            // Whole blocks skip the staging buffer while it is empty
            if fill == 0 && data.len() >= BLOCK_LEN {
                let (block, rest) = data.split_at(BLOCK_LEN);
                compress(&mut self.state, block);
                self.cursor += BLOCK_LEN as u64;
                data = rest;
                continue;
            }

            let take = (BLOCK_LEN - fill).min(data.len());
            let (head, rest) = data.split_at(take);
            self.block.write(fill, head);
            self.cursor += take as u64;
            data = rest;

            if fill + take == BLOCK_LEN {
                compress(&mut self.state, self.block.as_bytes());
            }
        }
    }

    /// Text ingestion path: UTF-8 bytes go straight into the block buffer
    fn absorb_utf16(&mut self, units: &[u16]) {
        for &unit in units {
            let encoded = self.encoder.encode(unit);
            for &byte in encoded.as_slice() {
                self.push(byte);
            }
        }
    }

    fn push(&mut self, byte: u8) {
        let index = self.fill();
        self.block.set(index, byte);
        self.cursor += 1;

        if index + 1 == BLOCK_LEN {
            compress(&mut self.state, self.block.as_bytes());
        }
    }

    /// Merkle–Damgård padding followed by the last compression(s)
    ///
    /// Returns how many blocks were compressed: two when the fill offset
    /// leaves no room for the 64-bit length, otherwise one.
    fn finish(&mut self) -> usize {
        let bit_len = self.cursor.wrapping_mul(8);
        let mut index = self.fill();
        let mut blocks = 1;

        self.block.set(index, 0x80);
        index += 1;
        while index % 4 != 0 {
            self.block.set(index, 0);
            index += 1;
        }

        let mut word = index / 4;
        if word > LENGTH_HIGH_WORD {
            // No room left for the length; it goes into one more block
            self.block.zero_words_from(word);
            compress(&mut self.state, self.block.as_bytes());
            word = 0;
            blocks += 1;
        }

        self.block.zero_words_from(word);
        self.block.set_word(LENGTH_HIGH_WORD, (bit_len >> 32) as u32);
        self.block.set_word(LENGTH_LOW_WORD, bit_len as u32);
        compress(&mut self.state, self.block.as_bytes());

        trace!(
            "Finalized SHA-1 over {} bytes with {blocks} padding block(s)",
            self.cursor
        );
        blocks
    }
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Sha1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sha1")
            .field("len", &self.cursor)
            .field("fill", &self.fill())
            .field("pending_surrogate", &self.encoder.pending())
            .field("current_word", &self.block.word(self.fill() / 4))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::sha1::{Digest as _, Sha1 as Reference};
    use proptest::prelude::*;

    fn reference_hex(data: &[u8]) -> String {
        format!("{:x}", Reference::digest(data))
    }

    fn hex_of(data: &[u8]) -> String {
        let mut engine = Sha1::new();
        engine.update(data);
        engine.digest_hex()
    }

    #[test]
    fn test_known_vectors() {
        let test_cases: Vec<(&str, &str)> = vec![
            ("", "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
            ("abc", "a9993e364706816aba3e25717850c26c9cd0d89d"),
            (
                "The quick brown fox jumps over the lazy dog",
                "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
            ),
            (
                "1234567890123456789012345678901234567890123456789012345678901234",
                "c71490fc24aa3d19e11282da77032dd9cdb33103",
            ),
        ];

        for (input, expected) in test_cases {
            let mut engine = Sha1::new();
            engine.update(input);
            assert_eq!(engine.digest_hex(), expected, "SHA-1 mismatch for {input:?}");
        }
    }

    #[test]
    fn test_padding_boundaries() {
        // 55 fits the length in the last block, 56..=63 need one more
        for len in [0, 1, 55, 56, 57, 63, 64, 65, 119, 120, 128] {
            let data = vec![b'a'; len];
            assert_eq!(hex_of(&data), reference_hex(&data), "length {len}");
        }
    }

    #[test]
    fn test_finish_block_count_follows_fill() {
        for len in 0..=2 * BLOCK_LEN {
            let data = vec![b'q'; len];
            let mut engine = Sha1::new();
            engine.update(&data);

            let fill = len % BLOCK_LEN;
            let expected_blocks = if fill >= 56 { 2 } else { 1 };
            assert_eq!(engine.finish(), expected_blocks, "length {len} (fill {fill})");
            assert_eq!(state_to_hex(&engine.state), reference_hex(&data), "length {len}");
        }
    }

    #[test]
    fn test_every_block_offset_split() {
        let data: Vec<u8> = (0..200u32).map(|i| (i * 7 + 3) as u8).collect();
        let expected = reference_hex(&data);

        for split in 0..=data.len() {
            let mut engine = Sha1::new();
            engine.update(&data[..split]).update(&data[split..]);
            assert_eq!(engine.digest_hex(), expected, "split at {split}");
        }
    }

    #[test]
    fn test_single_byte_chunks() {
        let data = b"Oh, wet Alex, a jar, a fag! Up, disk, curve by! Man Oz, Iraq, Arizona, my Bev? Ruck's id-pug, a far Ajax, elate? Who?";
        let mut engine = Sha1::new();
        for byte in data.chunks(1) {
            engine.update(byte);
        }

        assert_eq!(engine.len(), 117);
        assert_eq!(engine.digest_hex(), "8a6b5061c2724db215c1f23de00272f39bfa2cb5");
    }

    #[test]
    fn test_cursor_tracks_fill() {
        let mut engine = Sha1::new();
        assert!(engine.is_empty());

        engine.update(&[0u8; 70][..]);
        assert_eq!(engine.len(), 70);
        assert_eq!(engine.fill(), 6);

        engine.update("é");
        assert_eq!(engine.len(), 72);
        assert_eq!(engine.fill(), 8);
    }

    #[test]
    fn test_binary_and_hex_agree() {
        let input = "The quick brown fox jumps over the lazy dog";

        let mut binary = Sha1::new();
        binary.update(input);
        let binary = binary.digest(DigestFormat::Binary);

        let mut hex = Sha1::new();
        hex.update(input);
        let hex = hex.digest(DigestFormat::Hex);

        assert_eq!(binary.as_bytes().map(|b| b.len()), Some(DIGEST_LEN));
        assert_eq!(hex.as_hex().map(str::len), Some(40));
        assert_eq!(binary.to_hex(), hex.to_hex());
    }

    #[test]
    fn test_utf16_matches_utf8() {
        let text = "Le cœur déçu mais l'âme plutôt naïve 漢字 \u{1F60D}\u{1F600}";
        let units: Vec<u16> = text.encode_utf16().collect();

        let mut engine = Sha1::new();
        engine.update(units.as_slice());
        assert_eq!(engine.digest_hex(), reference_hex(text.as_bytes()));
    }

    #[test]
    fn test_surrogate_pair_split_across_updates() {
        let units: Vec<u16> = "ab\u{1F60D}cd".encode_utf16().collect();
        assert_eq!(units.len(), 6);

        let mut engine = Sha1::new();
        engine.update(&units[..3]);
        assert!(engine.has_pending_surrogate());
        assert_eq!(engine.len(), 2);

        engine.update(&units[3..]);
        assert!(!engine.has_pending_surrogate());
        assert_eq!(engine.digest_hex(), reference_hex("ab\u{1F60D}cd".as_bytes()));
    }

    #[test]
    fn test_pending_surrogate_survives_str_and_bytes() {
        let mut engine = Sha1::new();
        engine
            .update(&[0xD83Du16][..])
            .update("x")
            .update(b"y")
            .update(&[0xDE0Du16][..]);

        let mut expected = b"xy".to_vec();
        expected.extend_from_slice("\u{1F60D}".as_bytes());
        assert_eq!(engine.digest_hex(), reference_hex(&expected));
    }

    #[test]
    fn test_trailing_high_surrogate_is_dropped() {
        let mut engine = Sha1::new();
        engine.update("abc").update(&[0xD83Du16][..]);
        assert!(engine.has_pending_surrogate());

        assert_eq!(engine.digest_hex(), reference_hex(b"abc"));
    }

    #[test]
    fn test_lone_low_surrogate_is_encoded_raw() {
        let mut engine = Sha1::new();
        engine.update(&[0xDE0Du16][..]);

        assert_eq!(engine.digest_hex(), reference_hex(&[0xED, 0xB8, 0x8D]));
    }

    #[test]
    fn test_text_crossing_block_boundary() {
        // 63 ASCII bytes then a 3-byte character straddling the block edge
        let text = format!("{}漢{}", "x".repeat(63), "y".repeat(70));
        let units: Vec<u16> = text.encode_utf16().collect();

        let mut engine = Sha1::new();
        engine.update(units.as_slice());
        assert_eq!(engine.digest_hex(), reference_hex(text.as_bytes()));
    }

    #[test]
    fn test_update_elements_uses_native_byte_order() {
        let words = [0x4241u16, 0x4443, 0x4645, 0x4847];
        let raw: Vec<u8> = words.iter().flat_map(|w| w.to_ne_bytes()).collect();

        let mut engine = Sha1::new();
        engine.update_elements(&words);
        assert_eq!(engine.digest_hex(), reference_hex(&raw));
    }

    #[test]
    fn test_try_update_rejects_missing_input() {
        let mut engine = Sha1::new();
        let error = engine.try_update(None).unwrap_err();
        assert!(error.is_invalid_input());
        assert!(engine.is_empty());

        engine.try_update(Some(Chunk::Text(""))).unwrap();
        engine.try_update(Some(Chunk::Bytes(b"abc"))).unwrap();
        assert_eq!(engine.digest_hex(), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn test_zero_length_chunks() {
        let mut engine = Sha1::new();
        engine.update("").update(&[][..] as &[u8]).update(&[][..] as &[u16]);
        assert_eq!(engine.digest_hex(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn test_pooled_engine_matches_standalone() {
        let pool = ArenaPool::new();
        let mut pooled = Sha1::with_pool(&pool);
        pooled.update("The quick brown fox jumps over the lazy dog");

        assert_eq!(pooled.digest_hex(), "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12");
        assert_eq!(pool.stats().parcels_issued, 1);
    }

    #[test]
    fn test_engine_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Sha1>();
    }

    proptest! {
        #[test]
        fn test_arbitrary_chunking_matches_reference(
            data in proptest::collection::vec(any::<u8>(), 0..600),
            cuts in proptest::collection::vec(any::<usize>(), 0..12),
        ) {
            let mut points: Vec<usize> = cuts.iter().map(|c| c % (data.len() + 1)).collect();
            points.sort_unstable();

            let mut engine = Sha1::new();
            let mut start = 0;
            for point in points {
                engine.update(&data[start..point]);
                start = point;
            }
            engine.update(&data[start..]);

            prop_assert_eq!(engine.digest_hex(), reference_hex(&data));
        }

        #[test]
        fn test_arbitrary_text_split_matches_reference(text in "\\PC{0,120}", cut in any::<usize>()) {
            let units: Vec<u16> = text.encode_utf16().collect();
            let cut = cut % (units.len() + 1);

            let mut engine = Sha1::new();
            engine.update(&units[..cut]).update(&units[cut..]);

            prop_assert_eq!(engine.digest_hex(), reference_hex(text.as_bytes()));
        }
    }
}
