//! Incremental UTF-16 to UTF-8 encoder
//!
//! Code units are encoded one at a time so a surrogate pair may straddle two
//! `update` calls. Malformed input is never rejected:
//! - a high surrogate that never gets its partner is dropped
//! - a later high surrogate replaces an earlier unpaired one
//! - a lone low surrogate is written as a raw three-byte sequence

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Up to four bytes produced for one code unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Encoded {
    bytes: [u8; 4],
    len: usize,
}

impl Encoded {
    const NOTHING: Self = Self {
        bytes: [0; 4],
        len: 0,
    };

    fn one(a: u8) -> Self {
        Self {
            bytes: [a, 0, 0, 0],
            len: 1,
        }
    }

    fn two(a: u8, b: u8) -> Self {
        Self {
            bytes: [a, b, 0, 0],
            len: 2,
        }
    }

    fn three(a: u8, b: u8, c: u8) -> Self {
        Self {
            bytes: [a, b, c, 0],
            len: 3,
        }
    }

    fn four(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self {
            bytes: [a, b, c, d],
            len: 4,
        }
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

/// Encoder state carried between text chunks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Utf8Encoder {
    pending: Option<u16>,
}

impl Utf8Encoder {
    /// High surrogate still waiting for its low half
    pub(crate) fn pending(&self) -> Option<u16> {
        self.pending
    }

    pub(crate) fn encode(&mut self, code: u16) -> Encoded {
        if let Some(high) = self.pending
            && LOW_SURROGATES.contains(&code)
        {
            self.pending = None;
            let cp = (((high as u32) & 0x3FF) << 10) + ((code as u32) & 0x3FF) + 0x10000;
            return Encoded::four(
                0xF0 | (cp >> 18) as u8,
                0x80 | ((cp >> 12) & 0x3F) as u8,
                0x80 | ((cp >> 6) & 0x3F) as u8,
                0x80 | (cp & 0x3F) as u8,
            );
        }

        match code {
            0x0000..=0x007F => Encoded::one(code as u8),
            0x0080..=0x07FF => Encoded::two(0xC0 | (code >> 6) as u8, 0x80 | (code & 0x3F) as u8),
            _ if HIGH_SURROGATES.contains(&code) => {
                self.pending = Some(code);
                Encoded::NOTHING
            }
            _ => Encoded::three(
                0xE0 | (code >> 12) as u8,
                0x80 | ((code >> 6) & 0x3F) as u8,
                0x80 | (code & 0x3F) as u8,
            ),
        }
    }
}
