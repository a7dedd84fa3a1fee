//! Input shapes accepted by the engine
//!
//! Every update is resolved once into a [`Chunk`] at the call boundary and
//! routed to the matching ingestion path.

use crate::error::ValidationError;
use crate::Result;

/// One piece of input for [`Sha1::update`](super::Sha1::update)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunk<'a> {
    /// Text that is already UTF-8
    Text(&'a str),
    /// Text as UTF-16 code units, possibly ending inside a surrogate pair
    Utf16(&'a [u16]),
    /// Raw bytes
    Bytes(&'a [u8]),
}

impl Chunk<'_> {
    /// Number of input units (bytes or UTF-16 code units) in the chunk
    pub fn len(&self) -> usize {
        match self {
            Chunk::Text(text) => text.len(),
            Chunk::Utf16(units) => units.len(),
            Chunk::Bytes(bytes) => bytes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<&'a str> for Chunk<'a> {
    fn from(text: &'a str) -> Self {
        Chunk::Text(text)
    }
}

impl<'a> From<&'a String> for Chunk<'a> {
    fn from(text: &'a String) -> Self {
        Chunk::Text(text)
    }
}

impl<'a> From<&'a [u16]> for Chunk<'a> {
    fn from(units: &'a [u16]) -> Self {
        Chunk::Utf16(units)
    }
}

impl<'a> From<&'a [u8]> for Chunk<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Chunk::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Chunk<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Chunk::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Chunk<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Chunk::Bytes(bytes)
    }
}

impl<'a> From<ByteSpan<'a>> for Chunk<'a> {
    fn from(span: ByteSpan<'a>) -> Self {
        Chunk::Bytes(span.as_bytes())
    }
}

/// Numeric element types that can back a typed view
///
/// Elements are consumed in raw memory order (native endianness), the way a
/// typed array view exposes its underlying buffer.
pub trait Element: Copy {
    /// Size of one element in bytes
    const WIDTH: usize;

    /// Native-endian byte representation
    type Bytes: AsRef<[u8]>;

    fn ne_bytes(self) -> Self::Bytes;
}

macro_rules! impl_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                #[inline]
                fn ne_bytes(self) -> Self::Bytes {
                    self.to_ne_bytes()
                }
            }
        )*
    };
}

impl_element!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

/// A byte range inside a larger buffer
///
/// The range is checked when the span is built, so an engine only ever sees
/// the bytes inside the declared window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteSpan<'a> {
    bytes: &'a [u8],
    byte_offset: usize,
}

impl<'a> ByteSpan<'a> {
    /// View `byte_len` bytes of `buffer` starting at `byte_offset`
    pub fn new(buffer: &'a [u8], byte_offset: usize, byte_len: usize) -> Result<Self> {
        let end = byte_offset.checked_add(byte_len).ok_or_else(|| {
            ValidationError::invalid_input("byte_len", "byte range overflows usize")
        })?;
        let bytes = buffer.get(byte_offset..end).ok_or_else(|| {
            ValidationError::invalid_input(
                "byte_offset",
                format!(
                    "range {byte_offset}..{end} is outside a buffer of {} bytes",
                    buffer.len()
                ),
            )
        })?;

        Ok(Self { bytes, byte_offset })
    }

    /// View `count` elements of type `T` starting at `byte_offset`
    ///
    /// The offset does not need to be aligned to `T`; only the byte range
    /// `byte_offset..byte_offset + count * T::WIDTH` is consumed.
    pub fn typed<T: Element>(buffer: &'a [u8], byte_offset: usize, count: usize) -> Result<Self> {
        let byte_len = count.checked_mul(T::WIDTH).ok_or_else(|| {
            ValidationError::invalid_input("count", "element count overflows usize")
        })?;
        Self::new(buffer, byte_offset, byte_len)
    }

    /// The whole buffer
    pub fn whole(buffer: &'a [u8]) -> Self {
        Self {
            bytes: buffer,
            byte_offset: 0,
        }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}
