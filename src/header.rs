//! The 16-byte container prologue.
//!
//! ```text
//! [0x00] Magic "LZ77"          (4 bytes)
//! [0x04] DecompressedSize      (u32 LE)
//! [0x08] Reserved / flags      (8 bytes, opaque)
//! [0x10] Token stream          (remaining bytes)
//! ```

use crate::error::{DecodeError, HeaderFault};

type Result<T> = core::result::Result<T, DecodeError>;

/// Signature expected in the first four bytes.
pub const MAGIC: [u8; 4] = *b"LZ77";

/// Size of the fixed prologue preceding the token stream.
pub const HEADER_LEN: usize = 16;

/// A validated, borrowed view over a compressed container.
///
/// Nothing is copied: the token stream is a subslice of the caller's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Container<'a> {
    decompressed_size: u32,
    reserved: [u8; 8],
    token_stream: &'a [u8],
}

impl<'a> Container<'a> {
    /// Validates the prologue of `input` and splits off the token stream.
    ///
    /// Only the length and the magic are checked. A declared size of zero is
    /// legal, and the reserved field is passed through untouched.
    pub fn parse(input: &'a [u8]) -> Result<Self> {
        let Some((header, token_stream)) = input.split_first_chunk::<HEADER_LEN>() else {
            return Err(HeaderFault::TooShort { len: input.len() }.into());
        };

        let found = [header[0], header[1], header[2], header[3]];
        if found != MAGIC {
            return Err(HeaderFault::BadMagic { found }.into());
        }

        let decompressed_size = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);

        let mut reserved = [0u8; 8];
        reserved.copy_from_slice(&header[8..HEADER_LEN]);

        Ok(Self {
            decompressed_size,
            reserved,
            token_stream,
        })
    }

    /// Always [`MAGIC`] for a parsed container.
    pub const fn magic(&self) -> [u8; 4] {
        MAGIC
    }

    pub const fn decompressed_size(&self) -> u32 {
        self.decompressed_size
    }

    /// The eight opaque bytes at offset 8.
    pub const fn reserved(&self) -> [u8; 8] {
        self.reserved
    }

    pub const fn token_stream(&self) -> &'a [u8] {
        self.token_stream
    }

    /// Declared size as a `usize`, saturating on targets narrower than 32 bits.
    pub(crate) fn target_len(&self) -> usize {
        usize::try_from(self.decompressed_size).unwrap_or(usize::MAX)
    }
}
