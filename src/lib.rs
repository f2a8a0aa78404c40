//! # LZ77 Asset Container Decoding
//!
//! `lz77-container` is a safe, pure-Rust decoder for the `LZ77`-tagged
//! compressed containers that wrap model, texture and font data in certain
//! game asset files.
//!
//! A container is a 16-byte prologue (magic `"LZ77"`, little-endian
//! decompressed size, eight opaque bytes) followed by a token stream. Each
//! token is either a literal byte (top bit clear) or a two-byte
//! back-reference carrying a 5-bit length and a 10-bit offset.
//!
//! Decoding is lenient: a stream that runs dry yields the bytes produced so
//! far, and back-references reaching before the start of the output are
//! zero-filled. Only a malformed header is an error.
//!
//! ## Example
//!
//! ```rust
//! use lz77_container::decode;
//!
//! let container = [
//!     b'L', b'Z', b'7', b'7',
//!     7, 0, 0, 0,             // decompressed size
//!     0, 0, 0, 0, 0, 0, 0, 0, // reserved
//!     b'a', b'b',             // two literals
//!     0x88, 0x01,             // back-reference: length 5, offset 2
//! ];
//!
//! let (buffer, status) = decode(&container).expect("Malformed header");
//! assert!(status.is_complete());
//! assert_eq!(buffer, b"abababa");
//! ```

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod decompress;
pub mod error;
pub mod header;
pub mod token;

pub use decompress::{DecodeStatus, decode, decode_exact, decode_into};
pub use error::{DecodeError, HeaderFault};
pub use header::Container;
pub use token::{Token, Tokens};

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{DecodeError, decode, decode_exact};

    fn container(size: u32, stream: &[u8]) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(b"LZ77");
        data.extend_from_slice(&size.to_le_bytes());
        data.extend_from_slice(&[0; 8]);
        data.extend_from_slice(stream);
        data
    }

    #[test]
    fn test_literals_and_copy() {
        let data = container(9, b"abc\x8c\x02");
        let (out, status) = decode(&data).unwrap();
        assert_eq!(out, b"abcabcabc");
        assert!(status.is_complete());
        assert_eq!(status.tokens, 4);
        assert_eq!(status.consumed, 5);
    }

    #[test]
    fn test_exact_rejects_short_output() {
        let data = container(10, b"xyz");
        assert_eq!(
            decode_exact(&data),
            Err(DecodeError::TruncatedStream {
                declared: 10,
                produced: 3
            })
        );
    }

    #[test]
    fn test_zero_size_is_empty() {
        let data = container(0, b"ignored");
        let (out, status) = decode(&data).unwrap();
        assert!(out.is_empty());
        assert!(status.is_complete());
        assert_eq!(status.consumed, 0);
    }
}
