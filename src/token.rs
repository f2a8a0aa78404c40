use core::iter::FusedIterator;

// --- Constants ---

/// Top bit of the leading byte selects a back-reference over a literal.
const BACK_REFERENCE_FLAG: u8 = 0x80;

/// Five length bits sit between the flag and the high offset bits.
const LENGTH_MASK: u8 = 0x7C;
const LENGTH_SHIFT: u8 = 2;

/// Two high bits of the 10-bit offset live in the leading byte.
const OFFSET_HIGH_MASK: u8 = 0x03;

/// Shortest run a back-reference can encode.
pub const MIN_MATCH: usize = 3;

/// Longest run a back-reference can encode (5 bits + 3).
pub const MAX_MATCH: usize = 34;

/// Furthest distance a back-reference can reach (10 bits + 1).
pub const MAX_OFFSET: usize = 1024;

/// One decoding instruction read from the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A raw output byte. Always below 0x80.
    Literal(u8),
    /// Copy `length` bytes, each taken `offset` bytes behind the write head.
    BackReference { length: u8, offset: u16 },
}

impl Token {
    /// Returns `true` if `first` needs a second byte to form a complete token.
    #[inline]
    pub const fn is_back_reference(first: u8) -> bool {
        first & BACK_REFERENCE_FLAG != 0
    }

    /// Decodes a back-reference from its two stream bytes.
    ///
    /// `first` must have its top bit set; a byte with the top bit clear is
    /// returned as a literal and `second` is ignored.
    #[inline]
    pub const fn decode(first: u8, second: u8) -> Self {
        if !Self::is_back_reference(first) {
            return Self::Literal(first);
        }

        let length = ((first & LENGTH_MASK) >> LENGTH_SHIFT) + MIN_MATCH as u8;
        let offset = ((((first & OFFSET_HIGH_MASK) as u16) << 8) | second as u16) + 1;

        Self::BackReference { length, offset }
    }

    /// Number of stream bytes this token occupies.
    pub const fn encoded_len(&self) -> usize {
        match self {
            Self::Literal(_) => 1,
            Self::BackReference { .. } => 2,
        }
    }

    /// Number of output bytes this token contributes when not cut short.
    pub const fn output_len(&self) -> usize {
        match self {
            Self::Literal(_) => 1,
            Self::BackReference { length, .. } => *length as usize,
        }
    }
}

/// Walks a token stream left to right without producing output.
///
/// Iteration stops when the stream is exhausted. A trailing back-reference
/// byte with no partner is not yielded; [`Tokens::is_truncated`] reports it.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    stream: &'a [u8],
    pos: usize,
    truncated: bool,
}

impl<'a> Tokens<'a> {
    pub const fn new(stream: &'a [u8]) -> Self {
        Self {
            stream,
            pos: 0,
            truncated: false,
        }
    }

    /// Stream bytes consumed by the tokens yielded so far.
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.stream[self.pos..]
    }

    /// `true` once iteration has hit a back-reference missing its second byte.
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    #[inline]
    fn next(&mut self) -> Option<Token> {
        if self.truncated {
            return None;
        }
        let first = *self.stream.get(self.pos)?;

        if !Token::is_back_reference(first) {
            self.pos += 1;
            return Some(Token::Literal(first));
        }

        let Some(&second) = self.stream.get(self.pos + 1) else {
            // The dangling byte stays unconsumed.
            self.truncated = true;
            return None;
        };

        self.pos += 2;
        Some(Token::decode(first, second))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.truncated {
            return (0, Some(0));
        }
        // Every token takes one or two bytes, and a trailing back-reference
        // byte without its partner yields nothing.
        let left = self.stream.len() - self.pos;
        (left / 2, Some(left))
    }
}

impl FusedIterator for Tokens<'_> {}
