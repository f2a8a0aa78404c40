use crate::error::DecodeError;
use crate::header::Container;
use crate::token::{MAX_MATCH, Token, Tokens};
use alloc::vec::Vec;

type Result<T> = core::result::Result<T, DecodeError>;

// --- Constants ---

/// Upper bound on output bytes a single stream byte can expand into.
/// A back-reference spends two bytes on at most `MAX_MATCH` output bytes.
const MAX_EXPANSION: usize = MAX_MATCH / 2;

/// Outcome of a decode call that got past the header.
///
/// A short output is not an error on the lenient path; callers that need the
/// full declared size check [`DecodeStatus::is_complete`] or use
/// [`DecodeStatus::ensure_complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeStatus {
    /// Output length announced by the container header.
    pub declared_size: usize,
    /// Bytes actually appended by this call.
    pub produced: usize,
    /// Tokens executed, including a back-reference cut short by the size limit.
    pub tokens: usize,
    /// Token stream bytes consumed.
    pub consumed: usize,
    /// Back-references that reached before the start of the output and were
    /// zero-filled for the unreachable part of the run.
    pub invalid_back_references: usize,
    /// The stream ended on a back-reference byte with no second byte.
    pub dangling_back_reference: bool,
}

impl DecodeStatus {
    const fn new(declared_size: usize) -> Self {
        Self {
            declared_size,
            produced: 0,
            tokens: 0,
            consumed: 0,
            invalid_back_references: 0,
            dangling_back_reference: false,
        }
    }

    /// `true` when the output reached the declared size.
    pub const fn is_complete(&self) -> bool {
        self.produced == self.declared_size
    }

    /// Turns a short output into [`DecodeError::TruncatedStream`].
    pub const fn ensure_complete(&self) -> Result<()> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(DecodeError::TruncatedStream {
                declared: self.declared_size,
                produced: self.produced,
            })
        }
    }
}

/// Decodes a whole container into a fresh buffer.
///
/// Fails only on a malformed header. A token stream that runs dry before the
/// declared size is reached yields the partial output with
/// `status.is_complete() == false`.
pub fn decode(input: &[u8]) -> Result<(Vec<u8>, DecodeStatus)> {
    let mut output = Vec::new();
    let status = decode_into(input, &mut output)?;
    Ok((output, status))
}

/// Decodes a container and insists on the full declared size.
pub fn decode_exact(input: &[u8]) -> Result<Vec<u8>> {
    let (output, status) = decode(input)?;
    status.ensure_complete()?;
    Ok(output)
}

/// Decodes a container, appending to `output`.
///
/// Bytes already in `output` are left alone and are never used as a copy
/// source: the decoded region starts empty, just as it does for [`decode`].
/// On a header error nothing is appended.
pub fn decode_into(input: &[u8], output: &mut Vec<u8>) -> Result<DecodeStatus> {
    let container = Container::parse(input)?;
    let target = container.target_len();
    let stream = container.token_stream();

    // Bounded by what the stream could possibly expand to, so a garbage size
    // field cannot force a huge allocation.
    output.reserve(stream.len().saturating_mul(MAX_EXPANSION).min(target));

    let base = output.len();
    let mut status = DecodeStatus::new(target);
    let mut tokens = Tokens::new(stream);

    while output.len() - base < target {
        let Some(token) = tokens.next() else {
            // Stream exhausted, or a back-reference lost its second byte.
            break;
        };
        status.tokens += 1;

        match token {
            Token::Literal(byte) => output.push(byte),
            Token::BackReference { length, offset } => {
                let room = target - (output.len() - base);
                let run = usize::from(length).min(room);
                if !apply_match(output, base, run, usize::from(offset)) {
                    status.invalid_back_references += 1;
                }
            }
        }
    }

    status.produced = output.len() - base;
    status.consumed = tokens.position();
    status.dangling_back_reference = tokens.is_truncated();
    Ok(status)
}

/// Appends `length` bytes, each copied from `offset` bytes behind the write
/// head at the moment it is written.
///
/// Only `output[base..]` is a valid source. While the source position would
/// fall before `base`, zero is written instead; once enough bytes exist the
/// copy proceeds from the decoded region. Returns `false` if any zero-fill
/// happened.
#[inline]
fn apply_match(output: &mut Vec<u8>, base: usize, length: usize, offset: usize) -> bool {
    let produced = output.len() - base;

    // Leading bytes whose source would sit before the decoded region.
    let unreachable = offset.saturating_sub(produced).min(length);
    if unreachable > 0 {
        output.resize(output.len() + unreachable, 0);
    }

    let rest = length - unreachable;
    if rest == 0 {
        return unreachable == 0;
    }

    // --- RLE Fast Path (Offset == 1) ---
    // At least one decoded byte exists here, either produced earlier or just zero-filled.
    if offset == 1 {
        let last_byte = output[output.len() - 1];
        output.resize(output.len() + rest, last_byte);
    } else {
        // Byte-wise copy: each pushed byte is a valid source for the next ones.
        let src_pos = output.len() - offset;
        for k in 0..rest {
            let val = output[src_pos + k];
            output.push(val);
        }
    }

    unreachable == 0
}
