use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Malformed container header: {0}")]
    MalformedHeader(HeaderFault),

    #[error("Token stream ended after {produced} of {declared} declared bytes")]
    TruncatedStream { declared: usize, produced: usize },
}

/// Why a container prologue was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFault {
    #[error("input is {len} bytes, shorter than the 16-byte header")]
    TooShort { len: usize },

    #[error("magic {found:02x?} does not match \"LZ77\"")]
    BadMagic { found: [u8; 4] },
}

impl From<HeaderFault> for DecodeError {
    fn from(fault: HeaderFault) -> Self {
        Self::MalformedHeader(fault)
    }
}
