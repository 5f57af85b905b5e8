use std::error::Error;
use std::fmt::{self, Display};

/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, BlowfishError>;

/// Everything that can go wrong constructing a cipher or driving a mode
/// engine. Every variant indicates programmer misuse (a bad key, a
/// mismatched IV, a slice of the wrong shape) rather than a recoverable
/// runtime condition, so there is nothing to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlowfishError {
    /// Key was shorter than 4 bytes or longer than 56.
    InvalidKeyLength(usize),
    /// A single-block operation was given a slice whose length isn't 8.
    InvalidBlockLength(usize),
    /// A mode's IV wasn't exactly 8 bytes.
    InvalidIvLength(usize),
    /// ECB/CBC/PCBC input length wasn't a positive multiple of 8, or (for
    /// CTR) the counter sequence ran dry while this many bytes of input
    /// still remained unconsumed.
    InvalidDataLength(usize),
}

impl Display for BlowfishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeyLength(n) => {
                write!(f, "invalid key length {n}: must be 4 to 56 bytes")
            }
            Self::InvalidBlockLength(n) => {
                write!(f, "invalid block length {n}: must be exactly 8 bytes")
            }
            Self::InvalidIvLength(n) => {
                write!(f, "invalid IV length {n}: must be exactly 8 bytes")
            }
            Self::InvalidDataLength(n) => write!(
                f,
                "invalid data length: {n} byte(s) could not be produced \
                 (either not a positive multiple of 8, or the counter \
                 sequence ran dry first)"
            ),
        }
    }
}

impl Error for BlowfishError {}
