//! Error types for the multihash core.

use thiserror::Error;

/// Errors raised while encoding, decoding, or parsing a multihash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MultihashError {
    #[error("unknown multihash code: {0:#04x}")]
    UnknownCode(u8),

    #[error("unknown multihash function name: {0}")]
    UnknownName(String),

    #[error("multihash too short: {0} bytes, must be at least 3")]
    TooShort(usize),

    #[error("multihash too long: {0} bytes, must be at most 129")]
    TooLong(usize),

    #[error("multihash length inconsistent: header declares {declared}, digest has {actual}")]
    InconsistentLength { declared: usize, actual: usize },

    #[error("hex conversion failed")]
    HexConversionFail,

    #[error("base58 conversion failed")]
    Base58ConversionFail,
}

/// Errors raised while computing a multihash digest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SumError {
    #[error("invalid multihash code {0:#04x}")]
    InvalidMultihash(u8),

    #[error("hash function {0:#04x} not implemented")]
    NotImplemented(u8),

    #[error("no default length for code {0:#04x}")]
    NoDefaultLength(u8),

    #[error("requested {requested} digest bytes from code {code:#04x}, which produces {available}")]
    LengthExceedsDigest {
        code: u8,
        requested: usize,
        available: usize,
    },

    #[error(transparent)]
    Encode(#[from] MultihashError),
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, MultihashError>;
