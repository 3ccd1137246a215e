//! Error types for the facade.

use multihash_core::{MultihashError, SumError};
use multihash_io::StreamError;
use thiserror::Error;

/// Errors from any multihash operation.
#[derive(Debug, Error)]
pub enum Error {
    /// Encoding, decoding, or text conversion error.
    #[error("multihash error: {0}")]
    Multihash(#[from] MultihashError),

    /// Digest computation error.
    #[error("digest error: {0}")]
    Sum(#[from] SumError),

    /// Stream read or write error.
    #[error("stream error: {0}")]
    Stream(#[from] StreamError),

    /// Hasher configuration rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, Error>;
