//! Error types for stream operations.

use multihash_core::MultihashError;
use thiserror::Error;

/// Errors that can occur while reading or writing a multihash on a stream.
#[derive(Debug, Error)]
pub enum StreamError {
    /// The stream ran out of bytes, or refused to accept any.
    ///
    /// Also returned for a length byte above 127, which is reserved for
    /// varint lengths.
    #[error("end of buffer reached")]
    EndOfBuffer,

    /// The underlying read or write failed.
    #[error("stream operation failed: {0}")]
    OperationFailure(#[source] std::io::Error),

    /// The bytes read do not form a valid multihash.
    #[error("invalid multihash: {0}")]
    Multihash(#[from] MultihashError),
}

/// Result type for stream operations.
pub type Result<T> = std::result::Result<T, StreamError>;
