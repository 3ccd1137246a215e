//! Reading multihashes off a byte stream.
//!
//! A read happens in two phases: the two-byte header first, then exactly
//! the number of digest bytes it declares. Nothing is buffered between
//! calls, so values can be interleaved with other data on the same stream.

use std::io::Read;

use multihash_core::{cast, Multihash, HEADER_LEN, MAX_DIGEST_LEN};
use tracing::trace;

use crate::error::{Result, StreamError};

/// Read one multihash from `source`.
///
/// Issues exactly two reads, one for the header and one for the digest.
/// A read that returns fewer bytes than requested is not retried.
pub fn read_multihash<R: Read + ?Sized>(source: &mut R) -> Result<Multihash> {
    let mut header = [0u8; HEADER_LEN];
    read_exact_once(source, &mut header)?;

    let length = header[1] as usize;
    if length > MAX_DIGEST_LEN {
        // Varint lengths are not supported yet.
        return Err(StreamError::EndOfBuffer);
    }

    let mut buf = vec![0u8; HEADER_LEN + length];
    buf[..HEADER_LEN].copy_from_slice(&header);
    read_exact_once(source, &mut buf[HEADER_LEN..])?;

    let mh = cast(&buf)?;
    trace!(code = mh.code(), length, "read multihash");
    Ok(mh)
}

/// Fill `buf` with a single read call.
///
/// Zero or too few bytes mean the stream cannot supply the value.
fn read_exact_once<R: Read + ?Sized>(source: &mut R, buf: &mut [u8]) -> Result<()> {
    match source.read(buf) {
        Ok(n) if n == buf.len() => Ok(()),
        Ok(_) => Err(StreamError::EndOfBuffer),
        Err(e) => Err(StreamError::OperationFailure(e)),
    }
}

/// A reader that yields multihashes from an underlying stream.
///
/// Holds only the stream. The caller opens it beforehand and closes it
/// afterwards.
#[derive(Debug)]
pub struct MultihashReader<R> {
    inner: R,
}

impl<R: Read> MultihashReader<R> {
    /// Wrap a stream.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Read the next multihash.
    pub fn read_multihash(&mut self) -> Result<Multihash> {
        read_multihash(&mut self.inner)
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwrap the underlying stream.
    pub fn into_inner(self) -> R {
        self.inner
    }
}
