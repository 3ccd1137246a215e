//! The multihash value type and its decoded view.
//!
//! A [`Multihash`] can only be obtained through the codec (`encode`, `cast`)
//! or the digest engine, so every value upholds the wire invariants.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::codec::{cast, validate};
use crate::error::MultihashError;

/// Size of the `[code][length]` header.
pub const HEADER_LEN: usize = 2;

/// Smallest valid multihash: header plus a one-byte digest.
pub const MIN_LEN: usize = HEADER_LEN + 1;

/// Longest digest a single-byte length can carry without varint encoding.
pub const MAX_DIGEST_LEN: usize = 127;

/// Largest buffer accepted by the decoder.
pub const MAX_LEN: usize = 129;

/// A validated, self-describing hash: `[code][length][digest]`.
///
/// Equality is byte-wise equality of the full buffer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Multihash(Bytes);

impl Multihash {
    /// Wrap a buffer the codec has already validated.
    pub(crate) fn from_validated(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    /// The full wire bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume into the underlying buffer.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// The function code.
    pub fn code(&self) -> u8 {
        self.0[0]
    }

    /// The registered function name, if any.
    pub fn name(&self) -> Option<&'static str> {
        crate::registry::name_for(self.code())
    }

    /// The digest length in bytes.
    pub fn length(&self) -> usize {
        self.0[1] as usize
    }

    /// The digest bytes.
    pub fn digest(&self) -> &[u8] {
        &self.0[HEADER_LEN..]
    }

    /// Decode into the structured view.
    pub fn decode(&self) -> DecodedMultihash<'_> {
        DecodedMultihash {
            code: self.code(),
            name: self.name(),
            length: self.length(),
            digest: self.digest(),
        }
    }
}

impl fmt::Debug for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = hex::encode(self.digest());
        let shown = &hex[..hex.len().min(16)];
        match self.name() {
            Some(name) => write!(f, "Multihash({name}:{shown})"),
            None => write!(f, "Multihash({:#04x}:{shown})", self.code()),
        }
    }
}

impl fmt::Display for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Multihash {
    type Err = MultihashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for Multihash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Multihash {
    type Error = MultihashError;

    fn try_from(buf: &[u8]) -> Result<Self, Self::Error> {
        cast(buf)
    }
}

impl TryFrom<Vec<u8>> for Multihash {
    type Error = MultihashError;

    fn try_from(buf: Vec<u8>) -> Result<Self, Self::Error> {
        validate(&buf)?;
        Ok(Self::from_validated(buf))
    }
}

impl From<Multihash> for Vec<u8> {
    fn from(mh: Multihash) -> Self {
        mh.0.to_vec()
    }
}

/// A decoded multihash, borrowing its digest from the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedMultihash<'a> {
    /// Function code.
    pub code: u8,
    /// Registered function name, `None` for application or unknown codes.
    pub name: Option<&'static str>,
    /// Digest length declared by the header.
    pub length: usize,
    /// Digest bytes.
    pub digest: &'a [u8],
}
