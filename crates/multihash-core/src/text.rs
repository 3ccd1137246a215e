//! Hex and base58 string forms of a multihash.
//!
//! Both forms cover the full wire buffer, header included. Parsed strings
//! go through [`cast`], so they are validated like any other input.

use crate::codec::cast;
use crate::error::{MultihashError, Result};
use crate::types::Multihash;

impl Multihash {
    /// Lowercase hex of the full buffer.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    /// Parse a hex string.
    pub fn from_hex(s: &str) -> Result<Self> {
        let buf = hex::decode(s).map_err(|_| MultihashError::HexConversionFail)?;
        cast(&buf)
    }

    /// Base58 (Bitcoin alphabet) of the full buffer.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.as_bytes()).into_string()
    }

    /// Parse a base58 string.
    pub fn from_base58(s: &str) -> Result<Self> {
        let buf = bs58::decode(s)
            .into_vec()
            .map_err(|_| MultihashError::Base58ConversionFail)?;
        cast(&buf)
    }
}
