//! The Hasher: a configured digest engine.
//!
//! Applications usually hash everything with one function and one length.
//! [`HasherConfig`] captures that choice once, validated up front, so later
//! calls only fail on I/O.

use std::io::Write;

use multihash_core::{sum, HashFunction, Multihash, SumError, SHA2_256};
use multihash_io::write_multihash;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Configuration for a [`Hasher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HasherConfig {
    /// Function code of the hash to compute.
    pub code: u8,
    /// Digest length in bytes. `None` uses the function's default length.
    pub length: Option<usize>,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            code: SHA2_256,
            length: None,
        }
    }
}

impl HasherConfig {
    /// Configure a function at its default length.
    pub fn new(function: HashFunction) -> Self {
        Self {
            code: function.code(),
            length: None,
        }
    }

    /// Truncate digests to `length` bytes.
    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Check that the configured function can be computed at the
    /// configured length.
    pub fn validate(&self) -> Result<()> {
        let function = match HashFunction::from_code(self.code) {
            Some(function) if function.is_implemented() => function,
            Some(_) => return Err(SumError::NotImplemented(self.code).into()),
            // Application codes are valid on the wire but never computable.
            None if multihash_core::is_app_code(self.code) => {
                return Err(SumError::NotImplemented(self.code).into())
            }
            None => return Err(SumError::InvalidMultihash(self.code).into()),
        };

        // For every implemented function the default length is the full digest.
        let available = function.default_length();
        match self.length {
            Some(0) => Err(Error::InvalidConfig(
                "digest length must be at least one byte".into(),
            )),
            Some(requested) if requested > available => Err(SumError::LengthExceedsDigest {
                code: self.code,
                requested,
                available,
            }
            .into()),
            _ => Ok(()),
        }
    }
}

/// Computes multihashes with a fixed function and length.
#[derive(Debug, Clone, Default)]
pub struct Hasher {
    config: HasherConfig,
}

impl Hasher {
    /// Create a hasher, rejecting configurations that could never succeed.
    pub fn new(config: HasherConfig) -> Result<Self> {
        config.validate()?;
        debug!(code = config.code, length = ?config.length, "hasher configured");
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &HasherConfig {
        &self.config
    }

    /// Hash `data`.
    pub fn sum(&self, data: &[u8]) -> Result<Multihash> {
        Ok(sum(data, self.config.code, self.config.length)?)
    }

    /// Hash `data` and write the result to `sink`.
    pub fn sum_to<W: Write + ?Sized>(&self, data: &[u8], sink: &mut W) -> Result<Multihash> {
        let mh = self.sum(data)?;
        write_multihash(sink, &mh)?;
        Ok(mh)
    }
}
