//! The digest engine: hash input bytes and package the result.
//!
//! Only SHA-1 and the SHA-2 family are computed. Other registered functions
//! are valid codes for the codec but fail here with
//! [`SumError::NotImplemented`].

use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

use crate::codec::encode;
use crate::error::{MultihashError, SumError};
use crate::registry::{default_length, is_valid_code, HashFunction};
use crate::types::Multihash;

/// Hash `data` with the function `code` and encode the digest.
///
/// `length` truncates the digest to its first `length` bytes; `None` uses
/// the registry's default length for `code`.
pub fn sum(data: &[u8], code: u8, length: Option<usize>) -> Result<Multihash, SumError> {
    if !is_valid_code(code) {
        return Err(SumError::InvalidMultihash(code));
    }

    let full = match HashFunction::from_code(code) {
        Some(HashFunction::Sha1) => Sha1::digest(data).to_vec(),
        Some(HashFunction::Sha2_256) => Sha256::digest(data).to_vec(),
        Some(HashFunction::Sha2_512) => Sha512::digest(data).to_vec(),
        _ => return Err(SumError::NotImplemented(code)),
    };

    let length = match length {
        Some(length) => length,
        None => default_length(code).ok_or(SumError::NoDefaultLength(code))?,
    };

    if length > full.len() {
        return Err(SumError::LengthExceedsDigest {
            code,
            requested: length,
            available: full.len(),
        });
    }

    Ok(encode(&full[..length], code)?)
}

/// Hash `data` with the function registered as `name`.
pub fn sum_name(data: &[u8], name: &str, length: Option<usize>) -> Result<Multihash, SumError> {
    let function = HashFunction::from_name(name)
        .ok_or_else(|| MultihashError::UnknownName(name.to_string()))?;
    sum(data, function.code(), length)
}
