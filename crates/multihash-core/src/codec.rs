//! Binary codec for the `[code][length][digest]` wire form.
//!
//! ```text
//! byte 0      : function code
//! byte 1      : digest length L (0-127, higher values reserved for varints)
//! bytes 2..2+L: digest
//! ```

use crate::error::{MultihashError, Result};
use crate::registry::{code_for_name, is_valid_code, name_for};
use crate::types::{DecodedMultihash, Multihash, HEADER_LEN, MAX_DIGEST_LEN, MAX_LEN, MIN_LEN};

/// Encode a digest under the given function code.
///
/// The length byte is taken from `digest.len()`.
pub fn encode(digest: &[u8], code: u8) -> Result<Multihash> {
    if !is_valid_code(code) {
        return Err(MultihashError::UnknownCode(code));
    }
    if digest.len() > MAX_DIGEST_LEN {
        return Err(MultihashError::TooLong(digest.len()));
    }
    // A bare header is not a multihash.
    if digest.is_empty() {
        return Err(MultihashError::TooShort(HEADER_LEN));
    }

    let mut buf = Vec::with_capacity(HEADER_LEN + digest.len());
    buf.push(code);
    buf.push(digest.len() as u8);
    buf.extend_from_slice(digest);
    Ok(Multihash::from_validated(buf))
}

/// Encode a digest under the function registered as `name`.
pub fn encode_name(digest: &[u8], name: &str) -> Result<Multihash> {
    let code = code_for_name(name).ok_or_else(|| MultihashError::UnknownName(name.to_string()))?;
    encode(digest, code)
}

/// Split a buffer into its parts.
///
/// Unknown codes are not rejected here; their `name` is `None`.
pub fn decode(buf: &[u8]) -> Result<DecodedMultihash<'_>> {
    if buf.len() < MIN_LEN {
        return Err(MultihashError::TooShort(buf.len()));
    }
    if buf.len() > MAX_LEN {
        return Err(MultihashError::TooLong(buf.len()));
    }

    let decoded = DecodedMultihash {
        code: buf[0],
        name: name_for(buf[0]),
        length: buf[1] as usize,
        digest: &buf[HEADER_LEN..],
    };

    // Always holds for a fixed two-byte header. Kept for varint lengths.
    if decoded.digest.len() != decoded.length {
        return Err(MultihashError::InconsistentLength {
            declared: decoded.length,
            actual: decoded.digest.len(),
        });
    }

    Ok(decoded)
}

/// Check that `buf` is a well-formed multihash with a valid code.
pub(crate) fn validate(buf: &[u8]) -> Result<()> {
    let decoded = decode(buf)?;
    if !is_valid_code(decoded.code) {
        return Err(MultihashError::UnknownCode(decoded.code));
    }
    Ok(())
}

/// Validate arbitrary bytes and wrap them as a [`Multihash`].
pub fn cast(buf: &[u8]) -> Result<Multihash> {
    validate(buf)?;
    Ok(Multihash::from_validated(buf.to_vec()))
}
