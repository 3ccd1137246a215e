//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the exact wire bytes produced by the digest engine and
//! the errors produced for malformed input, so every implementation of the
//! format can be checked against the same expectations.

use multihash_core::{sum, Multihash, MultihashError, SumError, SHA1, SHA2_256, SHA2_512};

/// A known digest computation.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Bytes to hash.
    pub input: &'static [u8],
    /// Function code.
    pub code: u8,
    /// Requested length, `None` for the default.
    pub length: Option<usize>,
    /// Expected multihash, hex of the full buffer.
    pub expected_hex: &'static str,
}

/// A buffer that must be rejected by `cast`.
#[derive(Debug, Clone)]
pub struct RejectionVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Hex of the offending buffer.
    pub hex: &'static str,
    /// The error `cast` must return.
    pub error: MultihashError,
}

/// Get all golden digest vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "sha1 of foo, default length",
            input: b"foo",
            code: SHA1,
            length: None,
            expected_hex: "11140beec7b5ea3f0fdbc95d0dd47f3c5bc275da8a33",
        },
        GoldenVector {
            name: "sha1 of foo, truncated to 10",
            input: b"foo",
            code: SHA1,
            length: Some(10),
            expected_hex: "110a0beec7b5ea3f0fdbc95d",
        },
        GoldenVector {
            name: "sha2-256 of foo, default length",
            input: b"foo",
            code: SHA2_256,
            length: None,
            expected_hex: "12202c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae",
        },
        GoldenVector {
            name: "sha2-256 of foo, truncated to 4",
            input: b"foo",
            code: SHA2_256,
            length: Some(4),
            expected_hex: "12042c26b46b",
        },
        GoldenVector {
            name: "sha1 of empty input",
            input: b"",
            code: SHA1,
            length: None,
            expected_hex: "1114da39a3ee5e6b4b0d3255bfef95601890afd80709",
        },
        GoldenVector {
            name: "sha2-256 of empty input",
            input: b"",
            code: SHA2_256,
            length: None,
            expected_hex: "1220e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        },
        GoldenVector {
            name: "sha1 of abc",
            input: b"abc",
            code: SHA1,
            length: None,
            expected_hex: "1114a9993e364706816aba3e25717850c26c9cd0d89d",
        },
        GoldenVector {
            name: "sha2-256 of abc",
            input: b"abc",
            code: SHA2_256,
            length: None,
            expected_hex: "1220ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        },
        GoldenVector {
            name: "sha2-512 of abc",
            input: b"abc",
            code: SHA2_512,
            length: None,
            expected_hex: "1340ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
                           2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
        },
        GoldenVector {
            name: "sha2-512 of abc, truncated to 1",
            input: b"abc",
            code: SHA2_512,
            length: Some(1),
            expected_hex: "1301dd",
        },
    ]
}

/// Get all rejection vectors.
pub fn rejection_vectors() -> Vec<RejectionVector> {
    vec![
        RejectionVector {
            name: "empty buffer",
            hex: "",
            error: MultihashError::TooShort(0),
        },
        RejectionVector {
            name: "header only",
            hex: "1114",
            error: MultihashError::TooShort(2),
        },
        RejectionVector {
            name: "unregistered code",
            hex: "150100",
            error: MultihashError::UnknownCode(0x15),
        },
        RejectionVector {
            name: "length byte larger than digest",
            hex: "11050beec7",
            error: MultihashError::InconsistentLength {
                declared: 5,
                actual: 3,
            },
        },
        RejectionVector {
            name: "length byte smaller than digest",
            hex: "11010beec7",
            error: MultihashError::InconsistentLength {
                declared: 1,
                actual: 3,
            },
        },
    ]
}

/// Compute the multihash described by a vector.
pub fn compute(vector: &GoldenVector) -> Result<Multihash, SumError> {
    sum(vector.input, vector.code, vector.length)
}

/// Check every golden vector.
///
/// Returns `(name, matches, actual_hex)` for each vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let hex = compute(v).map(|mh| mh.to_hex()).unwrap_or_default();
            (v.name.to_string(), hex == v.expected_hex, hex)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use multihash_core::cast;

    #[test]
    fn test_all_vectors_verify() {
        for (name, matches, hex) in verify_all_vectors() {
            assert!(matches, "vector '{}' produced {}", name, hex);
        }
    }

    #[test]
    fn test_vectors_are_deterministic() {
        for vector in all_vectors() {
            assert_eq!(
                compute(&vector).unwrap(),
                compute(&vector).unwrap(),
                "vector '{}' produced different values on recomputation",
                vector.name
            );
        }
    }

    #[test]
    fn test_rejection_vectors() {
        for vector in rejection_vectors() {
            let buf = hex::decode(vector.hex).unwrap();
            assert_eq!(cast(&buf), Err(vector.error.clone()), "vector '{}'", vector.name);
        }
    }
}
