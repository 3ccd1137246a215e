//! # Multihash Core
//!
//! Pure primitives for self-describing hashes.
//!
//! This crate contains no I/O. A multihash is a digest tagged with the code
//! of the function that produced it and its length:
//!
//! ```text
//! [code: 1 byte][length: 1 byte][digest: length bytes]
//! ```
//!
//! ## Key Types
//!
//! - [`Multihash`] - A validated multihash buffer
//! - [`DecodedMultihash`] - The parts of a multihash, borrowed from its buffer
//! - [`HashFunction`] - The registered hash functions
//!
//! ## Example
//!
//! ```rust
//! use multihash_core::{sum, Multihash, SHA2_256};
//!
//! let mh = sum(b"foo", SHA2_256, None).unwrap();
//! assert_eq!(mh.name(), Some("sha2-256"));
//! assert_eq!(Multihash::from_hex(&mh.to_hex()).unwrap(), mh);
//! ```

pub mod codec;
pub mod error;
pub mod registry;
pub mod sum;
pub mod text;
pub mod types;

pub use codec::{cast, decode, encode, encode_name};
pub use error::{MultihashError, Result, SumError};
pub use registry::{
    code_for_name, default_length, is_app_code, is_valid_code, name_for, registered,
    HashFunction, BLAKE2B, BLAKE2S, SHA1, SHA2_256, SHA2_512, SHA3,
};
pub use sum::{sum, sum_name};
pub use types::{DecodedMultihash, Multihash, HEADER_LEN, MAX_DIGEST_LEN, MAX_LEN, MIN_LEN};
