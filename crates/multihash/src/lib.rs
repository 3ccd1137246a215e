//! # Multihash
//!
//! Self-describing hashes: a digest tagged with the function that produced
//! it and its length, so any consumer can interpret it without context.
//!
//! ## Overview
//!
//! - **Codec**: [`encode`], [`decode`] and [`cast`] convert between digests and
//!   the `[code][length][digest]` wire form
//! - **Registry**: function codes, names and default lengths
//! - **Digest engine**: [`sum`] hashes data with SHA-1, SHA2-256 or SHA2-512
//! - **Streams**: [`read_multihash`] and [`write_multihash`] over `std::io`
//! - **Text**: hex and base58 forms on [`Multihash`]
//!
//! ## Usage
//!
//! ```rust
//! use multihash::{HashFunction, Hasher, HasherConfig, Multihash};
//!
//! let hasher = Hasher::new(HasherConfig::new(HashFunction::Sha1).length(10)).unwrap();
//! let mh = hasher.sum(b"foo").unwrap();
//! assert_eq!(mh.to_hex(), "110a0beec7b5ea3f0fdbc95d");
//!
//! let parsed = Multihash::from_base58(&mh.to_base58()).unwrap();
//! assert_eq!(parsed, mh);
//! ```
//!
//! ## Re-exports
//!
//! The component crates are available as modules:
//!
//! - `multihash::primitives` - Registry, codec, digest engine and text forms
//! - `multihash::stream` - Stream reader and writer

pub mod error;
pub mod hasher;

// Re-export component crates
pub use multihash_core as primitives;
pub use multihash_io as stream;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use hasher::{Hasher, HasherConfig};

pub use multihash_core::{
    cast, code_for_name, decode, default_length, encode, encode_name, is_app_code,
    is_valid_code, name_for, registered, sum, sum_name, DecodedMultihash, HashFunction,
    Multihash, MultihashError, SumError, BLAKE2B, BLAKE2S, SHA1, SHA2_256, SHA2_512, SHA3,
};
pub use multihash_io::{
    read_multihash, write_multihash, MultihashReader, MultihashWriter, ReadMultihashExt,
    StreamError, WriteMultihashExt,
};
