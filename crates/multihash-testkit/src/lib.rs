//! # Multihash Testkit
//!
//! Testing utilities for the multihash crates.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known digests and rejected buffers with exact expected outputs
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Scripted readers and writers for exercising stream edge cases
//!
//! ## Golden Vectors
//!
//! ```rust
//! use multihash_testkit::vectors::{all_vectors, compute};
//!
//! for vector in all_vectors() {
//!     let mh = compute(&vector).unwrap();
//!     assert_eq!(mh.to_hex(), vector.expected_hex, "{}", vector.name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use multihash_testkit::generators::multihash;
//!
//! proptest! {
//!     #[test]
//!     fn hex_roundtrip(mh in multihash()) {
//!         prop_assert_eq!(Multihash::from_hex(&mh.to_hex()).unwrap(), mh);
//!     }
//! }
//! ```
//!
//! ## Stream Fixtures
//!
//! ```rust
//! use multihash_testkit::fixtures::{ReadStep, ScriptedReader};
//!
//! // A stream that delivers one byte at a time, then fails.
//! let reader = ScriptedReader::new([
//!     ReadStep::Data(vec![0x11, 0x01, 0xaa]),
//!     ReadStep::Fail(std::io::ErrorKind::ConnectionReset),
//! ])
//! .max_chunk(1);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{concat, ReadStep, ScriptedReader, ScriptedWriter, WriteMode};
pub use generators::{multihash, multihashes, SumParams};
pub use vectors::{
    all_vectors, rejection_vectors, verify_all_vectors, GoldenVector, RejectionVector,
};
