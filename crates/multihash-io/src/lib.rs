//! # Multihash IO
//!
//! Streaming reader and writer for multihashes over [`std::io`] streams.
//!
//! ## Overview
//!
//! Each call reads or writes exactly one value and keeps no state between
//! calls. A read takes one call for the header and one for the digest; a
//! write takes a single call. A short or failed call is reported, never
//! retried. The caller owns the stream and opens, closes and flushes it.
//!
//! ## Key Types
//!
//! - [`read_multihash`] / [`write_multihash`] - One value per call
//! - [`MultihashReader`] / [`MultihashWriter`] - Thin stream wrappers
//! - [`ReadMultihashExt`] / [`WriteMultihashExt`] - Methods on any stream
//! - [`StreamError`] - End of buffer, I/O failure, or invalid value
//!
//! ## Usage
//!
//! ```rust
//! use multihash_core::{sum, SHA2_256};
//! use multihash_io::{ReadMultihashExt, WriteMultihashExt};
//!
//! let mh = sum(b"hello", SHA2_256, None).unwrap();
//!
//! let mut sink = Vec::new();
//! sink.write_multihash(&mh).unwrap();
//!
//! let mut source = std::io::Cursor::new(sink);
//! assert_eq!(source.read_multihash().unwrap(), mh);
//! ```

pub mod error;
pub mod reader;
pub mod traits;
pub mod writer;

pub use error::{Result, StreamError};
pub use reader::{read_multihash, MultihashReader};
pub use traits::{ReadMultihashExt, WriteMultihashExt};
pub use writer::{write_multihash, MultihashWriter};
