//! Extension traits adding multihash methods to every stream.

use std::io::{Read, Write};

use multihash_core::Multihash;

use crate::error::Result;

/// Read multihashes directly from any [`Read`].
pub trait ReadMultihashExt: Read {
    /// Read one multihash. See [`crate::read_multihash`].
    fn read_multihash(&mut self) -> Result<Multihash> {
        crate::reader::read_multihash(self)
    }
}

impl<R: Read + ?Sized> ReadMultihashExt for R {}

/// Write multihashes directly to any [`Write`].
pub trait WriteMultihashExt: Write {
    /// Write one multihash. See [`crate::write_multihash`].
    fn write_multihash(&mut self, mh: &Multihash) -> Result<()> {
        crate::writer::write_multihash(self, mh)
    }
}

impl<W: Write + ?Sized> WriteMultihashExt for W {}

#[cfg(test)]
mod tests {
    use super::*;
    use multihash_core::{encode, SHA1};
    use proptest::prelude::*;
    use std::io::Cursor;

    #[test]
    fn test_extension_roundtrip() {
        let mh = encode(&[0xde, 0xad, 0xbe, 0xef], SHA1).unwrap();
        let mut sink = Vec::new();
        sink.write_multihash(&mh).unwrap();

        let mut source = Cursor::new(sink);
        assert_eq!(source.read_multihash().unwrap(), mh);
    }

    #[test]
    fn test_extension_on_slice() {
        let bytes = [0x11u8, 0x02, 0xaa, 0xbb, 0x12, 0x01, 0xcc];
        let mut source: &[u8] = &bytes;
        assert_eq!(source.read_multihash().unwrap().digest(), &[0xaa, 0xbb]);
        assert_eq!(source.read_multihash().unwrap().digest(), &[0xcc]);
        assert!(source.is_empty());
    }

    proptest! {
        #[test]
        fn test_sequence_roundtrip(
            entries in prop::collection::vec(
                (0u8..0x10, prop::collection::vec(any::<u8>(), 1..=127)),
                0..16,
            ),
        ) {
            let values: Vec<_> = entries
                .iter()
                .map(|(code, digest)| encode(digest, *code).unwrap())
                .collect();

            let mut sink = Vec::new();
            for mh in &values {
                sink.write_multihash(mh).unwrap();
            }

            let mut source = Cursor::new(sink);
            for mh in &values {
                prop_assert_eq!(&source.read_multihash().unwrap(), mh);
            }
        }
    }
}
