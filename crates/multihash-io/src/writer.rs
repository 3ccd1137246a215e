//! Writing multihashes to a byte stream.

use std::io::Write;

use multihash_core::Multihash;
use tracing::trace;

use crate::error::{Result, StreamError};

/// Write the full buffer of `mh` to `sink` in a single write call.
///
/// A sink that accepts only part of the buffer is reported as
/// [`StreamError::EndOfBuffer`]; the remainder is not retried. The sink is
/// not flushed.
pub fn write_multihash<W: Write + ?Sized>(sink: &mut W, mh: &Multihash) -> Result<()> {
    let buf = mh.as_bytes();
    match sink.write(buf) {
        Ok(n) if n == buf.len() => {}
        Ok(_) => return Err(StreamError::EndOfBuffer),
        Err(e) => return Err(StreamError::OperationFailure(e)),
    }
    trace!(code = mh.code(), length = mh.length(), "wrote multihash");
    Ok(())
}

/// A writer that emits multihashes to an underlying stream.
#[derive(Debug)]
pub struct MultihashWriter<W> {
    inner: W,
}

impl<W: Write> MultihashWriter<W> {
    /// Wrap a stream.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write one multihash.
    pub fn write_multihash(&mut self, mh: &Multihash) -> Result<()> {
        write_multihash(&mut self.inner, mh)
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwrap the underlying stream.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multihash_core::{sum, SHA1, SHA2_256};
    use std::io::{self, ErrorKind};

    /// Accepts nothing.
    struct Full;

    impl Write for Full {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Ok(0)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Fails every write.
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::PermissionDenied, "read-only"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Accepts at most three bytes per call and counts the calls.
    struct Chunked {
        written: Vec<u8>,
        calls: usize,
    }

    impl Write for Chunked {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.calls += 1;
            let n = buf.len().min(3);
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_single() {
        let mh = sum(b"foo", SHA1, None).unwrap();
        let mut sink = Vec::new();
        write_multihash(&mut sink, &mh).unwrap();
        assert_eq!(sink, mh.as_bytes());
    }

    #[test]
    fn test_writer_sequence() {
        let a = sum(b"a", SHA1, None).unwrap();
        let b = sum(b"b", SHA2_256, Some(8)).unwrap();

        let mut writer = MultihashWriter::new(Vec::new());
        writer.write_multihash(&a).unwrap();
        writer.write_multihash(&b).unwrap();

        let mut expected = a.as_bytes().to_vec();
        expected.extend_from_slice(b.as_bytes());
        assert_eq!(writer.get_ref(), &expected);
        assert_eq!(writer.into_inner(), expected);
    }

    #[test]
    fn test_write_zero_accepted() {
        let mh = sum(b"foo", SHA1, None).unwrap();
        assert!(matches!(write_multihash(&mut Full, &mh), Err(StreamError::EndOfBuffer)));
    }

    #[test]
    fn test_write_operation_failure() {
        let mh = sum(b"foo", SHA1, None).unwrap();
        match write_multihash(&mut Broken, &mh).unwrap_err() {
            StreamError::OperationFailure(e) => assert_eq!(e.kind(), ErrorKind::PermissionDenied),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_write_partial_write_not_retried() {
        let mh = sum(b"foo", SHA2_256, None).unwrap();
        let mut sink = Chunked {
            written: Vec::new(),
            calls: 0,
        };
        assert!(matches!(write_multihash(&mut sink, &mh), Err(StreamError::EndOfBuffer)));
        assert_eq!(sink.calls, 1);
        assert_eq!(sink.written, &mh.as_bytes()[..3]);
    }

    #[test]
    fn test_write_interrupt_is_a_failure() {
        struct Interrupted;

        impl Write for Interrupted {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(ErrorKind::Interrupted))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mh = sum(b"foo", SHA1, None).unwrap();
        match write_multihash(&mut Interrupted, &mh).unwrap_err() {
            StreamError::OperationFailure(e) => assert_eq!(e.kind(), ErrorKind::Interrupted),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_write_into_slice_overflow() {
        let mh = sum(b"foo", SHA2_256, None).unwrap();
        let mut storage = [0u8; 10];
        let mut sink: &mut [u8] = &mut storage;
        assert!(matches!(write_multihash(&mut sink, &mh), Err(StreamError::EndOfBuffer)));
        assert_eq!(&storage[..], &mh.as_bytes()[..10]);
    }
}
