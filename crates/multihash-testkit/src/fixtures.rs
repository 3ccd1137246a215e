//! Stream fixtures.
//!
//! Scripted readers and writers that reproduce the awkward behaviour real
//! streams exhibit: short reads, early end of stream, refused writes and
//! hard failures.

use std::collections::VecDeque;
use std::io::{self, ErrorKind, Read, Write};

use multihash_core::Multihash;

/// One scripted response of a [`ScriptedReader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadStep {
    /// Hand out these bytes, across as many reads as the caller needs.
    Data(Vec<u8>),
    /// Return `Ok(0)` once.
    Eof,
    /// Return an error of this kind once.
    Fail(ErrorKind),
}

/// A reader that replays a script.
///
/// Each read returns at most `max_chunk` bytes. Once the script is
/// exhausted every read returns `Ok(0)`.
#[derive(Debug, Clone)]
pub struct ScriptedReader {
    steps: VecDeque<ReadStep>,
    max_chunk: usize,
    read_calls: usize,
}

impl ScriptedReader {
    /// Create a reader from a script.
    pub fn new(steps: impl IntoIterator<Item = ReadStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            max_chunk: usize::MAX,
            read_calls: 0,
        }
    }

    /// A reader over the concatenated wire bytes of `values`.
    pub fn from_multihashes(values: &[Multihash]) -> Self {
        Self::new([ReadStep::Data(concat(values))])
    }

    /// Limit every read to at most `max_chunk` bytes.
    pub fn max_chunk(mut self, max_chunk: usize) -> Self {
        self.max_chunk = max_chunk.max(1);
        self
    }

    /// Number of script steps not yet consumed.
    pub fn remaining_steps(&self) -> usize {
        self.steps.len()
    }

    /// Number of `read` calls seen.
    pub fn read_calls(&self) -> usize {
        self.read_calls
    }
}

impl Read for ScriptedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read_calls += 1;
        match self.steps.pop_front() {
            None | Some(ReadStep::Eof) => Ok(0),
            Some(ReadStep::Fail(kind)) => Err(io::Error::new(kind, "scripted failure")),
            Some(ReadStep::Data(mut data)) => {
                let n = data.len().min(buf.len()).min(self.max_chunk);
                buf[..n].copy_from_slice(&data[..n]);
                if n < data.len() {
                    self.steps.push_front(ReadStep::Data(data.split_off(n)));
                }
                Ok(n)
            }
        }
    }
}

/// How a [`ScriptedWriter`] responds to writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Accept up to this many bytes per call.
    Accept(usize),
    /// Accept bytes until this many have been written in total, then
    /// report zero-length writes.
    Capacity(usize),
    /// Fail every write with this kind.
    Fail(ErrorKind),
}

/// A writer that records what it accepts.
#[derive(Debug, Clone)]
pub struct ScriptedWriter {
    mode: WriteMode,
    written: Vec<u8>,
    write_calls: usize,
}

impl ScriptedWriter {
    /// Create a writer with the given behaviour.
    pub fn new(mode: WriteMode) -> Self {
        Self {
            mode,
            written: Vec::new(),
            write_calls: 0,
        }
    }

    /// Bytes accepted so far.
    pub fn written(&self) -> &[u8] {
        &self.written
    }

    /// Number of `write` calls seen.
    pub fn write_calls(&self) -> usize {
        self.write_calls
    }
}

impl Write for ScriptedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_calls += 1;
        let n = match self.mode {
            WriteMode::Accept(chunk) => buf.len().min(chunk),
            WriteMode::Capacity(total) => buf.len().min(total.saturating_sub(self.written.len())),
            WriteMode::Fail(kind) => return Err(io::Error::new(kind, "scripted failure")),
        };
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Concatenate the wire bytes of `values`.
pub fn concat(values: &[Multihash]) -> Vec<u8> {
    values.iter().flat_map(|mh| mh.as_bytes().iter().copied()).collect()
}
