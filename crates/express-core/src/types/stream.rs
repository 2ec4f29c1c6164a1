//! Backing data streams for queued sounds.
//!
//! Opening sound files out of the game archives happens elsewhere; the queue
//! only needs something that hands out fixed-size compressed blocks.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use std::io::{ErrorKind, Read};

use bytes::Bytes;
use tracing::trace;

use crate::error::Result;

/// Bytes of block header (seed sample, step row).
pub const BLOCK_HEADER_SIZE: usize = 2;

/// Bytes of nibble-packed deltas following the header.
pub const BLOCK_PAYLOAD_SIZE: usize = 735;

/// Total size of one compressed block.
pub const BLOCK_SIZE: usize = BLOCK_HEADER_SIZE + BLOCK_PAYLOAD_SIZE;

/// PCM samples produced from one block (two per payload byte).
pub const SAMPLES_PER_BLOCK: usize = BLOCK_PAYLOAD_SIZE * 2;

/// Source of compressed sound blocks.
pub trait SoundStream: Send {
    /// Whether the backing data is open and can deliver blocks.
    fn is_ready(&self) -> bool {
        true
    }

    /// Fill `block` with the next compressed block.
    ///
    /// Returns `Ok(false)` once the data is exhausted. A short trailing block
    /// is zero-padded.
    fn next_block(&mut self, block: &mut [u8]) -> Result<bool>;

    /// Release the backing data. Called once when the entry is reset or
    /// dropped from the queue.
    fn close(&mut self) {}
}

/// Stream over an in-memory buffer.
#[derive(Debug, Clone)]
pub struct MemoryStream {
    data: Bytes,
    position: usize,
}

impl MemoryStream {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            position: 0,
        }
    }

    /// Bytes not yet handed out.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }
}

impl SoundStream for MemoryStream {
    fn next_block(&mut self, block: &mut [u8]) -> Result<bool> {
        if self.remaining() == 0 {
            return Ok(false);
        }

        let take = block.len().min(self.remaining());
        block[..take].copy_from_slice(&self.data[self.position..self.position + take]);
        block[take..].fill(0);
        self.position += take;

        if take < block.len() {
            trace!("Padded short block ({take} of {} bytes)", block.len());
        }
        Ok(true)
    }

    fn close(&mut self) {
        self.position = self.data.len();
    }
}

/// Stream over any reader, e.g. a file opened by the host.
pub struct ReaderStream<R> {
    reader: Option<R>,
}

impl<R: Read + Send> ReaderStream<R> {
    pub const fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
        }
    }
}

impl<R: Read + Send> SoundStream for ReaderStream<R> {
    fn is_ready(&self) -> bool {
        self.reader.is_some()
    }

    fn next_block(&mut self, block: &mut [u8]) -> Result<bool> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(false);
        };

        let mut filled = 0;
        while filled < block.len() {
            match reader.read(&mut block[filled..]) {
                Ok(0) => break,
                Ok(read) => filled += read,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }

        if filled == 0 {
            self.reader = None;
            return Ok(false);
        }

        block[filled..].fill(0);
        Ok(true)
    }

    fn close(&mut self) {
        self.reader = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_memory_stream_blocks() {
        let mut stream = MemoryStream::new(vec![1u8; BLOCK_SIZE + 10]);
        let mut block = [0u8; BLOCK_SIZE];

        assert!(stream.next_block(&mut block).unwrap());
        assert!(block.iter().all(|&b| b == 1));

        assert!(stream.next_block(&mut block).unwrap());
        assert_eq!(&block[..10], &[1u8; 10]);
        assert!(block[10..].iter().all(|&b| b == 0));

        assert!(!stream.next_block(&mut block).unwrap());
    }

    #[test]
    fn test_memory_stream_close() {
        let mut stream = MemoryStream::new(vec![1u8; BLOCK_SIZE]);
        stream.close();
        let mut block = [0u8; BLOCK_SIZE];
        assert!(!stream.next_block(&mut block).unwrap());
    }

    #[test]
    fn test_reader_stream_blocks() {
        let mut stream = ReaderStream::new(Cursor::new(vec![3u8; BLOCK_SIZE * 2]));
        let mut block = [0u8; BLOCK_SIZE];

        assert!(stream.is_ready());
        assert!(stream.next_block(&mut block).unwrap());
        assert!(stream.next_block(&mut block).unwrap());
        assert!(!stream.next_block(&mut block).unwrap());
        assert!(!stream.is_ready());
    }
}
