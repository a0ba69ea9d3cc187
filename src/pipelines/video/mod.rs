// SPDX-License-Identifier: GPL-3.0-only

//! Video recording pipeline
//!
//! The recorder emits ordered binary chunks over an explicit event
//! channel; the controller accumulates them in a [`ChunkBuffer`] and
//! assembles the final clip when the finalize signal arrives.

pub mod recorder;

pub use recorder::ClipRecorder;

/// Events delivered by the recorder, in order
#[derive(Debug, Clone)]
pub enum RecorderEvent {
    /// An incremental fragment of the muxed clip, not playable on its own
    Chunk(Vec<u8>),
    /// The recorder finished; all chunks have been delivered
    Finalized,
}

/// Sending half of the recorder event channel
pub type RecorderEventSender = tokio::sync::mpsc::UnboundedSender<RecorderEvent>;
/// Receiving half of the recorder event channel
pub type RecorderEventReceiver = tokio::sync::mpsc::UnboundedReceiver<RecorderEvent>;

/// Ordered chunk accumulator for an in-progress recording
///
/// Cleared at recording start, drained at finalize to build the clip.
#[derive(Debug, Default)]
pub struct ChunkBuffer {
    chunks: Vec<Vec<u8>>,
}

impl ChunkBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all accumulated chunks
    pub fn clear(&mut self) {
        self.chunks.clear();
    }

    /// Append a chunk, preserving arrival order
    pub fn push(&mut self, chunk: Vec<u8>) {
        if !chunk.is_empty() {
            self.chunks.push(chunk);
        }
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Total size of the accumulated chunks in bytes
    pub fn total_bytes(&self) -> usize {
        self.chunks.iter().map(Vec::len).sum()
    }

    /// Consume the buffer, concatenating chunks in order into one clip
    pub fn assemble(&mut self) -> Vec<u8> {
        let mut clip = Vec::with_capacity(self.total_bytes());
        for chunk in self.chunks.drain(..) {
            clip.extend_from_slice(&chunk);
        }
        clip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_preserves_order_and_length() {
        let mut buffer = ChunkBuffer::new();
        buffer.push(vec![1, 2]);
        buffer.push(vec![3]);
        buffer.push(vec![4, 5, 6]);

        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.total_bytes(), 6);
        assert_eq!(buffer.assemble(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn assemble_drains_the_buffer() {
        let mut buffer = ChunkBuffer::new();
        buffer.push(vec![1, 2, 3]);
        let _ = buffer.assemble();
        assert!(buffer.is_empty());
        assert!(buffer.assemble().is_empty());
    }

    #[test]
    fn clear_empties_the_buffer() {
        let mut buffer = ChunkBuffer::new();
        buffer.push(vec![9; 128]);
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.total_bytes(), 0);
    }

    #[test]
    fn empty_chunks_are_ignored() {
        let mut buffer = ChunkBuffer::new();
        buffer.push(Vec::new());
        assert!(buffer.is_empty());
    }
}
