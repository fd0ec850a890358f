//! Streaming frame assembly
//!
//! The assembler keeps one buffer per direction. A start marker always opens
//! a new frame and throws away whatever was pending for that direction, so a
//! capture that starts mid-frame or loses bytes resynchronizes on its own.

use crate::frame::{Frame, Span, END_MARKER, FRAME_LEN, START_MARKER};
use crate::Direction;

/// Pending bytes and timing for one direction
#[derive(Debug, Default)]
struct DirectionBuffer {
    bytes: Vec<u8>,
    block_start: Option<u64>,
    block_end: Option<u64>,
}

impl DirectionBuffer {
    fn restart(&mut self, start: u64) {
        self.bytes.clear();
        self.block_start = Some(start);
        self.block_end = None;
    }

    fn clear(&mut self) {
        self.bytes.clear();
        self.block_start = None;
        self.block_end = None;
    }

    fn is_full(&self) -> bool {
        self.bytes.len() >= FRAME_LEN
    }
}

/// Reassembles 10-byte frames from the RX and TX byte streams
#[derive(Debug, Default)]
pub struct FrameAssembler {
    buffers: [DirectionBuffer; 2],
}

impl FrameAssembler {
    /// Create an assembler with both directions empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one byte occupying `[start, end]` on the wire
    ///
    /// Returns the frame when this byte is the tenth of the current frame.
    /// Once a frame is complete, further bytes for that direction are
    /// dropped until the next start marker.
    pub fn push(&mut self, direction: Direction, byte: u8, start: u64, end: u64) -> Option<Frame> {
        let buffer = &mut self.buffers[direction.index()];

        if byte == START_MARKER {
            if !buffer.bytes.is_empty() && !buffer.is_full() {
                tracing::debug!(
                    "{} resync: discarding {} pending bytes",
                    direction,
                    buffer.bytes.len()
                );
            }
            buffer.restart(start);
        } else if buffer.is_full() {
            tracing::trace!("{} byte 0x{:02X} outside of a frame ignored", direction, byte);
            return None;
        } else if buffer.bytes.is_empty() {
            // No start marker seen yet; the frame begins with this byte
            buffer.block_start = Some(start);
        }

        buffer.bytes.push(byte);
        if byte == END_MARKER {
            buffer.block_end = Some(end);
        }

        if buffer.bytes.len() != FRAME_LEN {
            return None;
        }

        let mut bytes = [0u8; FRAME_LEN];
        bytes.copy_from_slice(&buffer.bytes);
        let span = Span {
            start: buffer.block_start.unwrap_or(start),
            end: buffer.block_end.unwrap_or(end),
        };

        Some(Frame {
            direction,
            bytes,
            span,
        })
    }

    /// Bytes collected so far for a direction
    pub fn pending(&self, direction: Direction) -> &[u8] {
        &self.buffers[direction.index()].bytes
    }

    /// Drop all pending bytes in both directions
    pub fn clear(&mut self) {
        for buffer in &mut self.buffers {
            buffer.clear();
        }
    }
}
