//! DFPlayer frame layout
//!
//! # Frame Format
//! ```text
//! 7E FF 06 [cmd] [feedback] [param1] [param2] [chk hi] [chk lo] EF
//! ```
//!
//! - `7E`: Start marker
//! - `FF`: Version
//! - `06`: Number of bytes from version through param2
//! - `cmd`: Command code
//! - `feedback`: 1 if the module should acknowledge, 0 otherwise
//! - `param1`/`param2`: Parameter bytes (MSB/LSB for 16-bit values)
//! - `chk`: Two's complement of the sum of bytes 1..=6, big-endian
//! - `EF`: End marker

use crate::Direction;

/// Start-of-frame marker
pub const START_MARKER: u8 = 0x7E;
/// End-of-frame marker
pub const END_MARKER: u8 = 0xEF;
/// Version byte
pub const VERSION: u8 = 0xFF;
/// Length byte (version through param2)
pub const DATA_LEN: u8 = 0x06;
/// Total frame length
pub const FRAME_LEN: usize = 10;

/// Offset of the command code
pub const CMD_IDX: usize = 3;
/// Offset of the feedback flag
pub const FEEDBACK_IDX: usize = 4;
/// Offset of the first parameter byte (MSB)
pub const PARAM1_IDX: usize = 5;
/// Offset of the second parameter byte (LSB)
pub const PARAM2_IDX: usize = 6;

/// Timestamp interval, in the host's sample units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Start of the first byte
    pub start: u64,
    /// End of the last byte
    pub end: u64,
}

/// A complete 10-byte frame from one direction
///
/// Markers are not checked: a frame is complete as soon as ten bytes were
/// collected, and fields are read by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Direction the bytes were captured on
    pub direction: Direction,
    /// Raw frame bytes
    pub bytes: [u8; FRAME_LEN],
    /// Time covered by the frame
    pub span: Span,
}

impl Frame {
    /// Command code (offset 3)
    pub fn command(&self) -> u8 {
        self.bytes[CMD_IDX]
    }

    /// First parameter byte (offset 5)
    pub fn param1(&self) -> u8 {
        self.bytes[PARAM1_IDX]
    }

    /// Second parameter byte (offset 6)
    pub fn param2(&self) -> u8 {
        self.bytes[PARAM2_IDX]
    }

    /// Whether the module was asked to acknowledge this command
    pub fn feedback(&self) -> bool {
        self.bytes[FEEDBACK_IDX] != 0
    }

    /// Whether offsets 0 and 9 hold the start and end markers
    pub fn has_valid_markers(&self) -> bool {
        self.bytes[0] == START_MARKER && self.bytes[FRAME_LEN - 1] == END_MARKER
    }
}

/// Build a well-formed frame for the given command and parameters
pub fn encode_frame(command: u8, feedback: bool, param1: u8, param2: u8) -> [u8; FRAME_LEN] {
    let body = [VERSION, DATA_LEN, command, u8::from(feedback), param1, param2];
    let sum = body.iter().fold(0u16, |acc, &b| acc.wrapping_add(b as u16));
    let [chk_hi, chk_lo] = 0u16.wrapping_sub(sum).to_be_bytes();

    [
        START_MARKER,
        body[0],
        body[1],
        body[2],
        body[3],
        body[4],
        body[5],
        chk_hi,
        chk_lo,
        END_MARKER,
    ]
}
