//! DFPlayer Mini Protocol Library
//!
//! This crate decodes the serial command set of the DFPlayer Mini MP3
//! module. Every command and every response travels as a fixed 10-byte frame:
//!
//! ```text
//! 7E FF 06 [cmd] [feedback] [param1] [param2] [chk hi] [chk lo] EF
//! ```
//!
//! # Architecture
//!
//! - [`FrameAssembler`] reassembles the byte stream of each direction into
//!   frames, resynchronizing on every start marker
//! - [`table`] holds the static command table with one descriptor per direction
//! - [`Interpreter`] turns a frame's command code and parameters into a
//!   human-readable description and spots frames tagged with the wrong direction
//!
//! The same command code can mean different things based on direction:
//! - `0x43` sent TO the module (RX) = query the current volume
//! - `0x43` sent FROM the module (TX) = report of the current volume
//!
//! # Example
//!
//! ```rust
//! use dfplayer_protocol::{encode_frame, Direction, FrameAssembler, Interpreter, WrongDirectionPolicy};
//!
//! let mut assembler = FrameAssembler::new();
//! let interpreter = Interpreter::new(WrongDirectionPolicy::Report);
//!
//! let bytes = encode_frame(0x06, false, 0x00, 0x0F);
//! let frame = bytes
//!     .iter()
//!     .enumerate()
//!     .find_map(|(i, &b)| assembler.push(Direction::Rx, b, i as u64, i as u64 + 1))
//!     .unwrap();
//!
//! let text = interpreter.describe(frame.direction, frame.command(), frame.param1(), frame.param2());
//! assert_eq!(text, "[0x06] Set volume to 15");
//! ```

pub mod assembler;
pub mod error;
pub mod frame;
pub mod interpreter;
pub mod table;

use std::fmt;

pub use assembler::FrameAssembler;
pub use error::{DecodeError, Param, ParseError};
pub use frame::{encode_frame, Frame, Span, END_MARKER, FRAME_LEN, START_MARKER};
pub use interpreter::{format_code, Interpreter, WrongDirectionPolicy};
pub use table::{lookup, CommandEntry, Descriptor, Rule};

/// Direction of a byte on the serial link, seen from the module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Module received a command from the host
    Rx,
    /// Module transmitted a response or event
    Tx,
}

impl Direction {
    /// Both directions, in index order
    pub const ALL: [Direction; 2] = [Direction::Rx, Direction::Tx];

    /// Returns the other direction
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Rx => Direction::Tx,
            Direction::Tx => Direction::Rx,
        }
    }

    /// Index used by the UART decoder and for annotation classes (RX = 0, TX = 1)
    pub fn index(&self) -> usize {
        match self {
            Direction::Rx => 0,
            Direction::Tx => 1,
        }
    }

    /// Returns a short human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Rx => "Rx",
            Direction::Tx => "Tx",
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::Rx),
            1 => Ok(Direction::Tx),
            other => Err(ParseError::InvalidDirection(other)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
