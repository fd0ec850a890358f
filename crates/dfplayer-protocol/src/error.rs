//! Error types for DFPlayer protocol parsing and interpretation

use thiserror::Error;

use crate::Direction;

/// Errors raised while converting raw host values into protocol types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Direction index other than 0 (RX) or 1 (TX)
    #[error("invalid direction index: {0}")]
    InvalidDirection(u8),

    /// UART packet type name not known to the decoder
    #[error("invalid UART packet kind: {0}")]
    InvalidPacketKind(String),

    /// Unrecognized wrong-direction policy option
    #[error("invalid wrong-direction policy: {0}")]
    InvalidPolicy(String),
}

/// Which parameter byte of a frame a value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    /// Frame offset 5 (MSB)
    First,
    /// Frame offset 6 (LSB)
    Second,
}

impl Param {
    /// 1-based parameter number as shown to users
    pub fn number(&self) -> u8 {
        match self {
            Param::First => 1,
            Param::Second => 2,
        }
    }
}

/// Errors that can occur while interpreting a completed frame
///
/// Apart from [`DecodeError::UnknownCommand`], each variant renders to a
/// visible annotation via [`DecodeError::annotation_text`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Command code not present in the command table
    #[error("unknown command 0x{0:02X}")]
    UnknownCommand(u8),

    /// Frame direction does not match what the command allows
    #[error("[0x{code:02X}] WRONG DATA TYPE ASSIGNED! This should be some kind of {expected} data")]
    WrongDirection {
        /// Command code
        code: u8,
        /// Direction the frame most likely belongs to
        expected: Direction,
    },

    /// Parameter byte has no entry in the command's label map
    #[error("[0x{code:02X}] UNRECOGNIZED VALUE 0x{value:02X} in parameter {}", .param.number())]
    UnrecognizedValue {
        /// Command code
        code: u8,
        /// Parameter the value was read from
        param: Param,
        /// Offending byte value
        value: u8,
    },
}

impl DecodeError {
    /// Text to annotate the frame with, or `None` when nothing should be shown
    pub fn annotation_text(&self) -> Option<String> {
        match self {
            DecodeError::UnknownCommand(_) => None,
            other => Some(other.to_string()),
        }
    }
}
