//! UART packets delivered by the host's UART decoder

use std::fmt;
use std::str::FromStr;

use dfplayer_protocol::{Direction, ParseError};
use serde::{Deserialize, Serialize};

/// Kind of packet emitted by the UART decoder
///
/// Only [`UartPacketKind::Data`] carries a byte this decoder cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UartPacketKind {
    /// Start bit
    StartBit,
    /// A complete data byte
    Data,
    /// Parity bit
    ParityBit,
    /// Stop bit
    StopBit,
    /// Start bit with the wrong level
    InvalidStartBit,
    /// Stop bit with the wrong level
    InvalidStopBit,
    /// Parity check failed
    ParityError,
    /// Line held low for longer than a frame
    Break,
    /// Whole UART frame (start bit through stop bits)
    Frame,
    /// Line idle
    Idle,
}

impl UartPacketKind {
    /// Packet type name as used by the UART decoder
    pub fn name(&self) -> &'static str {
        match self {
            UartPacketKind::StartBit => "STARTBIT",
            UartPacketKind::Data => "DATA",
            UartPacketKind::ParityBit => "PARITYBIT",
            UartPacketKind::StopBit => "STOPBIT",
            UartPacketKind::InvalidStartBit => "INVALID STARTBIT",
            UartPacketKind::InvalidStopBit => "INVALID STOPBIT",
            UartPacketKind::ParityError => "PARITY ERROR",
            UartPacketKind::Break => "BREAK",
            UartPacketKind::Frame => "FRAME",
            UartPacketKind::Idle => "IDLE",
        }
    }
}

impl FromStr for UartPacketKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STARTBIT" => Ok(UartPacketKind::StartBit),
            "DATA" => Ok(UartPacketKind::Data),
            "PARITYBIT" => Ok(UartPacketKind::ParityBit),
            "STOPBIT" => Ok(UartPacketKind::StopBit),
            "INVALID STARTBIT" => Ok(UartPacketKind::InvalidStartBit),
            "INVALID STOPBIT" => Ok(UartPacketKind::InvalidStopBit),
            "PARITY ERROR" => Ok(UartPacketKind::ParityError),
            "BREAK" => Ok(UartPacketKind::Break),
            "FRAME" => Ok(UartPacketKind::Frame),
            "IDLE" => Ok(UartPacketKind::Idle),
            other => Err(ParseError::InvalidPacketKind(other.to_string())),
        }
    }
}

impl fmt::Display for UartPacketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One packet from the UART decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UartPacket {
    /// Start timestamp (sample number)
    pub start: u64,
    /// End timestamp (sample number)
    pub end: u64,
    /// Packet kind
    pub kind: UartPacketKind,
    /// Line the packet was seen on
    pub direction: Direction,
    /// Byte value (meaningful for data packets)
    pub value: u8,
}

impl UartPacket {
    /// Data byte packet
    pub fn data(direction: Direction, value: u8, start: u64, end: u64) -> Self {
        Self {
            start,
            end,
            kind: UartPacketKind::Data,
            direction,
            value,
        }
    }

    /// Build a packet from the host's raw representation
    ///
    /// `direction` is the UART channel index (0 = RX, 1 = TX).
    pub fn from_raw(
        start: u64,
        end: u64,
        kind: &str,
        direction: u8,
        value: u8,
    ) -> Result<Self, ParseError> {
        Ok(Self {
            start,
            end,
            kind: kind.parse()?,
            direction: Direction::try_from(direction)?,
            value,
        })
    }

    /// Whether this packet carries a data byte
    pub fn is_data(&self) -> bool {
        self.kind == UartPacketKind::Data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_roundtrip() {
        let kinds = [
            UartPacketKind::StartBit,
            UartPacketKind::Data,
            UartPacketKind::ParityBit,
            UartPacketKind::StopBit,
            UartPacketKind::InvalidStartBit,
            UartPacketKind::InvalidStopBit,
            UartPacketKind::ParityError,
            UartPacketKind::Break,
            UartPacketKind::Frame,
            UartPacketKind::Idle,
        ];
        for kind in kinds {
            assert_eq!(kind.name().parse::<UartPacketKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_from_raw() {
        let packet = UartPacket::from_raw(10, 20, "DATA", 1, 0x7E).unwrap();
        assert_eq!(packet, UartPacket::data(Direction::Tx, 0x7E, 10, 20));
        assert!(packet.is_data());

        let packet = UartPacket::from_raw(10, 20, "STOPBIT", 0, 0).unwrap();
        assert!(!packet.is_data());
    }

    #[test]
    fn test_from_raw_errors() {
        assert_eq!(
            UartPacket::from_raw(0, 1, "data", 0, 0),
            Err(ParseError::InvalidPacketKind("data".to_string()))
        );
        assert_eq!(
            UartPacket::from_raw(0, 1, "DATA", 2, 0),
            Err(ParseError::InvalidDirection(2))
        );
    }
}
