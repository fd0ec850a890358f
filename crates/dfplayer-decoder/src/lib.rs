//! DFPlayer Mini Decoder
//!
//! Stream transform sitting on top of a UART decoder: it takes the data
//! bytes seen on the RX and TX lines of a DFPlayer Mini and produces one
//! annotation per command or response frame.
//!
//! - **[`Decoder`]**: session driver, one per capture
//! - **[`UartPacket`]**: input record from the UART decoder
//! - **[`Annotation`]**: output record spanning a whole frame
//! - **[`DECODER_INFO`]**: static registration data for the host
//!
//! # Example
//!
//! ```rust
//! use dfplayer_decoder::{Decoder, DecoderConfig, UartPacket};
//! use dfplayer_protocol::{encode_frame, Direction};
//!
//! let mut decoder = Decoder::new(DecoderConfig::report());
//!
//! let packets: Vec<UartPacket> = encode_frame(0x03, false, 0x01, 0x2C)
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &b)| UartPacket::data(Direction::Rx, b, i as u64 * 10, i as u64 * 10 + 9))
//!     .collect();
//!
//! let annotations = decoder.decode_all(&packets);
//! assert_eq!(annotations[0].text(), "[0x03] Playback track 300 in root folder");
//! ```

pub mod annotation;
pub mod config;
pub mod packet;
pub mod session;

pub use annotation::{Annotation, AnnotationClass, DecoderInfo, ANNOTATION_CLASSES, DECODER_INFO};
pub use config::DecoderConfig;
pub use packet::{UartPacket, UartPacketKind};
pub use session::Decoder;
