//! Decoding session
//!
//! The [`Decoder`] ties the frame assembler to the interpreter: UART packets
//! go in one at a time, and an [`Annotation`] comes out for every frame that
//! completes with a known command.

use dfplayer_protocol::{DecodeError, Frame, FrameAssembler, Interpreter};

use crate::annotation::Annotation;
use crate::config::DecoderConfig;
use crate::packet::UartPacket;

/// Streaming DFPlayer Mini decoder
#[derive(Debug)]
pub struct Decoder {
    assembler: FrameAssembler,
    interpreter: Interpreter,
    last_description: String,
}

impl Decoder {
    /// Create a decoder for one capture session
    pub fn new(config: DecoderConfig) -> Self {
        tracing::debug!(
            "DFPlayer decoder created, wrong-direction policy: {}",
            config.wrong_direction.name()
        );
        Self {
            assembler: FrameAssembler::new(),
            interpreter: Interpreter::new(config.wrong_direction),
            last_description: String::new(),
        }
    }

    /// Process one UART packet
    ///
    /// Non-data packets are ignored. Returns an annotation when the byte
    /// completes a frame whose command is in the command table.
    pub fn decode(&mut self, packet: &UartPacket) -> Option<Annotation> {
        if !packet.is_data() {
            return None;
        }

        let frame = self
            .assembler
            .push(packet.direction, packet.value, packet.start, packet.end)?;
        self.annotate(&frame)
    }

    /// Process a sequence of packets, collecting annotations in order
    pub fn decode_all<'a, I>(&mut self, packets: I) -> Vec<Annotation>
    where
        I: IntoIterator<Item = &'a UartPacket>,
    {
        packets
            .into_iter()
            .filter_map(|packet| self.decode(packet))
            .collect()
    }

    fn annotate(&mut self, frame: &Frame) -> Option<Annotation> {
        let result = self.interpreter.interpret(
            frame.direction,
            frame.command(),
            frame.param1(),
            frame.param2(),
        );

        let text = match result {
            Ok(text) => text,
            Err(DecodeError::UnknownCommand(code)) => {
                tracing::trace!("{} frame with unknown command 0x{:02X}", frame.direction, code);
                self.last_description.clear();
                return None;
            }
            Err(err) => {
                tracing::warn!("Failed to decode {} frame: {}", frame.direction, err);
                err.annotation_text()?
            }
        };

        self.last_description.clone_from(&text);
        Some(Annotation {
            start: frame.span.start,
            end: frame.span.end,
            class: frame.direction,
            texts: vec![text],
        })
    }

    /// Text of the most recent annotation (empty after an unknown command)
    pub fn last_description(&self) -> &str {
        &self.last_description
    }

    /// Forget pending bytes and the last description
    pub fn reset(&mut self) {
        self.assembler.clear();
        self.last_description.clear();
    }
}
