//! Integration tests for the DFPlayer decoder session
//!
//! These tests feed UART packet streams the way the host delivers them:
//! - Interleaved RX and TX lines
//! - Bit-level packets mixed in with data bytes
//! - Captures that start mid-frame or swap the two lines

use dfplayer_decoder::{Annotation, Decoder, DecoderConfig, UartPacket, UartPacketKind};
use dfplayer_protocol::{encode_frame, Direction, FRAME_LEN};

// ============================================================================
// Helper Functions
// ============================================================================

mod helpers {
    use super::*;

    /// Ticks per UART byte on the simulated line
    pub const BYTE_TICKS: u64 = 100;

    /// Expand each byte to the packets a UART decoder produces for it
    pub fn uart_packets(dir: Direction, bytes: &[u8], t0: u64) -> Vec<UartPacket> {
        let mut packets = Vec::new();
        for (i, &b) in bytes.iter().enumerate() {
            let start = t0 + i as u64 * BYTE_TICKS;
            let end = start + BYTE_TICKS - 10;
            packets.push(UartPacket {
                start,
                end: start + 10,
                kind: UartPacketKind::StartBit,
                direction: dir,
                value: 0,
            });
            packets.push(UartPacket::data(dir, b, start + 10, end - 10));
            packets.push(UartPacket {
                start: end - 10,
                end,
                kind: UartPacketKind::StopBit,
                direction: dir,
                value: 0,
            });
        }
        packets
    }

    pub fn texts(annotations: &[Annotation]) -> Vec<&str> {
        annotations.iter().map(|a| a.text()).collect()
    }
}

#[test]
fn test_command_and_response_exchange() {
    let mut decoder = Decoder::new(DecoderConfig::report());

    let mut stream = helpers::uart_packets(Direction::Rx, &encode_frame(0x43, true, 0, 0), 0);
    stream.extend(helpers::uart_packets(Direction::Tx, &encode_frame(0x41, false, 0, 0), 2_000));
    stream.extend(helpers::uart_packets(Direction::Tx, &encode_frame(0x43, false, 0, 20), 4_000));

    let annotations = decoder.decode_all(&stream);
    assert_eq!(
        helpers::texts(&annotations),
        vec![
            "[0x43] Query current volume",
            "[0x41] Module ACK",
            "[0x43] Current volume is 20",
        ]
    );

    let classes: Vec<usize> = annotations.iter().map(|a| a.class_index()).collect();
    assert_eq!(classes, vec![0, 1, 1]);

    // Frames span from the start marker to the end marker
    assert_eq!(annotations[0].start, 10);
    assert_eq!(annotations[0].end, 9 * helpers::BYTE_TICKS + 80);
    assert_eq!(annotations[2].start, 4_010);
}

#[test]
fn test_interleaved_lines() {
    let mut decoder = Decoder::new(DecoderConfig::report());
    let rx = helpers::uart_packets(Direction::Rx, &encode_frame(0x12, false, 0x00, 0x05), 0);
    let tx = helpers::uart_packets(Direction::Tx, &encode_frame(0x3D, false, 0x00, 0x04), 50);

    let mut stream: Vec<UartPacket> = rx.iter().chain(tx.iter()).copied().collect();
    stream.sort_by_key(|p| p.start);

    let annotations = decoder.decode_all(&stream);
    assert_eq!(
        helpers::texts(&annotations),
        vec![
            "[0x12] Play track 5 from MP3 folder",
            "[0x3D] SD Card play track 4 finished",
        ]
    );
    assert_eq!(annotations[0].class, Direction::Rx);
    assert_eq!(annotations[1].class, Direction::Tx);
}

#[test]
fn test_capture_starting_mid_frame() {
    let mut decoder = Decoder::new(DecoderConfig::report());
    let first = encode_frame(0x0D, false, 0, 0);
    let second = encode_frame(0x06, false, 0, 25);

    let mut bytes = first[6..].to_vec();
    bytes.extend_from_slice(&second);
    let annotations = decoder.decode_all(&helpers::uart_packets(Direction::Rx, &bytes, 0));

    assert_eq!(helpers::texts(&annotations), vec!["[0x06] Set volume to 25"]);
}

#[test]
fn test_swapped_lines() {
    let frame = encode_frame(0x3F, false, 0x00, 0x02);
    let stream = helpers::uart_packets(Direction::Rx, &frame, 0);

    // RX 0x3F is a query, and queries carry no parameters
    let mut decoder = Decoder::new(DecoderConfig::report());
    assert_eq!(
        helpers::texts(&decoder.decode_all(&stream)),
        vec!["[0x3F] Query current online storage"]
    );

    let stream = helpers::uart_packets(Direction::Rx, &encode_frame(0x3A, false, 0, 4), 0);
    let mut decoder = Decoder::new(DecoderConfig::report());
    let text = decoder.decode_all(&stream)[0].text().to_string();
    assert!(text.contains("WRONG DATA TYPE ASSIGNED"));
    assert!(text.contains("Tx"));

    let mut decoder = Decoder::new(DecoderConfig::flip_automatically());
    assert_eq!(
        helpers::texts(&decoder.decode_all(&stream)),
        vec!["[0x3A] Storage USB cable to PC is plugged in"]
    );
}

#[test]
fn test_host_tuples() {
    let raw: Vec<(u64, u64, &str, u8, u8)> = encode_frame(0x1A, false, 0, 1)
        .iter()
        .enumerate()
        .flat_map(|(i, &b)| {
            let t = i as u64 * 10;
            [(t, t + 1, "STARTBIT", 1, 0), (t + 1, t + 9, "DATA", 1, b)]
        })
        .collect();

    let mut decoder = Decoder::new(DecoderConfig::flip_automatically());
    let mut annotations = Vec::new();
    for (start, end, kind, dir, value) in raw {
        let packet = UartPacket::from_raw(start, end, kind, dir, value).unwrap();
        annotations.extend(decoder.decode(&packet));
    }

    assert_eq!(helpers::texts(&annotations), vec!["[0x1A] Set DAC: Turn OFF"]);
    assert_eq!(decoder.last_description(), "[0x1A] Set DAC: Turn OFF");
}

#[test]
fn test_config_from_json() {
    let config: DecoderConfig =
        serde_json::from_str(r#"{"wrong_direction":"flip_automatically"}"#).unwrap();
    let mut decoder = Decoder::new(config);

    let stream = helpers::uart_packets(Direction::Tx, &encode_frame(0x0A, false, 0, 0), 0);
    assert_eq!(
        helpers::texts(&decoder.decode_all(&stream)),
        vec!["[0x0A] Set Sleep"]
    );
}

#[test]
fn test_annotation_serializes() {
    let mut decoder = Decoder::new(DecoderConfig::report());
    let stream = helpers::uart_packets(Direction::Rx, &encode_frame(0x04, false, 0, 0), 0);
    let annotations = decoder.decode_all(&stream);

    let json = serde_json::to_value(&annotations[0]).unwrap();
    assert_eq!(json["class"], "Rx");
    assert_eq!(json["texts"][0], "[0x04] Increase volume");
}

// ============================================================================
// Property-Based Tests
// ============================================================================

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn direction() -> impl Strategy<Value = Direction> {
        prop_oneof![Just(Direction::Rx), Just(Direction::Tx)]
    }

    fn config() -> impl Strategy<Value = DecoderConfig> {
        prop_oneof![
            Just(DecoderConfig::report()),
            Just(DecoderConfig::flip_automatically())
        ]
    }

    proptest! {
        #[test]
        fn noise_never_panics(
            config in config(),
            bytes in proptest::collection::vec((direction(), any::<u8>()), 0..512)
        ) {
            let mut decoder = Decoder::new(config);
            let stream: Vec<UartPacket> = bytes
                .iter()
                .enumerate()
                .map(|(i, &(dir, b))| UartPacket::data(dir, b, i as u64, i as u64 + 1))
                .collect();

            let annotations = decoder.decode_all(&stream);
            // At most one annotation per ten data bytes
            prop_assert!(annotations.len() <= bytes.len() / FRAME_LEN);
            for ann in &annotations {
                prop_assert!(ann.start <= ann.end);
                prop_assert!(ann.text().starts_with("[0x"));
            }
        }

        #[test]
        fn annotations_follow_frame_order(
            directions in proptest::collection::vec(direction(), 1..20)
        ) {
            // Module ACK is TX-only, so RX frames come out as wrong-direction warnings
            let mut decoder = Decoder::new(DecoderConfig::report());
            let mut stream = Vec::new();
            for (i, &dir) in directions.iter().enumerate() {
                let frame = encode_frame(0x41, false, 0, 0);
                stream.extend(helpers::uart_packets(dir, &frame, i as u64 * 2_000));
            }

            let annotations = decoder.decode_all(&stream);
            prop_assert_eq!(annotations.len(), directions.len());
            for (ann, &dir) in annotations.iter().zip(directions.iter()) {
                prop_assert_eq!(ann.class, dir);
                prop_assert_eq!(ann.text().contains("WRONG"), dir == Direction::Rx);
            }
            prop_assert!(annotations.windows(2).all(|w| w[0].start < w[1].start));
        }
    }
}
