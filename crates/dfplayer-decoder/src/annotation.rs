//! Annotation records and decoder metadata handed to the host

use dfplayer_protocol::Direction;
use serde::{Deserialize, Serialize};

/// Annotation class declared to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnnotationClass {
    /// Short identifier
    pub id: &'static str,
    /// Human-readable description
    pub description: &'static str,
}

/// Annotation classes, indexed by [`Direction::index`]
pub const ANNOTATION_CLASSES: [AnnotationClass; 2] = [
    AnnotationClass {
        id: "rx",
        description: "RX Data",
    },
    AnnotationClass {
        id: "tx",
        description: "TX Data",
    },
];

/// Static registration data for the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecoderInfo {
    /// Unique decoder id
    pub id: &'static str,
    /// Short name
    pub name: &'static str,
    /// Long name
    pub longname: &'static str,
    /// One-line description
    pub desc: &'static str,
    /// License of the decoder
    pub license: &'static str,
    /// Required input streams
    pub inputs: &'static [&'static str],
    /// Produced output streams
    pub outputs: &'static [&'static str],
    /// Category tags
    pub tags: &'static [&'static str],
    /// Annotation classes
    pub annotations: &'static [AnnotationClass],
}

/// Registration data for the DFPlayer Mini decoder
pub const DECODER_INFO: DecoderInfo = DecoderInfo {
    id: "dfplayer_mini",
    name: "DFPlayerMini",
    longname: "DFPlayer Mini",
    desc: "Protocol decoder for DFPlayer Mini",
    license: "gplv2+",
    inputs: &["uart"],
    outputs: &[],
    tags: &["mp3/uart"],
    annotations: &ANNOTATION_CLASSES,
};

/// One decoded frame, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Start of the frame (sample number)
    pub start: u64,
    /// End of the frame (sample number)
    pub end: u64,
    /// Annotation class, one per direction
    pub class: Direction,
    /// Annotation texts, longest first
    pub texts: Vec<String>,
}

impl Annotation {
    /// Index into [`ANNOTATION_CLASSES`]
    pub fn class_index(&self) -> usize {
        self.class.index()
    }

    /// Primary annotation text
    pub fn text(&self) -> &str {
        self.texts.first().map(String::as_str).unwrap_or_default()
    }
}
