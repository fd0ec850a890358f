//! Decoder configuration

use dfplayer_protocol::WrongDirectionPolicy;
use serde::{Deserialize, Serialize};

/// Decoder options
///
/// No `Default`: the host must pick the wrong-direction policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Handling of frames whose direction does not fit their command
    pub wrong_direction: WrongDirectionPolicy,
}

impl DecoderConfig {
    /// Create a configuration with the given wrong-direction policy
    pub fn new(wrong_direction: WrongDirectionPolicy) -> Self {
        Self { wrong_direction }
    }

    /// Report mislabeled frames in the annotation text
    pub fn report() -> Self {
        Self::new(WrongDirectionPolicy::Report)
    }

    /// Decode mislabeled frames as the other direction
    pub fn flip_automatically() -> Self {
        Self::new(WrongDirectionPolicy::FlipAutomatically)
    }
}
