//! Command interpretation
//!
//! Turns a frame's command code and parameter bytes into a description such
//! as `[0x03] Playback track 5 in root folder`.
//!
//! Capture setups often swap the RX and TX channels, so the interpreter also
//! checks that the command makes sense in the direction it was tagged with.
//! A mismatch is either reported in the annotation or silently corrected,
//! depending on the [`WrongDirectionPolicy`].

use std::str::FromStr;

use crate::error::{DecodeError, Param, ParseError};
use crate::table::{lookup, CommandEntry, Descriptor, LabelMap, Rule};
use crate::Direction;

/// What to do with a frame whose direction does not fit its command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WrongDirectionPolicy {
    /// Annotate the frame with a wrong-direction warning
    Report,
    /// Interpret the frame as if it came from the other direction
    FlipAutomatically,
}

impl WrongDirectionPolicy {
    /// Returns a human-readable name, as offered in option lists
    pub fn name(&self) -> &'static str {
        match self {
            WrongDirectionPolicy::Report => "Show warning",
            WrongDirectionPolicy::FlipAutomatically => "Flip automatically",
        }
    }
}

impl FromStr for WrongDirectionPolicy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "report" | "show warning" => Ok(WrongDirectionPolicy::Report),
            "flip_automatically" | "flip automatically" | "flip" => {
                Ok(WrongDirectionPolicy::FlipAutomatically)
            }
            _ => Err(ParseError::InvalidPolicy(s.to_string())),
        }
    }
}

/// Format a command code the way annotations show it (`0x03`, `0x1A`)
pub fn format_code(code: u8) -> String {
    format!("0x{:02X}", code)
}

/// Maps command frames to human-readable descriptions
#[derive(Debug, Clone)]
pub struct Interpreter {
    policy: WrongDirectionPolicy,
}

impl Interpreter {
    /// Create an interpreter with the given wrong-direction policy
    pub fn new(policy: WrongDirectionPolicy) -> Self {
        Self { policy }
    }

    /// The configured wrong-direction policy
    pub fn policy(&self) -> WrongDirectionPolicy {
        self.policy
    }

    /// Describe a command frame
    ///
    /// Wrong-direction and unrecognized-value errors carry their own
    /// annotation text (see [`DecodeError::annotation_text`]).
    pub fn interpret(
        &self,
        direction: Direction,
        code: u8,
        param1: u8,
        param2: u8,
    ) -> Result<String, DecodeError> {
        let entry = lookup(code).ok_or(DecodeError::UnknownCommand(code))?;
        let (effective, descriptor) =
            resolve_direction(entry, direction, param1, param2, self.policy)?;
        if effective != direction {
            tracing::debug!(
                "[{}] tagged {} but decoded as {}",
                format_code(code),
                direction,
                effective
            );
        }

        let message = render(code, effective, descriptor, param1, param2)?;
        Ok(format!("[{}] {}", format_code(code), message))
    }

    /// Like [`Interpreter::interpret`], flattened to the annotation text
    ///
    /// Unknown commands yield an empty string.
    pub fn describe(&self, direction: Direction, code: u8, param1: u8, param2: u8) -> String {
        match self.interpret(direction, code, param1, param2) {
            Ok(text) => text,
            Err(err) => err.annotation_text().unwrap_or_default(),
        }
    }
}

/// Pick the direction a frame should be decoded as, with its descriptor
///
/// A frame is suspect when its command has no meaning in the tagged
/// direction, or when a TX frame of a parameterless message carries nonzero
/// parameters. Only the tagged direction is checked; the flipped one is
/// accepted as long as the command exists there.
pub fn resolve_direction<'a>(
    entry: &'a CommandEntry,
    direction: Direction,
    param1: u8,
    param2: u8,
    policy: WrongDirectionPolicy,
) -> Result<(Direction, &'a Descriptor), DecodeError> {
    let descriptor = entry.descriptor(direction);
    let suspect = match descriptor {
        Descriptor::Absent => true,
        Descriptor::Fixed(_) => direction == Direction::Tx && (param1 != 0 || param2 != 0),
        Descriptor::Formatted { .. } => false,
    };
    if !suspect {
        return Ok((direction, descriptor));
    }

    let flipped = direction.opposite();
    let flipped_descriptor = entry.descriptor(flipped);
    match policy {
        WrongDirectionPolicy::FlipAutomatically if flipped_descriptor.is_present() => {
            Ok((flipped, flipped_descriptor))
        }
        _ => Err(DecodeError::WrongDirection {
            code: entry.code,
            expected: flipped,
        }),
    }
}

fn render(
    code: u8,
    direction: Direction,
    descriptor: &Descriptor,
    param1: u8,
    param2: u8,
) -> Result<String, DecodeError> {
    let (template, rule) = match descriptor {
        Descriptor::Fixed(message) => return Ok(message.to_string()),
        Descriptor::Formatted { template, rule } => (*template, *rule),
        Descriptor::Absent => {
            return Err(DecodeError::WrongDirection {
                code,
                expected: direction.opposite(),
            })
        }
    };

    let label = |map: LabelMap, param: Param, value: u8| {
        map.iter()
            .find(|(key, _)| *key == value)
            .map(|(_, label)| *label)
            .ok_or(DecodeError::UnrecognizedValue { code, param, value })
    };

    let message = match rule {
        Rule::Lsb => fill(template, &[param2.to_string()]),
        Rule::Word => {
            let word = u16::from_be_bytes([param1, param2]);
            fill(template, &[word.to_string()])
        }
        Rule::MsbLsb => fill(template, &[param1.to_string(), param2.to_string()]),
        Rule::LsbMsb => fill(template, &[param2.to_string(), param1.to_string()]),
        Rule::LabelLsb(map) => fill(template, &[label(map, Param::Second, param2)?.to_string()]),
        Rule::LabelMsbLsb(first_map, second_map) => {
            let first = label(first_map, Param::First, param1)?;
            if first.is_empty() {
                template.to_string()
            } else {
                let second = label(second_map, Param::Second, param2)?;
                fill(template, &[format!("{} {}", first, second)])
            }
        }
    };

    Ok(message)
}

/// Replace `{}` placeholders left to right; extra arguments are dropped
fn fill(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len() + 8);
    let mut args = args.iter();
    let mut rest = template;

    while let Some(pos) = rest.find("{}") {
        let Some(arg) = args.next() else {
            break;
        };
        out.push_str(&rest[..pos]);
        out.push_str(arg);
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}
