//! DFPlayer command table
//!
//! Each command code maps to one descriptor per direction. Templates use `{}`
//! as placeholders; the [`Rule`] says which values fill them.

use crate::Direction;

/// Byte value to label lookup used by the label rules
pub type LabelMap = &'static [(u8, &'static str)];

/// How the parameter bytes are rendered into a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// param2 in decimal
    Lsb,
    /// param1 * 256 + param2
    Word,
    /// param1, then param2
    MsbLsb,
    /// param2, then param1
    LsbMsb,
    /// Label of param2
    LabelLsb(LabelMap),
    /// Label of param1 joined with the label of param2
    ///
    /// An empty param1 label leaves the template untouched.
    LabelMsbLsb(LabelMap, LabelMap),
}

/// What a command means in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descriptor {
    /// Command is not valid in this direction
    Absent,
    /// Message that carries no parameters
    Fixed(&'static str),
    /// Message rendered from the parameter bytes
    Formatted {
        /// Message template
        template: &'static str,
        /// Formatting rule
        rule: Rule,
    },
}

impl Descriptor {
    /// Whether the command exists in this direction
    pub fn is_present(&self) -> bool {
        !matches!(self, Descriptor::Absent)
    }
}

/// Table entry for one command code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEntry {
    /// Command code
    pub code: u8,
    /// Meaning as a command to the module
    pub rx: Descriptor,
    /// Meaning as a response or event from the module
    pub tx: Descriptor,
}

impl CommandEntry {
    /// Descriptor for the given direction
    pub fn descriptor(&self, direction: Direction) -> &Descriptor {
        match direction {
            Direction::Rx => &self.rx,
            Direction::Tx => &self.tx,
        }
    }
}

/// Look up a command code
pub fn lookup(code: u8) -> Option<&'static CommandEntry> {
    COMMANDS
        .binary_search_by_key(&code, |entry| entry.code)
        .ok()
        .map(|idx| &COMMANDS[idx])
}

/// All known command entries, sorted by code
pub fn commands() -> &'static [CommandEntry] {
    COMMANDS
}

// ============================================================================
// Label maps
// ============================================================================

const EQ_LABELS: LabelMap = &[
    (0, "Normal"),
    (1, "Pop"),
    (2, "Rock"),
    (3, "Jazz"),
    (4, "Classic"),
    (5, "Bass"),
];

const PLAYBACK_SOURCE_LABELS: LabelMap = &[(0, "USB Stick"), (2, "SD Card"), (4, "USB cable to PC")];

const DAC_LABELS: LabelMap = &[(0x00, "Turn ON"), (0x01, "Turn OFF")];

const STORAGE_LABELS: LabelMap = &[(1, "USB Stick"), (2, "SD Card"), (4, "USB cable to PC")];

const ONLINE_STORAGE_LABELS: LabelMap = &[
    (0x00, "None"),
    (0x01, "USB Stick"),
    (0x02, "SD Card"),
    (0x03, "USB Stick & SD Card"),
    (0x04, "PC"),
    (0x0F, "SD Card & USB Stick & PC"),
];

const ERROR_LABELS: LabelMap = &[
    (1, "Module Busy"),
    (2, "Currently sleep mode"),
    (3, "Serial rx error"),
    (4, "Checksum incorrect"),
    (5, "Track out of scope"),
    (6, "Specified track is not found"),
    (7, "Insertion error"),
    (8, "SD card reading failed"),
    (9, "Entered into sleep mode"),
];

const STATUS_DEVICE_LABELS: LabelMap = &[
    (0, ""),
    (1, "USB Stick"),
    (2, "SD Card"),
    (3, "Module in sleep mode"),
];

const STATUS_STATE_LABELS: LabelMap = &[(0, "Stopped"), (1, "Playing"), (2, "Paused")];

// ============================================================================
// Command table
// ============================================================================

const fn rx(code: u8, rx: Descriptor) -> CommandEntry {
    CommandEntry {
        code,
        rx,
        tx: Descriptor::Absent,
    }
}

const fn tx(code: u8, tx: Descriptor) -> CommandEntry {
    CommandEntry {
        code,
        rx: Descriptor::Absent,
        tx,
    }
}

const fn both(code: u8, rx: Descriptor, tx: Descriptor) -> CommandEntry {
    CommandEntry { code, rx, tx }
}

const fn fixed(message: &'static str) -> Descriptor {
    Descriptor::Fixed(message)
}

const fn fmt(template: &'static str, rule: Rule) -> Descriptor {
    Descriptor::Formatted { template, rule }
}

static COMMANDS: &[CommandEntry] = &[
    rx(0x01, fixed("Play Next track")),
    rx(0x02, fixed("Play Previous track")),
    rx(0x03, fmt("Playback track {} in root folder", Rule::Word)),
    rx(0x04, fixed("Increase volume")),
    rx(0x05, fixed("Decrease volume")),
    rx(0x06, fmt("Set volume to {}", Rule::Lsb)),
    rx(0x07, fmt("Set EQ to {}", Rule::LabelLsb(EQ_LABELS))),
    rx(0x08, fmt("Set Single REPEAT to track {}", Rule::Word)),
    rx(0x09, fmt("Specify {} to play", Rule::LabelLsb(PLAYBACK_SOURCE_LABELS))),
    rx(0x0A, fixed("Set Sleep")),
    rx(0x0C, fixed("Module Reset")),
    rx(0x0D, fixed("Play")),
    rx(0x0E, fixed("Pause")),
    rx(0x0F, fmt("Play track {} from folder {}", Rule::LsbMsb)),
    rx(0x10, fmt("Audio amplification setting to {}", Rule::Lsb)),
    rx(0x11, fmt("Set all repeat playback", Rule::Lsb)),
    rx(0x12, fmt("Play track {} from MP3 folder", Rule::Word)),
    rx(0x13, fmt("Play track {} from ADVERT folder", Rule::Word)),
    rx(0x15, fixed("Stop advertisement and go back to interrupted music")),
    rx(0x16, fixed("Stop")),
    rx(0x17, fmt("Set folder {} to REPEAT playback", Rule::Lsb)),
    rx(0x18, fixed("Set RANDOM playback")),
    rx(0x19, fixed("Set REPEAT playback of current track")),
    rx(0x1A, fmt("Set DAC: {}", Rule::LabelLsb(DAC_LABELS))),
    tx(0x3A, fmt("Storage {} is plugged in", Rule::LabelLsb(STORAGE_LABELS))),
    tx(0x3B, fmt("Storage {} is pulled out", Rule::LabelLsb(STORAGE_LABELS))),
    tx(0x3C, fmt("USB Stick play track {} finished", Rule::Word)),
    tx(0x3D, fmt("SD Card play track {} finished", Rule::Word)),
    tx(0x3E, fmt("USB cable to PC playing track {} finished", Rule::Word)),
    both(
        0x3F,
        fixed("Query current online storage"),
        fmt(
            "(PowerOn Report) Current online storage: {}",
            Rule::LabelLsb(ONLINE_STORAGE_LABELS),
        ),
    ),
    tx(0x40, fmt("Module returns error : {}", Rule::LabelLsb(ERROR_LABELS))),
    tx(0x41, fixed("Module ACK")),
    both(
        0x42,
        fixed("Query current status"),
        fmt(
            "Report current status: {}",
            Rule::LabelMsbLsb(STATUS_DEVICE_LABELS, STATUS_STATE_LABELS),
        ),
    ),
    both(
        0x43,
        fixed("Query current volume"),
        fmt("Current volume is {}", Rule::Lsb),
    ),
    both(
        0x44,
        fixed("Query current EQ"),
        fmt("Report current EQ: {}", Rule::LabelLsb(EQ_LABELS)),
    ),
    both(
        0x47,
        fixed("Query number of tracks in root of USB Stick"),
        fmt("There are {} tracks in root of USB Stick", Rule::Word),
    ),
    both(
        0x48,
        fixed("Query number of tracks in root of SD Card"),
        fmt("There are {} tracks in root of SD Card", Rule::Word),
    ),
    both(
        0x4B,
        fixed("Query current track in USB Stick"),
        fmt("Current playing track in USB Stick: {}", Rule::Word),
    ),
    both(
        0x4C,
        fixed("Query current track in SD Card"),
        fmt("Current playing track in SD Card: {}", Rule::Word),
    ),
    both(
        0x4E,
        fmt("Query number of tracks in folder {}", Rule::Lsb),
        fmt("There are {} tracks in folder", Rule::Lsb),
    ),
    both(
        0x4F,
        fixed("Query number of folders in current storage"),
        fmt("There are {} folders in current storage", Rule::Lsb),
    ),
];
