//! Core fixture types: sample widths, hex records and scenarios

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bit width of the samples stored in a fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SampleWidth {
    Bits8,
    Bits16,
}

impl SampleWidth {
    /// Number of hex digits used to print one value
    pub fn hex_digits(self) -> usize {
        match self {
            SampleWidth::Bits8 => 2,
            SampleWidth::Bits16 => 4,
        }
    }

    pub fn from_hex_digits(digits: usize) -> Option<Self> {
        match digits {
            2 => Some(SampleWidth::Bits8),
            4 => Some(SampleWidth::Bits16),
            _ => None,
        }
    }
}

/// A single `@index value` line
///
/// Signed samples are stored as their unsigned bit pattern, so an `i16` of
/// `-1` is held (and printed) as `ffff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexRecord {
    pub index: u32,
    pub value: u16,
    pub width: SampleWidth,
}

/// Index field is always printed with four hex digits
pub const INDEX_HEX_DIGITS: usize = 4;

impl HexRecord {
    pub fn from_u8(index: u32, value: u8) -> Self {
        Self {
            index,
            value: value as u16,
            width: SampleWidth::Bits8,
        }
    }

    pub fn from_i16(index: u32, value: i16) -> Self {
        Self {
            index,
            value: value as u16,
            width: SampleWidth::Bits16,
        }
    }

    /// The stored value reinterpreted as a signed 16-bit sample
    pub fn as_i16(&self) -> i16 {
        self.value as i16
    }

    /// Parse a line of the form `@0a1f 7f`
    ///
    /// The value width is inferred from the number of digits in the value.
    pub fn parse(line: &str) -> Result<Self, String> {
        let rest = line
            .strip_prefix('@')
            .ok_or_else(|| format!("record must start with '@': {:?}", line))?;

        let mut parts = rest.split(' ');
        let (index_str, value_str) = match (parts.next(), parts.next(), parts.next()) {
            (Some(i), Some(v), None) => (i, v),
            _ => return Err(format!("expected '@<index> <value>': {:?}", line)),
        };

        if index_str.len() < INDEX_HEX_DIGITS {
            return Err(format!("index must have at least 4 digits: {:?}", index_str));
        }
        if !is_lower_hex(index_str) {
            return Err(format!("index is not lower-case hex: {:?}", index_str));
        }
        let index = u32::from_str_radix(index_str, 16)
            .map_err(|e| format!("invalid index {:?}: {}", index_str, e))?;

        let width = SampleWidth::from_hex_digits(value_str.len())
            .ok_or_else(|| format!("value must have 2 or 4 digits: {:?}", value_str))?;
        if !is_lower_hex(value_str) {
            return Err(format!("value is not lower-case hex: {:?}", value_str));
        }
        let value = u16::from_str_radix(value_str, 16)
            .map_err(|e| format!("invalid value {:?}: {}", value_str, e))?;

        Ok(Self {
            index,
            value,
            width,
        })
    }
}

fn is_lower_hex(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

impl fmt::Display for HexRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "@{:0iw$x} {:0vw$x}",
            self.index,
            self.value,
            iw = INDEX_HEX_DIGITS,
            vw = self.width.hex_digits()
        )
    }
}

/// Sensor family a fixture belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    Vision,
    Audio,
    Motion,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Vision, Domain::Audio, Domain::Motion];

    /// Subdirectory under the output root
    pub fn dir_name(self) -> &'static str {
        match self {
            Domain::Vision => "vision",
            Domain::Audio => "audio",
            Domain::Motion => "motion",
        }
    }
}

/// One generated test scenario, mapped to exactly one fixture file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    NormalScene,
    ThreatScene,
    NormalAudio,
    AlarmAudio,
    NormalMotion,
    FallMotion,
}

impl Scenario {
    pub const ALL: [Scenario; 6] = [
        Scenario::NormalScene,
        Scenario::ThreatScene,
        Scenario::NormalAudio,
        Scenario::AlarmAudio,
        Scenario::NormalMotion,
        Scenario::FallMotion,
    ];

    pub fn domain(self) -> Domain {
        match self {
            Scenario::NormalScene | Scenario::ThreatScene => Domain::Vision,
            Scenario::NormalAudio | Scenario::AlarmAudio => Domain::Audio,
            Scenario::NormalMotion | Scenario::FallMotion => Domain::Motion,
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Scenario::NormalScene => "normal_scene.hex",
            Scenario::ThreatScene => "threat_scene.hex",
            Scenario::NormalAudio => "normal_audio.hex",
            Scenario::AlarmAudio => "alarm_audio.hex",
            Scenario::NormalMotion => "normal_motion.hex",
            Scenario::FallMotion => "fall_motion.hex",
        }
    }

    /// Free-text header written as the first line of the file
    pub fn comment(self) -> &'static str {
        match self {
            Scenario::NormalScene => "// Normal scene test data",
            Scenario::ThreatScene => "// Threat scene test data",
            Scenario::NormalAudio => "// Normal audio test data",
            Scenario::AlarmAudio => "// Alarm audio test data",
            Scenario::NormalMotion => "// Normal motion test data",
            Scenario::FallMotion => "// Fall motion test data",
        }
    }

    /// Sample width every record of this scenario uses
    pub fn sample_width(self) -> SampleWidth {
        match self.domain() {
            Domain::Vision => SampleWidth::Bits8,
            Domain::Audio | Domain::Motion => SampleWidth::Bits16,
        }
    }
}

/// A scenario together with its serialized records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub scenario: Scenario,
    pub records: Vec<HexRecord>,
}

impl Fixture {
    pub fn new(scenario: Scenario, records: Vec<HexRecord>) -> Self {
        Self { scenario, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
