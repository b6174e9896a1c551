//! Units for positions and seek anchoring

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit in which positions, durations and sizes are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Undefined,
    /// Element-defined default unit (samples for audio, frames for video)
    Default,
    Bytes,
    /// Nanoseconds
    Time,
    Buffers,
    /// Percentage scaled by [`Format::PERCENT_SCALE`]
    Percent,
}

impl Format {
    pub const PERCENT_MAX: i64 = 1_000_000;
    pub const PERCENT_SCALE: i64 = 10_000;

    const ALL: [Format; 6] = [
        Format::Undefined,
        Format::Default,
        Format::Bytes,
        Format::Time,
        Format::Buffers,
        Format::Percent,
    ];

    pub const fn raw(self) -> i32 {
        match self {
            Format::Undefined => 0,
            Format::Default => 1,
            Format::Bytes => 2,
            Format::Time => 3,
            Format::Buffers => 4,
            Format::Percent => 5,
        }
    }

    pub fn from_raw(raw: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.raw() == raw)
    }

    pub const fn nick(self) -> &'static str {
        match self {
            Format::Undefined => "undefined",
            Format::Default => "default",
            Format::Bytes => "bytes",
            Format::Time => "time",
            Format::Buffers => "buffers",
            Format::Percent => "percent",
        }
    }

    pub fn from_nick(nick: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.nick() == nick)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nick())
    }
}

/// How a seek position is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "lowercase")]
pub enum SeekType {
    /// Leave the position unchanged
    None,
    /// Relative to the current position
    Cur,
    /// Absolute position
    Set,
    /// Relative to the end of the stream
    End,
}

impl SeekType {
    const ALL: [SeekType; 4] = [SeekType::None, SeekType::Cur, SeekType::Set, SeekType::End];

    pub const fn raw(self) -> i32 {
        match self {
            SeekType::None => 0,
            SeekType::Cur => 1,
            SeekType::Set => 2,
            SeekType::End => 3,
        }
    }

    pub fn from_raw(raw: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.raw() == raw)
    }

    pub const fn nick(self) -> &'static str {
        match self {
            SeekType::None => "none",
            SeekType::Cur => "cur",
            SeekType::Set => "set",
            SeekType::End => "end",
        }
    }

    pub fn from_nick(nick: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.nick() == nick)
    }
}

impl fmt::Display for SeekType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nick())
    }
}
