//! SeekFlags bitfield for seek requests

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use super::flags::seek;

/// Flags attached to a seek request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct SeekFlags(pub u32);

impl SeekFlags {
    pub const NONE: SeekFlags = SeekFlags(seek::NONE);
    /// Flush the pipeline before seeking
    pub const FLUSH: SeekFlags = SeekFlags(seek::FLUSH);
    /// Seek to the exact position, possibly slower
    pub const ACCURATE: SeekFlags = SeekFlags(seek::ACCURATE);
    /// Seek to the nearest keyframe
    pub const KEY_UNIT: SeekFlags = SeekFlags(seek::KEY_UNIT);
    /// Perform a segment seek
    pub const SEGMENT: SeekFlags = SeekFlags(seek::SEGMENT);
    /// Allow skipping frames for trick modes
    pub const SKIP: SeekFlags = SeekFlags(seek::SKIP);

    const NAMED: [(SeekFlags, &'static str); 5] = [
        (Self::FLUSH, "flush"),
        (Self::ACCURATE, "accurate"),
        (Self::KEY_UNIT, "key-unit"),
        (Self::SEGMENT, "segment"),
        (Self::SKIP, "skip"),
    ];

    /// Create SeekFlags from a raw u32 value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Check if every bit of `other` is set.
    pub fn contains(&self, other: SeekFlags) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check if any bit of a raw mask is set.
    pub fn has_flag(&self, flag: u32) -> bool {
        (self.0 & flag) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Get the raw u32 value.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Parse a `+`-separated list of flag names, e.g. `flush+key-unit`.
    ///
    /// Bits without a name are written and accepted as hex, e.g. `flush+0x40`.
    pub fn from_nicks(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() || text == "none" {
            return Some(Self::NONE);
        }
        text.split('+').try_fold(Self::NONE, |acc, nick| {
            let nick = nick.trim();
            if let Some(hex) = nick.strip_prefix("0x").or_else(|| nick.strip_prefix("0X")) {
                return u32::from_str_radix(hex, 16).ok().map(|bits| acc | SeekFlags(bits));
            }
            Self::NAMED.iter().find(|(_, name)| *name == nick).map(|(flag, _)| acc | *flag)
        })
    }
}

impl BitOr for SeekFlags {
    type Output = SeekFlags;

    fn bitor(self, rhs: SeekFlags) -> SeekFlags {
        SeekFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for SeekFlags {
    fn bitor_assign(&mut self, rhs: SeekFlags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for SeekFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (flag, name) in Self::NAMED.iter() {
            if self.contains(*flag) {
                if !first {
                    f.write_str("+")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        let unknown = self.0 & !seek::ALL;
        if unknown != 0 {
            if !first {
                f.write_str("+")?;
            }
            write!(f, "{:#x}", unknown)?;
        }
        Ok(())
    }
}
