//! Pipeline clock time in nanoseconds

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

/// Signed difference between two clock times, in nanoseconds.
pub type ClockTimeDiff = i64;

/// Absolute or relative time in nanoseconds.
///
/// [`ClockTime::NONE`] marks an unset or unknown time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct ClockTime(pub u64);

impl ClockTime {
    pub const NONE: ClockTime = ClockTime(u64::MAX);
    pub const ZERO: ClockTime = ClockTime(0);

    pub const SECOND: u64 = 1_000_000_000;
    pub const MSECOND: u64 = 1_000_000;
    pub const USECOND: u64 = 1_000;

    pub const fn from_nseconds(ns: u64) -> Self {
        ClockTime(ns)
    }

    /// Saturates just below [`ClockTime::NONE`].
    pub const fn from_seconds(s: u64) -> Self {
        Self::saturated(s.saturating_mul(Self::SECOND))
    }

    /// Saturates just below [`ClockTime::NONE`].
    pub const fn from_mseconds(ms: u64) -> Self {
        Self::saturated(ms.saturating_mul(Self::MSECOND))
    }

    const fn saturated(ns: u64) -> Self {
        if ns == u64::MAX { ClockTime(u64::MAX - 1) } else { ClockTime(ns) }
    }

    pub const fn nseconds(self) -> u64 {
        self.0
    }

    /// False for [`ClockTime::NONE`].
    pub const fn is_valid(self) -> bool {
        self.0 != u64::MAX
    }

    /// Convert a [`Duration`], saturating just below [`ClockTime::NONE`].
    pub fn from_duration(duration: Duration) -> Self {
        let ns = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX - 1);
        ClockTime(ns.min(u64::MAX - 1))
    }

    /// `None` for an invalid time.
    pub fn as_duration(self) -> Option<Duration> {
        self.is_valid().then(|| Duration::from_nanos(self.0))
    }

    /// Monotonic time elapsed since the first call in this process.
    pub fn monotonic_now() -> Self {
        static EPOCH: OnceLock<Instant> = OnceLock::new();
        let epoch = EPOCH.get_or_init(Instant::now);
        Self::from_duration(epoch.elapsed())
    }
}

impl Default for ClockTime {
    fn default() -> Self {
        ClockTime::NONE
    }
}

impl From<Duration> for ClockTime {
    fn from(duration: Duration) -> Self {
        ClockTime::from_duration(duration)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return f.write_str("99:99:99.999999999");
        }
        let ns = self.0;
        let hours = ns / (3600 * Self::SECOND);
        let minutes = (ns / (60 * Self::SECOND)) % 60;
        let seconds = (ns / Self::SECOND) % 60;
        write!(f, "{}:{:02}:{:02}.{:09}", hours, minutes, seconds, ns % Self::SECOND)
    }
}
