//! Core value types carried by pipeline events.
//!
//! ## Overview
//!
//! - [`EventType`] is the tag that identifies an event kind, packed with its
//!   direction flags exactly like the native library's enum
//! - [`Format`] and [`SeekType`] describe the units and anchoring of positions
//! - [`SeekFlags`] is the bitfield attached to seek requests
//! - [`ClockTime`] is a nanosecond time with an explicit "none" value
//!
//! ## Usage Example
//!
//! ```rust
//! use pipevent::types::{ClockTime, EventType, SeekFlags};
//!
//! assert!(EventType::Seek.is_upstream());
//! assert!(EventType::Eos.is_serialized());
//! assert_eq!(EventType::from_raw(EventType::Qos.raw()), Some(EventType::Qos));
//!
//! let flags = SeekFlags::FLUSH | SeekFlags::KEY_UNIT;
//! assert!(flags.contains(SeekFlags::FLUSH));
//! assert_eq!(flags.to_string(), "flush+key-unit");
//!
//! assert_eq!(ClockTime::from_seconds(61).to_string(), "0:01:01.000000000");
//! ```

mod clock_time;
mod event_type;
pub mod flags;
mod format;
mod seek_flags;
mod seqnum;

// Re-export all public types
pub use clock_time::{ClockTime, ClockTimeDiff};
pub use event_type::EventType;
pub use format::{Format, SeekType};
pub use seek_flags::SeekFlags;
pub use seqnum::next_seqnum;
