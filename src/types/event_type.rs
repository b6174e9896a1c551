//! Event type tags

use serde::{Deserialize, Serialize};
use std::fmt;

use super::flags::event_type::{self as etf, make};

/// Discriminator identifying which kind of event an instance represents.
///
/// Each tag packs an event number together with direction flags. Use
/// [`EventType::raw`] to obtain the packed value expected by the native library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum EventType {
    #[serde(rename = "unknown")]
    Unknown,
    /// Start a flush operation; travels both ways, out of band
    #[serde(rename = "flush-start")]
    FlushStart,
    /// Stop a flush operation
    #[serde(rename = "flush-stop")]
    FlushStop,
    /// End of stream
    #[serde(rename = "eos")]
    Eos,
    /// Announce a new playback segment
    #[serde(rename = "newsegment")]
    NewSegment,
    /// Stream metadata
    #[serde(rename = "tag")]
    Tag,
    /// Buffering requirements
    #[serde(rename = "buffersize")]
    BufferSize,
    /// Carries a message a sink should post when the event reaches it
    #[serde(rename = "sink-message")]
    SinkMessage,
    /// Quality-of-service feedback
    #[serde(rename = "qos")]
    Qos,
    #[serde(rename = "seek")]
    Seek,
    /// User interaction (key presses, pointer motion)
    #[serde(rename = "navigation")]
    Navigation,
    /// Configure the pipeline latency
    #[serde(rename = "latency")]
    Latency,
    /// Step a number of units in the stream
    #[serde(rename = "step")]
    Step,
    #[serde(rename = "custom-upstream")]
    CustomUpstream,
    #[serde(rename = "custom-downstream")]
    CustomDownstream,
    #[serde(rename = "custom-downstream-oob")]
    CustomDownstreamOob,
    #[serde(rename = "custom-both")]
    CustomBoth,
    #[serde(rename = "custom-both-oob")]
    CustomBothOob,
}

impl EventType {
    pub const ALL: [EventType; 18] = [
        EventType::Unknown,
        EventType::FlushStart,
        EventType::FlushStop,
        EventType::Eos,
        EventType::NewSegment,
        EventType::Tag,
        EventType::BufferSize,
        EventType::SinkMessage,
        EventType::Qos,
        EventType::Seek,
        EventType::Navigation,
        EventType::Latency,
        EventType::Step,
        EventType::CustomUpstream,
        EventType::CustomDownstream,
        EventType::CustomDownstreamOob,
        EventType::CustomBoth,
        EventType::CustomBothOob,
    ];

    /// Packed native value: event number shifted above the direction flags.
    pub const fn raw(self) -> u32 {
        match self {
            EventType::Unknown => make(0, 0),
            EventType::FlushStart => make(1, etf::BOTH),
            EventType::FlushStop => make(2, etf::BOTH | etf::SERIALIZED),
            EventType::Eos => make(5, etf::DOWNSTREAM | etf::SERIALIZED),
            EventType::NewSegment => make(6, etf::DOWNSTREAM | etf::SERIALIZED),
            EventType::Tag => make(7, etf::DOWNSTREAM | etf::SERIALIZED),
            EventType::BufferSize => make(8, etf::DOWNSTREAM | etf::SERIALIZED),
            EventType::SinkMessage => make(9, etf::DOWNSTREAM | etf::SERIALIZED),
            EventType::Qos => make(15, etf::UPSTREAM),
            EventType::Seek => make(16, etf::UPSTREAM),
            EventType::Navigation => make(17, etf::UPSTREAM),
            EventType::Latency => make(18, etf::UPSTREAM),
            EventType::Step => make(19, etf::UPSTREAM),
            EventType::CustomUpstream => make(32, etf::UPSTREAM),
            EventType::CustomDownstream => make(32, etf::DOWNSTREAM | etf::SERIALIZED),
            EventType::CustomDownstreamOob => make(32, etf::DOWNSTREAM),
            EventType::CustomBoth => make(32, etf::BOTH | etf::SERIALIZED),
            EventType::CustomBothOob => make(32, etf::BOTH),
        }
    }

    /// Map a packed native value back to its tag. Unknown values yield `None`.
    pub fn from_raw(raw: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.raw() == raw)
    }

    /// Human-readable tag name.
    pub const fn name(self) -> &'static str {
        match self {
            EventType::Unknown => "unknown",
            EventType::FlushStart => "flush-start",
            EventType::FlushStop => "flush-stop",
            EventType::Eos => "eos",
            EventType::NewSegment => "newsegment",
            EventType::Tag => "tag",
            EventType::BufferSize => "buffersize",
            EventType::SinkMessage => "sink-message",
            EventType::Qos => "qos",
            EventType::Seek => "seek",
            EventType::Navigation => "navigation",
            EventType::Latency => "latency",
            EventType::Step => "step",
            EventType::CustomUpstream => "custom-upstream",
            EventType::CustomDownstream => "custom-downstream",
            EventType::CustomDownstreamOob => "custom-downstream-oob",
            EventType::CustomBoth => "custom-both",
            EventType::CustomBothOob => "custom-both-oob",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Event number without the direction flags.
    pub const fn number(self) -> u32 {
        self.raw() >> etf::SHIFT
    }

    pub const fn is_upstream(self) -> bool {
        self.raw() & etf::UPSTREAM != 0
    }

    pub const fn is_downstream(self) -> bool {
        self.raw() & etf::DOWNSTREAM != 0
    }

    /// Serialized events stay ordered with the data flow.
    pub const fn is_serialized(self) -> bool {
        self.raw() & etf::SERIALIZED != 0
    }

    pub const fn is_custom(self) -> bool {
        matches!(
            self,
            EventType::CustomUpstream
                | EventType::CustomDownstream
                | EventType::CustomDownstreamOob
                | EventType::CustomBoth
                | EventType::CustomBothOob
        )
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
