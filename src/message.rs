//! Bus messages, carried by sink-message events

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::object::ObjectRef;
use crate::structure::Structure;
use crate::types::{ClockTime, next_seqnum};

/// Shared handle to a [`Message`].
pub type MessageRef = Arc<Message>;

/// Kind of bus message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    Unknown,
    Eos,
    Error,
    Warning,
    Info,
    Tag,
    Buffering,
    StateChanged,
    Element,
    Latency,
    AsyncDone,
    Application,
}

impl MessageType {
    pub const fn name(self) -> &'static str {
        match self {
            MessageType::Unknown => "unknown",
            MessageType::Eos => "eos",
            MessageType::Error => "error",
            MessageType::Warning => "warning",
            MessageType::Info => "info",
            MessageType::Tag => "tag",
            MessageType::Buffering => "buffering",
            MessageType::StateChanged => "state-changed",
            MessageType::Element => "element",
            MessageType::Latency => "latency",
            MessageType::AsyncDone => "async-done",
            MessageType::Application => "application",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable bus message.
#[derive(Debug, PartialEq)]
pub struct Message {
    message_type: MessageType,
    source: Option<ObjectRef>,
    structure: Option<Structure>,
    timestamp: ClockTime,
    seqnum: u32,
}

impl Message {
    pub fn new(
        message_type: MessageType,
        source: Option<ObjectRef>,
        structure: Option<Structure>,
    ) -> MessageRef {
        Arc::new(Self {
            message_type,
            source,
            structure,
            timestamp: ClockTime::monotonic_now(),
            seqnum: next_seqnum(),
        })
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    pub fn source(&self) -> Option<&ObjectRef> {
        self.source.as_ref()
    }

    pub fn structure(&self) -> Option<&Structure> {
        self.structure.as_ref()
    }

    pub fn timestamp(&self) -> ClockTime {
        self.timestamp
    }

    pub fn sequence_number(&self) -> u32 {
        self.seqnum
    }
}
