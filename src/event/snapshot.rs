//! Plain serializable copies of events for diagnostics and fixtures.
//!
//! ```rust
//! use pipevent::{ClockTime, EventSnapshot, LatencyEvent};
//!
//! let event = LatencyEvent::create(ClockTime::from_mseconds(10));
//! let yaml = event.snapshot().to_yaml().unwrap();
//! let rebuilt = EventSnapshot::from_yaml(&yaml).unwrap().into_event();
//! assert_eq!(rebuilt.structure(), event.structure());
//! ```

use serde::{Deserialize, Serialize};

use super::{Event, EventRef};
use crate::object::Object;
use crate::structure::Structure;
use crate::types::{ClockTime, EventType};
use crate::Result;

/// Serializable view of an event at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSnapshot {
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// `None` when the fixture does not pin a sequence number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seqnum: Option<u32>,
    #[serde(default)]
    pub timestamp: ClockTime,
    /// Name of the originating object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<Structure>,
}

impl EventSnapshot {
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Load a YAML sequence of snapshots, e.g. a recorded event trace.
    pub fn list_from_yaml(yaml: &str) -> Result<Vec<Self>> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Rebuild a live event. A missing sequence number gets a fresh one and
    /// the source becomes a new [`Object`] with the recorded name.
    pub fn into_event(self) -> EventRef {
        let seqnum = self.seqnum.unwrap_or_else(crate::types::next_seqnum);
        Event::from_parts(
            self.event_type,
            self.timestamp,
            seqnum,
            self.source.map(Object::new),
            self.structure,
        )
    }
}

impl Event {
    /// Capture the current state of the event.
    pub fn snapshot(&self) -> EventSnapshot {
        EventSnapshot {
            event_type: self.event_type,
            seqnum: Some(self.sequence_number()),
            timestamp: self.timestamp,
            source: self.source().map(|source| source.name().to_string()),
            structure: self.structure.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventSubtype, SeekEvent, SinkMessageEvent};
    use crate::message::{Message, MessageType};
    use crate::types::{Format, SeekFlags, SeekType};
    use crate::EventError;

    #[test]
    fn snapshot_captures_event_state() {
        let seek = SeekEvent::create(1.0, Format::Time, SeekFlags::FLUSH, SeekType::Set, 0, SeekType::None, -1)
            .unwrap();
        seek.attach_source(Some(Object::new("playbin")));
        seek.set_sequence_number(99);

        let snapshot = seek.snapshot();
        assert_eq!(snapshot.event_type, EventType::Seek);
        assert_eq!(snapshot.seqnum, Some(99));
        assert_eq!(snapshot.source.as_deref(), Some("playbin"));

        let rebuilt = EventSnapshot::from_yaml(&snapshot.to_yaml().unwrap()).unwrap().into_event();
        assert_eq!(rebuilt.sequence_number(), 99);
        assert_eq!(rebuilt.timestamp(), seek.timestamp());
        assert_eq!(rebuilt.structure(), seek.structure());
        assert_eq!(rebuilt.source().unwrap().name(), "playbin");
        assert!(rebuilt.is::<SeekEvent>());
    }

    #[test]
    fn loads_fixture_lists() {
        let yaml = r#"
- type: flush-start
- type: flush-stop
  seqnum: 12
- type: custom-downstream
  structure:
    name: marker
    fields:
      - name: id
        value: { type: int, value: 7 }
"#;
        let snapshots = EventSnapshot::list_from_yaml(yaml).unwrap();
        assert_eq!(snapshots.len(), 3);
        assert_eq!(snapshots[0].timestamp, ClockTime::NONE);
        assert_eq!(snapshots[0].seqnum, None);
        assert_eq!(snapshots[1].seqnum, Some(12));

        let events: Vec<EventRef> = snapshots.into_iter().map(EventSnapshot::into_event).collect();
        assert_ne!(events[0].sequence_number(), 0);
        assert_eq!(events[1].sequence_number(), 12);
        assert_eq!(events[2].structure().unwrap().get::<i32>("id").unwrap(), 7);
    }

    #[test]
    fn explicit_zero_seqnum_survives_a_round_trip() {
        let event = Event::create(EventType::Eos, None);
        event.set_sequence_number(0);

        let yaml = event.snapshot().to_yaml().unwrap();
        assert!(yaml.contains("seqnum: 0"));
        let rebuilt = EventSnapshot::from_yaml(&yaml).unwrap().into_event();
        assert_eq!(rebuilt.sequence_number(), 0);

        let fixture = EventSnapshot::from_yaml("type: eos\nseqnum: 0\n").unwrap();
        assert_eq!(fixture.into_event().sequence_number(), 0);
    }

    #[test]
    fn messages_cannot_be_snapshotted() {
        let event = SinkMessageEvent::create(Message::new(MessageType::Eos, None, None));
        let result = event.as_event_ref().snapshot().to_yaml();
        assert!(matches!(result, Err(EventError::Snapshot { .. })));
    }

    #[test]
    fn unknown_type_names_are_rejected() {
        let result = EventSnapshot::from_yaml("type: teleport\n");
        assert!(matches!(result, Err(EventError::Snapshot { .. })));
    }
}
