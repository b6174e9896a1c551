//! Test utilities shared by unit tests, integration tests and benchmarks
//!
//! Provides one representative event per typed view so property tests and
//! benches exercise the whole tag space without repeating constructor calls.

#![cfg(any(test, feature = "benchmark"))]

use crate::event::{
    BufferSizeEvent, EosEvent, EventRef, EventSubtype, FlushStartEvent, FlushStopEvent,
    LatencyEvent, NavigationEvent, NewSegmentEvent, QosEvent, SeekEvent, SinkMessageEvent,
    StepEvent, TagEvent,
};
use crate::message::{Message, MessageType};
use crate::structure::Structure;
use crate::types::{ClockTime, EventType, Format, SeekFlags, SeekType};

/// Build one valid event of the given type through its typed constructor.
///
/// Custom and unknown tags have no typed constructor and yield `None`.
pub fn sample_event(event_type: EventType) -> Option<EventRef> {
    let event = match event_type {
        EventType::FlushStart => FlushStartEvent::create().upcast(),
        EventType::FlushStop => FlushStopEvent::create().upcast(),
        EventType::Eos => EosEvent::create().upcast(),
        EventType::NewSegment => {
            NewSegmentEvent::create(false, 1.0, 1.0, Format::Time, 0, 10 * ClockTime::SECOND as i64, 0)
                .ok()?
                .upcast()
        }
        EventType::Tag => TagEvent::create(Structure::new("taglist").with("title", "Sample")).upcast(),
        EventType::BufferSize => BufferSizeEvent::create(Format::Bytes, 0, 65_536, false).upcast(),
        EventType::SinkMessage => {
            SinkMessageEvent::create(Message::new(MessageType::Application, None, None)).upcast()
        }
        EventType::Qos => QosEvent::create(0.9, 1_000, ClockTime::from_mseconds(500)).upcast(),
        EventType::Seek => SeekEvent::create(
            1.0,
            Format::Time,
            SeekFlags::FLUSH | SeekFlags::KEY_UNIT,
            SeekType::Set,
            0,
            SeekType::None,
            -1,
        )
        .ok()?
        .upcast(),
        EventType::Navigation => NavigationEvent::create(Some(
            Structure::new("application/x-gst-navigation").with("event", "mouse-move"),
        ))
        .upcast(),
        EventType::Latency => LatencyEvent::create(ClockTime::from_mseconds(20)).upcast(),
        EventType::Step => StepEvent::create(Format::Buffers, 1, 1.0, false, false).ok()?.upcast(),
        EventType::Unknown
        | EventType::CustomUpstream
        | EventType::CustomDownstream
        | EventType::CustomDownstreamOob
        | EventType::CustomBoth
        | EventType::CustomBothOob => return None,
    };
    Some(event)
}

/// One event per typed view, in tag order.
pub fn sample_events() -> Vec<EventRef> {
    EventType::ALL.into_iter().filter_map(sample_event).collect()
}
