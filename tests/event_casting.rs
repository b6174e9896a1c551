//! Downcast, copy and sequence-number properties across every event kind.

use pipevent::{
    BufferSizeEvent, ClockTime, EosEvent, Event, EventRef, EventSubtype, EventType,
    FlushStartEvent, FlushStopEvent, Format, LatencyEvent, NavigationEvent, NewSegmentEvent,
    QosEvent, SeekEvent, SeekFlags, SeekType, SinkMessageEvent, StepEvent, Structure, TagEvent,
};
use proptest::prelude::*;

const TYPED_TAGS: [EventType; 12] = [
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
];

/// Attempt the downcast to the view whose fixed tag is `view`.
fn downcast_to(event: &EventRef, view: EventType) -> Option<EventType> {
    fn check<V: EventSubtype>(event: &EventRef) -> Option<EventType> {
        event.downcast::<V>().map(|typed| typed.event_type())
    }

    match view {
        EventType::FlushStart => check::<FlushStartEvent>(event),
        EventType::FlushStop => check::<FlushStopEvent>(event),
        EventType::Eos => check::<EosEvent>(event),
        EventType::NewSegment => check::<NewSegmentEvent>(event),
        EventType::Tag => check::<TagEvent>(event),
        EventType::BufferSize => check::<BufferSizeEvent>(event),
        EventType::SinkMessage => check::<SinkMessageEvent>(event),
        EventType::Qos => check::<QosEvent>(event),
        EventType::Seek => check::<SeekEvent>(event),
        EventType::Navigation => check::<NavigationEvent>(event),
        EventType::Latency => check::<LatencyEvent>(event),
        EventType::Step => check::<StepEvent>(event),
        other => panic!("{} has no typed view", other),
    }
}

fn arb_format() -> impl Strategy<Value = Format> {
    prop::sample::select(vec![
        Format::Undefined,
        Format::Default,
        Format::Bytes,
        Format::Time,
        Format::Buffers,
        Format::Percent,
    ])
}

fn arb_seek_type() -> impl Strategy<Value = SeekType> {
    prop::sample::select(vec![SeekType::None, SeekType::Cur, SeekType::Set, SeekType::End])
}

proptest! {
    #[test]
    fn generic_events_downcast_only_to_their_own_view(
        created in prop::sample::select(EventType::ALL.to_vec()),
        view in prop::sample::select(TYPED_TAGS.to_vec()),
    ) {
        let event = Event::create(created, None);
        let result = downcast_to(&event, view);
        if created == view {
            prop_assert_eq!(result, Some(view));
        } else {
            prop_assert_eq!(result, None);
        }
    }

    #[test]
    fn sequence_number_setter_round_trips(seqnum in any::<u32>()) {
        let event = Event::create(EventType::CustomUpstream, None);
        event.set_sequence_number(seqnum);
        prop_assert_eq!(event.sequence_number(), seqnum);
    }

    #[test]
    fn seek_copy_preserves_every_field(
        rate in prop::num::f64::NORMAL,
        format in arb_format(),
        flags in 0u32..32,
        start_type in arb_seek_type(),
        start in any::<i64>(),
        stop_type in arb_seek_type(),
        stop in any::<i64>(),
    ) {
        let seek = SeekEvent::create(rate, format, SeekFlags::new(flags), start_type, start, stop_type, stop)
            .unwrap();
        let copy = seek.copy().downcast::<SeekEvent>().unwrap();

        prop_assert_eq!(copy.rate(), rate);
        prop_assert_eq!(copy.format(), format);
        prop_assert_eq!(copy.flags(), SeekFlags::new(flags));
        prop_assert_eq!(copy.start_type(), start_type);
        prop_assert_eq!(copy.start(), start);
        prop_assert_eq!(copy.stop_type(), stop_type);
        prop_assert_eq!(copy.stop(), stop);
        prop_assert_eq!(copy.sequence_number(), seek.sequence_number());
    }

    #[test]
    fn new_segment_copy_preserves_every_field(
        update in any::<bool>(),
        rate in 0.1f64..8.0,
        applied_rate in 0.1f64..8.0,
        format in arb_format(),
        start in 0i64..1_000_000,
        length in 0i64..1_000_000,
        position in any::<i64>(),
    ) {
        let stop = start + length;
        let segment =
            NewSegmentEvent::create(update, rate, applied_rate, format, start, stop, position).unwrap();
        let copy = segment.copy().downcast::<NewSegmentEvent>().unwrap();

        prop_assert_eq!(copy.is_update(), update);
        prop_assert_eq!(copy.rate(), rate);
        prop_assert_eq!(copy.applied_rate(), applied_rate);
        prop_assert_eq!(copy.format(), format);
        prop_assert_eq!(copy.start(), start);
        prop_assert_eq!(copy.stop(), stop);
        prop_assert_eq!(copy.position(), position);
    }

    #[test]
    fn qos_and_step_copies_preserve_fields(
        proportion in 0.0f64..4.0,
        diff in any::<i64>(),
        timestamp in any::<u64>(),
        amount in any::<u64>(),
        flush in any::<bool>(),
        intermediate in any::<bool>(),
    ) {
        let qos = QosEvent::create(proportion, diff, ClockTime(timestamp));
        let qos_copy = qos.copy().downcast::<QosEvent>().unwrap();
        prop_assert_eq!(qos_copy.proportion(), proportion);
        prop_assert_eq!(qos_copy.diff(), diff);
        prop_assert_eq!(qos_copy.timestamp(), ClockTime(timestamp));

        let step = StepEvent::create(Format::Buffers, amount, 1.0, flush, intermediate).unwrap();
        let step_copy = step.copy().downcast::<StepEvent>().unwrap();
        prop_assert_eq!(step_copy.amount(), amount);
        prop_assert_eq!(step_copy.flush(), flush);
        prop_assert_eq!(step_copy.intermediate(), intermediate);
    }
}

#[test]
fn typed_constructors_survive_upcast_and_downcast() {
    let events: Vec<EventRef> = vec![
        FlushStartEvent::create().upcast(),
        FlushStopEvent::create().upcast(),
        EosEvent::create().upcast(),
        NewSegmentEvent::create(false, 1.0, 1.0, Format::Time, 0, -1, 0).unwrap().upcast(),
        TagEvent::create(Structure::new("taglist")).upcast(),
        BufferSizeEvent::create(Format::Bytes, 0, 1, true).upcast(),
        SinkMessageEvent::create(pipevent::Message::new(pipevent::MessageType::Eos, None, None))
            .upcast(),
        QosEvent::create(1.0, 0, ClockTime::ZERO).upcast(),
        SeekEvent::create(1.0, Format::Time, SeekFlags::NONE, SeekType::Set, 0, SeekType::None, -1)
            .unwrap()
            .upcast(),
        NavigationEvent::create(None).upcast(),
        LatencyEvent::create(ClockTime::ZERO).upcast(),
        StepEvent::create(Format::Default, 1, 1.0, false, false).unwrap().upcast(),
    ];

    for (event, tag) in events.iter().zip(TYPED_TAGS) {
        assert_eq!(event.event_type(), tag);
        assert_eq!(downcast_to(event, tag), Some(tag));
        for other in TYPED_TAGS.into_iter().filter(|other| *other != tag) {
            assert_eq!(downcast_to(event, other), None, "{} downcast to {}", tag, other);
        }
    }
}

#[test]
fn downcast_shares_the_same_event() {
    let event = Event::create(EventType::Latency, None);
    let view = event.downcast::<LatencyEvent>().unwrap();
    assert!(view.as_event_ref().ptr_eq(&event));
    assert_eq!(event.ref_count(), 2);

    let back: EventRef = view.into();
    assert!(back.ptr_eq(&event));
}
