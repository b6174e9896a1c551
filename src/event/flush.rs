//! Flushing and end-of-stream events. None of them carry a payload.

use super::sealed::Sealed;
use super::{Event, EventSubtype};

event_subtype!(
    /// Starts a flush; elements drop queued data and refuse new buffers.
    FlushStartEvent,
    FlushStart
);

event_subtype!(
    /// Ends a flush and resets the running time of downstream elements.
    FlushStopEvent,
    FlushStop
);

event_subtype!(
    /// No more data will follow on this stream.
    EosEvent,
    Eos
);

impl FlushStartEvent {
    pub fn create() -> Self {
        Self::wrap(Event::create(Self::TYPE, None))
    }
}

impl FlushStopEvent {
    pub fn create() -> Self {
        Self::wrap(Event::create(Self::TYPE, None))
    }
}

impl EosEvent {
    pub fn create() -> Self {
        Self::wrap(Event::create(Self::TYPE, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventType;

    #[test]
    fn payloadless_events_have_fixed_tags() {
        let start = FlushStartEvent::create();
        let stop = FlushStopEvent::create();
        let eos = EosEvent::create();

        assert_eq!(start.event_type(), EventType::FlushStart);
        assert_eq!(stop.event_type(), EventType::FlushStop);
        assert_eq!(eos.event_type(), EventType::Eos);
        assert!(start.structure().is_none());
        assert!(eos.structure().is_none());
    }

    #[test]
    fn flush_pair_gets_increasing_sequence_numbers() {
        let start = FlushStartEvent::create();
        let stop = FlushStopEvent::create();
        assert_ne!(start.sequence_number(), stop.sequence_number());
    }
}
