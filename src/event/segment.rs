//! Downstream serialized events: segments, tags, buffering hints and
//! sink messages.

use tracing::warn;

use super::sealed::Sealed;
use super::{Event, EventSubtype};
use crate::message::MessageRef;
use crate::structure::{Structure, Value};
use crate::types::Format;
use crate::{EventError, Result};

event_subtype!(
    /// Announces the playback segment that the following buffers belong to.
    NewSegmentEvent,
    NewSegment
);

event_subtype!(
    /// Carries stream metadata as a `taglist` structure.
    TagEvent,
    Tag
);

event_subtype!(
    /// Tells downstream elements how much data to buffer.
    BufferSizeEvent,
    BufferSize
);

event_subtype!(
    /// Asks the sink to post the carried message once the event reaches it.
    SinkMessageEvent,
    SinkMessage
);

impl NewSegmentEvent {
    pub const STRUCTURE_NAME: &'static str = "GstEventNewsegment";

    /// Build a new segment.
    ///
    /// `rate` and `applied_rate` must be non-zero, `start` must not be `-1`,
    /// and `start` must not exceed `stop` unless `stop` is `-1` (open end).
    pub fn create(
        update: bool,
        rate: f64,
        applied_rate: f64,
        format: Format,
        start: i64,
        stop: i64,
        position: i64,
    ) -> Result<Self> {
        let reject = |reason: &str| {
            warn!(rate, applied_rate, start, stop, reason, "Rejected new segment");
            Err(EventError::invalid_argument("NewSegmentEvent::create", reason))
        };
        if rate == 0.0 {
            return reject("rate must not be zero");
        }
        if applied_rate == 0.0 {
            return reject("applied rate must not be zero");
        }
        if start == -1 {
            return reject("start must be a valid position");
        }
        if stop != -1 && start > stop {
            return reject("start must not exceed stop");
        }

        let structure = Structure::new(Self::STRUCTURE_NAME)
            .with("update", update)
            .with("rate", rate)
            .with("applied_rate", applied_rate)
            .with("format", format)
            .with("start", start)
            .with("stop", stop)
            .with("position", position);
        Ok(Self::wrap(Event::create(Self::TYPE, Some(structure))))
    }

    pub fn is_update(&self) -> bool {
        self.field_or("update", false)
    }

    pub fn rate(&self) -> f64 {
        self.field_or("rate", 1.0)
    }

    pub fn applied_rate(&self) -> f64 {
        self.field_or("applied_rate", 1.0)
    }

    pub fn format(&self) -> Format {
        self.field_or("format", Format::Undefined)
    }

    pub fn start(&self) -> i64 {
        self.field_or("start", 0)
    }

    pub fn stop(&self) -> i64 {
        self.field_or("stop", -1)
    }

    pub fn position(&self) -> i64 {
        self.field_or("position", 0)
    }
}

impl TagEvent {
    pub const STRUCTURE_NAME: &'static str = "taglist";

    /// Wrap a tag list. The structure is renamed to `taglist`.
    pub fn create(mut tags: Structure) -> Self {
        if tags.name() != Self::STRUCTURE_NAME {
            tags.set_name(Self::STRUCTURE_NAME);
        }
        Self::wrap(Event::create(Self::TYPE, Some(tags)))
    }

    pub fn tags(&self) -> Option<&Structure> {
        self.structure()
    }

    /// Single tag value by name.
    pub fn tag(&self, name: &str) -> Option<&Value> {
        self.structure()?.value(name)
    }
}

impl BufferSizeEvent {
    pub const STRUCTURE_NAME: &'static str = "GstEventBufferSize";

    pub fn create(format: Format, min_size: i64, max_size: i64, is_async: bool) -> Self {
        let structure = Structure::new(Self::STRUCTURE_NAME)
            .with("format", format)
            .with("minsize", min_size)
            .with("maxsize", max_size)
            .with("async", is_async);
        Self::wrap(Event::create(Self::TYPE, Some(structure)))
    }

    pub fn format(&self) -> Format {
        self.field_or("format", Format::Undefined)
    }

    pub fn min_size(&self) -> i64 {
        self.field_or("minsize", -1)
    }

    pub fn max_size(&self) -> i64 {
        self.field_or("maxsize", -1)
    }

    pub fn is_async(&self) -> bool {
        self.field_or("async", false)
    }
}

impl SinkMessageEvent {
    pub const STRUCTURE_NAME: &'static str = "GstEventSinkMessage";

    pub fn create(message: MessageRef) -> Self {
        let structure = Structure::new(Self::STRUCTURE_NAME).with("message", message);
        Self::wrap(Event::create(Self::TYPE, Some(structure)))
    }

    /// The carried message, shared with every other holder.
    pub fn message(&self) -> Option<MessageRef> {
        self.structure()?.get("message").ok()
    }
}
