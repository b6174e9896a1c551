//! Upstream events: quality of service, seeking, navigation, latency and
//! stepping.

use tracing::warn;

use super::sealed::Sealed;
use super::{Event, EventSubtype};
use crate::structure::Structure;
use crate::types::{ClockTime, ClockTimeDiff, Format, SeekFlags, SeekType};
use crate::{EventError, Result};

event_subtype!(
    /// Quality-of-service report sent upstream by sinks.
    QosEvent,
    Qos
);

event_subtype!(
    /// Request to change the playback position and rate.
    SeekEvent,
    Seek
);

event_subtype!(
    /// User interaction forwarded upstream from a video sink.
    NavigationEvent,
    Navigation
);

event_subtype!(
    /// Configures the latency of the pipeline.
    LatencyEvent,
    Latency
);

event_subtype!(
    /// Requests skipping a number of units.
    StepEvent,
    Step
);

impl QosEvent {
    pub const STRUCTURE_NAME: &'static str = "GstEventQOS";

    /// `proportion` is the ratio between the real and ideal processing rate,
    /// `diff` the lateness of the buffer with the given `timestamp`.
    pub fn create(proportion: f64, diff: ClockTimeDiff, timestamp: ClockTime) -> Self {
        let structure = Structure::new(Self::STRUCTURE_NAME)
            .with("proportion", proportion)
            .with("diff", diff)
            .with("timestamp", timestamp);
        Self::wrap(Event::create(Self::TYPE, Some(structure)))
    }

    pub fn proportion(&self) -> f64 {
        self.field_or("proportion", 1.0)
    }

    pub fn diff(&self) -> ClockTimeDiff {
        self.field_or("diff", 0)
    }

    /// Timestamp of the late buffer. Shadows [`Event::timestamp`].
    pub fn timestamp(&self) -> ClockTime {
        self.field_or("timestamp", ClockTime::NONE)
    }
}

impl SeekEvent {
    pub const STRUCTURE_NAME: &'static str = "GstEventSeek";

    /// Build a seek request. `rate` must be non-zero; negative rates play backwards.
    pub fn create(
        rate: f64,
        format: Format,
        flags: SeekFlags,
        start_type: SeekType,
        start: i64,
        stop_type: SeekType,
        stop: i64,
    ) -> Result<Self> {
        if rate == 0.0 {
            warn!(rate, "Rejected seek with zero rate");
            return Err(EventError::invalid_argument("SeekEvent::create", "rate must not be zero"));
        }

        let structure = Structure::new(Self::STRUCTURE_NAME)
            .with("rate", rate)
            .with("format", format)
            .with("flags", flags)
            .with("cur_type", start_type)
            .with("cur", start)
            .with("stop_type", stop_type)
            .with("stop", stop);
        Ok(Self::wrap(Event::create(Self::TYPE, Some(structure))))
    }

    pub fn rate(&self) -> f64 {
        self.field_or("rate", 1.0)
    }

    pub fn format(&self) -> Format {
        self.field_or("format", Format::Undefined)
    }

    pub fn flags(&self) -> SeekFlags {
        self.field_or("flags", SeekFlags::NONE)
    }

    pub fn start_type(&self) -> SeekType {
        self.field_or("cur_type", SeekType::None)
    }

    pub fn start(&self) -> i64 {
        self.field_or("cur", -1)
    }

    pub fn stop_type(&self) -> SeekType {
        self.field_or("stop_type", SeekType::None)
    }

    pub fn stop(&self) -> i64 {
        self.field_or("stop", -1)
    }
}

impl NavigationEvent {
    pub fn create(structure: Option<Structure>) -> Self {
        Self::wrap(Event::create(Self::TYPE, structure))
    }
}

impl LatencyEvent {
    pub const STRUCTURE_NAME: &'static str = "GstEventLatency";

    pub fn create(latency: ClockTime) -> Self {
        let structure = Structure::new(Self::STRUCTURE_NAME).with("latency", latency);
        Self::wrap(Event::create(Self::TYPE, Some(structure)))
    }

    pub fn latency(&self) -> ClockTime {
        self.field_or("latency", ClockTime::NONE)
    }
}

impl StepEvent {
    pub const STRUCTURE_NAME: &'static str = "GstEventStep";

    /// Step `amount` units of `format` at `rate`. `rate` must be positive and
    /// `format` defined.
    pub fn create(
        format: Format,
        amount: u64,
        rate: f64,
        flush: bool,
        intermediate: bool,
    ) -> Result<Self> {
        if rate <= 0.0 {
            warn!(rate, "Rejected step with non-positive rate");
            return Err(EventError::invalid_argument("StepEvent::create", "rate must be positive"));
        }
        if format == Format::Undefined {
            warn!("Rejected step with undefined format");
            return Err(EventError::invalid_argument("StepEvent::create", "format must be defined"));
        }

        let structure = Structure::new(Self::STRUCTURE_NAME)
            .with("format", format)
            .with("amount", amount)
            .with("rate", rate)
            .with("flush", flush)
            .with("intermediate", intermediate);
        Ok(Self::wrap(Event::create(Self::TYPE, Some(structure))))
    }

    pub fn format(&self) -> Format {
        self.field_or("format", Format::Undefined)
    }

    pub fn amount(&self) -> u64 {
        self.field_or("amount", 0)
    }

    pub fn rate(&self) -> f64 {
        self.field_or("rate", 1.0)
    }

    pub fn flush(&self) -> bool {
        self.field_or("flush", false)
    }

    pub fn intermediate(&self) -> bool {
        self.field_or("intermediate", false)
    }
}
