//! Reference-counted pipeline events and their typed views.
//!
//! Every event is a single [`Event`] record shared through an [`EventRef`].
//! The record holds a fixed [`EventType`] tag and an optional payload
//! [`Structure`]; the typed views ([`SeekEvent`], [`QosEvent`], ...) add a
//! typed constructor and typed accessors over that same payload.
//!
//! ## Downcasting
//!
//! A typed view can only be obtained from an event whose tag matches:
//!
//! ```rust
//! use pipevent::{EosEvent, Event, EventRef, EventSubtype, EventType, FlushStartEvent};
//!
//! let event: EventRef = EosEvent::create().upcast();
//! assert!(event.downcast::<EosEvent>().is_some());
//! assert!(event.downcast::<FlushStartEvent>().is_none());
//!
//! let generic = Event::create(EventType::FlushStart, None);
//! assert!(generic.is::<FlushStartEvent>());
//! ```
//!
//! [`EventRef::classify`] turns any event into the [`TypedEvent`] sum type
//! for exhaustive matching.
//!
//! ## Sharing and mutation
//!
//! Cloning an [`EventRef`] only bumps an atomic reference count. The record
//! is immutable apart from its sequence number and its source, both of which
//! can be updated through a shared reference. [`EventRef::make_writable`]
//! gives mutable access to the rest, copying the event first when it is shared.

use std::fmt;
use std::ops::Deref;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, PoisonError, RwLock, Weak};

use tracing::{debug, trace};

use crate::object::ObjectRef;
use crate::structure::{FieldValue, Structure};
use crate::types::{ClockTime, EventType, next_seqnum};

mod sealed {
    use super::EventRef;

    pub trait Sealed: Sized {
        /// Wrap an event without checking its tag. Callers must have checked
        /// that the tag matches the view.
        fn wrap(event: EventRef) -> Self;
    }
}

use sealed::Sealed;

/// Typed view over an [`EventRef`] whose tag is fixed to [`EventSubtype::TYPE`].
///
/// The trait is sealed: views come only from their own `create`,
/// [`EventRef::downcast`], [`TryFrom`] or [`EventRef::classify`], so a view
/// always wraps an event carrying its tag. Wrapping arbitrary events from
/// outside the crate does not compile:
///
/// ```compile_fail
/// use pipevent::{Event, EventType, SeekEvent};
///
/// let eos = Event::create(EventType::Eos, None);
/// let _ = SeekEvent::wrap(eos);
/// ```
pub trait EventSubtype: Sealed + Deref<Target = Event> {
    /// The only tag this view accepts.
    const TYPE: EventType;

    /// Borrow the underlying generic reference.
    fn as_event_ref(&self) -> &EventRef;

    /// Convert back into the generic reference.
    fn upcast(self) -> EventRef;
}

macro_rules! event_subtype {
    ($(#[$meta:meta])* $name:ident, $tag:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name($crate::event::EventRef);

        impl $crate::event::sealed::Sealed for $name {
            fn wrap(event: $crate::event::EventRef) -> Self {
                Self(event)
            }
        }

        impl $crate::event::EventSubtype for $name {
            const TYPE: $crate::types::EventType = $crate::types::EventType::$tag;

            fn as_event_ref(&self) -> &$crate::event::EventRef {
                &self.0
            }

            fn upcast(self) -> $crate::event::EventRef {
                self.0
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = $crate::event::Event;

            fn deref(&self) -> &$crate::event::Event {
                &self.0
            }
        }

        impl From<$name> for $crate::event::EventRef {
            fn from(view: $name) -> Self {
                view.0
            }
        }

        impl TryFrom<$crate::event::EventRef> for $name {
            type Error = $crate::EventError;

            fn try_from(event: $crate::event::EventRef) -> $crate::Result<Self> {
                let found = event.event_type();
                event.downcast::<$name>().ok_or_else(|| {
                    $crate::EventError::type_mismatch($crate::types::EventType::$tag, found)
                })
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

mod flush;
mod segment;
mod snapshot;
mod upstream;

pub use flush::{EosEvent, FlushStartEvent, FlushStopEvent};
pub use segment::{BufferSizeEvent, NewSegmentEvent, SinkMessageEvent, TagEvent};
pub use snapshot::EventSnapshot;
pub use upstream::{LatencyEvent, NavigationEvent, QosEvent, SeekEvent, StepEvent};

/// An immutable tagged record signalling a pipeline condition.
pub struct Event {
    event_type: EventType,
    timestamp: ClockTime,
    seqnum: AtomicU32,
    source: RwLock<Option<ObjectRef>>,
    structure: Option<Structure>,
}

impl Event {
    /// Create an event of any type with an optional payload.
    pub fn create(event_type: EventType, structure: Option<Structure>) -> EventRef {
        Self::from_parts(event_type, ClockTime::monotonic_now(), next_seqnum(), None, structure)
    }

    pub(crate) fn from_parts(
        event_type: EventType,
        timestamp: ClockTime,
        seqnum: u32,
        source: Option<ObjectRef>,
        structure: Option<Structure>,
    ) -> EventRef {
        trace!(event_type = %event_type, seqnum, "Created event");
        EventRef(Arc::new(Self {
            event_type,
            timestamp,
            seqnum: AtomicU32::new(seqnum),
            source: RwLock::new(source),
            structure,
        }))
    }

    /// Object the event was last pushed from, if the pipeline recorded one.
    pub fn source(&self) -> Option<ObjectRef> {
        self.source.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Record the originating object. Reserved for the pipeline runtime.
    pub fn attach_source(&self, source: Option<ObjectRef>) {
        *self.source.write().unwrap_or_else(PoisonError::into_inner) = source;
    }

    /// Monotonic time at which the event was created.
    pub fn timestamp(&self) -> ClockTime {
        self.timestamp
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn type_name(&self) -> &'static str {
        self.event_type.name()
    }

    pub fn structure(&self) -> Option<&Structure> {
        self.structure.as_ref()
    }

    /// Mutable payload access. Only reachable through [`EventRef::make_writable`].
    pub fn structure_mut(&mut self) -> Option<&mut Structure> {
        self.structure.as_mut()
    }

    pub fn sequence_number(&self) -> u32 {
        self.seqnum.load(Ordering::Relaxed)
    }

    pub fn set_sequence_number(&self, seqnum: u32) {
        self.seqnum.store(seqnum, Ordering::Relaxed);
    }

    /// Independent duplicate carrying the same tag, timestamp, sequence number,
    /// source and a deep copy of the payload.
    pub fn copy(&self) -> EventRef {
        EventRef(Arc::new(self.clone()))
    }

    /// Read a payload field, falling back to `default` when the event has no
    /// payload or the field is missing or mistyped.
    pub(crate) fn field_or<T: FieldValue>(&self, field: &str, default: T) -> T {
        let Some(structure) = self.structure.as_ref() else {
            debug!(event_type = %self.event_type, field, "Event has no payload, using default");
            return default;
        };
        match structure.get(field) {
            Ok(value) => value,
            Err(err) => {
                debug!(event_type = %self.event_type, error = %err, "Using default for payload field");
                default
            }
        }
    }
}

impl Clone for Event {
    fn clone(&self) -> Self {
        Self {
            event_type: self.event_type,
            timestamp: self.timestamp,
            seqnum: AtomicU32::new(self.sequence_number()),
            source: RwLock::new(self.source()),
            structure: self.structure.clone(),
        }
    }
}

impl Drop for Event {
    fn drop(&mut self) {
        trace!(event_type = %self.event_type, seqnum = self.sequence_number(), "Finalizing event");
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("type", &self.event_type)
            .field("timestamp", &self.timestamp)
            .field("seqnum", &self.sequence_number())
            .field("source", &self.source().map(|s| s.name().to_string()))
            .field("structure", &self.structure)
            .finish()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (seqnum {}, time {}", self.event_type, self.sequence_number(), self.timestamp)?;
        if let Some(source) = self.source() {
            write!(f, ", source {}", source)?;
        }
        f.write_str(")")?;
        if let Some(structure) = &self.structure {
            write!(f, " {}", structure)?;
        }
        Ok(())
    }
}

/// Shared-ownership handle to an [`Event`] with an atomic reference count.
#[derive(Clone)]
pub struct EventRef(Arc<Event>);

impl EventRef {
    /// Type-check predicate used by every downcast.
    pub fn is<V: EventSubtype>(&self) -> bool {
        self.event_type == V::TYPE
    }

    /// Obtain a typed view sharing this event, or `None` when the tags differ.
    pub fn downcast<V: EventSubtype>(&self) -> Option<V> {
        if self.is::<V>() {
            Some(V::wrap(self.clone()))
        } else {
            debug!(expected = %V::TYPE, found = %self.event_type, "Rejected event downcast");
            None
        }
    }

    /// Classify into the [`TypedEvent`] sum type.
    pub fn classify(&self) -> TypedEvent {
        let event = self.clone();
        match self.event_type {
            EventType::FlushStart => TypedEvent::FlushStart(FlushStartEvent::wrap(event)),
            EventType::FlushStop => TypedEvent::FlushStop(FlushStopEvent::wrap(event)),
            EventType::Eos => TypedEvent::Eos(EosEvent::wrap(event)),
            EventType::NewSegment => TypedEvent::NewSegment(NewSegmentEvent::wrap(event)),
            EventType::Tag => TypedEvent::Tag(TagEvent::wrap(event)),
            EventType::BufferSize => TypedEvent::BufferSize(BufferSizeEvent::wrap(event)),
            EventType::SinkMessage => {
                TypedEvent::SinkMessage(SinkMessageEvent::wrap(event))
            }
            EventType::Qos => TypedEvent::Qos(QosEvent::wrap(event)),
            EventType::Seek => TypedEvent::Seek(SeekEvent::wrap(event)),
            EventType::Navigation => TypedEvent::Navigation(NavigationEvent::wrap(event)),
            EventType::Latency => TypedEvent::Latency(LatencyEvent::wrap(event)),
            EventType::Step => TypedEvent::Step(StepEvent::wrap(event)),
            EventType::Unknown
            | EventType::CustomUpstream
            | EventType::CustomDownstream
            | EventType::CustomDownstreamOob
            | EventType::CustomBoth
            | EventType::CustomBothOob => TypedEvent::Other(event),
        }
    }

    /// Number of strong references currently held.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    /// True when both handles point at the same event.
    pub fn ptr_eq(&self, other: &EventRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn downgrade(&self) -> WeakEventRef {
        WeakEventRef(Arc::downgrade(&self.0))
    }

    /// True when this is the only strong reference, so mutation needs no copy.
    /// Weak references do not count; they stop upgrading once the event is
    /// made writable.
    pub fn is_writable(&self) -> bool {
        Arc::strong_count(&self.0) == 1
    }

    /// Mutable access, copying the event first if other holders share it.
    pub fn make_writable(&mut self) -> &mut Event {
        if !self.is_writable() {
            trace!(event_type = %self.event_type, "Copying shared event for write");
        }
        Arc::make_mut(&mut self.0)
    }

    /// Shortcut for `make_writable().structure_mut()`.
    pub fn structure_mut(&mut self) -> Option<&mut Structure> {
        self.make_writable().structure_mut()
    }
}

impl Deref for EventRef {
    type Target = Event;

    fn deref(&self) -> &Event {
        &self.0
    }
}

impl fmt::Debug for EventRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for EventRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

/// Non-owning handle that does not keep the event alive.
#[derive(Debug, Clone)]
pub struct WeakEventRef(Weak<Event>);

impl WeakEventRef {
    /// `None` once the last strong reference is gone.
    pub fn upgrade(&self) -> Option<EventRef> {
        self.0.upgrade().map(EventRef)
    }
}

/// Every event kind that has a typed view, plus a catch-all for custom tags.
#[derive(Debug, Clone)]
pub enum TypedEvent {
    FlushStart(FlushStartEvent),
    FlushStop(FlushStopEvent),
    Eos(EosEvent),
    NewSegment(NewSegmentEvent),
    Tag(TagEvent),
    BufferSize(BufferSizeEvent),
    SinkMessage(SinkMessageEvent),
    Qos(QosEvent),
    Seek(SeekEvent),
    Navigation(NavigationEvent),
    Latency(LatencyEvent),
    Step(StepEvent),
    /// Custom and unknown tags
    Other(EventRef),
}

impl TypedEvent {
    /// The generic reference behind the view.
    pub fn event(&self) -> &EventRef {
        match self {
            TypedEvent::FlushStart(e) => e.as_event_ref(),
            TypedEvent::FlushStop(e) => e.as_event_ref(),
            TypedEvent::Eos(e) => e.as_event_ref(),
            TypedEvent::NewSegment(e) => e.as_event_ref(),
            TypedEvent::Tag(e) => e.as_event_ref(),
            TypedEvent::BufferSize(e) => e.as_event_ref(),
            TypedEvent::SinkMessage(e) => e.as_event_ref(),
            TypedEvent::Qos(e) => e.as_event_ref(),
            TypedEvent::Seek(e) => e.as_event_ref(),
            TypedEvent::Navigation(e) => e.as_event_ref(),
            TypedEvent::Latency(e) => e.as_event_ref(),
            TypedEvent::Step(e) => e.as_event_ref(),
            TypedEvent::Other(e) => e,
        }
    }
}

impl From<TypedEvent> for EventRef {
    fn from(typed: TypedEvent) -> Self {
        typed.event().clone()
    }
}
