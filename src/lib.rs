//! Type-safe, reference-counted events for multimedia pipelines.
//!
//! Events travel between pipeline elements alongside the data stream. They
//! signal conditions such as end of stream, the start of a new segment or a
//! flush, and carry requests such as seeks or latency changes upstream.
//!
//! # Features
//!
//! - **Shared ownership**: [`EventRef`] is an atomically reference-counted handle
//! - **Typed views**: one view per event kind with typed constructors and accessors
//! - **Checked downcasts**: a view can only be obtained when the tag matches
//! - **Generic payload**: every event carries an optional [`Structure`]
//! - **Snapshots**: YAML dumps and fixtures through [`EventSnapshot`]
//!
//! # Quick Start
//!
//! ```rust
//! use pipevent::{EventRef, EventSubtype, Format, SeekEvent, SeekFlags, SeekType, TypedEvent};
//!
//! # fn main() -> pipevent::Result<()> {
//! let seek = SeekEvent::create(
//!     1.0,
//!     Format::Time,
//!     SeekFlags::FLUSH | SeekFlags::KEY_UNIT,
//!     SeekType::Set,
//!     5_000_000_000,
//!     SeekType::None,
//!     -1,
//! )?;
//!
//! // Pass the generic handle around, recover the typed view where needed
//! let event: EventRef = seek.upcast();
//! match event.classify() {
//!     TypedEvent::Seek(seek) => assert_eq!(seek.start(), 5_000_000_000),
//!     other => panic!("unexpected event {:?}", other),
//! }
//! # Ok(())
//! # }
//! ```

// Core types and error handling
mod error;
pub mod message;
pub mod object;
pub mod structure;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;

// Events and typed views
pub mod event;

// Core exports
pub use error::*;
pub use event::{
    BufferSizeEvent, EosEvent, Event, EventRef, EventSnapshot, EventSubtype, FlushStartEvent,
    FlushStopEvent, LatencyEvent, NavigationEvent, NewSegmentEvent, QosEvent, SeekEvent,
    SinkMessageEvent, StepEvent, TagEvent, TypedEvent, WeakEventRef,
};
pub use message::{Message, MessageRef, MessageType};
pub use object::{Object, ObjectRef};
pub use structure::{FieldValue, Structure, Value};
pub use types::*;
