//! Originating objects recorded on events and messages

use std::fmt;
use std::sync::Arc;

/// Shared handle to an [`Object`].
pub type ObjectRef = Arc<Object>;

/// A named pipeline object such as an element or a pad.
///
/// Events only remember which object they came from; the object itself is
/// owned by the pipeline runtime.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Object {
    name: String,
}

impl Object {
    pub fn new(name: impl Into<String>) -> ObjectRef {
        Arc::new(Self { name: name.into() })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
