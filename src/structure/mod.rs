//! Generic key-value payload carried by events.
//!
//! A [`Structure`] is a named list of fields. Field order is preserved, which
//! keeps the text form stable across copies and snapshots.
//!
//! ```rust
//! use pipevent::{Format, Structure};
//!
//! let s = Structure::new("GstEventLatency")
//!     .with("latency", 20_000_000u64)
//!     .with("format", Format::Time);
//!
//! assert_eq!(s.get::<u64>("latency").unwrap(), 20_000_000);
//! assert!(s.get::<i32>("latency").is_err());
//! assert_eq!(s.to_string(), "GstEventLatency, latency=(guint64)20000000, format=(GstFormat)time;");
//! ```

mod text;
mod value;

use serde::{Deserialize, Serialize};

pub use value::{FieldValue, Value};

use crate::{EventError, Result};

/// A single named field of a [`Structure`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: Value,
}

/// Named, ordered collection of typed fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    name: String,
    fields: Vec<Field>,
}

impl Structure {
    /// Create an empty structure.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), fields: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Builder-style [`Structure::set`].
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    /// Set a field, replacing an existing value in place.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        let value = value.into();
        match self.fields.iter_mut().find(|f| f.name == field) {
            Some(existing) => existing.value = value,
            None => self.fields.push(Field { name: field, value }),
        }
    }

    /// Raw value lookup.
    pub fn value(&self, field: &str) -> Option<&Value> {
        self.fields.iter().find(|f| f.name == field).map(|f| &f.value)
    }

    /// Typed lookup. Fails if the field is missing or holds another type.
    pub fn get<T: FieldValue>(&self, field: &str) -> Result<T> {
        let value =
            self.value(field).ok_or_else(|| EventError::field_not_found(&self.name, field))?;
        T::from_value(value).map_err(|err| match err {
            EventError::TypeConversion { details } => EventError::TypeConversion {
                details: format!("{}.{}: {}", self.name, field, details),
            },
            other => other,
        })
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.value(field).is_some()
    }

    /// Remove a field, returning its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        let index = self.fields.iter().position(|f| f.name == field)?;
        Some(self.fields.remove(index).value)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|f| (f.name.as_str(), &f.value))
    }
}
