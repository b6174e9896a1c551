//! Field values stored in a payload structure

use serde::{Deserialize, Serialize};

use super::Structure;
use crate::message::MessageRef;
use crate::types::{ClockTime, Format, SeekFlags, SeekType};
use crate::{EventError, Result};

/// Runtime value held by a structure field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    Bool(bool),
    Int(i32),
    UInt(u32),
    Int64(i64),
    UInt64(u64),
    Double(f64),
    String(String),
    Format(Format),
    SeekType(SeekType),
    SeekFlags(SeekFlags),
    Structure(Box<Structure>),
    /// Shared bus message; not representable in snapshots
    #[serde(skip)]
    Message(MessageRef),
}

impl Value {
    /// Type name used in the structure text form, e.g. `(gint64)`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "boolean",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Int64(_) => "gint64",
            Value::UInt64(_) => "guint64",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::Format(_) => "GstFormat",
            Value::SeekType(_) => "GstSeekType",
            Value::SeekFlags(_) => "GstSeekFlags",
            Value::Structure(_) => "structure",
            Value::Message(_) => "GstMessage",
        }
    }
}

/// Trait for types that can be read from a structure field.
pub trait FieldValue: Sized {
    /// Convert from the stored value, failing on a type mismatch.
    fn from_value(value: &Value) -> Result<Self>;
}

fn mismatch<T>(expected: &str, value: &Value) -> Result<T> {
    Err(EventError::TypeConversion {
        details: format!("Expected {}, got {}", expected, value.type_name()),
    })
}

macro_rules! scalar_field_value {
    ($ty:ty, $variant:ident, $expected:literal) => {
        impl FieldValue for $ty {
            fn from_value(value: &Value) -> Result<Self> {
                match value {
                    Value::$variant(v) => Ok(v.clone()),
                    other => mismatch($expected, other),
                }
            }
        }

        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::$variant(v)
            }
        }
    };
}

scalar_field_value!(bool, Bool, "boolean");
scalar_field_value!(i32, Int, "int");
scalar_field_value!(u32, UInt, "uint");
scalar_field_value!(i64, Int64, "gint64");
scalar_field_value!(u64, UInt64, "guint64");
scalar_field_value!(f64, Double, "double");
scalar_field_value!(String, String, "string");
scalar_field_value!(Format, Format, "GstFormat");
scalar_field_value!(SeekType, SeekType, "GstSeekType");
scalar_field_value!(SeekFlags, SeekFlags, "GstSeekFlags");
scalar_field_value!(MessageRef, Message, "GstMessage");

// Clock times travel as plain unsigned 64-bit nanoseconds
impl FieldValue for ClockTime {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::UInt64(ns) => Ok(ClockTime(*ns)),
            other => mismatch("guint64", other),
        }
    }
}

impl From<ClockTime> for Value {
    fn from(time: ClockTime) -> Self {
        Value::UInt64(time.nseconds())
    }
}

impl FieldValue for Structure {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Structure(s) => Ok((**s).clone()),
            other => mismatch("structure", other),
        }
    }
}

impl From<Structure> for Value {
    fn from(s: Structure) -> Self {
        Value::Structure(Box::new(s))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl FieldValue for Value {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }
}
