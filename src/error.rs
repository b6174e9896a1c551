//! Error types for event construction and payload access.
//!
//! All errors implement the `std::error::Error` trait and carry structured
//! context for debugging.
//!
//! ## Error Categories
//!
//! - **Type Mismatch**: A checked conversion to a typed event view was refused
//! - **Field Errors**: A payload field is missing or holds a different type
//! - **Invalid Arguments**: A typed constructor rejected its inputs
//! - **Parse Errors**: The text form of a structure could not be read
//! - **Snapshot Errors**: YAML fixtures could not be encoded or decoded
//!
//! A plain downcast never produces an error. [`EventRef::downcast`](crate::EventRef::downcast)
//! returns `None` when the tags differ; only the `TryFrom` conversions report
//! [`EventError::TypeMismatch`].
//!
//! ## Helper Constructors
//!
//! ```rust
//! use pipevent::{EventError, EventType};
//!
//! let missing = EventError::field_not_found("GstEventSeek", "rate");
//! assert!(missing.to_string().contains("rate"));
//!
//! let mismatch = EventError::type_mismatch(EventType::Seek, EventType::Eos);
//! for suggestion in mismatch.recovery_suggestions() {
//!     println!("  - {}", suggestion);
//! }
//! ```

use thiserror::Error;

use crate::types::EventType;

/// Result type alias for event operations.
pub type Result<T, E = EventError> = std::result::Result<T, E>;

/// Main error type for event operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EventError {
    #[error("Event type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: EventType, found: EventType },

    #[error("Field '{field}' not found in structure '{structure}'")]
    FieldNotFound { structure: String, field: String },

    #[error("Type conversion error: {details}")]
    TypeConversion { details: String },

    #[error("Invalid argument for {constructor}: {reason}")]
    InvalidArgument { constructor: &'static str, reason: String },

    #[error("Parse error in {context}: {details}")]
    Parse { context: String, details: String },

    #[error("Snapshot error: {context}")]
    Snapshot {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl EventError {
    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            EventError::TypeMismatch { .. } => vec![
                "Check the event type before converting",
                "Use EventRef::downcast for a non-failing check",
                "Match on EventRef::classify to handle every event kind",
            ],
            EventError::FieldNotFound { .. } => vec![
                "Check field name spelling",
                "Verify the event carries a payload structure",
                "Use Structure::has_field before reading optional fields",
            ],
            EventError::TypeConversion { .. } => vec![
                "Check the field type in the structure text form",
                "Read the field through Structure::value and match on it",
            ],
            EventError::InvalidArgument { .. } => vec![
                "Use a non-zero playback rate",
                "Make sure start does not exceed stop",
                "Pass a defined format",
            ],
            EventError::Parse { .. } => vec![
                "Check the structure text form: name, key=(type)value;",
                "Quote string values containing commas or spaces",
            ],
            EventError::Snapshot { .. } => vec![
                "Verify the YAML fixture is well formed",
                "Check that event type names are spelled as in EventType::name",
            ],
        }
    }

    /// Helper constructor for downcast refusals.
    pub fn type_mismatch(expected: EventType, found: EventType) -> Self {
        EventError::TypeMismatch { expected, found }
    }

    /// Helper constructor for missing payload fields.
    pub fn field_not_found(structure: impl Into<String>, field: impl Into<String>) -> Self {
        EventError::FieldNotFound { structure: structure.into(), field: field.into() }
    }

    /// Helper constructor for rejected constructor arguments.
    pub fn invalid_argument(constructor: &'static str, reason: impl Into<String>) -> Self {
        EventError::InvalidArgument { constructor, reason: reason.into() }
    }

    /// Helper constructor for text-form parse failures.
    pub fn parse_error(context: impl Into<String>, details: impl Into<String>) -> Self {
        EventError::Parse { context: context.into(), details: details.into() }
    }

    /// Helper constructor for snapshot failures with a source.
    pub fn snapshot_error(
        context: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        EventError::Snapshot { context: context.into(), source: Some(source) }
    }
}

impl From<serde_yaml_ng::Error> for EventError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        EventError::Snapshot { context: "YAML encoding".to_string(), source: Some(Box::new(err)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
          #[test]
          fn error_messages_format_correctly_with_arbitrary_context(
            structure in "[a-zA-Z][a-zA-Z0-9_-]*",
            field in "\\w+",
            details in ".*",
            reason in ".*"
          ) {
            let field_error = EventError::field_not_found(structure.clone(), field.clone());
            let conversion_error = EventError::TypeConversion { details: details.clone() };
            let argument_error = EventError::invalid_argument("SeekEvent::create", reason.clone());

            let field_msg = field_error.to_string();
            prop_assert!(field_msg.contains(&field));
            prop_assert!(field_msg.contains(&structure));

            prop_assert!(conversion_error.to_string().contains(&details));

            let argument_msg = argument_error.to_string();
            prop_assert!(argument_msg.contains("SeekEvent::create"));
            prop_assert!(argument_msg.contains(&reason));
          }
        }
    }

    #[test]
    fn error_constructors_validation() {
        let mismatch = EventError::type_mismatch(EventType::Seek, EventType::Eos);
        assert!(matches!(mismatch, EventError::TypeMismatch { .. }));
        assert_eq!(mismatch.to_string(), "Event type mismatch: expected seek, found eos");

        let parse = EventError::parse_error("structure", "missing '='");
        assert!(matches!(parse, EventError::Parse { .. }));
    }

    #[test]
    fn error_traits_validation() {
        fn assert_send_sync_static<T: Send + Sync + 'static>() {}
        assert_send_sync_static::<EventError>();

        let error = EventError::field_not_found("s", "f");
        let _: &dyn std::error::Error = &error;
    }

    #[test]
    fn recovery_suggestions_are_provided() {
        let errors = [
            EventError::type_mismatch(EventType::Qos, EventType::Latency),
            EventError::field_not_found("GstEventQOS", "diff"),
            EventError::TypeConversion { details: "x".into() },
            EventError::invalid_argument("StepEvent::create", "rate must be positive"),
            EventError::parse_error("structure", "empty"),
        ];

        for error in &errors {
            let suggestions = error.recovery_suggestions();
            assert!(!suggestions.is_empty());
            for suggestion in suggestions {
                assert!(suggestion.len() > 5);
            }
        }
    }

    #[test]
    fn yaml_errors_convert_to_snapshot_with_source() {
        let yaml_err = serde_yaml_ng::from_str::<u32>("not: [a number").unwrap_err();
        let converted: EventError = yaml_err.into();
        assert!(matches!(converted, EventError::Snapshot { .. }));
        assert!(std::error::Error::source(&converted).is_some());
    }
}
