//! Error types produced while loading options and generating helpers.

use figment::Error as FigmentError;
use thiserror::Error;

use crate::collections::CollectionKind;

/// Errors that can occur while generating collection helpers for a builder.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RecordBuilderError {
    /// A mutable maker was requested for a kind that has none.
    #[error("no mutable maker exists for {kind} components")]
    NoMutableMaker {
        /// Kind the caller asked for.
        kind: CollectionKind,
    },

    /// A component was routed to list/set/map handling without being one.
    #[error("{type_name} is not a supported collection type (component '{field}')")]
    UnsupportedCollection {
        /// Name of the offending component.
        field: String,
        /// Declared type of the component.
        type_name: String,
    },

    /// A Java type expression could not be parsed.
    #[error("failed to parse type expression '{input}': {message}")]
    TypeSyntax {
        /// Source text handed to the parser.
        input: String,
        /// Explanation of the failure.
        message: String,
    },

    /// A component name is not a usable Java identifier.
    #[error("'{name}' is not a valid Java identifier")]
    InvalidIdentifier {
        /// The rejected name.
        name: String,
    },

    /// Error while gathering options from providers.
    #[error("Failed to gather record builder options: {0}")]
    Gathering(#[from] Box<FigmentError>),

    /// Option values that were loaded but are unusable.
    #[error("Validation failed for '{key}': {message}")]
    Validation {
        /// Option key that failed validation.
        key: String,
        /// Human-readable explanation of the validation failure.
        message: String,
    },
}

impl RecordBuilderError {
    /// Construct a gathering error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use record_builder::RecordBuilderError;
    /// let err = RecordBuilderError::gathering(figment::Error::from("boom"));
    /// assert!(matches!(err, RecordBuilderError::Gathering(_)));
    /// ```
    #[must_use]
    pub fn gathering(source: FigmentError) -> Self {
        Self::Gathering(Box::new(source))
    }

    /// Construct a validation error for an option key.
    #[must_use]
    pub fn validation(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type RecordBuilderResult<T> = Result<T, RecordBuilderError>;
