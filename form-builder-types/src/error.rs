use std::collections::HashMap;
use std::fmt;

use crate::FieldId;

/// Error type for blob store access.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The key cannot be used by this store.
    #[error("Invalid store key: {0:?}")]
    InvalidKey(String),

    #[error("I/O error on key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The stored blob is not valid JSON for the expected shape.
    #[error("Malformed blob under key '{key}': {source}")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failure of a custom store implementation.
    #[error("Store backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl StoreError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }
}

/// Per-field validation messages, keyed by field id.
///
/// An empty set means the values passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: HashMap<FieldId, String>,
}

impl ValidationErrors {
    /// Create an empty set of messages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the message for a field, replacing any previous one.
    pub fn insert(&mut self, field: FieldId, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    /// Get the message recorded for a field.
    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    /// Check if a field failed validation.
    pub fn contains(&self, field: FieldId) -> bool {
        self.messages.contains_key(&field)
    }

    /// Get an iterator over all field-message pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &String)> {
        self.messages.iter()
    }

    /// Get the number of failed fields.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if validation passed.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Take the messages out as a map.
    pub fn into_inner(self) -> HashMap<FieldId, String> {
        self.messages
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.messages.len() {
            1 => write!(f, "1 field failed validation"),
            n => write!(f, "{n} fields failed validation"),
        }
    }
}

impl std::error::Error for ValidationErrors {}

/// Error type for submitting a filled-in form.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Required fields are missing; nothing was stored.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// The values were valid but the submission could not be stored.
    #[error("Could not store submission: {0}")]
    Store(#[from] StoreError),
}

impl SubmitError {
    /// Check if this error is a validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Get the per-field messages of a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::Store(_) => None,
        }
    }
}

/// Error type for saving a form definition.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The form title is blank; nothing was stored.
    #[error("Form title is required")]
    EmptyTitle,

    #[error("Could not store form: {0}")]
    Store(#[from] StoreError),
}

impl SaveError {
    /// Check if this error was caused by a blank title.
    pub fn is_empty_title(&self) -> bool {
        matches!(self, Self::EmptyTitle)
    }
}
