use serde::{Deserialize, Serialize};

/// A single value entered for a field while filling in a form.
///
/// Serialized untagged: text and single choices are JSON strings,
/// checkbox selections are JSON arrays of option labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Raw text of an input field, or the chosen label of a dropdown or radio field.
    Text(String),

    /// Labels of the ticked options of a checkbox field, in option order.
    Choices(Vec<String>),
}

impl FieldValue {
    /// Check if the value counts as "not answered".
    ///
    /// A selection counts as blank when every ticked label is empty.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Choices(labels) => labels.iter().all(String::is_empty),
        }
    }

    /// Try to get this value as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Choices(_) => None,
        }
    }

    /// Try to get this value as a list of chosen labels.
    pub fn as_choices(&self) -> Option<&[String]> {
        match self {
            Self::Choices(labels) => Some(labels),
            Self::Text(_) => None,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Choices(_) => "Choices",
        }
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(labels: Vec<String>) -> Self {
        Self::Choices(labels)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(labels: Vec<&str>) -> Self {
        Self::Choices(labels.into_iter().map(str::to_string).collect())
    }
}
