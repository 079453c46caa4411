use serde::{Deserialize, Serialize};

use crate::{Field, FieldId};

/// Submit-button text used when none has been set.
pub const DEFAULT_BUTTON_TEXT: &str = "Submit";

/// Title shown in place of a blank form title.
pub const UNTITLED_FORM: &str = "Untitled Form";

/// The form being built: metadata plus an ordered list of fields.
///
/// A form is presentation-agnostic. It is serialized wholesale when saved;
/// there is no partial update or merge on read-back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDefinition {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// All fields, in the order they were added.
    #[serde(default)]
    pub fields: Vec<Field>,

    #[serde(default = "default_button_text")]
    pub button_text: String,
}

fn default_button_text() -> String {
    DEFAULT_BUTTON_TEXT.to_string()
}

impl FormDefinition {
    /// Create an empty, untitled form.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            fields: Vec::new(),
            button_text: default_button_text(),
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the submit-button text.
    pub fn with_button_text(mut self, text: impl Into<String>) -> Self {
        self.button_text = text.into();
        self
    }

    /// Get the fields.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Get a mutable reference to the fields.
    pub fn fields_mut(&mut self) -> &mut Vec<Field> {
        &mut self.fields
    }

    /// Look up a field by id.
    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.iter().find(|field| field.id() == id)
    }

    /// Look up a field by id for editing.
    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        self.fields.iter_mut().find(|field| field.id() == id)
    }

    /// Fields that must be answered before submitting.
    pub fn required_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.is_required())
    }

    /// Check if the title has any non-whitespace content.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Title to display, falling back to "Untitled Form".
    pub fn display_title(&self) -> &str {
        if self.has_title() {
            &self.title
        } else {
            UNTITLED_FORM
        }
    }

    /// Submit-button text to display, falling back to "Submit".
    pub fn display_button_text(&self) -> &str {
        if self.button_text.is_empty() {
            DEFAULT_BUTTON_TEXT
        } else {
            &self.button_text
        }
    }

    /// Check if the form has any fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl Default for FormDefinition {
    fn default() -> Self {
        Self::new()
    }
}
