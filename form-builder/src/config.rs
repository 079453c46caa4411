use serde::{Deserialize, Serialize};

use crate::DEFAULT_BUTTON_TEXT;

/// Settings shared by the form model store and the preview session.
///
/// Every setting has a default, so a partial JSON document is enough:
///
/// ```
/// use form_builder::BuilderConfig;
///
/// let config = BuilderConfig::from_json(r#"{"formKey": "draft"}"#).unwrap();
/// assert_eq!(config.form_key, "draft");
/// assert_eq!(config.submission_key, "formSubmission");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuilderConfig {
    /// Blob store key for the saved form.
    pub form_key: String,
    /// Blob store key for the last submission.
    pub submission_key: String,
    /// Submit-button text of a new form.
    pub button_text: String,
    /// Label given to newly appended fields.
    pub new_field_label: String,
    /// Label of the option every new choice field starts with.
    pub seed_option_label: String,
}

impl BuilderConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self {
            form_key: "savedForm".to_string(),
            submission_key: "formSubmission".to_string(),
            button_text: DEFAULT_BUTTON_TEXT.to_string(),
            new_field_label: "Untitled Field".to_string(),
            seed_option_label: "Option 1".to_string(),
        }
    }

    /// Parse a configuration from JSON, filling in missing settings.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the blob store key for the saved form.
    pub fn with_form_key(mut self, key: impl Into<String>) -> Self {
        self.form_key = key.into();
        self
    }

    /// Set the blob store key for the last submission.
    pub fn with_submission_key(mut self, key: impl Into<String>) -> Self {
        self.submission_key = key.into();
        self
    }

    /// Set the submit-button text of new forms.
    pub fn with_button_text(mut self, text: impl Into<String>) -> Self {
        self.button_text = text.into();
        self
    }

    /// Set the label of newly appended fields.
    pub fn with_new_field_label(mut self, label: impl Into<String>) -> Self {
        self.new_field_label = label.into();
        self
    }

    /// Set the label of the first option of new choice fields.
    pub fn with_seed_option_label(mut self, label: impl Into<String>) -> Self {
        self.seed_option_label = label.into();
        self
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::new()
    }
}
