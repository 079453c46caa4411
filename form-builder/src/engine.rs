//! Validation and recording of filled-in forms.

use tracing::{debug, info, warn};

use crate::{
    BlobStore, BuilderConfig, FieldKind, FieldValue, FormDefinition, FormValues, StoreError,
    Submission, SubmitError, ValidationErrors,
};

/// Check every required field for a non-blank value.
///
/// Fields that are not required are never checked. The message for a
/// missing field is `"<label> is required"`.
pub fn validate(form: &FormDefinition, values: &FormValues) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for field in form.required_fields() {
        if !values.has_value(field.id()) {
            errors.insert(field.id(), format!("{} is required", field.label()));
        }
    }
    errors
}

/// Initial values of a freshly opened form.
///
/// Dropdown and radio fields start on their default option, checkbox fields
/// with their checked options ticked. Input fields start empty.
pub fn default_values(form: &FormDefinition) -> FormValues {
    let mut values = FormValues::new();
    for field in form.fields() {
        match field.kind() {
            FieldKind::Input(_) => {}
            FieldKind::Dropdown(list) | FieldKind::Radio(list) => {
                if let Some(option) = list.default_option() {
                    values.insert(field.id(), option.label.as_str());
                }
            }
            FieldKind::Checkbox(list) => {
                let checked = list.checked_labels();
                if !checked.is_empty() {
                    values.insert(field.id(), FieldValue::Choices(checked));
                }
            }
        }
    }
    values
}

/// Validates values against a form and records accepted submissions.
///
/// The blob store has a single submission slot; every accepted submission
/// overwrites the previous one.
#[derive(Debug, Clone)]
pub struct SubmissionEngine {
    submission_key: String,
}

impl SubmissionEngine {
    /// Create an engine storing submissions under `submission_key`.
    pub fn new(submission_key: impl Into<String>) -> Self {
        Self {
            submission_key: submission_key.into(),
        }
    }

    /// Create an engine using the configured submission key.
    pub fn from_config(config: &BuilderConfig) -> Self {
        Self::new(config.submission_key.clone())
    }

    /// Get the blob store key submissions are written to.
    pub fn submission_key(&self) -> &str {
        &self.submission_key
    }

    /// Validate `values` and, if they pass, store them as the latest submission.
    ///
    /// A validation failure stores nothing.
    pub fn submit<S: BlobStore>(
        &self,
        form: &FormDefinition,
        values: &FormValues,
        store: &mut S,
    ) -> Result<Submission, SubmitError> {
        let errors = validate(form, values);
        if !errors.is_empty() {
            debug!(missing = errors.len(), "submission rejected");
            return Err(SubmitError::Validation(errors));
        }

        let submission = Submission::new(values.clone());
        if let Err(err) = store.write_json(&self.submission_key, &submission) {
            warn!(key = %self.submission_key, error = %err, "failed to store submission");
            return Err(err.into());
        }

        info!(
            form_id = %submission.form_id,
            values = submission.values.len(),
            "submission stored"
        );
        Ok(submission)
    }

    /// Read back the latest stored submission.
    pub fn last_submission<S: BlobStore>(
        &self,
        store: &S,
    ) -> Result<Option<Submission>, StoreError> {
        store.read_json(&self.submission_key)
    }
}

impl Default for SubmissionEngine {
    fn default() -> Self {
        Self::from_config(&BuilderConfig::default())
    }
}
