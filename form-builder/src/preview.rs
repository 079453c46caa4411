//! Filling in a form the way an end user would, then submitting it.

use tracing::{debug, warn};

use crate::status::{FILL_REQUIRED, FORM_SUBMITTED};
use crate::{
    BlobStore, Field, FieldId, FieldKind, FieldType, FieldValue, FormDefinition, FormValues,
    InputType, StatusMessage, Submission, SubmissionEngine, SubmitError, ValidationErrors,
    engine,
};

/// A preview of a form: entered values, per-field errors and the last
/// accepted submission, which hosts show read-only next to the form.
#[derive(Debug, Clone)]
pub struct PreviewSession {
    form: FormDefinition,
    engine: SubmissionEngine,
    values: FormValues,
    errors: ValidationErrors,
    submitted: Option<Submission>,
    status: Option<StatusMessage>,
}

impl PreviewSession {
    /// Open a preview. Returns `None` for a form without fields.
    ///
    /// Choice fields start on their default or checked options.
    pub fn new(form: FormDefinition, engine: SubmissionEngine) -> Option<Self> {
        if form.is_empty() {
            return None;
        }
        let values = engine::default_values(&form);
        Some(Self {
            form,
            engine,
            values,
            errors: ValidationErrors::new(),
            submitted: None,
            status: None,
        })
    }

    /// Get the previewed form.
    pub fn form(&self) -> &FormDefinition {
        &self.form
    }

    /// Title to display, falling back to "Untitled Form".
    pub fn title(&self) -> &str {
        self.form.display_title()
    }

    /// Submit-button text to display, falling back to "Submit".
    pub fn button_text(&self) -> &str {
        self.form.display_button_text()
    }

    /// Input type to render an input field with; `text` when unset.
    pub fn input_type(&self, id: FieldId) -> Option<InputType> {
        self.form.field(id).and_then(Field::input_type)
    }

    /// Get the values entered so far.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Get the value entered for a field.
    pub fn value(&self, id: FieldId) -> Option<&FieldValue> {
        self.values.get(id)
    }

    /// Type into an input field. Ignored for other field types.
    pub fn set_text(&mut self, id: FieldId, text: impl Into<String>) -> bool {
        match self.form.field(id).map(Field::field_type) {
            Some(FieldType::Input) => {
                self.values.insert(id, text.into());
                true
            }
            _ => {
                debug!(field = %id, "text entry ignored");
                false
            }
        }
    }

    /// Pick an option of a dropdown or radio field by its label.
    ///
    /// An empty label clears the choice. Labels that match no option are ignored.
    pub fn choose(&mut self, id: FieldId, label: &str) -> bool {
        let Some(field) = self.form.field(id) else {
            return false;
        };
        match field.kind() {
            FieldKind::Dropdown(list) | FieldKind::Radio(list)
                if label.is_empty() || list.has_label(label) =>
            {
                self.values.insert(id, label);
                true
            }
            _ => {
                debug!(field = %id, label, "choice ignored");
                false
            }
        }
    }

    /// Tick or untick an option of a checkbox field by its label.
    ///
    /// The value keeps the ticked labels in option order.
    pub fn toggle_choice(&mut self, id: FieldId, label: &str) -> bool {
        let Some(FieldKind::Checkbox(list)) = self.form.field(id).map(Field::kind) else {
            debug!(field = %id, "toggle ignored");
            return false;
        };
        if !list.has_label(label) {
            debug!(field = %id, label, "toggle of unknown option ignored");
            return false;
        }

        let current = self
            .values
            .get(id)
            .and_then(FieldValue::as_choices)
            .unwrap_or_default();
        let was_ticked = current.iter().any(|ticked| ticked == label);

        let ticked = list.labels_where(|option| {
            if option.label == label {
                !was_ticked
            } else {
                current.contains(&option.label)
            }
        });

        self.values.insert(id, FieldValue::Choices(ticked));
        true
    }

    /// Error message shown under a field after a rejected submit.
    pub fn error(&self, id: FieldId) -> Option<&str> {
        self.errors.get(id)
    }

    /// Get all messages of the last rejected submit.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Validate and submit the entered values.
    ///
    /// Validation failures are kept per field and reported as an error
    /// status; a failed write is reported as a warning. The session stays
    /// usable either way.
    pub fn submit<S: BlobStore>(&mut self, store: &mut S) -> Result<&Submission, SubmitError> {
        match self.engine.submit(&self.form, &self.values, store) {
            Ok(submission) => {
                self.errors = ValidationErrors::new();
                self.status = Some(StatusMessage::success(FORM_SUBMITTED));
                Ok(&*self.submitted.insert(submission))
            }
            Err(SubmitError::Validation(errors)) => {
                self.errors = errors.clone();
                self.status = Some(StatusMessage::error(FILL_REQUIRED));
                Err(SubmitError::Validation(errors))
            }
            Err(err) => {
                warn!(error = %err, "submission not stored");
                self.errors = ValidationErrors::new();
                self.status = Some(StatusMessage::warning(err.to_string()));
                Err(err)
            }
        }
    }

    /// The last accepted submission, if any.
    pub fn submitted(&self) -> Option<&Submission> {
        self.submitted.as_ref()
    }

    /// Every field paired with its submitted value, for a read-only view.
    ///
    /// Empty until a submission has been accepted.
    pub fn submitted_entries(&self) -> Vec<(&Field, Option<&FieldValue>)> {
        let Some(submission) = &self.submitted else {
            return Vec::new();
        };
        self.form
            .fields()
            .iter()
            .map(|field| (field, submission.values.get(field.id())))
            .collect()
    }

    /// Get the outcome of the last submit.
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Forget the last status message.
    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldEditor, FieldPatch, FormStore, MemoryStore, OptionsPanel, StatusKind};

    fn session_with(types: &[FieldType]) -> (PreviewSession, Vec<FieldId>) {
        let mut store = FormStore::new();
        let ids: Vec<_> = types.iter().map(|t| store.append_field(*t).id()).collect();
        (store.preview().unwrap(), ids)
    }

    #[test]
    fn display_fallbacks() {
        let mut store = FormStore::new();
        store.set_button_text("");
        let id = store.append_field(FieldType::Input).id();
        let session = store.preview().unwrap();

        assert_eq!(session.title(), "Untitled Form");
        assert_eq!(session.button_text(), "Submit");
        assert_eq!(session.input_type(id), Some(InputType::Text));
    }

    #[test]
    fn text_only_goes_into_input_fields() {
        let (mut session, ids) = session_with(&[FieldType::Input, FieldType::Radio]);
        assert!(session.set_text(ids[0], "hello"));
        assert!(!session.set_text(ids[1], "hello"));
        assert!(!session.set_text(FieldId::new(), "hello"));
        assert_eq!(session.values().len(), 1);
    }

    #[test]
    fn choose_accepts_known_labels() {
        let (mut session, ids) = session_with(&[FieldType::Dropdown, FieldType::Checkbox]);
        assert!(session.choose(ids[0], "Option 1"));
        assert_eq!(session.value(ids[0]), Some(&FieldValue::from("Option 1")));
        assert!(!session.choose(ids[0], "Option 9"));
        assert!(session.choose(ids[0], ""));
        assert!(session.value(ids[0]).unwrap().is_blank());
        assert!(!session.choose(ids[1], "Option 1"));
    }

    #[test]
    fn checkbox_selection_keeps_option_order() {
        let mut store = FormStore::new();
        let id = store.append_field(FieldType::Checkbox).id();
        if let Some(FieldEditor::Checkbox(mut editor)) = store.editor(id) {
            let b = editor.add_option().unwrap();
            editor.update_option_label(b, "B");
            let c = editor.add_option().unwrap();
            editor.update_option_label(c, "C");
        }
        let mut session = store.preview().unwrap();

        session.toggle_choice(id, "C");
        session.toggle_choice(id, "Option 1");
        assert_eq!(
            session.values().get_choices(id).unwrap(),
            ["Option 1".to_string(), "C".to_string()]
        );
        session.toggle_choice(id, "C");
        assert_eq!(session.values().get_choices(id).unwrap(), ["Option 1".to_string()]);
        assert!(!session.toggle_choice(id, "Z"));
    }

    #[test]
    fn seeded_and_toggled_selections_agree_on_shared_labels() {
        let mut store = FormStore::new();
        let id = store.append_field(FieldType::Checkbox).id();
        if let Some(FieldEditor::Checkbox(mut editor)) = store.editor(id) {
            let first = editor.options()[0].id;
            editor.update_option_label(first, "Same");
            let second = editor.add_option().unwrap();
            editor.update_option_label(second, "Same");
            editor.toggle_checked(first);
            editor.toggle_checked(second);
            let other = editor.add_option().unwrap();
            editor.update_option_label(other, "Other");
        }
        let mut session = store.preview().unwrap();
        assert_eq!(session.values().get_choices(id).unwrap(), ["Same".to_string()]);

        session.toggle_choice(id, "Other");
        session.toggle_choice(id, "Other");
        assert_eq!(session.values().get_choices(id).unwrap(), ["Same".to_string()]);
    }

    #[test]
    fn required_checkbox_with_only_unlabelled_option_ticked_is_rejected() {
        let mut store = FormStore::new();
        let id = store.append_field(FieldType::Checkbox).id();
        store.update_field(id, FieldPatch::new().label("Extras").required(true));
        if let Some(FieldEditor::Checkbox(mut editor)) = store.editor(id) {
            editor.add_option();
        }
        let mut session = store.preview().unwrap();
        let mut blobs = MemoryStore::new();

        assert!(session.toggle_choice(id, ""));
        assert_eq!(session.value(id), Some(&FieldValue::from(vec![""])));
        assert!(session.submit(&mut blobs).unwrap_err().is_validation());
        assert_eq!(session.error(id), Some("Extras is required"));
        assert!(blobs.is_empty());

        session.toggle_choice(id, "Option 1");
        assert!(session.submit(&mut blobs).is_ok());
    }

    #[test]
    fn rejected_submit_keeps_field_errors() {
        let mut store = FormStore::new();
        let id = store.append_field(FieldType::Input).id();
        store.update_field(id, FieldPatch::new().label("Email").required(true));
        let mut session = store.preview().unwrap();
        let mut blobs = MemoryStore::new();

        assert!(session.submit(&mut blobs).unwrap_err().is_validation());
        assert_eq!(session.error(id), Some("Email is required"));
        assert_eq!(session.status().map(|s| s.kind), Some(StatusKind::Error));
        assert!(session.submitted().is_none());
        assert!(session.submitted_entries().is_empty());
        assert!(blobs.is_empty());

        session.set_text(id, "me@example.com");
        session.submit(&mut blobs).unwrap();
        assert!(session.errors().is_empty());
        assert_eq!(session.status().map(|s| s.text.as_str()), Some("Form submitted successfully"));

        let entries = session.submitted_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].1, Some(&FieldValue::from("me@example.com")));
    }
}
