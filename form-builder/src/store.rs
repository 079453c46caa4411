//! The authoritative form state of a builder session.

use tracing::{debug, info, warn};

use crate::status::{FORM_SAVED, TITLE_REQUIRED};
use crate::{
    BlobStore, BuilderConfig, Field, FieldEditor, FieldId, FieldKind, FieldPatch, FieldType,
    FormDefinition, PreviewSession, SaveError, StatusMessage, StoreError, SubmissionEngine,
};

/// Holds the form being built and the currently selected field.
///
/// Fields are only ever appended or updated in place; there is no removal
/// or reordering.
#[derive(Debug, Clone)]
pub struct FormStore {
    form: FormDefinition,
    selected: Option<FieldId>,
    config: BuilderConfig,
    status: Option<StatusMessage>,
}

impl FormStore {
    /// Start an empty form with the default configuration.
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    /// Start an empty form.
    pub fn with_config(config: BuilderConfig) -> Self {
        let form = FormDefinition::new().with_button_text(config.button_text.clone());
        Self::from_form(form, config)
    }

    /// Continue editing an existing form. Nothing is selected.
    pub fn from_form(form: FormDefinition, config: BuilderConfig) -> Self {
        Self {
            form,
            selected: None,
            config,
            status: None,
        }
    }

    /// Continue editing the form saved under the configured key, if any.
    pub fn load<S: BlobStore>(store: &S, config: BuilderConfig) -> Result<Option<Self>, StoreError> {
        let form: Option<FormDefinition> = store.read_json(&config.form_key)?;
        Ok(form.map(|form| {
            debug!(fields = form.len(), "loaded saved form");
            Self::from_form(form, config)
        }))
    }

    /// Get the form being built.
    pub fn form(&self) -> &FormDefinition {
        &self.form
    }

    /// Take the form out of the store.
    pub fn into_form(self) -> FormDefinition {
        self.form
    }

    /// Get the configuration.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Set the form title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
    }

    /// Set the form description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.form.description = description.into();
    }

    /// Set the submit-button text.
    pub fn set_button_text(&mut self, text: impl Into<String>) {
        self.form.button_text = text.into();
    }

    /// Append a new field of the given type and select it.
    pub fn append_field(&mut self, field_type: FieldType) -> &Field {
        let kind = FieldKind::new(field_type, &self.config.seed_option_label);
        let field = Field::new(self.config.new_field_label.clone(), kind);
        let id = field.id();

        info!(field = %id, %field_type, "field appended");
        self.form.fields_mut().push(field);
        self.selected = Some(id);

        let index = self.form.len() - 1;
        &self.form.fields()[index]
    }

    /// Merge `patch` into the field with `id`.
    ///
    /// Unknown ids are ignored. Returns `true` if the field was found.
    pub fn update_field(&mut self, id: FieldId, patch: FieldPatch) -> bool {
        match self.form.field_mut(id) {
            Some(field) => {
                field.apply(patch);
                debug!(field = %id, "field updated");
                true
            }
            None => {
                debug!(field = %id, "update for unknown field ignored");
                false
            }
        }
    }

    /// Look up a field by id.
    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.form.field(id)
    }

    /// Select a field for editing. Unknown ids leave the selection unchanged.
    pub fn select(&mut self, id: FieldId) -> bool {
        if self.form.field(id).is_none() {
            return false;
        }
        self.selected = Some(id);
        true
    }

    /// Get the id of the selected field.
    pub fn selected_id(&self) -> Option<FieldId> {
        self.selected
    }

    /// Get the selected field.
    pub fn selected_field(&self) -> Option<&Field> {
        self.selected.and_then(|id| self.form.field(id))
    }

    /// Get the property panel for a field.
    pub fn editor(&mut self, id: FieldId) -> Option<FieldEditor<'_>> {
        self.form.field_mut(id).map(FieldEditor::new)
    }

    /// Get the property panel for the selected field.
    pub fn selected_editor(&mut self) -> Option<FieldEditor<'_>> {
        let id = self.selected?;
        self.editor(id)
    }

    /// Write the whole form to the blob store.
    ///
    /// Refused with [`SaveError::EmptyTitle`] when the title is blank.
    pub fn save<S: BlobStore>(&self, store: &mut S) -> Result<(), SaveError> {
        if !self.form.has_title() {
            return Err(SaveError::EmptyTitle);
        }
        store.write_json(&self.config.form_key, &self.form)?;
        info!(key = %self.config.form_key, fields = self.form.len(), "form saved");
        Ok(())
    }

    /// Save and report the outcome as a status message.
    pub fn handle_save<S: BlobStore>(&mut self, store: &mut S) -> &StatusMessage {
        let status = match self.save(store) {
            Ok(()) => StatusMessage::success(FORM_SAVED),
            Err(SaveError::EmptyTitle) => StatusMessage::error(TITLE_REQUIRED),
            Err(err) => {
                warn!(error = %err, "form not saved");
                StatusMessage::warning(err.to_string())
            }
        };
        self.status.insert(status)
    }

    /// Get the outcome of the last save.
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Forget the last status message.
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Preview needs at least one field.
    pub fn can_preview(&self) -> bool {
        !self.form.is_empty()
    }

    /// Open a preview of the current form.
    pub fn preview(&self) -> Option<PreviewSession> {
        PreviewSession::new(
            self.form.clone(),
            SubmissionEngine::from_config(&self.config),
        )
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldEditor, MemoryStore, StatusKind};

    #[test]
    fn append_selects_the_new_field() {
        let mut store = FormStore::new();
        let first = store.append_field(FieldType::Input).id();
        assert_eq!(store.selected_id(), Some(first));

        let second = store.append_field(FieldType::Checkbox).id();
        assert_eq!(store.selected_id(), Some(second));
        assert_ne!(first, second);

        let order: Vec<_> = store.form().fields().iter().map(Field::id).collect();
        assert_eq!(order, vec![first, second]);
    }

    #[test]
    fn choice_fields_start_with_one_option() {
        let mut store = FormStore::new();
        for field_type in [FieldType::Dropdown, FieldType::Radio, FieldType::Checkbox] {
            let field = store.append_field(field_type);
            assert_eq!(field.label(), "Untitled Field");
            assert_eq!(field.data_name(), "");
            assert!(!field.is_required());
            assert_eq!(field.options().len(), 1);
            let option = &field.options()[0];
            assert_eq!(option.label, "Option 1");
            assert!(!option.is_default && !option.checked);
        }
    }

    #[test]
    fn config_labels_are_used() {
        let config = BuilderConfig::new()
            .with_new_field_label("Question")
            .with_seed_option_label("Choice A")
            .with_button_text("Send");
        let mut store = FormStore::with_config(config);
        let field = store.append_field(FieldType::Radio);
        assert_eq!(field.label(), "Question");
        assert_eq!(field.options()[0].label, "Choice A");
        assert_eq!(store.form().button_text, "Send");
    }

    #[test]
    fn unknown_ids_change_nothing() {
        let mut store = FormStore::new();
        let id = store.append_field(FieldType::Input).id();
        let before = store.form().clone();

        let stranger = FieldId::new();
        assert!(!store.update_field(stranger, FieldPatch::new().label("x")));
        assert!(!store.select(stranger));
        assert!(store.editor(stranger).is_none());
        assert_eq!(store.form(), &before);
        assert_eq!(store.selected_id(), Some(id));
    }

    #[test]
    fn selection_follows_explicit_select() {
        let mut store = FormStore::new();
        let first = store.append_field(FieldType::Input).id();
        store.append_field(FieldType::Radio);
        assert!(store.select(first));
        assert_eq!(store.selected_field().map(Field::id), Some(first));
        assert!(matches!(store.selected_editor(), Some(FieldEditor::Input(_))));
    }

    #[test]
    fn fresh_store_has_no_selection() {
        let mut store = FormStore::new();
        assert!(store.selected_field().is_none());
        assert!(store.selected_editor().is_none());
        assert!(!store.can_preview());
        assert!(store.preview().is_none());
    }

    #[test]
    fn save_writes_whole_form() {
        let mut blobs = MemoryStore::new();
        let mut store = FormStore::new();
        store.set_title("Contact");
        store.append_field(FieldType::Input);

        assert!(store.handle_save(&mut blobs).is_success());
        let saved: FormDefinition = blobs.read_json("savedForm").unwrap().unwrap();
        assert_eq!(&saved, store.form());
    }

    #[test]
    fn blank_title_is_refused() {
        let mut blobs = MemoryStore::new();
        let mut store = FormStore::new();
        store.set_title("  ");

        let status = store.handle_save(&mut blobs).clone();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.text, "Form title is required");
        assert!(blobs.is_empty());

        store.clear_status();
        assert!(store.status().is_none());
    }
}
