//! Property panels, one per field type.
//!
//! `FieldEditor` dispatches a field to the editor for its type. Every edit
//! goes through [`Field::apply`], so a new label always re-derives the data
//! name and option edits replace the option list as a whole.

use tracing::debug;

use crate::{ChoiceOption, Field, FieldPatch, FieldType, InputType, OptionId, OptionList};

/// Settings every field type has.
pub trait FieldPanel {
    fn field(&self) -> &Field;

    fn field_mut(&mut self) -> &mut Field;

    /// Change the label; the data name follows.
    fn set_label(&mut self, label: impl Into<String>)
    where
        Self: Sized,
    {
        self.field_mut().apply(FieldPatch::new().label(label));
    }

    fn set_required(&mut self, required: bool) {
        self.field_mut().apply(FieldPatch::new().required(required));
    }
}

/// Option list editing shared by dropdown, radio and checkbox panels.
pub trait OptionsPanel: FieldPanel {
    /// Append an empty option and return its id.
    fn add_option(&mut self) -> Option<OptionId> {
        edit_options(self.field_mut(), |list| Some(list.add()))
    }

    /// Remove an option. Ignored for unknown ids and for the last option.
    fn delete_option(&mut self, id: OptionId) {
        edit_options(self.field_mut(), |list| list.delete(id).then_some(()));
    }

    fn update_option_label(&mut self, id: OptionId, label: &str) {
        edit_options(self.field_mut(), |list| {
            list.update_label(id, label).then_some(())
        });
    }

    fn options(&self) -> &[ChoiceOption] {
        self.field().options()
    }
}

/// Apply `edit` to a copy of the field's options and write it back as a patch.
///
/// Nothing is written when `edit` returns `None`.
fn edit_options<R>(
    field: &mut Field,
    edit: impl FnOnce(&mut OptionList) -> Option<R>,
) -> Option<R> {
    let mut list = field.option_list()?.clone();
    let Some(result) = edit(&mut list) else {
        debug!(field = %field.id(), "option edit ignored");
        return None;
    };
    field.apply(FieldPatch::new().options(list));
    Some(result)
}

/// Panel for input fields.
#[derive(Debug)]
pub struct InputEditor<'a> {
    field: &'a mut Field,
}

impl InputEditor<'_> {
    /// Set the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.field.apply(FieldPatch::new().placeholder(placeholder));
    }

    /// Set the input type.
    pub fn set_input_type(&mut self, input_type: InputType) {
        self.field.apply(FieldPatch::new().input_type(input_type));
    }

    /// Set the input type from a picker entry such as `"Email"`.
    ///
    /// Unknown names are ignored. Returns `true` if the name was recognised.
    pub fn select_input_type(&mut self, name: &str) -> bool {
        match name.parse::<InputType>() {
            Ok(input_type) => {
                self.set_input_type(input_type);
                true
            }
            Err(_) => {
                debug!(field = %self.field.id(), name, "unknown input type ignored");
                false
            }
        }
    }
}

impl FieldPanel for InputEditor<'_> {
    fn field(&self) -> &Field {
        self.field
    }

    fn field_mut(&mut self) -> &mut Field {
        self.field
    }
}

/// Panel for dropdown and radio fields, where one option may be the default.
#[derive(Debug)]
pub struct ChoiceEditor<'a> {
    field: &'a mut Field,
}

impl ChoiceEditor<'_> {
    /// Make `id` the only default option.
    pub fn set_default(&mut self, id: OptionId) {
        edit_options(self.field, |list| list.set_default(id).then_some(()));
    }
}

impl FieldPanel for ChoiceEditor<'_> {
    fn field(&self) -> &Field {
        self.field
    }

    fn field_mut(&mut self) -> &mut Field {
        self.field
    }
}

impl OptionsPanel for ChoiceEditor<'_> {}

/// Panel for checkbox fields, where each option is checked independently.
#[derive(Debug)]
pub struct CheckboxEditor<'a> {
    field: &'a mut Field,
}

impl CheckboxEditor<'_> {
    /// Flip whether an option starts checked.
    pub fn toggle_checked(&mut self, id: OptionId) {
        edit_options(self.field, |list| list.toggle_checked(id).then_some(()));
    }
}

impl FieldPanel for CheckboxEditor<'_> {
    fn field(&self) -> &Field {
        self.field
    }

    fn field_mut(&mut self) -> &mut Field {
        self.field
    }
}

impl OptionsPanel for CheckboxEditor<'_> {}

/// The property panel matching a field's type.
#[derive(Debug)]
pub enum FieldEditor<'a> {
    Input(InputEditor<'a>),
    Dropdown(ChoiceEditor<'a>),
    Radio(ChoiceEditor<'a>),
    Checkbox(CheckboxEditor<'a>),
}

impl<'a> FieldEditor<'a> {
    /// Pick the panel for the field's type.
    pub fn new(field: &'a mut Field) -> Self {
        match field.field_type() {
            FieldType::Input => Self::Input(InputEditor { field }),
            FieldType::Dropdown => Self::Dropdown(ChoiceEditor { field }),
            FieldType::Radio => Self::Radio(ChoiceEditor { field }),
            FieldType::Checkbox => Self::Checkbox(CheckboxEditor { field }),
        }
    }

    fn panel(&self) -> &dyn FieldPanel {
        match self {
            Self::Input(editor) => editor,
            Self::Dropdown(editor) | Self::Radio(editor) => editor,
            Self::Checkbox(editor) => editor,
        }
    }

    fn panel_mut(&mut self) -> &mut dyn FieldPanel {
        match self {
            Self::Input(editor) => editor,
            Self::Dropdown(editor) | Self::Radio(editor) => editor,
            Self::Checkbox(editor) => editor,
        }
    }

    /// Get the field being edited.
    pub fn field(&self) -> &Field {
        self.panel().field()
    }

    /// Change the label; the data name follows.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.panel_mut()
            .field_mut()
            .apply(FieldPatch::new().label(label));
    }

    /// Set whether the field is required.
    pub fn set_required(&mut self, required: bool) {
        self.panel_mut().set_required(required);
    }
}
