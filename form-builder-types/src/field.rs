use serde::{Deserialize, Serialize};

use crate::{ChoiceOption, FieldId, OptionList, derive_data_name};

/// The four kinds of field a form can hold.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FieldType {
    Input,
    Dropdown,
    Radio,
    Checkbox,
}

impl FieldType {
    /// All field types, in the order a field picker offers them.
    pub const ALL: [FieldType; 4] = [Self::Input, Self::Dropdown, Self::Radio, Self::Checkbox];

    /// Short name shown in a field picker.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Input => "Input Field",
            Self::Dropdown => "Dropdown",
            Self::Radio => "Radio Buttons",
            Self::Checkbox => "Checkbox",
        }
    }

    /// One-line description shown in a field picker.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Input => "Text, number, email, or password input",
            Self::Dropdown => "Select one option from a list",
            Self::Radio => "Select one option from multiple choices",
            Self::Checkbox => "Select multiple options",
        }
    }

    /// Check if this type carries an option list.
    pub fn is_choice(&self) -> bool {
        !matches!(self, Self::Input)
    }
}

/// The HTML-style input type of an input field.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum InputType {
    #[default]
    Text,
    Number,
    Email,
    Password,
}

/// Settings specific to input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputSettings {
    pub placeholder: String,
    pub input_type: InputType,
}

/// Type-specific part of a field.
///
/// Serialized with a `type` tag so it flattens into the field object:
/// `{"type": "dropdown", "options": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    /// Free-text input.
    Input(InputSettings),

    /// Pick one option from a drop-down list.
    Dropdown(OptionList),

    /// Pick one option from a radio group.
    Radio(OptionList),

    /// Tick any number of options in a checkbox group.
    Checkbox(OptionList),
}

impl FieldKind {
    /// Create the kind for a freshly added field.
    ///
    /// Choice kinds start with one option labelled `seed_option_label`.
    pub fn new(field_type: FieldType, seed_option_label: &str) -> Self {
        match field_type {
            FieldType::Input => Self::Input(InputSettings::default()),
            FieldType::Dropdown => Self::Dropdown(OptionList::seeded(seed_option_label)),
            FieldType::Radio => Self::Radio(OptionList::seeded(seed_option_label)),
            FieldType::Checkbox => Self::Checkbox(OptionList::seeded(seed_option_label)),
        }
    }

    /// Get the field type this kind belongs to.
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Input(_) => FieldType::Input,
            Self::Dropdown(_) => FieldType::Dropdown,
            Self::Radio(_) => FieldType::Radio,
            Self::Checkbox(_) => FieldType::Checkbox,
        }
    }

    /// Get the option list of a choice kind.
    pub fn option_list(&self) -> Option<&OptionList> {
        match self {
            Self::Input(_) => None,
            Self::Dropdown(list) | Self::Radio(list) | Self::Checkbox(list) => Some(list),
        }
    }

    fn option_list_mut(&mut self) -> Option<&mut OptionList> {
        match self {
            Self::Input(_) => None,
            Self::Dropdown(list) | Self::Radio(list) | Self::Checkbox(list) => Some(list),
        }
    }
}

/// A partial field used to update an existing one.
///
/// Only the `Some` parts are applied. A new label always re-derives the data
/// name; there is no way to set the data name directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPatch {
    pub label: Option<String>,
    pub required: Option<bool>,
    pub placeholder: Option<String>,
    pub input_type: Option<InputType>,
    pub options: Option<OptionList>,
}

impl FieldPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new label; the data name is re-derived from it.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set whether the field is required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Set the placeholder of an input field.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the input type of an input field.
    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = Some(input_type);
        self
    }

    /// Replace the option list of a choice field.
    pub fn options(mut self, options: OptionList) -> Self {
        self.options = Some(options);
        self
    }

    /// Check if the patch carries nothing to apply.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Error raised when a stored field breaks its invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Data name {data_name:?} does not match label {label:?}")]
    InvalidDataName { label: String, data_name: String },
}

/// A single question in a form.
///
/// Deserialization checks that the data name is empty or derived from the
/// label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "FieldRepr")]
pub struct Field {
    id: FieldId,

    /// The text shown to the person filling in the form.
    label: String,

    /// Machine-readable name derived from the label.
    data_name: String,

    #[serde(default)]
    required: bool,

    #[serde(flatten)]
    kind: FieldKind,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FieldRepr {
    id: FieldId,
    label: String,
    data_name: String,
    #[serde(default)]
    required: bool,
    #[serde(flatten)]
    kind: FieldKind,
}

impl TryFrom<FieldRepr> for Field {
    type Error = FieldError;

    fn try_from(repr: FieldRepr) -> Result<Self, Self::Error> {
        if !repr.data_name.is_empty() && repr.data_name != derive_data_name(&repr.label) {
            return Err(FieldError::InvalidDataName {
                label: repr.label,
                data_name: repr.data_name,
            });
        }
        Ok(Self {
            id: repr.id,
            label: repr.label,
            data_name: repr.data_name,
            required: repr.required,
            kind: repr.kind,
        })
    }
}

impl Field {
    /// Create a field with a fresh id and an empty data name.
    pub fn new(label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: FieldId::new(),
            label: label.into(),
            data_name: String::new(),
            required: false,
            kind,
        }
    }

    /// Get the field's id.
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Get the field's type, fixed at creation.
    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    /// Get the label shown to the person filling in the form.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the machine-readable name derived from the label.
    pub fn data_name(&self) -> &str {
        &self.data_name
    }

    /// Check if the field must be answered.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Get the type-specific part of the field.
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Options of a choice field; empty for input fields.
    pub fn options(&self) -> &[ChoiceOption] {
        self.kind
            .option_list()
            .map(OptionList::options)
            .unwrap_or_default()
    }

    /// Get the option list of a choice field.
    pub fn option_list(&self) -> Option<&OptionList> {
        self.kind.option_list()
    }

    /// Placeholder text of an input field.
    pub fn placeholder(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::Input(settings) => Some(&settings.placeholder),
            _ => None,
        }
    }

    /// Input type of an input field.
    pub fn input_type(&self) -> Option<InputType> {
        match &self.kind {
            FieldKind::Input(settings) => Some(settings.input_type),
            _ => None,
        }
    }

    /// Merge a patch into this field.
    ///
    /// Parts that do not apply to this field's type are skipped.
    /// Returns `true` if anything was applied.
    pub fn apply(&mut self, patch: FieldPatch) -> bool {
        let mut applied = false;

        if let Some(label) = patch.label {
            self.data_name = derive_data_name(&label);
            self.label = label;
            applied = true;
        }

        if let Some(required) = patch.required {
            self.required = required;
            applied = true;
        }

        match &mut self.kind {
            FieldKind::Input(settings) => {
                if let Some(placeholder) = patch.placeholder {
                    settings.placeholder = placeholder;
                    applied = true;
                }
                if let Some(input_type) = patch.input_type {
                    settings.input_type = input_type;
                    applied = true;
                }
                if patch.options.is_some() {
                    tracing::debug!(field = %self.id, "ignoring options patch for input field");
                }
            }
            kind => {
                if let Some(options) = patch.options
                    && let Some(list) = kind.option_list_mut()
                {
                    *list = options;
                    applied = true;
                }
                if patch.placeholder.is_some() || patch.input_type.is_some() {
                    tracing::debug!(field = %self.id, "ignoring input settings patch for choice field");
                }
            }
        }

        applied
    }
}
