use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::OptionId;

/// Error raised when an option list would break its invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionListError {
    #[error("A choice field needs at least one option")]
    Empty,

    #[error("Duplicate option id: {0}")]
    DuplicateId(OptionId),

    #[error("More than one default option: {0} and {1}")]
    MultipleDefaults(OptionId, OptionId),
}

/// One selectable choice of a dropdown, radio or checkbox field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    pub id: OptionId,

    /// Display text; may be empty while being edited.
    pub label: String,

    /// Pre-selected choice (dropdown and radio fields).
    #[serde(default)]
    pub is_default: bool,

    /// Pre-checked box (checkbox fields).
    #[serde(default)]
    pub checked: bool,
}

impl ChoiceOption {
    /// Create an option with a fresh id and both flags cleared.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: OptionId::new(),
            label: label.into(),
            is_default: false,
            checked: false,
        }
    }
}

/// The ordered, never-empty options of a choice field.
///
/// Every editing operation is a silent no-op when the option id is unknown,
/// and deleting the last remaining option is refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OptionListRepr")]
pub struct OptionList {
    options: Vec<ChoiceOption>,
}

#[derive(Deserialize)]
struct OptionListRepr {
    options: Vec<ChoiceOption>,
}

impl TryFrom<OptionListRepr> for OptionList {
    type Error = OptionListError;

    fn try_from(repr: OptionListRepr) -> Result<Self, Self::Error> {
        Self::new(repr.options)
    }
}

impl OptionList {
    /// Build a list from existing options.
    ///
    /// Fails if the list is empty, repeats an option id, or marks more than
    /// one option as default.
    pub fn new(options: Vec<ChoiceOption>) -> Result<Self, OptionListError> {
        if options.is_empty() {
            return Err(OptionListError::Empty);
        }
        let mut seen = HashSet::with_capacity(options.len());
        let mut default = None;
        for option in &options {
            if !seen.insert(option.id) {
                return Err(OptionListError::DuplicateId(option.id));
            }
            if option.is_default {
                if let Some(first) = default {
                    return Err(OptionListError::MultipleDefaults(first, option.id));
                }
                default = Some(option.id);
            }
        }
        Ok(Self { options })
    }

    /// Create a list holding a single unset option with the given label.
    pub fn seeded(label: impl Into<String>) -> Self {
        Self {
            options: vec![ChoiceOption::new(label)],
        }
    }

    /// Get the options in display order.
    pub fn options(&self) -> &[ChoiceOption] {
        &self.options
    }

    /// Iterate over the options in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, ChoiceOption> {
        self.options.iter()
    }

    /// Get the number of options (always at least one).
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always `false`; present for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Look up an option by id.
    pub fn get(&self, id: OptionId) -> Option<&ChoiceOption> {
        self.options.iter().find(|option| option.id == id)
    }

    fn get_mut(&mut self, id: OptionId) -> Option<&mut ChoiceOption> {
        self.options.iter_mut().find(|option| option.id == id)
    }

    /// Append an option with an empty label and return its id.
    pub fn add(&mut self) -> OptionId {
        let option = ChoiceOption::new("");
        let id = option.id;
        self.options.push(option);
        id
    }

    /// Remove an option. Returns `false` if the id is unknown or it is the last one.
    pub fn delete(&mut self, id: OptionId) -> bool {
        if self.options.len() <= 1 {
            return false;
        }
        let before = self.options.len();
        self.options.retain(|option| option.id != id);
        self.options.len() != before
    }

    /// Replace the label of an option. Returns `false` if the id is unknown.
    pub fn update_label(&mut self, id: OptionId, label: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(option) => {
                option.label = label.into();
                true
            }
            None => false,
        }
    }

    /// Make `id` the only default option. Returns `false` if the id is unknown.
    pub fn set_default(&mut self, id: OptionId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        for option in &mut self.options {
            option.is_default = option.id == id;
        }
        true
    }

    /// Flip the `checked` flag of one option. Returns `false` if the id is unknown.
    pub fn toggle_checked(&mut self, id: OptionId) -> bool {
        match self.get_mut(id) {
            Some(option) => {
                option.checked = !option.checked;
                true
            }
            None => false,
        }
    }

    /// The option marked as default, if any.
    pub fn default_option(&self) -> Option<&ChoiceOption> {
        self.options.iter().find(|option| option.is_default)
    }

    /// Labels of all checked options, in display order.
    pub fn checked_labels(&self) -> Vec<String> {
        self.labels_where(|option| option.checked)
    }

    /// Labels of the options matching `pick`, in display order.
    ///
    /// Options sharing a label contribute it once.
    pub fn labels_where(&self, mut pick: impl FnMut(&ChoiceOption) -> bool) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        for option in &self.options {
            if pick(option) && !labels.contains(&option.label) {
                labels.push(option.label.clone());
            }
        }
        labels
    }

    /// Check whether any option carries this label.
    pub fn has_label(&self, label: &str) -> bool {
        self.options.iter().any(|option| option.label == label)
    }
}

impl<'a> IntoIterator for &'a OptionList {
    type Item = &'a ChoiceOption;
    type IntoIter = std::slice::Iter<'a, ChoiceOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}
