use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{FieldId, FieldValue};

/// Error type for value access operations.
#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    #[error("Missing value for field: {0}")]
    MissingField(FieldId),

    #[error("Type mismatch for field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: FieldId,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Values entered while filling in a form, keyed by field id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    values: HashMap<FieldId, FieldValue>,
}

impl FormValues {
    /// Create a new empty value map.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Add a value, builder style.
    pub fn with(mut self, field: FieldId, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// Set the value of a field, replacing any previous one.
    pub fn insert(&mut self, field: FieldId, value: impl Into<FieldValue>) {
        self.values.insert(field, value.into());
    }

    /// Get the value entered for a field.
    pub fn get(&self, field: FieldId) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    /// Check if a value was entered for a field, blank or not.
    pub fn contains(&self, field: FieldId) -> bool {
        self.values.contains_key(&field)
    }

    /// Remove the value of a field.
    pub fn remove(&mut self, field: FieldId) -> Option<FieldValue> {
        self.values.remove(&field)
    }

    /// Get an iterator over all field-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &FieldValue)> {
        self.values.iter()
    }

    /// Get the number of fields with a value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no values were entered.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the text value of a field.
    pub fn get_text(&self, field: FieldId) -> Result<&str, ValueError> {
        match self.get(field) {
            Some(FieldValue::Text(text)) => Ok(text),
            Some(other) => Err(ValueError::TypeMismatch {
                field,
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(ValueError::MissingField(field)),
        }
    }

    /// Get the chosen labels of a checkbox field.
    pub fn get_choices(&self, field: FieldId) -> Result<&[String], ValueError> {
        match self.get(field) {
            Some(FieldValue::Choices(labels)) => Ok(labels),
            Some(other) => Err(ValueError::TypeMismatch {
                field,
                expected: "Choices",
                actual: other.type_name(),
            }),
            None => Err(ValueError::MissingField(field)),
        }
    }

    /// Check if a field has a non-blank value.
    ///
    /// Missing values, empty strings and empty selections all count as blank.
    pub fn has_value(&self, field: FieldId) -> bool {
        self.get(field).is_some_and(|value| !value.is_blank())
    }
}

impl IntoIterator for FormValues {
    type Item = (FieldId, FieldValue);
    type IntoIter = std::collections::hash_map::IntoIter<FieldId, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a FormValues {
    type Item = (&'a FieldId, &'a FieldValue);
    type IntoIter = std::collections::hash_map::Iter<'a, FieldId, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl FromIterator<(FieldId, FieldValue)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (FieldId, FieldValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let name = FieldId::new();
        let toppings = FieldId::new();
        let values = FormValues::new()
            .with(name, "Alice")
            .with(toppings, vec!["Cheese", "Olives"]);

        assert_eq!(values.get_text(name).unwrap(), "Alice");
        assert_eq!(values.get_choices(toppings).unwrap().len(), 2);
    }

    #[test]
    fn type_mismatch_error() {
        let toppings = FieldId::new();
        let values = FormValues::new().with(toppings, vec!["Cheese"]);
        assert!(matches!(
            values.get_text(toppings),
            Err(ValueError::TypeMismatch { .. })
        ));
        assert!(matches!(
            values.get_text(FieldId::new()),
            Err(ValueError::MissingField(_))
        ));
    }

    #[test]
    fn blank_values_do_not_count() {
        let empty = FieldId::new();
        let nothing_ticked = FieldId::new();
        let values = FormValues::new()
            .with(empty, "")
            .with(nothing_ticked, Vec::<String>::new());

        assert!(!values.has_value(empty));
        assert!(!values.has_value(nothing_ticked));
        assert!(!values.has_value(FieldId::new()));
    }

    #[test]
    fn serializes_as_flat_object() {
        let id = FieldId::new();
        let values = FormValues::new().with(id, "hello");
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json[id.to_string()], "hello");
    }
}
