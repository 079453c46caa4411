//! Core types for the form-builder crate.
//!
//! This crate provides the foundational types for defining forms:
//! - `FormDefinition` - The form being built (metadata and fields)
//! - `Field`, `FieldKind` and `FieldType` - Individual questions and their types
//! - `OptionList` and `ChoiceOption` - Options of dropdown, radio and checkbox fields
//! - `FormValues`, `FieldValue` and `Submission` - Entered data and its record
//! - `BlobStore` trait - For implementing local persistence

mod ids;
pub use ids::{FieldId, OptionId, SubmissionId};

mod data_name;
pub use data_name::{derive_data_name, is_valid_data_name};

mod option_list;
pub use option_list::{ChoiceOption, OptionList, OptionListError};

mod field;
pub use field::{Field, FieldError, FieldKind, FieldPatch, FieldType, InputSettings, InputType};

mod form_definition;
pub use form_definition::{DEFAULT_BUTTON_TEXT, FormDefinition, UNTITLED_FORM};

mod field_value;
pub use field_value::FieldValue;

mod form_values;
pub use form_values::{FormValues, ValueError};

mod submission;
pub use submission::Submission;

mod error;
pub use error::{SaveError, StoreError, SubmitError, ValidationErrors};

mod traits;
pub use traits::BlobStore;
