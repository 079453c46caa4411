//! # form-builder
//!
//! Assemble data-collection forms, edit their fields, preview and submit them.
//! Storage-agnostic.
//!
//! A [`FormStore`] holds the form being built. Fields are appended by type
//! and edited through the property panel matching their type. A
//! [`PreviewSession`] fills the form in the way an end user would and hands
//! the values to the [`SubmissionEngine`], which validates required fields
//! and records the accepted [`Submission`] in a [`BlobStore`].
//!
//! ## Usage
//!
//! ```
//! use form_builder::{FieldEditor, FieldPanel, FieldType, FormStore, MemoryStore};
//!
//! let mut builder = FormStore::new();
//! builder.set_title("Newsletter");
//!
//! let email = builder.append_field(FieldType::Input).id();
//! if let Some(FieldEditor::Input(mut panel)) = builder.editor(email) {
//!     panel.set_label("Email Address");
//!     panel.set_required(true);
//!     panel.select_input_type("Email");
//! }
//! assert_eq!(builder.field(email).unwrap().data_name(), "email_address");
//!
//! let mut blobs = MemoryStore::new();
//! builder.save(&mut blobs).unwrap();
//!
//! let mut preview = builder.preview().unwrap();
//! assert!(preview.submit(&mut blobs).is_err());
//! assert_eq!(preview.error(email), Some("Email Address is required"));
//!
//! preview.set_text(email, "me@example.com");
//! let submission = preview.submit(&mut blobs).unwrap();
//! assert_eq!(submission.values.get_text(email).unwrap(), "me@example.com");
//! ```
//!
//! ## Field types
//!
//! - `input` - text, number, email or password input with a placeholder
//! - `dropdown` - pick one option; one option may be the default
//! - `radio` - pick one option; one option may be the default
//! - `checkbox` - tick any options; each option may be pre-checked
//!
//! ## Storage
//!
//! The form is stored under `savedForm` and the last submission under
//! `formSubmission` (both configurable through [`BuilderConfig`]).
//! [`MemoryStore`] and [`FileStore`] are provided; hosts can implement
//! [`BlobStore`] for anything else.

// Re-export all types from form-builder-types
pub use form_builder_types::*;

mod config;
pub use config::BuilderConfig;

mod status;
pub use status::{StatusKind, StatusMessage};

pub mod engine;
pub use engine::{SubmissionEngine, default_values, validate};

mod editor;
pub use editor::{
    CheckboxEditor, ChoiceEditor, FieldEditor, FieldPanel, InputEditor, OptionsPanel,
};

mod store;
pub use store::FormStore;

mod preview;
pub use preview::PreviewSession;

mod blob_store;
pub use blob_store::{FileStore, MemoryStore};
