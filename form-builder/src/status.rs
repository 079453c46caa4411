use std::fmt;

pub const FORM_SAVED: &str = "Form saved successfully";
pub const TITLE_REQUIRED: &str = "Form title is required";
pub const FORM_SUBMITTED: &str = "Form submitted successfully";
pub const FILL_REQUIRED: &str = "Please fill required fields";

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
    /// Non-fatal problem, such as a failed write to the blob store.
    Warning,
}

/// A transient message reporting the outcome of a save or submit.
///
/// Hosts show it and clear it after a while; clearing has no other effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    /// Create a success message.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    /// Create an error message.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    /// Create a warning message.
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Warning,
            text: text.into(),
        }
    }

    /// Check if the message reports success.
    pub fn is_success(&self) -> bool {
        self.kind == StatusKind::Success
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
