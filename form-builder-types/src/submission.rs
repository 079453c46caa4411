use serde::{Deserialize, Serialize};

use crate::{FormValues, SubmissionId};

/// The recorded result of filling in a previewed form.
///
/// `form_id` is generated when the submission is accepted; it does not
/// refer back to a stored form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub form_id: SubmissionId,
    pub values: FormValues,
}

impl Submission {
    /// Record a set of values under a freshly generated id.
    pub fn new(values: FormValues) -> Self {
        Self {
            form_id: SubmissionId::new(),
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldId;

    #[test]
    fn json_shape() {
        let field = FieldId::new();
        let submission = Submission::new(FormValues::new().with(field, "hello"));
        let json = serde_json::to_value(&submission).unwrap();

        assert_eq!(json["formId"], submission.form_id.to_string());
        assert_eq!(json["values"][field.to_string()], "hello");
    }

    #[test]
    fn every_submission_gets_its_own_id() {
        let a = Submission::new(FormValues::new());
        let b = Submission::new(FormValues::new());
        assert_ne!(a.form_id, b.form_id);
    }
}
