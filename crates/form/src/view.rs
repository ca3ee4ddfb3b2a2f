use model::{Field, ProfileFields, ValidationErrors};

pub const FORM_TITLE: &str = "Find Your Valentine";
pub const FORM_SUBTITLE: &str =
    "Fill out this form to find your perfect match this Valentine's Day";
pub const SUBMIT_LABEL: &str = "Submit";
pub const SUBMITTING_LABEL: &str = "Submitting...";
pub const CONFIRMATION_TITLE: &str = "Thank You!";
pub const CONFIRMATION_TEXT: &str = "Your love quest has begun! We'll carefully review your profile and get back to you with potential matches.";

/// What the UI should currently show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Editable form.
    Form(FormView),
    /// Thank-you message. Nothing else is shown after submission.
    Confirmation,
}

impl View {
    pub fn is_confirmation(&self) -> bool {
        matches!(self, Self::Confirmation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub fields: ProfileFields,
    /// Inline messages shown next to the invalid fields.
    pub field_errors: ValidationErrors,
    /// Submission error shown below the form.
    pub error: Option<String>,
    /// Busy indicator.
    pub pending: bool,
    pub submit_enabled: bool,
}

impl FormView {
    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(field)
    }

    pub fn submit_label(&self) -> &'static str {
        if self.pending {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}
