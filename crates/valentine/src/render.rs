//! Plain text rendering of the form views.

use std::fmt::Write;

use form::{
    FormView, View,
    view::{CONFIRMATION_TEXT, CONFIRMATION_TITLE, FORM_SUBTITLE, FORM_TITLE},
};
use model::{Field, Gender};

pub fn render_header() -> String {
    format!("<3 {FORM_TITLE}\n{FORM_SUBTITLE}\n")
}

pub fn render_view(view: &View) -> String {
    match view {
        View::Confirmation => render_confirmation(),
        View::Form(form) => render_form(form),
    }
}

fn render_confirmation() -> String {
    format!("<3 {CONFIRMATION_TITLE}\n{CONFIRMATION_TEXT}\n")
}

fn render_form(form: &FormView) -> String {
    let mut text = render_header();
    text.push('\n');

    for field in Field::ALL {
        let value = form.fields.get(field);
        let value = if value.is_empty() { "-" } else { value };
        let _ = writeln!(text, "{}: {}", field.label(), value);
        if let Some(message) = form.field_error(field) {
            let _ = writeln!(text, "  ! {message}");
        }
    }

    text.push('\n');
    if form.submit_enabled {
        let _ = writeln!(text, "[ {} ]", form.submit_label());
    } else {
        let _ = writeln!(text, "[ {} ] (disabled)", form.submit_label());
    }

    if let Some(error) = &form.error {
        let _ = writeln!(text, "{error}");
    }

    text
}

/// Prompt line for one field.
pub fn render_prompt(field: Field) -> String {
    let mut text = String::new();
    if field == Field::Gender {
        let options = Gender::ALL
            .iter()
            .map(|g| format!("{} ({})", g.label(), g.as_str()))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(text, "Options: {options}");
    }

    let optional = if field.is_required() { "" } else { ", optional" };
    let _ = write!(text, "{} [{}{}]: ", field.label(), field.placeholder(), optional);
    text
}

#[cfg(test)]
mod tests {
    use form::{SUBMIT_ERROR_MESSAGE, view::SUBMITTING_LABEL};
    use model::{ProfileFields, ValidationErrors};

    use super::*;

    fn form_view() -> FormView {
        FormView {
            fields: ProfileFields::default().with(Field::Name, "Ada"),
            field_errors: ValidationErrors::new(),
            error: None,
            pending: false,
            submit_enabled: true,
        }
    }

    #[test]
    fn confirmation_shows_only_thank_you() {
        let text = render_view(&View::Confirmation);
        assert!(text.contains(CONFIRMATION_TITLE));
        assert!(text.contains(CONFIRMATION_TEXT));
        assert!(!text.contains(FORM_TITLE));
        assert!(!text.contains("Ada"));
    }

    #[test]
    fn form_shows_values_and_inline_errors() {
        let mut view = form_view();
        view.field_errors.add(Field::Age, "Minimum age is 18");

        let text = render_view(&View::Form(view));
        assert!(text.contains(FORM_TITLE));
        assert!(text.contains("Name: Ada"));
        assert!(text.contains("Age: -\n  ! Minimum age is 18"));
        assert!(text.contains("[ Submit ]"));
    }

    #[test]
    fn pending_form_disables_submit() {
        let mut view = form_view();
        view.pending = true;
        view.submit_enabled = false;

        let text = render_view(&View::Form(view));
        assert!(text.contains(&format!("[ {SUBMITTING_LABEL} ] (disabled)")));
    }

    #[test]
    fn submit_error_is_below_form() {
        let mut view = form_view();
        view.error = Some(SUBMIT_ERROR_MESSAGE.to_string());

        let text = render_view(&View::Form(view));
        let submit = text.find("[ Submit ]").unwrap();
        let error = text.find(SUBMIT_ERROR_MESSAGE).unwrap();
        assert!(error > submit);
    }

    #[test]
    fn gender_prompt_lists_options() {
        let text = render_prompt(Field::Gender);
        assert!(text.contains("Non-binary (non-binary)"));
        assert!(text.ends_with("Gender [Select gender]: "));
        assert!(render_prompt(Field::IdealDate).contains(", optional]"));
    }
}
