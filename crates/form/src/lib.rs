#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]

//! Form controller for the Valentine profile form.
//!
//! The controller owns the field values and the submission lifecycle:
//!
//! ```text
//! idle --submit--> pending --insert ok---> submitted
//!                     \
//!                      `--insert failed--> idle + error message
//! ```
//!
//! Only one insert can be in flight at a time. The controller state is
//! behind a mutex which is never held while waiting for the store, so
//! the form can be read and edited during submission.
//!
//! The insert runs in its own task. If the caller stops waiting for
//! [FormController::submit], the insert still completes and the state
//! leaves pending.

pub mod view;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use error_stack::Result as StoreResult;
use model::{Field, ProfileFields, ValidationErrors};
use profile_store::{ProfileStore, StoreError};
use tracing::{error, info};

pub use view::{FormView, View};

pub const SUBMIT_ERROR_MESSAGE: &str = "Failed to submit form. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub submitted: bool,
    pub pending: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Profile was inserted and the form is now in the submitted state.
    Submitted,
    /// Insert failed. Error message is set and field values are kept.
    Failed,
}

/// Reasons for not attempting the insert at all.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Submission already in progress")]
    AlreadyPending,
    #[error("Form is already submitted")]
    AlreadySubmitted,
    #[error("Form has invalid fields: {0}")]
    Invalid(ValidationErrors),
}

#[derive(Debug, Default)]
struct FormState {
    fields: ProfileFields,
    field_errors: ValidationErrors,
    submission: SubmissionState,
}

pub struct FormController {
    store: Arc<dyn ProfileStore>,
    state: Arc<Mutex<FormState>>,
}

fn lock_state(state: &Mutex<FormState>) -> MutexGuard<'_, FormState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn finish_submission(
    state: &Mutex<FormState>,
    result: StoreResult<(), StoreError>,
) -> SubmitOutcome {
    let mut state = lock_state(state);
    state.submission.pending = false;
    match result {
        Ok(()) => {
            info!("Profile submitted");
            state.submission.submitted = true;
            state.fields = ProfileFields::default();
            SubmitOutcome::Submitted
        }
        Err(e) => {
            error!(
                "Profile submission failed, transient: {}, error: {:?}",
                e.current_context().is_transient(),
                e
            );
            state.submission.error = Some(SUBMIT_ERROR_MESSAGE.to_string());
            SubmitOutcome::Failed
        }
    }
}

impl FormController {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self {
            store,
            state: Arc::new(Mutex::new(FormState::default())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        lock_state(&self.state)
    }

    /// Update one field value. Returns false if the form is already
    /// submitted and the value was ignored.
    ///
    /// If the field currently has a validation message, the field is
    /// validated again so the message follows the new value.
    pub fn set_field(&self, field: Field, value: impl Into<String>) -> bool {
        let mut state = self.lock();
        if state.submission.submitted {
            return false;
        }

        state.fields.set(field, value);

        if state.field_errors.contains(field) {
            state.field_errors.remove(field);
            if let Some(message) = model::validate(&state.fields).get(field) {
                state.field_errors.add(field, message);
            }
        }

        true
    }

    pub fn fields(&self) -> ProfileFields {
        self.lock().fields.clone()
    }

    pub fn state(&self) -> SubmissionState {
        self.lock().submission.clone()
    }

    /// Validate current fields and show the messages in the form.
    pub fn validate(&self) -> ValidationErrors {
        let mut state = self.lock();
        let errors = model::validate(&state.fields);
        state.field_errors = errors.clone();
        errors
    }

    /// Validate and insert the current fields. At most one insert attempt
    /// is made and failed inserts are not retried.
    pub async fn submit(&self) -> Result<SubmitOutcome, SubmitError> {
        let profile = {
            let mut state = self.lock();
            if state.submission.submitted {
                return Err(SubmitError::AlreadySubmitted);
            }
            if state.submission.pending {
                return Err(SubmitError::AlreadyPending);
            }

            match state.fields.validate() {
                Ok(profile) => {
                    state.field_errors = ValidationErrors::new();
                    state.submission.pending = true;
                    state.submission.error = None;
                    profile
                }
                Err(errors) => {
                    state.field_errors = errors.clone();
                    return Err(SubmitError::Invalid(errors));
                }
            }
        };

        info!("Submitting profile");
        let store = self.store.clone();
        let state = self.state.clone();
        let insert = tokio::spawn(async move {
            let result = store.insert(&profile).await;
            finish_submission(&state, result)
        });

        match insert.await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                error!("Profile submission task failed: {}", e);
                let mut state = self.lock();
                state.submission.pending = false;
                state.submission.error = Some(SUBMIT_ERROR_MESSAGE.to_string());
                Ok(SubmitOutcome::Failed)
            }
        }
    }

    pub fn view(&self) -> View {
        let state = self.lock();
        if state.submission.submitted {
            View::Confirmation
        } else {
            View::Form(FormView {
                fields: state.fields.clone(),
                field_errors: state.field_errors.clone(),
                error: state.submission.error.clone(),
                pending: state.submission.pending,
                submit_enabled: !state.submission.pending,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    use async_trait::async_trait;
    use error_stack::{Report, Result};
    use model::Profile;
    use profile_store::{InMemoryProfileStore, StoreError};
    use tokio::sync::Notify;

    use super::*;

    #[derive(Default)]
    struct FailingStore {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ProfileStore for FailingStore {
        async fn insert(&self, _profile: &Profile) -> Result<(), StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(Report::new(StoreError::Request))
        }
    }

    #[derive(Default)]
    struct GatedStore {
        calls: AtomicUsize,
        started: Notify,
        release: Notify,
        fail: bool,
    }

    #[async_trait]
    impl ProfileStore for GatedStore {
        async fn insert(&self, _profile: &Profile) -> Result<(), StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.started.notify_one();
            self.release.notified().await;
            if self.fail {
                Err(Report::new(StoreError::Request))
            } else {
                Ok(())
            }
        }
    }

    fn fill_ada(form: &FormController) {
        form.set_field(Field::Name, "Ada");
        form.set_field(Field::Age, "29");
        form.set_field(Field::Gender, "female");
        form.set_field(Field::Email, "ada@example.com");
        form.set_field(Field::Interests, "math");
        form.set_field(Field::LookingFor, "curiosity");
    }

    async fn wait_until_not_pending(form: &FormController) {
        while form.state().pending {
            tokio::task::yield_now().await;
        }
    }

    fn form_view(form: &FormController) -> FormView {
        match form.view() {
            View::Form(view) => view,
            View::Confirmation => panic!("form was submitted"),
        }
    }

    #[tokio::test]
    async fn valid_form_is_submitted() {
        let store = Arc::new(InMemoryProfileStore::new());
        let form = FormController::new(store.clone());
        fill_ada(&form);

        assert!(form.validate().is_empty());
        assert_eq!(form.submit().await, Ok(SubmitOutcome::Submitted));

        let state = form.state();
        assert!(state.submitted);
        assert!(!state.pending);
        assert_eq!(state.error, None);
        assert_eq!(form.view(), View::Confirmation);
        assert_eq!(form.fields(), ProfileFields::default());

        let profiles = store.profiles().await;
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].name(), "Ada");
    }

    #[tokio::test]
    async fn underage_form_is_not_sent_to_store() {
        let store = Arc::new(InMemoryProfileStore::new());
        let form = FormController::new(store.clone());
        fill_ada(&form);
        form.set_field(Field::Age, "15");

        let errors = form.validate();
        assert_eq!(errors.get(Field::Age), Some("Minimum age is 18"));

        match form.submit().await {
            Err(SubmitError::Invalid(errors)) => assert!(errors.contains(Field::Age)),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(store.profile_count().await, 0);

        let view = form_view(&form);
        assert_eq!(view.field_error(Field::Age), Some("Minimum age is 18"));
        assert!(!view.pending);
        assert!(view.submit_enabled);
        assert!(!form.state().submitted);
    }

    #[tokio::test]
    async fn failed_insert_keeps_fields_and_sets_error() {
        let store = Arc::new(FailingStore::default());
        let form = FormController::new(store.clone());
        fill_ada(&form);
        let entered = form.fields();

        assert_eq!(form.submit().await, Ok(SubmitOutcome::Failed));

        let state = form.state();
        assert!(!state.submitted);
        assert!(!state.pending);
        assert_eq!(state.error.as_deref(), Some(SUBMIT_ERROR_MESSAGE));
        assert_eq!(form.fields(), entered);
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);

        let view = form_view(&form);
        assert_eq!(view.error.as_deref(), Some(SUBMIT_ERROR_MESSAGE));
        assert_eq!(view.fields, entered);
    }

    #[tokio::test]
    async fn retry_after_failure_makes_new_attempt() {
        let store = Arc::new(FailingStore::default());
        let form = FormController::new(store.clone());
        fill_ada(&form);

        assert_eq!(form.submit().await, Ok(SubmitOutcome::Failed));
        assert_eq!(form.submit().await, Ok(SubmitOutcome::Failed));
        assert_eq!(store.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn second_submit_while_pending_is_rejected() {
        let store = Arc::new(GatedStore::default());
        let form = Arc::new(FormController::new(store.clone()));
        fill_ada(&form);

        let first = tokio::spawn({
            let form = form.clone();
            async move { form.submit().await }
        });
        store.started.notified().await;

        let view = form_view(&form);
        assert!(view.pending);
        assert!(!view.submit_enabled);
        assert_eq!(view.submit_label(), view::SUBMITTING_LABEL);

        assert_eq!(form.submit().await, Err(SubmitError::AlreadyPending));

        store.release.notify_one();
        assert_eq!(first.await.unwrap(), Ok(SubmitOutcome::Submitted));
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
        assert!(form.state().submitted);
    }

    #[tokio::test]
    async fn abandoned_submit_still_finishes_and_allows_retry() {
        let store = Arc::new(GatedStore {
            fail: true,
            ..GatedStore::default()
        });
        let form = FormController::new(store.clone());
        fill_ada(&form);

        let abandoned = tokio::time::timeout(Duration::from_millis(50), form.submit()).await;
        assert!(abandoned.is_err());
        assert!(form.state().pending);

        store.release.notify_one();
        wait_until_not_pending(&form).await;

        let state = form.state();
        assert!(!state.pending);
        assert_eq!(state.error.as_deref(), Some(SUBMIT_ERROR_MESSAGE));
        assert!(form_view(&form).submit_enabled);

        store.release.notify_one();
        assert_eq!(form.submit().await, Ok(SubmitOutcome::Failed));
        assert_eq!(store.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn submitted_form_ignores_edits_and_resubmits() {
        let store = Arc::new(InMemoryProfileStore::new());
        let form = FormController::new(store.clone());
        fill_ada(&form);
        form.submit().await.unwrap();

        assert!(!form.set_field(Field::Name, "Grace"));
        assert_eq!(form.fields().name, "");
        assert_eq!(form.submit().await, Err(SubmitError::AlreadySubmitted));
        assert_eq!(store.profile_count().await, 1);
    }

    #[tokio::test]
    async fn new_submit_clears_previous_error() {
        let store = Arc::new(GatedStore::default());
        let form = Arc::new(FormController::new(store.clone()));
        fill_ada(&form);
        form.lock().submission.error = Some(SUBMIT_ERROR_MESSAGE.to_string());

        let task = tokio::spawn({
            let form = form.clone();
            async move { form.submit().await }
        });
        store.started.notified().await;
        assert_eq!(form.state().error, None);

        store.release.notify_one();
        assert_eq!(task.await.unwrap(), Ok(SubmitOutcome::Submitted));
    }

    #[test]
    fn editing_invalid_field_updates_its_message() {
        let form = FormController::new(Arc::new(InMemoryProfileStore::new()));
        fill_ada(&form);
        form.set_field(Field::Age, "15");
        form.validate();

        form.set_field(Field::Age, "200");
        assert_eq!(form_view(&form).field_error(Field::Age), Some("Maximum age is 120"));

        form.set_field(Field::Age, "30");
        assert_eq!(form_view(&form).field_error(Field::Age), None);
    }

    #[test]
    fn editing_valid_field_does_not_show_messages_early() {
        let form = FormController::new(Arc::new(InMemoryProfileStore::new()));
        form.set_field(Field::Email, "not-an-email");
        assert!(form_view(&form).field_errors.is_empty());
    }
}
