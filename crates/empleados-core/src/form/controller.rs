//! Stepped create/edit form controller.

use std::rc::Rc;

use empleados_api_models::Employee;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::form::draft::{EmployeeDraft, Step};
use crate::form::schema::{Field, FieldErrors, build_payload, validate_field, validate_fields};
use crate::i18n::TranslationBundle;
use crate::ports::{Destination, EmployeesApi, Navigator, NoticeKind, Notifier};
use crate::view_state::StateCell;

/// Whether the form creates a record or edits an existing one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    /// Blank form; submits `POST`.
    Create,
    /// Primed from the record with this identifier; submits `PUT`.
    Edit(String),
}

impl FormMode {
    /// Translation key for the page heading.
    #[must_use]
    pub const fn title_key(&self) -> &'static str {
        match self {
            Self::Create => "form.create_title",
            Self::Edit(_) => "form.edit_title",
        }
    }
}

/// Lifecycle of the mounted form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormPhase {
    /// Edit mode is fetching the record.
    Loading,
    /// The record could not be fetched; the form never renders.
    LoadFailed(String),
    /// Inputs are editable.
    Editing,
    /// Final request in flight; submit controls are disabled.
    Submitting,
    /// Saved and navigated away; the draft has been discarded.
    Submitted,
}

/// Form slice owned by the mounted view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    /// Create or edit.
    pub mode: FormMode,
    /// Active wizard page.
    pub step: Step,
    /// Raw inputs.
    pub draft: EmployeeDraft,
    /// Errors currently surfaced.
    pub errors: FieldErrors,
    /// Lifecycle phase.
    pub phase: FormPhase,
}

impl FormState {
    fn new(mode: FormMode) -> Self {
        let phase = match mode {
            FormMode::Create => FormPhase::Editing,
            FormMode::Edit(_) => FormPhase::Loading,
        };
        Self {
            mode,
            step: Step::default(),
            draft: EmployeeDraft::default(),
            errors: FieldErrors::new(),
            phase,
        }
    }

    /// Whether inputs and step buttons accept interaction.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.phase == FormPhase::Editing
    }
}

/// Result of a submit attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Not on the last step, still loading, or already submitting.
    Ignored,
    /// Validation failed; nothing was sent.
    Invalid,
    /// Server accepted the record.
    Saved(Employee),
    /// Server rejected the record; the draft is untouched.
    Rejected(ApiError),
}

/// Drives the three-step wizard for one mounted form.
pub struct FormController<A, N, R> {
    api: A,
    notifier: N,
    navigator: R,
    bundle: TranslationBundle,
    state: StateCell<FormState>,
}

impl<A, N, R> FormController<A, N, R>
where
    A: EmployeesApi,
    N: Notifier,
    R: Navigator,
{
    /// Create a controller; edit mode starts in [`FormPhase::Loading`].
    pub fn new(
        mode: FormMode,
        api: A,
        notifier: N,
        navigator: R,
        bundle: TranslationBundle,
    ) -> Self {
        Self {
            api,
            notifier,
            navigator,
            bundle,
            state: StateCell::new(FormState::new(mode)),
        }
    }

    /// Register the callback fired after every state change.
    pub fn observe(&self, observer: impl Fn() + 'static) {
        self.state.set_observer(Some(Rc::new(observer)));
    }

    /// Stop notifying the view.
    pub fn detach(&self) {
        self.state.set_observer(None);
    }

    /// Copy of the current state for rendering.
    #[must_use]
    pub fn state(&self) -> FormState {
        self.state.snapshot()
    }

    /// Fetch the record in edit mode; create mode is already primed.
    pub async fn prime(&self) {
        let FormMode::Edit(id) = self.state.read(|state| state.mode.clone()) else {
            return;
        };
        match self.api.get(&id).await {
            Ok(employee) => {
                debug!(id = %id, "employee primed for editing");
                self.state.update(|state| {
                    state.draft = EmployeeDraft::from_employee(&employee);
                    state.phase = FormPhase::Editing;
                });
            }
            Err(err) => {
                warn!(id = %id, error = %err, "employee could not be loaded");
                let message = self
                    .bundle
                    .text("form.load_failed", "No se pudo cargar el empleado");
                self.state
                    .update(|state| state.phase = FormPhase::LoadFailed(message));
            }
        }
    }

    /// Record a keystroke; re-validates only fields already flagged on the active step.
    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.state.update(|state| {
            if !state.is_editable() {
                return;
            }
            state.draft.set(field, value);
            if state.errors.contains_key(&field) && state.step.fields().contains(&field) {
                match validate_field(&state.draft, field) {
                    Ok(()) => {
                        state.errors.remove(&field);
                    }
                    Err(error) => {
                        state.errors.insert(field, error);
                    }
                }
            }
        });
    }

    /// Validate the active step and advance when it passes.
    pub fn next(&self) -> bool {
        self.state.update(|state| {
            if !state.is_editable() {
                return false;
            }
            let Some(following) = state.step.next() else {
                return false;
            };
            if !check_step(state) {
                return false;
            }
            state.step = following;
            true
        })
    }

    /// Return to the previous step without validating or clearing values.
    pub fn back(&self) -> bool {
        self.state.update(|state| {
            if !state.is_editable() {
                return false;
            }
            state.step.previous().is_some_and(|previous| {
                state.step = previous;
                true
            })
        })
    }

    /// Validate the last step and send the create or update request.
    pub async fn submit(&self) -> SubmitOutcome {
        let prepared = self.state.update(|state| {
            if !state.is_editable() || !state.step.is_last() {
                return Err(SubmitOutcome::Ignored);
            }
            if !check_step(state) {
                return Err(SubmitOutcome::Invalid);
            }
            match build_payload(&state.draft) {
                Ok(payload) => {
                    state.phase = FormPhase::Submitting;
                    Ok((state.mode.clone(), payload))
                }
                Err(errors) => {
                    if let Some(field) = errors.keys().next() {
                        state.step = Step::of(*field);
                    }
                    state.errors = errors;
                    Err(SubmitOutcome::Invalid)
                }
            }
        });
        let (mode, payload) = match prepared {
            Ok(prepared) => prepared,
            Err(outcome) => return outcome,
        };

        let result = match &mode {
            FormMode::Create => self.api.create(&payload).await,
            FormMode::Edit(id) => self.api.update(id, &payload).await,
        };
        match result {
            Ok(saved) => {
                info!(id = %saved.id, "employee saved");
                let (key, default) = match &mode {
                    FormMode::Create => ("form.create_success", "Empleado creado exitosamente"),
                    FormMode::Edit(_) => (
                        "form.update_success",
                        "Empleado actualizado exitosamente",
                    ),
                };
                self.state.update(|state| {
                    state.draft = EmployeeDraft::default();
                    state.errors.clear();
                    state.phase = FormPhase::Submitted;
                });
                self.notifier
                    .notify(NoticeKind::Success, self.bundle.text(key, default));
                self.navigator.navigate(Destination::Listing);
                SubmitOutcome::Saved(saved)
            }
            Err(err) => {
                warn!(error = %err, "employee save rejected");
                let message = err.user_message(|| match &mode {
                    FormMode::Create => self.bundle.text(
                        "form.create_failed",
                        "Error inesperado al crear el empleado. Intenta nuevamente.",
                    ),
                    FormMode::Edit(_) => self.bundle.text(
                        "form.update_failed",
                        "Error inesperado al actualizar el empleado. Intenta nuevamente.",
                    ),
                });
                self.state.update(|state| {
                    state.phase = FormPhase::Editing;
                    state.step = Step::Salary;
                });
                self.notifier.notify(NoticeKind::Error, message);
                SubmitOutcome::Rejected(err)
            }
        }
    }

    /// Localized error for a field, if one is surfaced.
    #[must_use]
    pub fn error_text(&self, field: Field) -> Option<String> {
        self.state.read(|state| {
            state
                .errors
                .get(&field)
                .map(|error| error.message(&self.bundle))
        })
    }

    /// Leave the form; the draft is dropped with the view.
    pub fn cancel(&self) {
        self.navigator.navigate(Destination::Listing);
    }
}

/// Validate the active step's fields, replacing their surfaced errors.
fn check_step(state: &mut FormState) -> bool {
    let fields = state.step.fields();
    let found = validate_fields(&state.draft, fields);
    for field in fields {
        state.errors.remove(field);
    }
    let passed = found.is_empty();
    state.errors.extend(found);
    passed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, FakeApi, RecordingNavigator, RecordingNotifier, employee};
    use empleados_api_models::{Department, EmployeePayload};
    use futures_util::future::join;
    use std::cell::Cell;

    type Controller = FormController<FakeApi, RecordingNotifier, RecordingNavigator>;

    struct Harness {
        api: FakeApi,
        notifier: RecordingNotifier,
        navigator: RecordingNavigator,
        form: Controller,
    }

    fn harness(mode: FormMode, api: FakeApi) -> Harness {
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let form = FormController::new(
            mode,
            api.clone(),
            notifier.clone(),
            navigator.clone(),
            TranslationBundle::default(),
        );
        Harness {
            api,
            notifier,
            navigator,
            form,
        }
    }

    fn create() -> Harness {
        harness(FormMode::Create, FakeApi::default())
    }

    fn fill_valid(form: &Controller) {
        form.set_field(Field::FirstName, "Ana");
        form.set_field(Field::LastName, "Lopez");
        assert!(form.next());
        form.set_field(Field::Age, "30");
        form.set_field(Field::Department, "San Salvador");
        assert!(form.next());
        form.set_field(Field::Salary, "1200");
    }

    fn ana() -> EmployeePayload {
        EmployeePayload {
            first_name: "Ana".into(),
            last_name: "Lopez".into(),
            age: 30,
            department: Department::SanSalvador,
            salary: 1200.0,
        }
    }

    #[test]
    fn blank_first_name_blocks_step_one() {
        let h = create();
        h.form.set_field(Field::LastName, "Lopez");
        assert!(!h.form.next());
        let state = h.form.state();
        assert_eq!(state.step, Step::PersonalData);
        assert_eq!(
            h.form.error_text(Field::FirstName).as_deref(),
            Some("Nombre requerido")
        );
        assert_eq!(h.form.error_text(Field::LastName), None);
    }

    #[test]
    fn negative_age_blocks_step_two() {
        let h = create();
        h.form.set_field(Field::FirstName, "Ana");
        h.form.set_field(Field::LastName, "Lopez");
        assert!(h.form.next());
        h.form.set_field(Field::Age, "-1");
        h.form.set_field(Field::Department, "San Salvador");
        assert!(!h.form.next());
        assert_eq!(h.form.state().step, Step::Department);
        assert_eq!(
            h.form.error_text(Field::Age).as_deref(),
            Some("Edad debe ser mayor que 0")
        );
    }

    #[test]
    fn unknown_department_blocks_step_two() {
        let h = create();
        h.form.set_field(Field::FirstName, "Ana");
        h.form.set_field(Field::LastName, "Lopez");
        h.form.next();
        h.form.set_field(Field::Age, "30");
        h.form.set_field(Field::Department, "Atlantis");
        assert!(!h.form.next());
        assert_eq!(h.form.state().step, Step::Department);
        assert!(h.form.error_text(Field::Department).is_some());
    }

    #[test]
    fn flagged_fields_revalidate_on_edit() {
        let h = create();
        assert!(!h.form.next());
        assert!(h.form.error_text(Field::FirstName).is_some());
        h.form.set_field(Field::FirstName, "Ana");
        assert_eq!(h.form.error_text(Field::FirstName), None);
        assert!(h.form.error_text(Field::LastName).is_some());
    }

    #[test]
    fn unflagged_fields_stay_quiet_while_typing() {
        let h = create();
        h.form.set_field(Field::FirstName, "");
        assert!(h.form.state().errors.is_empty());
    }

    #[test]
    fn back_preserves_later_values_without_validation() {
        let h = create();
        fill_valid(&h.form);
        assert!(h.form.back());
        let state = h.form.state();
        assert_eq!(state.step, Step::Department);
        assert_eq!(state.draft.salary, "1200");

        h.form.set_field(Field::Age, "");
        assert!(h.form.back());
        assert!(!h.form.back());
        assert_eq!(h.form.state().step, Step::PersonalData);
    }

    #[tokio::test]
    async fn valid_create_sends_one_request_and_navigates() {
        let h = create();
        fill_valid(&h.form);
        let outcome = h.form.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Saved(_)));
        assert_eq!(h.api.calls(), [Call::Create(ana())]);
        assert_eq!(h.navigator.destinations(), [Destination::Listing]);
        assert_eq!(h.notifier.successes(), ["Empleado creado exitosamente"]);
        let state = h.form.state();
        assert_eq!(state.phase, FormPhase::Submitted);
        assert_eq!(state.draft, EmployeeDraft::default());
    }

    #[tokio::test]
    async fn valid_edit_sends_one_update() {
        let h = harness(
            FormMode::Edit("a1".into()),
            FakeApi::with_rows(vec![employee("a1")]),
        );
        h.form.prime().await;
        assert_eq!(h.form.state().draft.first_name, "Nombre a1");
        h.form.set_field(Field::FirstName, "Ana");
        h.form.set_field(Field::LastName, "Lopez");
        h.form.next();
        h.form.next();
        let outcome = h.form.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Saved(_)));
        assert_eq!(
            h.api.calls(),
            [Call::Get("a1".into()), Call::Update("a1".into(), ana())]
        );
        assert_eq!(h.notifier.successes(), ["Empleado actualizado exitosamente"]);
        assert_eq!(h.navigator.destinations(), [Destination::Listing]);
    }

    #[tokio::test]
    async fn failed_prime_blocks_the_form() {
        let api = FakeApi::default();
        api.fail_get(ApiError::Transport("offline".into()));
        let h = harness(FormMode::Edit("zz".into()), api);
        assert_eq!(h.form.state().phase, FormPhase::Loading);
        h.form.prime().await;
        assert_eq!(
            h.form.state().phase,
            FormPhase::LoadFailed("No se pudo cargar el empleado".into())
        );
        h.form.set_field(Field::FirstName, "Ana");
        assert!(h.form.state().draft.first_name.is_empty());
        assert_eq!(h.form.submit().await, SubmitOutcome::Ignored);
    }

    #[tokio::test]
    async fn rejected_submit_returns_to_step_three_with_draft() {
        let h = create();
        h.api.fail_save(ApiError::Status {
            status: 400,
            message: Some("Empleado duplicado".into()),
        });
        fill_valid(&h.form);
        let outcome = h.form.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
        let state = h.form.state();
        assert_eq!(state.step, Step::Salary);
        assert_eq!(state.phase, FormPhase::Editing);
        assert_eq!(state.draft.first_name, "Ana");
        assert_eq!(h.notifier.errors(), ["Empleado duplicado"]);
        assert!(h.navigator.destinations().is_empty());

        h.api.succeed_save();
        assert!(matches!(h.form.submit().await, SubmitOutcome::Saved(_)));
    }

    #[tokio::test]
    async fn rejection_without_reason_uses_mode_fallback() {
        let h = create();
        h.api.fail_save(ApiError::Transport("offline".into()));
        fill_valid(&h.form);
        h.form.submit().await;
        assert_eq!(
            h.notifier.errors(),
            ["Error inesperado al crear el empleado. Intenta nuevamente."]
        );
    }

    #[tokio::test]
    async fn negative_salary_never_reaches_the_network() {
        let h = create();
        fill_valid(&h.form);
        h.form.set_field(Field::Salary, "-10");
        assert_eq!(h.form.submit().await, SubmitOutcome::Invalid);
        assert_eq!(
            h.form.error_text(Field::Salary).as_deref(),
            Some("Salario debe ser positivo")
        );
        assert!(h.api.calls().is_empty());
    }

    #[tokio::test]
    async fn submit_before_last_step_is_ignored() {
        let h = create();
        assert_eq!(h.form.submit().await, SubmitOutcome::Ignored);
        assert!(h.api.calls().is_empty());
    }

    #[tokio::test]
    async fn stale_primed_department_blocks_step_two() {
        let mut stale = employee("a1");
        stale.department = "Atlantis".into();
        let h = harness(FormMode::Edit("a1".into()), FakeApi::with_rows(vec![stale]));
        h.form.prime().await;
        h.form.next();
        h.form.set_field(Field::Department, "Atlantis");
        assert!(!h.form.next());
        assert_eq!(h.form.state().step, Step::Department);
    }

    #[tokio::test]
    async fn double_submit_sends_one_request() {
        let h = create();
        fill_valid(&h.form);
        let (first, second) = join(h.form.submit(), h.form.submit()).await;
        assert!(matches!(first, SubmitOutcome::Saved(_)));
        assert_eq!(second, SubmitOutcome::Ignored);
        assert_eq!(h.api.calls().len(), 1);
    }

    #[tokio::test]
    async fn detached_view_is_not_notified() {
        let h = create();
        let renders = Rc::new(Cell::new(0));
        let counter = Rc::clone(&renders);
        h.form.observe(move || counter.set(counter.get() + 1));
        h.form.set_field(Field::FirstName, "Ana");
        assert_eq!(renders.get(), 1);
        h.form.detach();
        h.form.set_field(Field::LastName, "Lopez");
        assert_eq!(renders.get(), 1);
    }

    #[test]
    fn cancel_returns_to_listing() {
        let h = create();
        h.form.cancel();
        assert_eq!(h.navigator.destinations(), [Destination::Listing]);
        assert_eq!(FormMode::Create.title_key(), "form.create_title");
    }
}
