//! Listing controller: load, selection, and delete flows over the API seam.

use futures_util::future::join_all;
use std::rc::Rc;
use tracing::{debug, info, warn};

use crate::i18n::TranslationBundle;
use crate::listing::actions::{
    BulkDeletePolicy, BulkDeleteReport, RowAction, bulk_error_message, delete_error_message,
};
use crate::listing::state::{
    ListingState, begin_load, clear_selection, fail_load, remove_rows, selected_ids, set_rows,
    toggle_select_all, toggle_selection,
};
use crate::ports::{Destination, EmployeesApi, Navigator, NoticeKind, Notifier};
use crate::view_state::StateCell;

/// Owns the table state for one mounted listing view.
pub struct ListingController<A, N, R> {
    api: A,
    notifier: N,
    navigator: R,
    bundle: TranslationBundle,
    policy: BulkDeletePolicy,
    state: StateCell<ListingState>,
}

impl<A, N, R> ListingController<A, N, R>
where
    A: EmployeesApi,
    N: Notifier,
    R: Navigator,
{
    /// Create a controller in the loading state.
    pub fn new(api: A, notifier: N, navigator: R, bundle: TranslationBundle) -> Self {
        Self {
            api,
            notifier,
            navigator,
            bundle,
            policy: BulkDeletePolicy::default(),
            state: StateCell::new(ListingState::default()),
        }
    }

    /// Override how partial bulk failures are reconciled.
    #[must_use]
    pub const fn with_bulk_policy(mut self, policy: BulkDeletePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Register the callback fired after every state change.
    pub fn observe(&self, observer: impl Fn() + 'static) {
        self.state.set_observer(Some(Rc::new(observer)));
    }

    /// Stop notifying; late request completions still update the detached state.
    pub fn detach(&self) {
        self.state.set_observer(None);
    }

    /// Copy of the current state for rendering.
    #[must_use]
    pub fn state(&self) -> ListingState {
        self.state.snapshot()
    }

    /// Fetch the full collection, replacing local rows on success.
    pub async fn load(&self) {
        self.state.update(begin_load);
        match self.api.list().await {
            Ok(rows) => {
                debug!(count = rows.len(), "employees loaded");
                self.state.update(|state| set_rows(state, rows));
            }
            Err(err) => {
                warn!(error = %err, "employee list failed to load");
                let message = self
                    .bundle
                    .text("listing.load_failed", "Error al cargar los empleados");
                self.state.update(|state| fail_load(state, message));
            }
        }
    }

    /// Flip one row's selection mark.
    pub fn toggle(&self, id: &str) {
        self.state.update(|state| toggle_selection(state, id));
    }

    /// Select every row, or clear when everything is already selected.
    pub fn toggle_all(&self) {
        self.state.update(toggle_select_all);
    }

    /// Run a context-menu action for a row.
    pub async fn perform(&self, id: &str, action: RowAction) {
        match action {
            RowAction::Edit => self.edit(id),
            RowAction::Delete => {
                self.delete_one(id).await;
            }
        }
    }

    /// Delete a single row. Returns whether the server accepted it.
    pub async fn delete_one(&self, id: &str) -> bool {
        match self.api.delete(id).await {
            Ok(()) => {
                info!(id, "employee deleted");
                self.state
                    .update(|state| remove_rows(state, &[id.to_string()]));
                self.notifier.notify(
                    NoticeKind::Success,
                    self.bundle
                        .text("listing.delete_success", "Empleado eliminado"),
                );
                true
            }
            Err(err) => {
                warn!(id, error = %err, "employee delete rejected");
                self.notifier
                    .notify(NoticeKind::Error, delete_error_message(&self.bundle, &err));
                false
            }
        }
    }

    /// Delete every selected row with concurrent requests, settled as one unit.
    pub async fn delete_selected(&self) -> BulkDeleteReport {
        if self.state.read(|state| state.deleting || state.selected.is_empty()) {
            return BulkDeleteReport::default();
        }
        let ids = self.state.update(|state| {
            state.deleting = true;
            selected_ids(state)
        });

        let outcomes = join_all(ids.iter().map(|id| self.api.delete(id))).await;
        let mut report = BulkDeleteReport::default();
        for (id, outcome) in ids.into_iter().zip(outcomes) {
            match outcome {
                Ok(()) => report.succeeded.push(id),
                Err(err) => report.failed.push((id, err)),
            }
        }

        let removable = report.removable(self.policy).to_vec();
        if report.is_complete() {
            info!(count = removable.len(), "selected employees deleted");
            self.state.update(|state| {
                remove_rows(state, &removable);
                clear_selection(state);
                state.deleting = false;
            });
            self.notifier.notify(
                NoticeKind::Success,
                self.bundle
                    .text("listing.bulk_delete_success", "Empleados eliminados"),
            );
        } else {
            warn!(
                attempted = report.attempted(),
                failed = report.failed.len(),
                policy = ?self.policy,
                "bulk delete partially failed"
            );
            self.state.update(|state| {
                remove_rows(state, &removable);
                state.deleting = false;
            });
            self.notifier.notify(
                NoticeKind::Error,
                bulk_error_message(&self.bundle, &report, self.policy),
            );
        }
        report
    }

    /// Navigate to the blank form.
    pub fn create(&self) {
        self.navigator.navigate(Destination::Create);
    }

    /// Navigate to the edit form for `id`.
    pub fn edit(&self, id: &str) {
        self.navigator.navigate(Destination::Edit { id: id.to_string() });
    }
}
