//! Row and bulk actions emitted from the table, plus their message helpers.

use crate::error::ApiError;
use crate::i18n::TranslationBundle;

/// Entries of the right-click context menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    /// Open the edit form for the row.
    Edit,
    /// Delete the row.
    Delete,
}

impl RowAction {
    /// Menu entries in display order.
    pub const MENU: [Self; 2] = [Self::Edit, Self::Delete];

    /// Translation key for the menu label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Edit => "listing.edit",
            Self::Delete => "listing.delete",
        }
    }

    /// Destructive entries get danger styling.
    #[must_use]
    pub const fn is_destructive(self) -> bool {
        matches!(self, Self::Delete)
    }
}

/// How local rows are reconciled when some deletes of a bulk request fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BulkDeletePolicy {
    /// Any failure discards the whole local update.
    #[default]
    AllOrNothing,
    /// Rows whose delete succeeded are removed; failed rows stay listed and selected.
    Reconcile,
}

/// Per-identifier outcome of a bulk delete.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct BulkDeleteReport {
    /// Identifiers the server confirmed as deleted.
    pub succeeded: Vec<String>,
    /// Identifiers whose delete was rejected, with the reason.
    pub failed: Vec<(String, ApiError)>,
}

impl BulkDeleteReport {
    /// Number of delete requests issued.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    /// Whether every request succeeded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Identifiers the listing should drop under `policy`.
    #[must_use]
    pub fn removable(&self, policy: BulkDeletePolicy) -> &[String] {
        match policy {
            BulkDeletePolicy::AllOrNothing if !self.is_complete() => &[],
            BulkDeletePolicy::AllOrNothing | BulkDeletePolicy::Reconcile => &self.succeeded,
        }
    }
}

/// Error toast for a rejected single delete.
#[must_use]
pub fn delete_error_message(bundle: &TranslationBundle, err: &ApiError) -> String {
    err.user_message(|| bundle.text("listing.delete_failed", "Error al eliminar"))
}

/// Error toast for a bulk delete with at least one failure.
#[must_use]
pub fn bulk_error_message(
    bundle: &TranslationBundle,
    report: &BulkDeleteReport,
    policy: BulkDeletePolicy,
) -> String {
    match policy {
        BulkDeletePolicy::AllOrNothing => {
            bundle.text("listing.bulk_delete_failed", "Error al eliminar")
        }
        BulkDeletePolicy::Reconcile => bundle.text_with(
            "listing.bulk_delete_partial",
            "Error al eliminar",
            &[
                ("failed", report.failed.len().to_string()),
                ("total", report.attempted().to_string()),
            ],
        ),
    }
}
