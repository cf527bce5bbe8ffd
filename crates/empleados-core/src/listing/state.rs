//! Employee table state and pure transformations, testable outside wasm.

use empleados_api_models::Employee;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

/// Selection set used for bulk actions. Ordered so bulk requests are deterministic.
pub type SelectionSet = BTreeSet<String>;

/// Progress of the initial collection fetch.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Request in flight; the view shows a placeholder.
    #[default]
    Loading,
    /// Rows are available.
    Ready,
    /// Fetch failed; the message replaces the whole view.
    Failed(String),
}

/// Listing slice owned by the mounted table view.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ListingState {
    /// Rows keyed by identifier.
    pub by_id: HashMap<String, Rc<Employee>>,
    /// Identifiers in server order.
    pub visible_ids: Vec<String>,
    /// Rows marked for bulk action.
    pub selected: SelectionSet,
    /// Initial fetch status.
    pub load: LoadState,
    /// A bulk delete is in flight; further bulk requests are refused.
    pub deleting: bool,
}

/// Mark the collection as loading.
pub fn begin_load(state: &mut ListingState) {
    state.load = LoadState::Loading;
}

/// Replace rows with a fresh snapshot, keeping only selections that still exist.
pub fn set_rows(state: &mut ListingState, rows: Vec<Employee>) {
    let mut by_id = HashMap::with_capacity(rows.len());
    let mut visible_ids = Vec::with_capacity(rows.len());
    for row in rows {
        if by_id.contains_key(&row.id) {
            continue;
        }
        visible_ids.push(row.id.clone());
        by_id.insert(row.id.clone(), Rc::new(row));
    }
    state.by_id = by_id;
    state.visible_ids = visible_ids;
    state.selected.retain(|id| state.by_id.contains_key(id));
    state.load = LoadState::Ready;
}

/// Record a failed fetch. Previously loaded rows are left untouched.
pub fn fail_load(state: &mut ListingState, message: String) {
    state.load = LoadState::Failed(message);
}

/// Add or remove one identifier; identifiers not in the table are ignored.
pub fn toggle_selection(state: &mut ListingState, id: &str) {
    if !state.by_id.contains_key(id) {
        return;
    }
    if !state.selected.remove(id) {
        state.selected.insert(id.to_string());
    }
}

/// Select every visible row, or clear when all are already selected.
pub fn toggle_select_all(state: &mut ListingState) {
    if all_selected(state) {
        state.selected.clear();
    } else {
        state.selected = state.visible_ids.iter().cloned().collect();
    }
}

/// Drop the bulk selection.
pub fn clear_selection(state: &mut ListingState) {
    state.selected.clear();
}

/// Remove rows (and their selection marks) after confirmed deletes.
pub fn remove_rows(state: &mut ListingState, ids: &[String]) {
    for id in ids {
        state.by_id.remove(id);
        state.selected.remove(id);
    }
    state
        .visible_ids
        .retain(|visible| state.by_id.contains_key(visible));
}

/// Whether the selection equals the full visible set.
#[must_use]
pub fn all_selected(state: &ListingState) -> bool {
    state.selected.len() == state.visible_ids.len()
        && state
            .visible_ids
            .iter()
            .all(|id| state.selected.contains(id))
}

/// Whether one row is marked.
#[must_use]
pub fn is_selected(state: &ListingState, id: &str) -> bool {
    state.selected.contains(id)
}

/// Row count shown in the table footer.
#[must_use]
pub fn total(state: &ListingState) -> usize {
    state.visible_ids.len()
}

/// The select-all control only renders when there is something to select.
#[must_use]
pub fn show_select_all(state: &ListingState) -> bool {
    !state.visible_ids.is_empty()
}

/// Selected identifiers in deterministic order.
#[must_use]
pub fn selected_ids(state: &ListingState) -> Vec<String> {
    state.selected.iter().cloned().collect()
}

/// Visible rows in server order.
#[must_use]
pub fn select_visible_rows(state: &ListingState) -> Vec<Rc<Employee>> {
    state
        .visible_ids
        .iter()
        .filter_map(|id| state.by_id.get(id).cloned())
        .collect()
}

/// Read a row by id.
#[must_use]
pub fn select_row(state: &ListingState, id: &str) -> Option<Rc<Employee>> {
    state.by_id.get(id).cloned()
}
