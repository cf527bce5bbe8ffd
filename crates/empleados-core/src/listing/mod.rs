//! Employee table: collection state, selection model, and delete flows.
//!
//! # Design
//! - `state` holds pure reducers tested without a runtime.
//! - `controller` sequences API calls and reports through the notifier.

pub mod actions;
pub mod controller;
pub mod state;

pub use actions::{BulkDeletePolicy, BulkDeleteReport, RowAction};
pub use controller::ListingController;
pub use state::{ListingState, LoadState, SelectionSet};
