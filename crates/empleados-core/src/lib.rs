#![forbid(unsafe_code)]
#![warn(
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! DOM-free core of the empleados front-end.
//!
//! Layout:
//! - `ports`: traits for the HTTP, notification, and navigation collaborators
//! - `listing`: employee table state, selection model, and delete flows
//! - `form`: three-step create/edit wizard with field validation
//! - `i18n`: JSON-backed translation bundles
//!
//! Everything here compiles natively so the rules can be tested without a browser;
//! the Yew app and the CLI supply the collaborator implementations.

pub mod error;
pub mod form;
pub mod i18n;
pub mod listing;
pub mod ports;
mod view_state;

#[cfg(test)]
mod testing;

pub use empleados_api_models as models;
pub use error::{ApiError, ApiResult};
pub use ports::{
    COLLECTION_PATH, Destination, EmployeesApi, Navigator, NoticeKind, Notifier, record_path,
};
