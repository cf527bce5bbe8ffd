//! Collaborator seams the controllers call into.
//!
//! # Design
//! - Futures are `?Send` so browser clients (`gloo-net`) can implement them.
//! - Notifications and navigation are fire-and-forget.

use async_trait::async_trait;
use empleados_api_models::{Employee, EmployeePayload};
use std::rc::Rc;

use crate::error::ApiResult;

/// REST collection path, relative to the configured base URL.
pub const COLLECTION_PATH: &str = "/empleados";

/// Path of one record; the identifier is percent-encoded as a single segment.
#[must_use]
pub fn record_path(id: &str) -> String {
    format!("{COLLECTION_PATH}/{}", urlencoding::encode(id))
}

/// REST collaborator for the `/empleados` resource.
#[async_trait(?Send)]
pub trait EmployeesApi {
    /// `GET /empleados`.
    async fn list(&self) -> ApiResult<Vec<Employee>>;
    /// `GET /empleados/{id}`.
    async fn get(&self, id: &str) -> ApiResult<Employee>;
    /// `POST /empleados`.
    async fn create(&self, payload: &EmployeePayload) -> ApiResult<Employee>;
    /// `PUT /empleados/{id}`.
    async fn update(&self, id: &str, payload: &EmployeePayload) -> ApiResult<Employee>;
    /// `DELETE /empleados/{id}`.
    async fn delete(&self, id: &str) -> ApiResult<()>;
}

/// One client instance shared by every mounted view.
#[async_trait(?Send)]
impl<T: EmployeesApi + ?Sized> EmployeesApi for Rc<T> {
    async fn list(&self) -> ApiResult<Vec<Employee>> {
        (**self).list().await
    }

    async fn get(&self, id: &str) -> ApiResult<Employee> {
        (**self).get(id).await
    }

    async fn create(&self, payload: &EmployeePayload) -> ApiResult<Employee> {
        (**self).create(payload).await
    }

    async fn update(&self, id: &str, payload: &EmployeePayload) -> ApiResult<Employee> {
        (**self).update(id, payload).await
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        (**self).delete(id).await
    }
}

/// Severity of a user notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// Operation completed.
    Success,
    /// Operation failed.
    Error,
}

/// Toast-style notification sink.
pub trait Notifier {
    /// Show a message; no acknowledgement is expected.
    fn notify(&self, kind: NoticeKind, message: String);
}

/// Views the controllers can send the user to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    /// Employee table.
    Listing,
    /// Blank form.
    Create,
    /// Form primed with an existing record.
    Edit {
        /// Identifier of the record to edit.
        id: String,
    },
}

impl Destination {
    /// Browser path for the destination.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Listing => "/empleados".to_string(),
            Self::Create => "/empleados/nuevo".to_string(),
            Self::Edit { id } => format!("/empleados/editar/{id}"),
        }
    }
}

/// Router sink.
pub trait Navigator {
    /// Push the destination onto the history stack.
    fn navigate(&self, destination: Destination);
}

#[cfg(test)]
mod tests {
    use super::{Destination, record_path};

    #[test]
    fn record_paths_encode_the_identifier() {
        assert_eq!(record_path("64f1"), "/empleados/64f1");
        assert_eq!(record_path("a b/c?d"), "/empleados/a%20b%2Fc%3Fd");
    }

    #[test]
    fn destinations_map_to_app_paths() {
        assert_eq!(Destination::Listing.path(), "/empleados");
        assert_eq!(Destination::Create.path(), "/empleados/nuevo");
        assert_eq!(
            Destination::Edit { id: "a1".into() }.path(),
            "/empleados/editar/a1"
        );
    }
}
