//! In-memory collaborators for controller tests.

use async_trait::async_trait;
use empleados_api_models::{Employee, EmployeePayload};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{ApiError, ApiResult};
use crate::ports::{Destination, EmployeesApi, Navigator, NoticeKind, Notifier};

pub(crate) fn employee(id: &str) -> Employee {
    Employee {
        id: id.to_string(),
        first_name: format!("Nombre {id}"),
        last_name: format!("Apellido {id}"),
        age: 30,
        department: "San Salvador".to_string(),
        salary: 1200.0,
    }
}

/// Request observed by [`FakeApi`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    List,
    Get(String),
    Create(EmployeePayload),
    Update(String, EmployeePayload),
    Delete(String),
}

#[derive(Default)]
struct FakeInner {
    rows: Vec<Employee>,
    calls: Vec<Call>,
    list_error: Option<ApiError>,
    get_error: Option<ApiError>,
    save_error: Option<ApiError>,
    delete_errors: HashMap<String, ApiError>,
}

/// Shared-handle fake; clones observe the same rows and call log.
#[derive(Clone, Default)]
pub(crate) struct FakeApi {
    inner: Rc<RefCell<FakeInner>>,
}

impl FakeApi {
    pub(crate) fn with_rows(rows: Vec<Employee>) -> Self {
        let api = Self::default();
        api.inner.borrow_mut().rows = rows;
        api
    }

    pub(crate) fn fail_list(&self, err: ApiError) {
        self.inner.borrow_mut().list_error = Some(err);
    }

    pub(crate) fn fail_get(&self, err: ApiError) {
        self.inner.borrow_mut().get_error = Some(err);
    }

    pub(crate) fn fail_save(&self, err: ApiError) {
        self.inner.borrow_mut().save_error = Some(err);
    }

    pub(crate) fn succeed_save(&self) {
        self.inner.borrow_mut().save_error = None;
    }

    pub(crate) fn fail_delete(&self, id: &str, err: ApiError) {
        self.inner
            .borrow_mut()
            .delete_errors
            .insert(id.to_string(), err);
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.inner.borrow().calls.clone()
    }

    fn record(&self, call: Call) {
        self.inner.borrow_mut().calls.push(call);
    }
}

#[async_trait(?Send)]
impl EmployeesApi for FakeApi {
    async fn list(&self) -> ApiResult<Vec<Employee>> {
        self.record(Call::List);
        let inner = self.inner.borrow();
        inner
            .list_error
            .clone()
            .map_or_else(|| Ok(inner.rows.clone()), Err)
    }

    async fn get(&self, id: &str) -> ApiResult<Employee> {
        self.record(Call::Get(id.to_string()));
        let inner = self.inner.borrow();
        if let Some(err) = inner.get_error.clone() {
            return Err(err);
        }
        inner
            .rows
            .iter()
            .find(|row| row.id == id)
            .cloned()
            .ok_or(ApiError::Status {
                status: 404,
                message: Some("Empleado no encontrado".to_string()),
            })
    }

    async fn create(&self, payload: &EmployeePayload) -> ApiResult<Employee> {
        self.record(Call::Create(payload.clone()));
        let mut inner = self.inner.borrow_mut();
        if let Some(err) = inner.save_error.clone() {
            return Err(err);
        }
        let created = payload.clone().into_employee(format!("new-{}", inner.rows.len() + 1));
        inner.rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, payload: &EmployeePayload) -> ApiResult<Employee> {
        self.record(Call::Update(id.to_string(), payload.clone()));
        let mut inner = self.inner.borrow_mut();
        if let Some(err) = inner.save_error.clone() {
            return Err(err);
        }
        let updated = payload.clone().into_employee(id);
        if let Some(row) = inner.rows.iter_mut().find(|row| row.id == id) {
            *row = updated.clone();
        }
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.record(Call::Delete(id.to_string()));
        // Suspend once so concurrent callers interleave like real requests.
        tokio::task::yield_now().await;
        let mut inner = self.inner.borrow_mut();
        if let Some(err) = inner.delete_errors.get(id).cloned() {
            return Err(err);
        }
        inner.rows.retain(|row| row.id != id);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingNotifier {
    notices: Rc<RefCell<Vec<(NoticeKind, String)>>>,
}

impl RecordingNotifier {
    pub(crate) fn notices(&self) -> Vec<(NoticeKind, String)> {
        self.notices.borrow().clone()
    }

    pub(crate) fn successes(&self) -> Vec<String> {
        self.of_kind(NoticeKind::Success)
    }

    pub(crate) fn errors(&self) -> Vec<String> {
        self.of_kind(NoticeKind::Error)
    }

    fn of_kind(&self, kind: NoticeKind) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter(|(seen, _)| *seen == kind)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NoticeKind, message: String) {
        self.notices.borrow_mut().push((kind, message));
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingNavigator {
    destinations: Rc<RefCell<Vec<Destination>>>,
}

impl RecordingNavigator {
    pub(crate) fn destinations(&self) -> Vec<Destination> {
        self.destinations.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, destination: Destination) {
        self.destinations.borrow_mut().push(destination);
    }
}
