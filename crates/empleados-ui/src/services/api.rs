//! HTTP client for the `/empleados` resource (REST).

use async_trait::async_trait;
use empleados_api_models::{Employee, EmployeePayload};
use empleados_core::{ApiError, ApiResult, COLLECTION_PATH, EmployeesApi, record_path};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(request: Request) -> ApiResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.binary().await.unwrap_or_default();
        Err(ApiError::from_response(status, &body))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    fn with_body(request: Request, payload: &EmployeePayload) -> ApiResult<Request> {
        request
            .json(payload)
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

#[async_trait(?Send)]
impl EmployeesApi for ApiClient {
    async fn list(&self) -> ApiResult<Vec<Employee>> {
        let request = Request::get(&self.url(COLLECTION_PATH));
        Self::decode(Self::send(request).await?).await
    }

    async fn get(&self, id: &str) -> ApiResult<Employee> {
        let request = Request::get(&self.url(&record_path(id)));
        Self::decode(Self::send(request).await?).await
    }

    async fn create(&self, payload: &EmployeePayload) -> ApiResult<Employee> {
        let request = Self::with_body(Request::post(&self.url(COLLECTION_PATH)), payload)?;
        Self::decode(Self::send(request).await?).await
    }

    async fn update(&self, id: &str, payload: &EmployeePayload) -> ApiResult<Employee> {
        let request = Self::with_body(
            Request::put(&self.url(&record_path(id))),
            payload,
        )?;
        Self::decode(Self::send(request).await?).await
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        let request = Request::delete(&self.url(&record_path(id)));
        Self::send(request).await.map(drop)
    }
}
