//! Shared HTTP client, error types, and the REST implementation of `EmployeesApi`.

use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use empleados_api_models::{Employee, EmployeePayload};
use empleados_core::i18n::TranslationBundle;
use empleados_core::{ApiError, ApiResult, COLLECTION_PATH, EmployeesApi, record_path};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::cli::Cli;

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

/// Dependencies constructed from environment flags and CLI options.
#[derive(Clone)]
pub(crate) struct CliDependencies {
    pub(crate) client: Client,
}

impl CliDependencies {
    /// Construct an HTTP client that tags every request with `trace_id`.
    pub(crate) fn from_env(cli: &Cli, trace_id: &str) -> CliResult<Self> {
        let mut default_headers = HeaderMap::new();
        let request_id = HeaderValue::from_str(trace_id).map_err(|_| {
            CliError::failure(anyhow!("trace identifier contains invalid characters"))
        })?;
        default_headers.insert(HEADER_REQUEST_ID, request_id);

        let client = Client::builder()
            .timeout(Duration::from_secs(cli.timeout))
            .default_headers(default_headers)
            .build()
            .map_err(|err| CliError::failure(anyhow!("failed to build HTTP client: {err}")))?;

        Ok(Self { client })
    }
}

/// Application context passed to command handlers.
#[derive(Clone)]
pub(crate) struct AppContext {
    pub(crate) api: HttpEmployeesApi,
    pub(crate) bundle: TranslationBundle,
}

impl AppContext {
    pub(crate) fn new(client: Client, base_url: Url, bundle: TranslationBundle) -> Self {
        Self {
            api: HttpEmployeesApi { client, base_url },
            bundle,
        }
    }
}

/// `reqwest`-backed client for the `/empleados` resource.
#[derive(Clone)]
pub(crate) struct HttpEmployeesApi {
    client: Client,
    base_url: Url,
}

impl HttpEmployeesApi {
    /// Append `path` to the base URL, keeping any path prefix the base carries.
    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{path}"))
            .map_err(|err| ApiError::Transport(format!("invalid base URL: {err}")))
    }

    async fn send(request: RequestBuilder) -> ApiResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = response.bytes().await.unwrap_or_default();
        tracing::debug!(status, "API rejected request");
        Err(ApiError::from_response(status, &body))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

#[async_trait(?Send)]
impl EmployeesApi for HttpEmployeesApi {
    async fn list(&self) -> ApiResult<Vec<Employee>> {
        let url = self.endpoint(COLLECTION_PATH)?;
        Self::decode(Self::send(self.client.get(url)).await?).await
    }

    async fn get(&self, id: &str) -> ApiResult<Employee> {
        let url = self.endpoint(&record_path(id))?;
        Self::decode(Self::send(self.client.get(url)).await?).await
    }

    async fn create(&self, payload: &EmployeePayload) -> ApiResult<Employee> {
        let url = self.endpoint(COLLECTION_PATH)?;
        Self::decode(Self::send(self.client.post(url).json(payload)).await?).await
    }

    async fn update(&self, id: &str, payload: &EmployeePayload) -> ApiResult<Employee> {
        let url = self.endpoint(&record_path(id))?;
        Self::decode(Self::send(self.client.put(url).json(payload)).await?).await
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        let url = self.endpoint(&record_path(id))?;
        Self::send(self.client.delete(url)).await.map(drop)
    }
}

/// Parse the API URL provided to the CLI.
pub(crate) fn parse_url(input: &str) -> Result<Url, String> {
    input
        .parse::<Url>()
        .map_err(|err| format!("invalid URL '{input}': {err}"))
}

/// Classify an API failure into a CLI error, using `message` as the user-facing text.
pub(crate) fn classify_api_error(err: &ApiError, message: String) -> CliError {
    match err {
        ApiError::Status {
            status: 400 | 409 | 422,
            ..
        } => CliError::validation(message),
        ApiError::Status { status, .. } => {
            CliError::failure(anyhow!("{message} (status {status})"))
        }
        ApiError::Transport(detail) | ApiError::Decode(detail) => {
            CliError::failure(anyhow!("{detail}").context(message))
        }
    }
}
