//! Reqwest implementation of the employee service contract.

use entity::{Employee, EmployeeDraft};
use reqwest::{Url, header};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::{ApiError, ApiResult, EmployeeApi};

/// HTTP client bound to one employee service base URL.
#[derive(Debug)]
pub struct HttpEmployeeApi {
    http: reqwest::Client,
    base: String,
}

impl HttpEmployeeApi {
    /// Builds a client for the given service base URL.
    ///
    /// The URL must be absolute; a trailing slash is tolerated. No request
    /// timeout is configured, matching the service contract: a call that
    /// never resolves is left to the caller's runtime.
    pub fn new(base: impl Into<String>) -> ApiResult<Self> {
        let base = base.into().trim_end_matches('/').to_string();
        Url::parse(&base)
            .map_err(|err| ApiError::Network(format!("invalid base url {base}: {err}")))?;
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(Self { http, base })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// `GET /employee/get` nests the collection under `data.employee`; the other
/// operations return the entity at the top level or wrapped in `data`.
#[derive(Debug, Deserialize)]
struct ListEnvelope {
    data: ListData,
}

#[derive(Debug, Deserialize)]
struct ListData {
    employee: Vec<Employee>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MaybeWrapped<T> {
    Direct(T),
    Wrapped { data: T },
}

impl<T> MaybeWrapped<T> {
    fn into_inner(self) -> T {
        match self {
            MaybeWrapped::Direct(value) | MaybeWrapped::Wrapped { data: value } => value,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RemoveAck {
    success: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Decodes a 2xx body, or turns a non-2xx response into [`ApiError::Service`]
/// using the body's `message` field when one is present.
async fn read_json<T: DeserializeOwned>(res: reqwest::Response) -> ApiResult<T> {
    let status = res.status();
    if status.is_success() {
        res.json::<T>()
            .await
            .map_err(|err| ApiError::Service(format!("malformed response: {err}")))
    } else {
        let message = res
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("employee service returned {status}"));
        Err(ApiError::Service(message))
    }
}

impl EmployeeApi for HttpEmployeeApi {
    #[instrument(name = "api.list", skip_all)]
    async fn list(&self) -> ApiResult<Vec<Employee>> {
        let res = self.http.get(self.endpoint("/employee/get")).send().await?;
        let envelope: ListEnvelope = read_json(res).await?;
        Ok(envelope.data.employee)
    }

    #[instrument(name = "api.create", skip_all)]
    async fn create(&self, draft: &EmployeeDraft) -> ApiResult<Employee> {
        let res = self
            .http
            .post(self.endpoint("/employee/add"))
            .json(draft)
            .send()
            .await?;
        let body: MaybeWrapped<Employee> = read_json(res).await?;
        Ok(body.into_inner())
    }

    #[instrument(name = "api.update", skip_all, fields(id = %id))]
    async fn update(&self, id: &str, draft: &EmployeeDraft) -> ApiResult<Employee> {
        let res = self
            .http
            .patch(self.endpoint(&format!("/employee/edit/{id}")))
            .json(draft)
            .send()
            .await?;
        let body: MaybeWrapped<Employee> = read_json(res).await?;
        Ok(body.into_inner())
    }

    #[instrument(name = "api.remove", skip_all, fields(id = %id))]
    async fn remove(&self, id: &str) -> ApiResult<()> {
        let res = self
            .http
            .delete(self.endpoint(&format!("/employee/delete/{id}")))
            .send()
            .await?;
        let ack: RemoveAck = read_json(res).await?;
        if ack.success == Some(false) {
            return Err(ApiError::Service("delete was not acknowledged".into()));
        }
        Ok(())
    }
}
