//! Client contract for the remote employee service.

mod http;

pub use http::HttpEmployeeApi;

use entity::{Employee, EmployeeDraft};
use thiserror::Error;

/// Shared client result type.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure shape exposed to callers.
///
/// Every failure collapses to a plain message: server-side rejections
/// (invalid fields, unknown id) arrive as [`ApiError::Service`] carrying
/// whatever message the service returned, and callers branch on success or
/// failure only, never on a subtype. No call is retried.
#[derive(Clone, Debug, Error)]
pub enum ApiError {
    /// Transport-level failure with no usable response. Also covers client
    /// construction problems such as an unparseable base URL.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response from the employee service.
    #[error("{0}")]
    Service(String),
}

/// Operations the employee service exposes.
///
/// Consumers take this trait as an injected dependency so tests can
/// substitute an in-memory service for the HTTP one.
#[allow(async_fn_in_trait)]
pub trait EmployeeApi {
    /// Full collection, in server order.
    async fn list(&self) -> ApiResult<Vec<Employee>>;
    /// Creates a record; the server assigns the id.
    async fn create(&self, draft: &EmployeeDraft) -> ApiResult<Employee>;
    /// Rewrites the record with the given id.
    async fn update(&self, id: &str, draft: &EmployeeDraft) -> ApiResult<Employee>;
    /// Deletes the record with the given id.
    async fn remove(&self, id: &str) -> ApiResult<()>;
}
