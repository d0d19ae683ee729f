//! In-memory view of the employee collection, reconciled with the server
//! after every mutation.
//!
//! The server is the sole source of truth; this store is a cache with an
//! aggressive invalidation policy. Each successful mutation applies an
//! optimistic local edit for instant feedback, then unconditionally re-runs a
//! full fetch so the displayed collection converges to server truth within
//! one extra round trip, even when the server transforms the written record.

pub mod state;
pub mod view;

pub use state::{Action, State, reduce};

use entity::{Employee, EmployeeDraft};
use platform_api::{ApiError, EmployeeApi};
use tracing::debug;

/// Client-side employee collection with an injected service client.
///
/// All mutation goes through [`reduce`]; operations take `&mut self`, so two
/// mutations cannot interleave on one store. Exactly one store exists per
/// process run.
pub struct EmployeeStore<A> {
    api: A,
    state: State,
}

impl<A: EmployeeApi> EmployeeStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: State::default(),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// The held collection in display order.
    pub fn items(&self) -> &[Employee] {
        &self.state.items
    }

    /// The collection narrowed by the current search text.
    pub fn filtered(&self) -> Vec<&Employee> {
        view::filtered(&self.state.items, &self.state.search)
    }

    fn apply(&mut self, action: Action) {
        self.state = reduce(std::mem::take(&mut self.state), action);
    }

    /// Replaces the collection with the server's list.
    ///
    /// Failure is absorbed rather than returned: `error` carries the message,
    /// `loading` resets, and the stale collection stays on display.
    pub async fn fetch_all(&mut self) {
        self.apply(Action::FetchStarted);
        match self.api.list().await {
            Ok(items) => {
                debug!(count = items.len(), "directory refreshed");
                self.apply(Action::Loaded(items));
            }
            Err(err) => self.apply(Action::Failed(err.to_string())),
        }
    }

    /// Creates a record, prepends it optimistically, then reconciles.
    ///
    /// A refetch failure after a successful create does not fail the call;
    /// it lands in `error` state like any other fetch-all failure.
    pub async fn add(&mut self, draft: &EmployeeDraft) -> Result<Employee, ApiError> {
        match self.api.create(draft).await {
            Ok(created) => {
                self.apply(Action::Created(created.clone()));
                self.fetch_all().await;
                Ok(created)
            }
            Err(err) => {
                self.apply(Action::Failed(err.to_string()));
                Err(err)
            }
        }
    }

    /// Rewrites a record in place, then reconciles.
    pub async fn edit(&mut self, id: &str, draft: &EmployeeDraft) -> Result<Employee, ApiError> {
        match self.api.update(id, draft).await {
            Ok(updated) => {
                self.apply(Action::Updated(updated.clone()));
                self.fetch_all().await;
                Ok(updated)
            }
            Err(err) => {
                self.apply(Action::Failed(err.to_string()));
                Err(err)
            }
        }
    }

    /// Deletes a record, then reconciles.
    pub async fn remove(&mut self, id: &str) -> Result<(), ApiError> {
        match self.api.remove(id).await {
            Ok(()) => {
                self.apply(Action::Removed(id.to_string()));
                self.fetch_all().await;
                Ok(())
            }
            Err(err) => {
                self.apply(Action::Failed(err.to_string()));
                Err(err)
            }
        }
    }

    /// Updates the search text; no network involved.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.apply(Action::SearchChanged(search.into()));
    }
}
