//! Reducer-style state for the employee collection.

use entity::Employee;

/// Snapshot of the directory view.
///
/// `loading` is true only while a fetch-all is in flight. `error` is cleared
/// whenever a fetch-all starts and holds the last recorded failure message
/// otherwise.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
    pub items: Vec<Employee>,
    pub loading: bool,
    pub error: Option<String>,
    pub search: String,
}

/// State transitions, folded over [`State`] by [`reduce`].
#[derive(Clone, Debug)]
pub enum Action {
    /// A fetch-all started: loading begins, stale errors clear.
    FetchStarted,
    /// A fetch-all landed: the server list replaces the local one.
    Loaded(Vec<Employee>),
    /// Optimistic prepend of a freshly created record.
    Created(Employee),
    /// In-place replacement of the record with the matching id.
    Updated(Employee),
    /// Drop the record with the given id.
    Removed(String),
    /// A call failed: loading stops and the message is recorded.
    Failed(String),
    /// New search text. Never touches the network.
    SearchChanged(String),
}

/// Pure transition function; no other code mutates [`State`].
pub fn reduce(mut state: State, action: Action) -> State {
    match action {
        Action::FetchStarted => {
            state.loading = true;
            state.error = None;
        }
        Action::Loaded(items) => {
            state.items = items;
            state.loading = false;
            state.error = None;
        }
        Action::Created(employee) => state.items.insert(0, employee),
        Action::Updated(employee) => {
            if let Some(slot) = state.items.iter_mut().find(|it| it.id == employee.id) {
                *slot = employee;
            }
        }
        Action::Removed(id) => state.items.retain(|it| it.id != id),
        Action::Failed(message) => {
            state.loading = false;
            state.error = Some(message);
        }
        Action::SearchChanged(search) => state.search = search,
    }
    state
}
