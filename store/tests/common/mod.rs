//! In-memory stand-in for the employee service.

use std::sync::{Arc, Mutex};

use entity::{Employee, EmployeeDraft};
use platform_api::{ApiError, ApiResult, EmployeeApi};

/// Fake employee service backed by a shared in-memory list.
///
/// `list` returns the authoritative server list. `create` appends — server
/// order is insertion order, unlike the store's optimistic prepend — and, like
/// the real service, normalizes submitted fields by trimming them. Each
/// operation can be forced to fail with a given message.
#[derive(Clone, Default)]
pub struct FakeDirectory {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    server: Vec<Employee>,
    next_id: u32,
    list_calls: u32,
    fail_list: Option<String>,
    fail_create: Option<String>,
    fail_update: Option<String>,
    fail_remove: Option<String>,
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with the given server list; seeded ids should be sequential
    /// ("1", "2", ...) so assigned ids continue from them.
    pub fn seeded(server: Vec<Employee>) -> Self {
        let fake = Self::default();
        {
            let mut inner = fake.inner.lock().unwrap();
            inner.next_id = server.len() as u32;
            inner.server = server;
        }
        fake
    }

    pub fn fail_list_with(&self, message: &str) {
        self.inner.lock().unwrap().fail_list = Some(message.to_string());
    }

    pub fn fail_create_with(&self, message: &str) {
        self.inner.lock().unwrap().fail_create = Some(message.to_string());
    }

    pub fn fail_update_with(&self, message: &str) {
        self.inner.lock().unwrap().fail_update = Some(message.to_string());
    }

    pub fn fail_remove_with(&self, message: &str) {
        self.inner.lock().unwrap().fail_remove = Some(message.to_string());
    }

    pub fn list_calls(&self) -> u32 {
        self.inner.lock().unwrap().list_calls
    }

    /// Current authoritative list, as the next successful `list` would
    /// return it.
    pub fn server_snapshot(&self) -> Vec<Employee> {
        self.inner.lock().unwrap().server.clone()
    }
}

impl EmployeeApi for FakeDirectory {
    async fn list(&self) -> ApiResult<Vec<Employee>> {
        let mut inner = self.inner.lock().unwrap();
        inner.list_calls += 1;
        if let Some(message) = &inner.fail_list {
            return Err(ApiError::Service(message.clone()));
        }
        Ok(inner.server.clone())
    }

    async fn create(&self, draft: &EmployeeDraft) -> ApiResult<Employee> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(message) = &inner.fail_create {
            return Err(ApiError::Service(message.clone()));
        }
        inner.next_id += 1;
        let created = Employee {
            id: inner.next_id.to_string(),
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            position: draft.position.trim().to_string(),
        };
        inner.server.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, draft: &EmployeeDraft) -> ApiResult<Employee> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(message) = &inner.fail_update {
            return Err(ApiError::Service(message.clone()));
        }
        let Some(slot) = inner.server.iter_mut().find(|it| it.id == id) else {
            return Err(ApiError::Service("Employee not found".into()));
        };
        slot.name = draft.name.trim().to_string();
        slot.email = draft.email.trim().to_string();
        slot.position = draft.position.trim().to_string();
        Ok(slot.clone())
    }

    async fn remove(&self, id: &str) -> ApiResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(message) = &inner.fail_remove {
            return Err(ApiError::Service(message.clone()));
        }
        let before = inner.server.len();
        inner.server.retain(|it| it.id != id);
        if inner.server.len() == before {
            return Err(ApiError::Service("Employee not found".into()));
        }
        Ok(())
    }
}

pub fn employee(id: &str, name: &str, email: &str) -> Employee {
    Employee {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        position: "Dev".into(),
    }
}
