use serde::{Deserialize, Serialize};

/// A directory record as the employee service holds it.
///
/// The identifier is assigned by the server and travels as `_id` on the wire;
/// once assigned it never changes. A record that does not exist on the server
/// yet is an [`EmployeeDraft`], never an id-less `Employee`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub position: String,
}

/// Client-held fields for create and edit submissions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub position: String,
}

impl EmployeeDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            position: position.into(),
        }
    }
}
