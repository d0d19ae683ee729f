//! Field rules for employee submissions.

use std::collections::BTreeMap;

use crate::EmployeeDraft;

/// Field-name to message mapping; an empty map means the draft is valid.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Checks a draft against the form rules.
///
/// Mirrors what the service enforces closely enough that a draft passing here
/// is normally accepted; the server stays authoritative either way.
pub fn validate_draft(draft: &EmployeeDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if draft.name.trim().chars().count() < 2 {
        errors.insert("name", "Name must be at least 2 characters");
    }
    if !email_shape_ok(&draft.email) {
        errors.insert("email", "Invalid email");
    }
    if draft.position.trim().chars().count() < 2 {
        errors.insert("position", "Position is required");
    }
    errors
}

/// Minimal shape check: non-whitespace `@` non-whitespace `.` non-whitespace.
/// Not an RFC validation.
fn email_shape_ok(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some(at) = email.find('@') else {
        return false;
    };
    if at == 0 {
        return false;
    }
    let tail = &email[at + 1..];
    tail.char_indices()
        .any(|(idx, ch)| ch == '.' && idx > 0 && idx + 1 < tail.len())
}
