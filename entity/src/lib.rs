//! Domain types shared across the directory surfaces.

pub mod employee;
pub mod validate;

pub use employee::{Employee, EmployeeDraft};
pub use validate::{FieldErrors, validate_draft};
