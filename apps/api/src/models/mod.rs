//! Entity schemas and their field-level validation.
//!
//! Each persisted shape maps to one collection named after its lowercase
//! type. Enum-membership checks happen at deserialization (serde rejects
//! unknown members, which Axum surfaces as a client fault); email format and
//! numeric lower bounds are covered by the explicit [`Validate`] impls so the
//! violated constraint can be reported by name.

pub mod announcement;
pub mod calc;
pub mod contract;
pub mod schedule;
pub mod user;

use std::fmt;

/// One violated field constraint, reported back to the client verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub constraint: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.constraint)
    }
}

/// Field-level validation producing the full violation list, not just the
/// first failure.
pub trait Validate {
    fn validate(&self) -> Result<(), Vec<Violation>>;
}

/// Minimal email shape check: one `@`, non-empty local part, dotted domain,
/// no whitespace. A format gate, not deliverability verification.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
        && !domain.contains('@')
}

pub(crate) fn push_email(violations: &mut Vec<Violation>, field: &'static str, value: &str) {
    if !is_valid_email(value) {
        violations.push(Violation {
            field,
            constraint: format!("'{value}' is not a valid email address"),
        });
    }
}

pub(crate) fn push_non_negative(violations: &mut Vec<Violation>, field: &'static str, value: f64) {
    if value < 0.0 {
        violations.push(Violation {
            field,
            constraint: "must be greater than or equal to 0".to_string(),
        });
    }
}

pub(crate) fn push_non_negative_int(
    violations: &mut Vec<Violation>,
    field: &'static str,
    value: i64,
) {
    if value < 0 {
        violations.push(Violation {
            field,
            constraint: "must be greater than or equal to 0".to_string(),
        });
    }
}

/// Validates a single email-typed query parameter.
pub fn check_email(field: &'static str, value: &str) -> Result<(), Vec<Violation>> {
    let mut violations = Vec::new();
    push_email(&mut violations, field, value);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
