use serde::{Deserialize, Serialize};

use super::{push_email, Validate, Violation};

/// Side of the childcare match a user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Parent,
    Assistant,
}

/// Collection: `user`. Email is the de-facto identity key; creation is
/// skipped when a document with the same email already exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar_url: Option<String>,
    pub provider: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub bio: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Validate for User {
    fn validate(&self) -> Result<(), Vec<Violation>> {
        let mut violations = Vec::new();
        push_email(&mut violations, "email", &self.email);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
