use serde::{Deserialize, Serialize};

use super::user::Role;
use super::{push_email, Validate, Violation};

/// Collection: `announcement`. Matching posts between parents and assistants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub title: String,
    pub description: String,
    pub author_email: String,
    pub author_role: Role,
    pub city: Option<String>,
    pub availability: Option<String>,
}

impl Validate for Announcement {
    fn validate(&self) -> Result<(), Vec<Violation>> {
        let mut violations = Vec::new();
        push_email(&mut violations, "author_email", &self.author_email);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_may_be_absent() {
        let parsed: Announcement = serde_json::from_str(
            r#"{"title":"Garde périscolaire","description":"Lun-Ven 16h-18h",
                "author_email":"p@example.com","author_role":"parent"}"#,
        )
        .unwrap();
        assert!(parsed.city.is_none());
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn author_email_is_checked() {
        let announcement = Announcement {
            title: "t".to_string(),
            description: "d".to_string(),
            author_email: "broken".to_string(),
            author_role: Role::Assistant,
            city: None,
            availability: None,
        };
        let err = announcement.validate().unwrap_err();
        assert_eq!(err[0].field, "author_email");
    }
}
