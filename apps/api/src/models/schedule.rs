use serde::{Deserialize, Serialize};

use super::{push_email, Validate, Violation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Collection: `scheduleentry`. One slot of a user's weekly planning.
/// Times are free-form "HH:MM" text; no ordering check between start and end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub user_email: String,
    pub weekday: Weekday,
    pub start_time: String,
    pub end_time: String,
    pub note: Option<String>,
}

impl Validate for ScheduleEntry {
    fn validate(&self) -> Result<(), Vec<Violation>> {
        let mut violations = Vec::new();
        push_email(&mut violations, "user_email", &self.user_email);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
