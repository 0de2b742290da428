use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{push_email, push_non_negative, push_non_negative_int, Validate, Violation};

/// Collection: `contract`. Employment contract between a parent and a
/// childcare assistant. No cross-field checks: `start_date` is not compared
/// against anything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    pub parent_email: String,
    pub assistant_email: String,
    pub child_name: String,
    pub start_date: NaiveDate,
    pub hours_per_week: f64,
    pub hourly_rate: f64,
    #[serde(default = "default_paid_vacation_days")]
    pub paid_vacation_days: i64,
    pub notes: Option<String>,
}

fn default_paid_vacation_days() -> i64 {
    25
}

impl Validate for Contract {
    fn validate(&self) -> Result<(), Vec<Violation>> {
        let mut violations = Vec::new();
        push_email(&mut violations, "parent_email", &self.parent_email);
        push_email(&mut violations, "assistant_email", &self.assistant_email);
        push_non_negative(&mut violations, "hours_per_week", self.hours_per_week);
        push_non_negative(&mut violations, "hourly_rate", self.hourly_rate);
        push_non_negative_int(&mut violations, "paid_vacation_days", self.paid_vacation_days);
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

    fn sample() -> Contract {
        Contract {
            parent_email: "parent@example.com".to_string(),
            assistant_email: "assmat@example.com".to_string(),
            child_name: "Léa".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
            hours_per_week: 35.0,
            hourly_rate: 4.5,
            paid_vacation_days: 25,
            notes: None,
        }
    }

    #[test]
    fn paid_vacation_days_defaults_to_25() {
        let parsed: Contract = serde_json::from_str(
            r#"{"parent_email":"p@example.com","assistant_email":"a@example.com",
                "child_name":"Léa","start_date":"2024-09-02",
                "hours_per_week":35,"hourly_rate":4.5,"notes":null}"#,
        )
        .unwrap();
        assert_eq!(parsed.paid_vacation_days, 25);
        assert_eq!(
            parsed.start_date,
            NaiveDate::from_ymd_opt(2024, 9, 2).unwrap()
        );
    }

    #[test]
    fn negative_rate_is_a_violation() {
        let mut contract = sample();
        contract.hourly_rate = -1.0;
        let err = contract.validate().unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err[0].field, "hourly_rate");
    }

    #[test]
    fn multiple_violations_are_all_reported() {
        let mut contract = sample();
        contract.parent_email = "nope".to_string();
        contract.hours_per_week = -8.0;
        contract.paid_vacation_days = -1;
        let err = contract.validate().unwrap_err();
        let fields: Vec<_> = err.iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            vec!["parent_email", "hours_per_week", "paid_vacation_days"]
        );
    }

    #[test]
    fn zero_bounds_are_allowed() {
        let mut contract = sample();
        contract.hours_per_week = 0.0;
        contract.hourly_rate = 0.0;
        contract.paid_vacation_days = 0;
        assert!(contract.validate().is_ok());
    }
}
