//! Transient calculator inputs. Not persisted; no bounds beyond being
//! numbers — negative results are documented behavior, never clamped.

use serde::Deserialize;

/// 2-decimal rounding applied to every calculator result.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SalaryCalc {
    pub hours: f64,
    pub rate: f64,
}

impl SalaryCalc {
    pub fn gross(&self) -> f64 {
        round2(self.hours * self.rate)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LeaveCalc {
    pub accrued_days: f64,
    pub days_taken: f64,
}

impl LeaveCalc {
    pub fn remaining(&self) -> f64 {
        round2(self.accrued_days - self.days_taken)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BalanceCalc {
    pub credits: f64,
    pub debits: f64,
}

impl BalanceCalc {
    pub fn balance(&self) -> f64 {
        round2(self.credits - self.debits)
    }
}
