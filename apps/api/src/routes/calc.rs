use axum::Json;
use serde_json::{json, Value};

use crate::models::calc::{BalanceCalc, LeaveCalc, SalaryCalc};

/// POST /calc/salary
pub async fn calc_salary(Json(payload): Json<SalaryCalc>) -> Json<Value> {
    Json(json!({ "gross": payload.gross() }))
}

/// POST /calc/leave
pub async fn calc_leave(Json(payload): Json<LeaveCalc>) -> Json<Value> {
    Json(json!({ "remaining": payload.remaining() }))
}

/// POST /calc/balance
pub async fn calc_balance(Json(payload): Json<BalanceCalc>) -> Json<Value> {
    Json(json!({ "balance": payload.balance() }))
}
