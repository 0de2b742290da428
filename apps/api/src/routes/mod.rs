pub mod announcements;
pub mod auth;
pub mod calc;
pub mod contracts;
pub mod health;
pub mod schedule;

use axum::{
    routing::{get, post},
    Router,
};
use mongodb::bson::Document;
use serde::Serialize;

use crate::state::AppState;

/// Response for every create endpoint: the store-generated identifier,
/// already stringified by the gateway.
#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: String,
}

/// Replaces the store's native `_id` with its string form before documents
/// leave the service. The identifier is opaque to clients.
pub(crate) fn stringify_ids(documents: Vec<Document>) -> Vec<Document> {
    documents
        .into_iter()
        .map(|mut document| {
            if let Ok(oid) = document.get_object_id("_id") {
                document.insert("_id", oid.to_hex());
            }
            document
        })
        .collect()
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::read_root))
        .route("/test", get(health::test_database))
        .route("/auth/callback", post(auth::auth_callback))
        .route(
            "/announcements",
            post(announcements::create_announcement).get(announcements::list_announcements),
        )
        .route(
            "/contracts",
            post(contracts::create_contract).get(contracts::list_contracts),
        )
        .route("/contracts/pdf", post(contracts::contract_pdf))
        .route(
            "/schedule",
            post(schedule::add_schedule).get(schedule::get_schedule),
        )
        .route("/calc/salary", post(calc::calc_salary))
        .route("/calc/leave", post(calc::calc_leave))
        .route("/calc/balance", post(calc::calc_balance))
        .with_state(state)
}
