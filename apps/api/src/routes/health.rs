use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Static status payload.
pub async fn read_root() -> Json<Value> {
    Json(json!({
        "name": "Assmat Pro API",
        "status": "ok"
    }))
}

/// Diagnostic snapshot rendered by GET /test. Every field is a
/// human-readable status string; configuration values are reported as
/// set/unset, never echoed.
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: &'static str,
    pub database: String,
    pub database_url: Option<&'static str>,
    pub database_name: Option<&'static str>,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

/// GET /test
/// Probes the storage gateway. Never fails: every fault is caught and
/// rendered inline as a status string.
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse {
        backend: "✅ Running",
        database: "❌ Not Available".to_string(),
        database_url: None,
        database_name: None,
        connection_status: "Not Connected",
        collections: Vec::new(),
    };

    if state.storage.available() {
        response.database = "✅ Available".to_string();
        response.database_url = Some(set_flag(state.config.database_url.is_some()));
        response.database_name = Some(set_flag(state.config.database_name.is_some()));

        match state.storage.collection_names().await {
            Ok(names) => {
                response.collections = names.into_iter().take(10).collect();
                response.database = "✅ Connected & Working".to_string();
                response.connection_status = "Connected";
            }
            Err(e) => {
                response.database =
                    format!("⚠️  Connected but Error: {}", truncate(&e.to_string(), 80));
            }
        }
    } else {
        response.database = "⚠️  Available but not initialized".to_string();
    }

    Json(response)
}

fn set_flag(is_set: bool) -> &'static str {
    if is_set {
        "✅ Set"
    } else {
        "❌ Not Set"
    }
}

fn truncate(message: &str, max_chars: usize) -> String {
    message.chars().take(max_chars).collect()
}
