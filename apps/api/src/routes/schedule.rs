use axum::{
    extract::{Query, State},
    Json,
};
use mongodb::bson::{self, doc, Document};
use serde::Deserialize;

use super::{stringify_ids, IdResponse};
use crate::errors::AppError;
use crate::models::schedule::ScheduleEntry;
use crate::models::{check_email, Validate};
use crate::state::AppState;

const COLLECTION: &str = "scheduleentry";
const LIST_LIMIT: i64 = 200;

/// POST /schedule
pub async fn add_schedule(
    State(state): State<AppState>,
    Json(payload): Json<ScheduleEntry>,
) -> Result<Json<IdResponse>, AppError> {
    payload.validate()?;
    let document = bson::to_document(&payload).map_err(anyhow::Error::from)?;
    let id = state.storage.insert_document(COLLECTION, document).await?;
    Ok(Json(IdResponse { id }))
}

#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    pub user_email: String,
}

/// GET /schedule
pub async fn get_schedule(
    State(state): State<AppState>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<Vec<Document>>, AppError> {
    check_email("user_email", &query.user_email)?;
    let items = state
        .storage
        .find_documents(
            COLLECTION,
            doc! { "user_email": &query.user_email },
            LIST_LIMIT,
        )
        .await?;
    Ok(Json(stringify_ids(items)))
}
