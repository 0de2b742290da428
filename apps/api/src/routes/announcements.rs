use axum::{
    extract::{Query, State},
    Json,
};
use mongodb::bson::{self, Document};
use serde::Deserialize;

use super::{stringify_ids, IdResponse};
use crate::errors::AppError;
use crate::models::announcement::Announcement;
use crate::models::Validate;
use crate::state::AppState;

const COLLECTION: &str = "announcement";
const DEFAULT_LIMIT: i64 = 50;

/// POST /announcements
pub async fn create_announcement(
    State(state): State<AppState>,
    Json(payload): Json<Announcement>,
) -> Result<Json<IdResponse>, AppError> {
    payload.validate()?;
    let document = bson::to_document(&payload).map_err(anyhow::Error::from)?;
    let id = state.storage.insert_document(COLLECTION, document).await?;
    Ok(Json(IdResponse { id }))
}

/// Listing filters. `role` is matched against `author_role` and kept as raw
/// text: an unknown value just matches nothing.
#[derive(Debug, Deserialize)]
pub struct AnnouncementQuery {
    pub city: Option<String>,
    pub role: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

pub(crate) fn announcement_filter(query: &AnnouncementQuery) -> Document {
    let mut filter = Document::new();
    if let Some(city) = &query.city {
        filter.insert("city", city.as_str());
    }
    if let Some(role) = &query.role {
        filter.insert("author_role", role.as_str());
    }
    filter
}

/// GET /announcements
pub async fn list_announcements(
    State(state): State<AppState>,
    Query(query): Query<AnnouncementQuery>,
) -> Result<Json<Vec<Document>>, AppError> {
    let items = state
        .storage
        .find_documents(COLLECTION, announcement_filter(&query), query.limit)
        .await?;
    Ok(Json(stringify_ids(items)))
}
