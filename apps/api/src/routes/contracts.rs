use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use mongodb::bson::{self, doc, Document};
use serde::Deserialize;

use super::{stringify_ids, IdResponse};
use crate::errors::AppError;
use crate::models::contract::Contract;
use crate::models::{check_email, Validate};
use crate::render;
use crate::state::AppState;

const COLLECTION: &str = "contract";
const LIST_LIMIT: i64 = 100;

/// POST /contracts
pub async fn create_contract(
    State(state): State<AppState>,
    Json(payload): Json<Contract>,
) -> Result<Json<IdResponse>, AppError> {
    payload.validate()?;
    let document = bson::to_document(&payload).map_err(anyhow::Error::from)?;
    let id = state.storage.insert_document(COLLECTION, document).await?;
    Ok(Json(IdResponse { id }))
}

#[derive(Debug, Deserialize)]
pub struct ContractQuery {
    pub email: String,
    pub role: String,
}

/// Chooses which side of the contract the email must match: "parent" filters
/// the employer column, anything else the assistant one.
pub(crate) fn contract_filter(email: &str, role: &str) -> Document {
    let field = if role == "parent" {
        "parent_email"
    } else {
        "assistant_email"
    };
    doc! { field: email }
}

/// GET /contracts
pub async fn list_contracts(
    State(state): State<AppState>,
    Query(query): Query<ContractQuery>,
) -> Result<Json<Vec<Document>>, AppError> {
    check_email("email", &query.email)?;
    let items = state
        .storage
        .find_documents(
            COLLECTION,
            contract_filter(&query.email, &query.role),
            LIST_LIMIT,
        )
        .await?;
    Ok(Json(stringify_ids(items)))
}

/// POST /contracts/pdf
/// Renders the submitted contract directly; nothing is read from or written
/// to storage.
pub async fn contract_pdf(Json(payload): Json<Contract>) -> Result<Response, AppError> {
    payload.validate()?;
    let bytes = render::render_contract(&payload)?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=contrat_assmat_pro.pdf",
        ),
    ];
    Ok((headers, bytes).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_role_filters_parent_email() {
        assert_eq!(
            contract_filter("p@example.com", "parent"),
            doc! { "parent_email": "p@example.com" }
        );
    }

    #[test]
    fn any_other_role_filters_assistant_email() {
        assert_eq!(
            contract_filter("a@example.com", "assistant"),
            doc! { "assistant_email": "a@example.com" }
        );
        // Unknown roles fall through to the assistant side, as shipped.
        assert_eq!(
            contract_filter("a@example.com", "other"),
            doc! { "assistant_email": "a@example.com" }
        );
    }
}
