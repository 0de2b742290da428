use axum::{extract::State, Json};
use mongodb::bson::{self, doc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::user::{Role, User};
use crate::models::Validate;
use crate::state::AppState;

/// Social-login callback payload. Token verification happens upstream; this
/// endpoint only records the user.
#[derive(Debug, Deserialize)]
pub struct AuthCallback {
    pub provider: String,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Option<Role>,
}

#[derive(Debug, Serialize)]
pub struct AuthCallbackResponse {
    pub ok: bool,
    pub email: String,
}

/// POST /auth/callback
/// Looks up the user by email and creates one with defaults when absent.
/// Check-then-create is not atomic; concurrent identical callbacks may both
/// insert.
pub async fn auth_callback(
    State(state): State<AppState>,
    Json(payload): Json<AuthCallback>,
) -> Result<Json<AuthCallbackResponse>, AppError> {
    let user = User {
        name: payload.name.unwrap_or_else(|| "Utilisateur".to_string()),
        email: payload.email.clone(),
        role: payload.role.unwrap_or(Role::Parent),
        avatar_url: payload.avatar_url,
        provider: Some(payload.provider),
        phone: None,
        city: None,
        bio: None,
        is_active: true,
    };
    user.validate()?;

    let existing = state
        .storage
        .find_one("user", doc! { "email": &user.email })
        .await?;

    if existing.is_none() {
        let document = bson::to_document(&user).map_err(anyhow::Error::from)?;
        state.storage.insert_document("user", document).await?;
    }

    Ok(Json(AuthCallbackResponse {
        ok: true,
        email: payload.email,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_defaults_mirror_the_user_schema() {
        let payload: AuthCallback = serde_json::from_str(
            r#"{"provider":"google","email":"new@example.com"}"#,
        )
        .unwrap();
        assert!(payload.name.is_none());
        assert!(payload.role.is_none());

        let user = User {
            name: payload.name.unwrap_or_else(|| "Utilisateur".to_string()),
            email: payload.email,
            role: payload.role.unwrap_or(Role::Parent),
            avatar_url: None,
            provider: Some(payload.provider),
            phone: None,
            city: None,
            bio: None,
            is_active: true,
        };
        assert_eq!(user.name, "Utilisateur");
        assert_eq!(user.role, Role::Parent);
        assert!(user.is_active);
    }
}
