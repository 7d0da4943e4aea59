//! Axum route handlers for the Auth API: sign-up, sign-in, sign-out, and
//! session restore.

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::extract::CurrentUser;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::sessions::{create_session, delete_session};
use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::state::AppState;

const MIN_PASSWORD_CHARS: usize = 8;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user — never includes the password hash.
#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for UserProfile {
    fn from(row: UserRow) -> Self {
        UserProfile {
            id: row.id,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: UserProfile,
    pub token: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/auth/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let email = request.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation("a valid email is required".to_string()));
    }
    if request.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(AppError::Validation(format!(
            "password must be at least {MIN_PASSWORD_CHARS} characters"
        )));
    }

    let existing: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Validation(
            "an account with this email already exists".to_string(),
        ));
    }

    let password_hash = hash_password(&request.password).map_err(AppError::Internal)?;
    let user: UserRow = sqlx::query_as(
        "INSERT INTO users (id, email, password_hash) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(&email)
    .bind(&password_hash)
    .fetch_one(&state.db)
    .await?;

    let token = create_session(&state.redis, user.id, state.config.session_ttl_secs).await?;
    info!("Created account {} for {}", user.id, user.email);

    Ok(Json(SessionResponse {
        user: user.into(),
        token,
    }))
}

/// POST /api/v1/auth/signin
pub async fn handle_signin(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let email = request.email.trim().to_lowercase();

    // Unknown email and wrong password get the same rejection.
    let user: UserRow = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(&state.db)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !verify_password(&request.password, &user.password_hash) {
        return Err(AppError::Unauthorized);
    }

    let token = create_session(&state.redis, user.id, state.config.session_ttl_secs).await?;
    info!("User {} signed in", user.id);

    Ok(Json(SessionResponse {
        user: user.into(),
        token,
    }))
}

/// POST /api/v1/auth/signout
pub async fn handle_signout(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<StatusCode, AppError> {
    delete_session(&state.redis, &current.token).await?;
    info!("User {} signed out", current.user.id);
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/session
///
/// Session restore: resolves the bearer token back to its user.
pub async fn handle_session(current: CurrentUser) -> Json<UserProfile> {
    Json(current.user.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            email: "ada@example.com".to_string(),
            password_hash: "$argon2id$fake".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_user_profile_drops_password_hash() {
        let profile: UserProfile = sample_row().into();
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("ada@example.com"));
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2id"));
    }

    #[test]
    fn test_credentials_request_deserializes() {
        let request: CredentialsRequest = serde_json::from_str(
            r#"{"email": "Ada@Example.com", "password": "hunter2hunter2"}"#,
        )
        .unwrap();
        assert_eq!(request.email, "Ada@Example.com");
        assert_eq!(request.password, "hunter2hunter2");
    }

    #[test]
    fn test_session_response_shape() {
        let response = SessionResponse {
            user: sample_row().into(),
            token: "tok".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["token"], "tok");
        assert!(value["user"]["id"].is_string());
    }
}
