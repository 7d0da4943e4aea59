use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// A row in the `users` table. Never serialized directly — responses go
/// through `auth::handlers::UserProfile` so the hash stays server-side.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
