use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A saved lead submission, scoped by the owning user.
/// Tag/style/length are stored as their wire strings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LeadRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub lead_text: String,
    pub company: String,
    pub job_title: String,
    pub notes: String,
    pub tag: String,
    pub style: String,
    pub length: String,
    pub requested_count: i16,
    pub openers: Vec<String>,
    pub created_at: DateTime<Utc>,
}
