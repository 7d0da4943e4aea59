//! Postgres reads and writes for saved leads. Rows are inserted exactly as
//! submitted; every query is scoped by the owning user id.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::lead::LeadRow;

/// Column values for a new lead row. `created_at` is set by the database.
pub struct NewLead<'a> {
    pub user_id: Uuid,
    pub lead_text: &'a str,
    pub company: &'a str,
    pub job_title: &'a str,
    pub notes: &'a str,
    pub tag: &'a str,
    pub style: &'a str,
    pub length: &'a str,
    pub requested_count: i16,
    pub openers: &'a [String],
}

pub async fn insert_lead(pool: &PgPool, lead: NewLead<'_>) -> Result<LeadRow, AppError> {
    Ok(sqlx::query_as::<_, LeadRow>(
        r#"
        INSERT INTO leads
            (id, user_id, lead_text, company, job_title, notes, tag, style, length,
             requested_count, openers)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(lead.user_id)
    .bind(lead.lead_text)
    .bind(lead.company)
    .bind(lead.job_title)
    .bind(lead.notes)
    .bind(lead.tag)
    .bind(lead.style)
    .bind(lead.length)
    .bind(lead.requested_count)
    .bind(lead.openers)
    .fetch_one(pool)
    .await?)
}

/// Returns the user's saved leads, newest first, optionally filtered by tag.
pub async fn list_leads(
    pool: &PgPool,
    user_id: Uuid,
    tag: Option<&str>,
) -> Result<Vec<LeadRow>, AppError> {
    let rows = match tag {
        Some(tag) => {
            sqlx::query_as::<_, LeadRow>(
                "SELECT * FROM leads WHERE user_id = $1 AND tag = $2 ORDER BY created_at DESC",
            )
            .bind(user_id)
            .bind(tag)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, LeadRow>(
                "SELECT * FROM leads WHERE user_id = $1 ORDER BY created_at DESC",
            )
            .bind(user_id)
            .fetch_all(pool)
            .await?
        }
    };
    Ok(rows)
}

/// Deletes one of the user's leads. Returns false when no row matched,
/// including rows owned by someone else.
pub async fn delete_lead(pool: &PgPool, user_id: Uuid, lead_id: Uuid) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM leads WHERE id = $1 AND user_id = $2")
        .bind(lead_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
