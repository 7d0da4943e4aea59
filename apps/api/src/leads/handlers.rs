//! Axum route handlers for the saved-leads API. Every route requires a
//! session; rows are always scoped to the caller.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::auth::extract::CurrentUser;
use crate::errors::AppError;
use crate::generation::generator::{MAX_OPENERS, MIN_OPENERS};
use crate::generation::lead::{clean_lead, Length, Style, Tag, MAX_LEAD_CHARS};
use crate::leads::store::{delete_lead, insert_lead, list_leads, NewLead};
use crate::models::lead::LeadRow;
use crate::state::AppState;

/// Request body for saving a generated lead submission. The client sends
/// back the submission it generated, openers included.
#[derive(Debug, Deserialize)]
pub struct SaveLeadRequest {
    pub lead: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub tag: Tag,
    #[serde(default)]
    pub style: Style,
    #[serde(default)]
    pub length: Length,
    pub num_openers: u8,
    pub openers: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct TagFilter {
    pub tag: Option<Tag>,
}

/// POST /api/v1/leads
pub async fn handle_save_lead(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(request): Json<SaveLeadRequest>,
) -> Result<Json<LeadRow>, AppError> {
    let lead_text = clean_lead(&request.lead);
    if lead_text.is_empty() {
        return Err(AppError::Validation("lead cannot be empty".to_string()));
    }
    if lead_text.chars().count() > MAX_LEAD_CHARS {
        return Err(AppError::Validation(format!(
            "lead info is too long; keep it under {MAX_LEAD_CHARS} characters"
        )));
    }
    if !(MIN_OPENERS..=MAX_OPENERS).contains(&request.num_openers) {
        return Err(AppError::Validation(format!(
            "num_openers must be between {MIN_OPENERS} and {MAX_OPENERS}"
        )));
    }

    // Stored openers never exceed the requested count.
    let mut openers = request.openers;
    openers.truncate(request.num_openers as usize);

    let row = insert_lead(
        &state.db,
        NewLead {
            user_id: current.user.id,
            lead_text: &lead_text,
            company: request.company.trim(),
            job_title: request.job_title.trim(),
            notes: request.notes.trim(),
            tag: request.tag.as_str(),
            style: request.style.as_str(),
            length: request.length.as_str(),
            requested_count: request.num_openers as i16,
            openers: &openers,
        },
    )
    .await?;

    info!("Saved lead {} for user {}", row.id, current.user.id);
    Ok(Json(row))
}

/// GET /api/v1/leads?tag=Hot
pub async fn handle_list_leads(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(filter): Query<TagFilter>,
) -> Result<Json<Vec<LeadRow>>, AppError> {
    let rows = list_leads(
        &state.db,
        current.user.id,
        filter.tag.map(|tag| tag.as_str()),
    )
    .await?;
    Ok(Json(rows))
}

/// DELETE /api/v1/leads/:id
pub async fn handle_delete_lead(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(lead_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = delete_lead(&state.db, current.user.id, lead_id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Lead {lead_id} not found")));
    }

    info!("Deleted lead {} for user {}", lead_id, current.user.id);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_request_applies_defaults() {
        let json = serde_json::json!({
            "lead": "VP of Sales at Acme",
            "num_openers": 3,
            "openers": ["Hello there", "Great to connect"]
        });
        let request: SaveLeadRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.tag, Tag::None);
        assert_eq!(request.style, Style::Friendly);
        assert_eq!(request.length, Length::Medium);
        assert!(request.notes.is_empty());
    }

    #[test]
    fn test_save_request_accepts_hyphenated_tag() {
        let json = serde_json::json!({
            "lead": "lead",
            "tag": "Follow-up",
            "num_openers": 1,
            "openers": ["Hi"]
        });
        let request: SaveLeadRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.tag, Tag::FollowUp);
    }

    #[test]
    fn test_tag_filter_deserializes() {
        let filter: TagFilter = serde_json::from_value(serde_json::json!({"tag": "Hot"})).unwrap();
        assert_eq!(filter.tag, Some(Tag::Hot));

        let empty: TagFilter = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(empty.tag, None);
    }
}
