//! Opener generation — validates the form fields, builds the prompt, calls
//! the LLM once, and extracts the openers.
//!
//! Flow: clean_lead → validate → build_prompt → llm.complete → parse_openers.
//! Nothing here persists; saving a lead is a separate, authenticated step.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::lead::{clean_lead, Length, Style, MAX_LEAD_CHARS};
use crate::generation::openers::parse_openers;
use crate::generation::prompts::build_prompt;
use crate::llm_client::prompts::COPYWRITER_SYSTEM;
use crate::llm_client::LlmClient;

/// Requested opener count bounds, matching the original form slider.
pub const MIN_OPENERS: u8 = 1;
pub const MAX_OPENERS: u8 = 5;

fn default_num_openers() -> u8 {
    3
}

/// Request body for opener generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub lead: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub style: Style,
    #[serde(default)]
    pub length: Length,
    #[serde(default = "default_num_openers")]
    pub num_openers: u8,
}

/// Response from the generation pipeline. `elapsed_ms` and `raw_chars`
/// mirror the timing/size caption the original UI displayed.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub openers: Vec<String>,
    pub requested: u8,
    pub elapsed_ms: u64,
    pub raw_chars: usize,
}

/// Runs the full generation pipeline for one request.
pub async fn generate_openers(
    llm: &LlmClient,
    request: GenerateRequest,
) -> Result<GenerateResponse, AppError> {
    let lead = clean_lead(&request.lead);
    if lead.is_empty() {
        return Err(AppError::Validation("lead cannot be empty".to_string()));
    }
    if lead.chars().count() > MAX_LEAD_CHARS {
        return Err(AppError::Validation(format!(
            "lead info is too long; keep it under {MAX_LEAD_CHARS} characters"
        )));
    }
    if !(MIN_OPENERS..=MAX_OPENERS).contains(&request.num_openers) {
        return Err(AppError::Validation(format!(
            "num_openers must be between {MIN_OPENERS} and {MAX_OPENERS}"
        )));
    }

    let prompt = build_prompt(
        &lead,
        &request.company,
        &request.job_title,
        request.style,
        request.length,
        request.num_openers,
    );

    let started = Instant::now();
    let raw = llm
        .complete(COPYWRITER_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Llm(format!("opener generation failed: {e}")))?;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    let openers = parse_openers(&raw, request.num_openers as usize);
    info!(
        "Generated {} openers in {}ms ({} raw chars)",
        openers.len(),
        elapsed_ms,
        raw.chars().count()
    );

    Ok(GenerateResponse {
        openers,
        requested: request.num_openers,
        elapsed_ms,
        raw_chars: raw.chars().count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> LlmClient {
        // Never reached by validation-path tests.
        LlmClient::new("http://localhost:9".to_string(), "test-key".to_string())
    }

    fn valid_request() -> GenerateRequest {
        GenerateRequest {
            lead: "VP of Sales at Acme, posted about pipeline pain".to_string(),
            company: "Acme".to_string(),
            job_title: "VP of Sales".to_string(),
            style: Style::Friendly,
            length: Length::Medium,
            num_openers: 3,
        }
    }

    #[test]
    fn test_generate_request_applies_defaults() {
        let json = serde_json::json!({ "lead": "some lead info" });
        let request: GenerateRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.style, Style::Friendly);
        assert_eq!(request.length, Length::Medium);
        assert_eq!(request.num_openers, 3);
        assert!(request.company.is_empty());
    }

    #[tokio::test]
    async fn test_empty_lead_is_rejected() {
        let request = GenerateRequest {
            lead: "   \n  ".to_string(),
            ..valid_request()
        };
        let err = generate_openers(&test_client(), request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_oversized_lead_is_rejected() {
        let request = GenerateRequest {
            lead: "x".repeat(MAX_LEAD_CHARS + 1),
            ..valid_request()
        };
        let err = generate_openers(&test_client(), request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_num_openers_out_of_bounds_is_rejected() {
        for bad in [0u8, 6, 10] {
            let request = GenerateRequest {
                num_openers: bad,
                ..valid_request()
            };
            let err = generate_openers(&test_client(), request).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "num_openers={bad}");
        }
    }

    #[test]
    fn test_lead_is_cleaned_before_length_check() {
        // 600 raw chars collapse to under the cap once whitespace runs shrink.
        let raw = "word      ".repeat(60);
        assert!(raw.chars().count() > MAX_LEAD_CHARS);
        assert!(clean_lead(&raw).chars().count() <= MAX_LEAD_CHARS);
    }
}
