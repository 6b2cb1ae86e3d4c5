//! Axum route handlers for the survey analysis API.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::state::AppState;
use crate::survey::prompts::{build_analysis_prompt, ANALYSIS_SYSTEM};
use crate::survey::scoring::score_survey;
use crate::survey::validation::{validate_email, validate_phone};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Applicant details submitted alongside the questionnaire.
/// Only `email` and `phone` are validated; the rest is free text.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonalInformation {
    pub name: String,
    /// Free text or number, forwarded to the prompt as submitted.
    #[serde(default)]
    pub age: Value,
    #[serde(default)]
    pub gender: String,
    pub email: String,
    pub phone: String,
}

impl PersonalInformation {
    /// Renders `age` without JSON quoting for prompt assembly.
    pub fn age_display(&self) -> String {
        match &self.age {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSurveyRequest {
    pub personal_information: PersonalInformation,
    /// Question id → raw answer letter. A BTreeMap keeps request handling
    /// deterministic; prompt ordering itself comes from the catalog.
    pub survey_responses: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSurveyResponse {
    pub analysis: String,
    pub wellness_score: u32,
    pub max_score: u32,
    pub total_score: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze-survey
///
/// Validation → scoring → prompt assembly → narrative generation. Email is
/// checked before phone, and nothing past the first failing check runs.
/// Scores are never returned without the narrative: a collaborator failure
/// surfaces as one generic 500.
pub async fn handle_analyze_survey(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeSurveyRequest>,
) -> Result<Json<AnalyzeSurveyResponse>, AppError> {
    validate_email(&request.personal_information.email)?;
    validate_phone(&request.personal_information.phone)?;

    let scored = score_survey(&state.catalog, &request.survey_responses)?;

    let prompt = build_analysis_prompt(
        &request.personal_information,
        scored.score.wellness_score,
        &scored.expanded,
    );

    let analysis = state.llm.generate(ANALYSIS_SYSTEM, &prompt).await?;

    Ok(Json(AnalyzeSurveyResponse {
        analysis,
        wellness_score: scored.score.wellness_score,
        max_score: scored.score.max_score,
        total_score: scored.score.total_score,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
