use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use attune_core::error::CoreError;
use attune_core::models::report::IndividualData;
use attune_core::models::submission::{AnswerToken, Submission};
use attune_scoring::generate_report;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SubmissionRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub assessment_date: Option<jiff::Timestamp>,
    #[serde(default)]
    pub answers: HashMap<String, AnswerToken>,
}

/// Accept a questionnaire submission, score it, and persist the report.
///
/// The intake assigns the submission id and timestamps the assessment when
/// the client did not. Individual malformed answers are not rejected here;
/// the engine degrades them to "not counted".
pub async fn create_submission(
    State(state): State<AppState>,
    Json(req): Json<SubmissionRequest>,
) -> Result<Json<IndividualData>, ApiError> {
    for (field, value) in [("first_name", &req.first_name), ("email", &req.email)] {
        if value.trim().is_empty() {
            return Err(CoreError::MissingField(field.to_string()).into());
        }
    }
    if req.answers.is_empty() {
        return Err(CoreError::MissingField("answers".to_string()).into());
    }

    let submission = Submission {
        submission_id: Uuid::new_v4(),
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        assessment_date: req.assessment_date.unwrap_or_else(jiff::Timestamp::now),
        answers: req.answers,
    };

    let report = generate_report(&submission);
    state
        .reports
        .write()
        .await
        .insert(report.individual_id, report.clone());

    Ok(Json(report))
}
