use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use attune_core::models::report::IndividualData;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ReportSummary {
    pub individual_id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

pub async fn list_reports(State(state): State<AppState>) -> Json<Vec<ReportSummary>> {
    let reports = state.reports.read().await;
    let mut summaries: Vec<ReportSummary> = reports
        .values()
        .map(|r| ReportSummary {
            individual_id: r.individual_id,
            first_name: r.first_name.clone(),
            last_name: r.last_name.clone(),
        })
        .collect();
    summaries.sort_by_key(|s| s.individual_id);
    Json(summaries)
}

pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<IndividualData>, ApiError> {
    let reports = state.reports.read().await;
    let report = reports
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("report not found: {id}")))?;
    Ok(Json(report.clone()))
}

/// Attach narrative insights produced by the insight collaborator.
///
/// The body must contain exactly one string per domain, in report order.
/// Attachment replaces the stored report with a new copy; the engine's
/// output itself is never mutated in place.
pub async fn attach_insights(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(insights): Json<Vec<String>>,
) -> Result<Json<IndividualData>, ApiError> {
    let mut reports = state.reports.write().await;
    let report = reports
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("report not found: {id}")))?;

    let updated = report.with_insights(&insights)?;
    reports.insert(id, updated.clone());

    Ok(Json(updated))
}
