use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use attune_core::models::report::ReferenceInterval;
use attune_scoring::config::{AnswerMapping, ScoringMethod};
use attune_scoring::domains::{get_domain, registry};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct DomainSummary {
    name: String,
    scoring_method: ScoringMethod,
    question_count: usize,
}

#[derive(Serialize)]
pub struct DomainDetail {
    name: String,
    about: String,
    about_link: String,
    scoring_method: ScoringMethod,
    answer_mapping: AnswerMapping,
    question_count: usize,
    reference_intervals: Vec<ReferenceInterval>,
}

pub async fn list_domains() -> Json<Vec<DomainSummary>> {
    let domains: Vec<DomainSummary> = registry()
        .iter()
        .map(|d| DomainSummary {
            name: d.name.clone(),
            scoring_method: d.scoring_method,
            question_count: d.core_questions().count(),
        })
        .collect();
    Json(domains)
}

pub async fn get_domain_detail(Path(name): Path<String>) -> Result<Json<DomainDetail>, ApiError> {
    let config =
        get_domain(&name).ok_or_else(|| ApiError::NotFound(format!("domain not found: {name}")))?;

    Ok(Json(DomainDetail {
        name: config.name.clone(),
        about: config.about.clone(),
        about_link: config.about_link.clone(),
        scoring_method: config.scoring_method,
        answer_mapping: config.answer_mapping,
        question_count: config.core_questions().count(),
        reference_intervals: config.reference_intervals.clone(),
    }))
}
