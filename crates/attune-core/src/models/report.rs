use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// One severity band over a score range. `max = None` is unbounded above.
///
/// Bands are ordered; adjacent bands meet at intentional boundaries
/// (e.g. `max: 54.9` followed by `min: 55.0`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceInterval {
    pub label: String,
    pub min: f64,
    pub max: Option<f64>,
    pub color: String,
}

/// The computed result for one wellness domain.
///
/// `score` is the final calibrated score (T-score where the domain has a
/// conversion table, raw otherwise) and is `None` when the completion gate
/// failed. `insights_and_support` starts empty; the narrative collaborator
/// fills it downstream via [`IndividualData::with_insights`].
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainResult {
    pub name: String,
    pub about: String,
    pub about_link: String,
    pub score: Option<f64>,
    pub raw_score: Option<f64>,
    pub t_score: Option<f64>,
    pub user_interpretation: String,
    pub reference_intervals: Vec<ReferenceInterval>,
    pub individuals_experienced: String,
    pub insights_and_support: String,
}

/// A scored assessment report for one individual.
///
/// Constructed fresh per submission and never mutated afterwards; domain
/// order matches the configuration registry and is a hard contract for
/// downstream collaborators.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IndividualData {
    pub individual_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub assessment_date: jiff::Timestamp,
    pub domains: Vec<DomainResult>,
}

impl IndividualData {
    /// Return a copy with `insights_and_support` filled from `insights`,
    /// aligned 1:1 with domain order.
    ///
    /// The narrative collaborator produces one string per domain, in the
    /// same order this report lists them. A length mismatch means that
    /// contract was broken.
    pub fn with_insights(&self, insights: &[String]) -> Result<IndividualData, CoreError> {
        if insights.len() != self.domains.len() {
            return Err(CoreError::InsightCountMismatch {
                expected: self.domains.len(),
                actual: insights.len(),
            });
        }

        let mut report = self.clone();
        for (domain, insight) in report.domains.iter_mut().zip(insights) {
            domain.insights_and_support = insight.clone();
        }
        Ok(report)
    }
}
