use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A raw answer exactly as the questionnaire client sent it.
///
/// The two-tier form submits whatever its widget produced: a number for
/// Likert items, free text for legacy phrasings, or an explicit null.
/// Anything else (arrays, objects, booleans) lands in `Other` and never
/// contributes to a score. Collapsing this sum type into a numeric value
/// is the scoring engine's job, at a single boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AnswerToken {
    Number(f64),
    Text(String),
    Missing,
    Other(serde_json::Value),
}

/// One completed questionnaire, keyed answers and all.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Submission {
    pub submission_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub assessment_date: jiff::Timestamp,
    pub answers: HashMap<String, AnswerToken>,
}
