use serde::{Deserialize, Serialize};
use ts_rs::TS;

use attune_core::models::report::ReferenceInterval;

/// How a domain aggregates its normalized answers into a raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringMethod {
    /// Prorated sum over the intended item count.
    Sum,
    /// Maximum answered value; any elevated answer is the signal.
    MaxThreshold,
    /// Mean of answered values, one decimal.
    Average,
}

/// How a raw answer token becomes a numeric severity value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerMapping {
    /// 5-point PROMIS Likert convention (1–5), reverse-aware.
    Promis,
    /// PHQ-15 three-point scale: 0–4 base collapsed to 0–2.
    Phq15,
    /// Base 0–4 value unchanged.
    Default,
}

/// Which raw→T-score conversion table applies, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TScoreType {
    Depression,
    Anger,
    Anxiety,
    Sleep,
    None,
}

/// One questionnaire item referenced by a domain.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionRef {
    pub id: String,
    /// Core items count toward the score; screener items only steer the
    /// second questionnaire tier.
    pub is_core: bool,
    /// Reverse-keyed item, flipped via `6 - value` under PROMIS mapping.
    pub reverse: bool,
}

/// Static definition of one wellness domain: question membership, scoring
/// rules, and the descriptive fields copied verbatim into each report.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainConfig {
    pub name: String,
    pub about: String,
    pub about_link: String,
    pub scoring_method: ScoringMethod,
    pub answer_mapping: AnswerMapping,
    pub t_score_type: TScoreType,
    pub questions: Vec<QuestionRef>,
    /// Canonical item count of the standardized instrument. Drives
    /// proration and the completion gate, independent of how many items
    /// the survey actually carries.
    pub intended_question_count: usize,
    pub individuals_experienced: String,
    pub reference_intervals: Vec<ReferenceInterval>,
}

impl DomainConfig {
    /// The items that count toward this domain's score.
    pub fn core_questions(&self) -> impl Iterator<Item = &QuestionRef> {
        self.questions.iter().filter(|q| q.is_core)
    }
}
