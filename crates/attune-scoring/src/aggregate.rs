//! Domain score aggregation.

use std::collections::HashMap;

use attune_core::models::submission::AnswerToken;

use crate::answer;
use crate::config::{DomainConfig, ScoringMethod, TScoreType};
use crate::tscore;

/// Minimum fraction of a domain's intended core items that must carry a
/// usable answer before any score is produced. Applied uniformly across
/// all domains regardless of instrument size.
pub const COMPLETION_RATIO: f64 = 0.75;

/// The three score facets computed for one domain.
///
/// All three are `None` when the completion gate failed. `final_score` is
/// additionally `None` when a prorated raw total falls outside the domain's
/// T-score table — a silent "no score available", not an error.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DomainScore {
    pub raw_score: Option<f64>,
    pub final_score: Option<f64>,
    pub t_score: Option<f64>,
}

/// Score one domain against the full answer map.
///
/// Proration scales the observed mean back up to the intended item count,
/// so a partially completed instrument stays on the full instrument's
/// scale — valid only above the completion gate, where the answered subset
/// is assumed representative.
pub fn score_domain(config: &DomainConfig, answers: &HashMap<String, AnswerToken>) -> DomainScore {
    let values: Vec<f64> = config
        .core_questions()
        .filter_map(|q| {
            answers
                .get(&q.id)
                .and_then(|token| answer::normalize(token, config.answer_mapping, q.reverse))
        })
        .collect();

    if config.intended_question_count > 0
        && (values.len() as f64) / (config.intended_question_count as f64) < COMPLETION_RATIO
    {
        return DomainScore::default();
    }

    match config.scoring_method {
        ScoringMethod::MaxThreshold => {
            let raw = values.iter().copied().fold(0.0_f64, f64::max);
            DomainScore {
                raw_score: Some(raw),
                final_score: Some(raw),
                t_score: None,
            }
        }
        ScoringMethod::Average => {
            let raw = round_to_tenth(mean(&values));
            DomainScore {
                raw_score: Some(raw),
                final_score: Some(raw),
                t_score: None,
            }
        }
        ScoringMethod::Sum => {
            let raw = (mean(&values) * config.intended_question_count as f64).round();
            if config.t_score_type == TScoreType::None {
                DomainScore {
                    raw_score: Some(raw),
                    final_score: Some(raw),
                    t_score: None,
                }
            } else {
                let t = tscore::t_score(config.t_score_type, raw as i64);
                DomainScore {
                    raw_score: Some(raw),
                    final_score: t,
                    t_score: t,
                }
            }
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Round to one decimal place, halves away from zero.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
