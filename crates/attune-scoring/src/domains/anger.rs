use crate::config::{AnswerMapping, DomainConfig, ScoringMethod, TScoreType};
use crate::domains::{core, screener, t_score_bands};

/// Anger: PROMIS Emotional Distress – Anger Short Form 5a. Five core items,
/// the shortest of the T-scored instruments.
pub fn config() -> DomainConfig {
    DomainConfig {
        name: "Anger".to_string(),
        about: "Irritability, frustration, and feeling ready to explode over the \
                past seven days."
            .to_string(),
        about_link: "https://www.healthmeasures.net/explore-measurement-systems/promis"
            .to_string(),
        scoring_method: ScoringMethod::Sum,
        answer_mapping: AnswerMapping::Promis,
        t_score_type: TScoreType::Anger,
        questions: vec![
            screener("ang_screen"),
            core("ang_01"),
            core("ang_02"),
            core("ang_03"),
            core("ang_04"),
            core("ang_05"),
        ],
        intended_question_count: 5,
        individuals_experienced: "About 8% of adults report difficulty controlling anger."
            .to_string(),
        reference_intervals: t_score_bands(),
    }
}
