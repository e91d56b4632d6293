use crate::config::{AnswerMapping, DomainConfig, ScoringMethod, TScoreType};
use crate::domains::{core, screener, t_score_bands};

/// Anxiety: PROMIS Emotional Distress – Anxiety Short Form 8a.
pub fn config() -> DomainConfig {
    DomainConfig {
        name: "Anxiety".to_string(),
        about: "Fearfulness, worry, and tension, including physical arousal such \
                as a racing heart, over the past seven days."
            .to_string(),
        about_link: "https://www.healthmeasures.net/explore-measurement-systems/promis"
            .to_string(),
        scoring_method: ScoringMethod::Sum,
        answer_mapping: AnswerMapping::Promis,
        t_score_type: TScoreType::Anxiety,
        questions: vec![
            screener("anx_screen"),
            core("anx_01"),
            core("anx_02"),
            core("anx_03"),
            core("anx_04"),
            core("anx_05"),
            core("anx_06"),
            core("anx_07"),
            core("anx_08"),
        ],
        intended_question_count: 8,
        individuals_experienced: "Nearly 1 in 3 adults experience an anxiety disorder at some \
                                  point in their lives."
            .to_string(),
        reference_intervals: t_score_bands(),
    }
}
