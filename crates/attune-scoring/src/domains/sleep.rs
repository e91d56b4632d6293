use crate::config::{AnswerMapping, DomainConfig, ScoringMethod, TScoreType};
use crate::domains::{core, core_reversed, screener, t_score_bands};

/// Sleep Disturbance: PROMIS Sleep Disturbance Short Form 8a. Two items
/// ("my sleep was refreshing", "I got enough sleep") are reverse-keyed.
pub fn config() -> DomainConfig {
    DomainConfig {
        name: "Sleep Disturbance".to_string(),
        about: "Perceived sleep quality, depth, and restfulness over the past \
                seven days."
            .to_string(),
        about_link: "https://www.healthmeasures.net/explore-measurement-systems/promis"
            .to_string(),
        scoring_method: ScoringMethod::Sum,
        answer_mapping: AnswerMapping::Promis,
        t_score_type: TScoreType::Sleep,
        questions: vec![
            screener("slp_screen"),
            core("slp_01"),
            core_reversed("slp_02"),
            core("slp_03"),
            core("slp_04"),
            core("slp_05"),
            core("slp_06"),
            core("slp_07"),
            core_reversed("slp_08"),
        ],
        intended_question_count: 8,
        individuals_experienced: "Roughly 1 in 3 adults report regular trouble falling or \
                                  staying asleep."
            .to_string(),
        reference_intervals: t_score_bands(),
    }
}
