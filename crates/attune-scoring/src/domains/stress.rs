use crate::config::{AnswerMapping, DomainConfig, ScoringMethod, TScoreType};
use crate::domains::{core, interval, screener};

/// Perceived Stress: four items on the 0–4 base scale, averaged rather
/// than summed so the score reads directly on the answer scale.
pub fn config() -> DomainConfig {
    DomainConfig {
        name: "Perceived Stress".to_string(),
        about: "How overloaded, unpredictable, and uncontrollable life has felt \
                over the past month."
            .to_string(),
        about_link: "https://www.das.nh.gov/wellness/docs/percieved%20stress%20scale.pdf"
            .to_string(),
        scoring_method: ScoringMethod::Average,
        answer_mapping: AnswerMapping::Default,
        t_score_type: TScoreType::None,
        questions: vec![
            screener("str_screen"),
            core("str_01"),
            core("str_02"),
            core("str_03"),
            core("str_04"),
        ],
        intended_question_count: 4,
        individuals_experienced: "More than 3 in 4 adults report at least one symptom of \
                                  stress in a given month."
            .to_string(),
        reference_intervals: vec![
            interval("Low", 0.0, Some(1.9), "#4caf50"),
            interval("Moderate", 2.0, Some(2.9), "#ff9800"),
            interval("High", 3.0, None, "#f44336"),
        ],
    }
}
