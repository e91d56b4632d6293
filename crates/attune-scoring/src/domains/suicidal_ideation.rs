use crate::config::{AnswerMapping, DomainConfig, ScoringMethod, TScoreType};
use crate::domains::{core, interval, screener};

/// Suicidal Ideation: a single core safety-screen item. Any elevated
/// answer is the signal, so the domain scores on the maximum rather than
/// a sum — one answer above zero flags for follow-up.
pub fn config() -> DomainConfig {
    DomainConfig {
        name: "Suicidal Ideation".to_string(),
        about: "Thoughts of self-harm or of being better off dead over the past \
                two weeks."
            .to_string(),
        about_link: "https://988lifeline.org".to_string(),
        scoring_method: ScoringMethod::MaxThreshold,
        answer_mapping: AnswerMapping::Default,
        t_score_type: TScoreType::None,
        questions: vec![screener("si_screen"), core("si_01")],
        intended_question_count: 1,
        individuals_experienced: "About 4% of adults report serious thoughts of suicide in a \
                                  given year."
            .to_string(),
        reference_intervals: vec![
            interval("No indication", 0.0, Some(0.9), "#4caf50"),
            interval("Further inquiry indicated", 1.0, None, "#f44336"),
        ],
    }
}
