use crate::config::{AnswerMapping, DomainConfig, ScoringMethod, TScoreType};
use crate::domains::{core, screener, t_score_bands};

/// Depression: PROMIS Emotional Distress – Depression Short Form 8a.
/// Eight core items on the 1–5 Likert scale; prorated sum converted to a
/// population-normed T-score (mean 50, SD 10).
pub fn config() -> DomainConfig {
    DomainConfig {
        name: "Depression".to_string(),
        about: "Persistent low mood, loss of interest, and feelings of \
                worthlessness or hopelessness over the past seven days."
            .to_string(),
        about_link: "https://www.healthmeasures.net/explore-measurement-systems/promis"
            .to_string(),
        scoring_method: ScoringMethod::Sum,
        answer_mapping: AnswerMapping::Promis,
        t_score_type: TScoreType::Depression,
        questions: vec![
            screener("dep_screen"),
            core("dep_01"), // worthless
            core("dep_02"), // helpless
            core("dep_03"), // depressed
            core("dep_04"), // hopeless
            core("dep_05"), // like a failure
            core("dep_06"), // unhappy
            core("dep_07"), // nothing to look forward to
            core("dep_08"), // nothing could cheer me up
        ],
        intended_question_count: 8,
        individuals_experienced: "Around 1 in 5 adults report a period of depressed mood in \
                                  any given year."
            .to_string(),
        reference_intervals: t_score_bands(),
    }
}
