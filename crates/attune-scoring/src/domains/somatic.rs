use crate::config::{AnswerMapping, DomainConfig, ScoringMethod, TScoreType};
use crate::domains::{core, interval};

/// Somatic Symptoms: PHQ-15. Fifteen items on a 0–2 bother scale, summed
/// directly; no T-score table exists for this instrument.
pub fn config() -> DomainConfig {
    let items = [
        "som_01", // stomach pain
        "som_02", // back pain
        "som_03", // limb or joint pain
        "som_04", // headaches
        "som_05", // chest pain
        "som_06", // dizziness
        "som_07", // fainting spells
        "som_08", // heart racing
        "som_09", // shortness of breath
        "som_10", // menstrual problems
        "som_11", // pain during intercourse
        "som_12", // constipation or diarrhea
        "som_13", // nausea or indigestion
        "som_14", // feeling tired
        "som_15", // trouble sleeping
    ];

    DomainConfig {
        name: "Somatic Symptoms".to_string(),
        about: "Physical symptoms such as pain, dizziness, and fatigue that can \
                accompany or mask emotional distress."
            .to_string(),
        about_link: "https://www.phqscreeners.com".to_string(),
        scoring_method: ScoringMethod::Sum,
        answer_mapping: AnswerMapping::Phq15,
        t_score_type: TScoreType::None,
        questions: items.iter().map(|id| core(id)).collect(),
        intended_question_count: 15,
        individuals_experienced: "Up to 1 in 3 primary care visits involve physical symptoms \
                                  without a clear medical cause."
            .to_string(),
        reference_intervals: vec![
            interval("Minimal", 0.0, Some(4.9), "#4caf50"),
            interval("Low", 5.0, Some(9.9), "#ffc107"),
            interval("Medium", 10.0, Some(14.9), "#ff9800"),
            interval("High", 15.0, None, "#f44336"),
        ],
    }
}
