use std::collections::HashMap;

use attune_core::models::submission::{AnswerToken, Submission};
use attune_scoring::{generate_report, registry};
use uuid::Uuid;

fn submission(answers: HashMap<String, AnswerToken>) -> Submission {
    Submission {
        submission_id: Uuid::new_v4(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.org".to_string(),
        assessment_date: "2026-08-05T09:30:00Z".parse().unwrap(),
        answers,
    }
}

fn number_answers(pairs: &[(&str, f64)]) -> HashMap<String, AnswerToken> {
    pairs
        .iter()
        .map(|(id, v)| (id.to_string(), AnswerToken::Number(*v)))
        .collect()
}

fn domain<'a>(
    report: &'a attune_core::models::report::IndividualData,
    name: &str,
) -> &'a attune_core::models::report::DomainResult {
    report
        .domains
        .iter()
        .find(|d| d.name == name)
        .unwrap_or_else(|| panic!("no domain named {name}"))
}

#[test]
fn empty_submissions_yield_incomplete_domains_in_registry_order() {
    let report = generate_report(&submission(HashMap::new()));

    let expected: Vec<&str> = registry().iter().map(|d| d.name.as_str()).collect();
    let actual: Vec<&str> = report.domains.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(actual, expected);

    for result in &report.domains {
        assert_eq!(result.score, None);
        assert_eq!(result.raw_score, None);
        assert_eq!(result.t_score, None);
        assert_eq!(result.user_interpretation, "Incomplete Assessment");
        assert!(result.insights_and_support.is_empty());
        assert!(!result.reference_intervals.is_empty());
    }
}

#[test]
fn depression_raw_20_scores_mild() {
    let answers = number_answers(&[
        ("dep_01", 1.0),
        ("dep_02", 1.0),
        ("dep_03", 1.0),
        ("dep_04", 1.0),
        ("dep_05", 2.0),
        ("dep_06", 2.0),
        ("dep_07", 2.0),
        ("dep_08", 2.0),
    ]);
    let report = generate_report(&submission(answers));

    let dep = domain(&report, "Depression");
    assert_eq!(dep.raw_score, Some(20.0));
    assert_eq!(dep.t_score, Some(57.9));
    assert_eq!(dep.score, Some(57.9));
    assert_eq!(dep.user_interpretation, "Mild");
}

#[test]
fn depression_raw_30_scores_moderate() {
    let answers = number_answers(&[
        ("dep_01", 3.0),
        ("dep_02", 3.0),
        ("dep_03", 3.0),
        ("dep_04", 3.0),
        ("dep_05", 3.0),
        ("dep_06", 3.0),
        ("dep_07", 2.0),
        ("dep_08", 2.0),
    ]);
    let report = generate_report(&submission(answers));

    let dep = domain(&report, "Depression");
    assert_eq!(dep.raw_score, Some(30.0));
    assert_eq!(dep.t_score, Some(67.4));
    assert_eq!(dep.user_interpretation, "Moderate");
}

#[test]
fn partially_answered_instruments_prorate() {
    // Six of eight intended items answered at base 2: mean 3 on the
    // Likert scale, prorated raw 24.
    let answers = number_answers(&[
        ("dep_01", 2.0),
        ("dep_02", 2.0),
        ("dep_03", 2.0),
        ("dep_04", 2.0),
        ("dep_05", 2.0),
        ("dep_06", 2.0),
    ]);
    let report = generate_report(&submission(answers));

    let dep = domain(&report, "Depression");
    assert_eq!(dep.raw_score, Some(24.0));
    assert_eq!(dep.t_score, Some(61.6));
    assert_eq!(dep.user_interpretation, "Moderate");
}

#[test]
fn five_of_eight_answers_is_incomplete() {
    let answers = number_answers(&[
        ("anx_01", 2.0),
        ("anx_02", 2.0),
        ("anx_03", 2.0),
        ("anx_04", 2.0),
        ("anx_05", 2.0),
    ]);
    let report = generate_report(&submission(answers));

    let anx = domain(&report, "Anxiety");
    assert_eq!(anx.score, None);
    assert_eq!(anx.user_interpretation, "Incomplete Assessment");
}

#[test]
fn sleep_reverse_items_flip_before_summing() {
    // All zeros: the six straight items normalize to 1, the two
    // reverse-keyed items to 5. Raw 16 converts to T 45.5.
    let answers = number_answers(&[
        ("slp_01", 0.0),
        ("slp_02", 0.0),
        ("slp_03", 0.0),
        ("slp_04", 0.0),
        ("slp_05", 0.0),
        ("slp_06", 0.0),
        ("slp_07", 0.0),
        ("slp_08", 0.0),
    ]);
    let report = generate_report(&submission(answers));

    let sleep = domain(&report, "Sleep Disturbance");
    assert_eq!(sleep.raw_score, Some(16.0));
    assert_eq!(sleep.t_score, Some(45.5));
    assert_eq!(sleep.user_interpretation, "None to Slight");
}

#[test]
fn somatic_symptoms_sum_on_the_collapsed_scale() {
    // Base 3 collapses to 2 under the PHQ-15 mapping: raw 30, "High".
    let answers: HashMap<String, AnswerToken> = (1..=15)
        .map(|i| (format!("som_{i:02}"), AnswerToken::Number(3.0)))
        .collect();
    let report = generate_report(&submission(answers));

    let som = domain(&report, "Somatic Symptoms");
    assert_eq!(som.raw_score, Some(30.0));
    assert_eq!(som.t_score, None);
    assert_eq!(som.score, Some(30.0));
    assert_eq!(som.user_interpretation, "High");
}

#[test]
fn perceived_stress_averages_to_one_decimal() {
    let answers = number_answers(&[
        ("str_01", 2.0),
        ("str_02", 3.0),
        ("str_03", 3.0),
        ("str_04", 2.0),
    ]);
    let report = generate_report(&submission(answers));

    let stress = domain(&report, "Perceived Stress");
    assert_eq!(stress.score, Some(2.5));
    assert_eq!(stress.user_interpretation, "Moderate");
}

#[test]
fn a_slight_answer_on_the_safety_screen_flags_follow_up() {
    let mut answers = HashMap::new();
    answers.insert("si_01".to_string(), AnswerToken::Text("slight".to_string()));
    let report = generate_report(&submission(answers));

    let si = domain(&report, "Suicidal Ideation");
    assert_eq!(si.raw_score, Some(1.0));
    assert_eq!(si.score, Some(1.0));
    assert_eq!(si.user_interpretation, "Further inquiry indicated");
}

#[test]
fn report_generation_is_deterministic() {
    let answers = number_answers(&[
        ("dep_01", 1.0),
        ("dep_02", 2.0),
        ("dep_03", 3.0),
        ("dep_04", 1.0),
        ("dep_05", 2.0),
        ("dep_06", 3.0),
        ("dep_07", 1.0),
        ("dep_08", 2.0),
        ("str_01", 2.0),
        ("str_02", 3.0),
        ("str_03", 1.0),
        ("str_04", 0.0),
        ("si_01", 0.0),
    ]);
    let sub = submission(answers);

    let first = serde_json::to_value(generate_report(&sub)).unwrap();
    let second = serde_json::to_value(generate_report(&sub)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn insights_attach_in_domain_order() {
    let report = generate_report(&submission(HashMap::new()));

    let insights: Vec<String> = report
        .domains
        .iter()
        .map(|d| format!("insight for {}", d.name))
        .collect();
    let updated = report.with_insights(&insights).unwrap();

    for (result, insight) in updated.domains.iter().zip(&insights) {
        assert_eq!(&result.insights_and_support, insight);
    }
    // The engine's output itself stays untouched.
    assert!(report
        .domains
        .iter()
        .all(|d| d.insights_and_support.is_empty()));
}
