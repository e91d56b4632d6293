//! Report assembly: one scored result per configured domain.

use tracing::{debug, info};

use attune_core::models::report::{DomainResult, IndividualData};
use attune_core::models::submission::Submission;

use crate::aggregate;
use crate::domains;
use crate::interpret;

/// Score every configured domain for one submission.
///
/// Results preserve registry order — downstream narrative generation
/// aligns its output to that order. Total for well-typed input: malformed
/// or missing answers degrade to "not counted" and are governed by the
/// completion gate, never by an error.
pub fn generate_report(submission: &Submission) -> IndividualData {
    let domains: Vec<DomainResult> = domains::registry()
        .iter()
        .map(|config| {
            let score = aggregate::score_domain(config, &submission.answers);
            let interpretation =
                interpret::interpret(score.final_score, &config.reference_intervals);
            debug!(
                domain = %config.name,
                raw = ?score.raw_score,
                t = ?score.t_score,
                %interpretation,
                "domain scored"
            );

            DomainResult {
                name: config.name.clone(),
                about: config.about.clone(),
                about_link: config.about_link.clone(),
                score: score.final_score,
                raw_score: score.raw_score,
                t_score: score.t_score,
                user_interpretation: interpretation,
                reference_intervals: config.reference_intervals.clone(),
                individuals_experienced: config.individuals_experienced.clone(),
                insights_and_support: String::new(),
            }
        })
        .collect();

    info!(
        submission_id = %submission.submission_id,
        domains = domains.len(),
        "report generated"
    );

    IndividualData {
        individual_id: submission.submission_id,
        first_name: submission.first_name.clone(),
        last_name: submission.last_name.clone(),
        email: submission.email.clone(),
        assessment_date: submission.assessment_date,
        domains,
    }
}
