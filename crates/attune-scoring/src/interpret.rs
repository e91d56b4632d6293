//! Severity band classification.

use attune_core::models::report::ReferenceInterval;

/// Interpretation when the completion gate (or a T-score lookup) produced
/// no score.
pub const INCOMPLETE: &str = "Incomplete Assessment";

/// Interpretation when no configured band matches. Should not occur with
/// well-formed intervals covering the full attainable range.
pub const NOT_CLASSIFIED: &str = "Not Classified";

/// Classify a final score into its severity band.
///
/// Intervals are scanned in configured order and the first match wins; the
/// classifier never re-sorts them, so overlap resolution is owned by the
/// configuration.
pub fn interpret(score: Option<f64>, intervals: &[ReferenceInterval]) -> String {
    let Some(score) = score else {
        return INCOMPLETE.to_string();
    };

    intervals
        .iter()
        .find(|band| score >= band.min && band.max.is_none_or(|max| score <= max))
        .map(|band| band.label.clone())
        .unwrap_or_else(|| NOT_CLASSIFIED.to_string())
}
