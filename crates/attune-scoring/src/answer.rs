//! Answer value normalization.
//!
//! The single boundary where a loosely-typed answer token collapses into
//! `Option<f64>`. Numeric tokens always take precedence; free text gets a
//! best-effort phrase match for legacy answers; everything else is simply
//! not counted.

use attune_core::models::submission::AnswerToken;

use crate::config::AnswerMapping;

/// Phrase fragments recovered from legacy free-text answers, mapped onto
/// the 0–4 base severity scale. Matching is case-insensitive substring
/// containment; first hit wins, so the table order is load-bearing.
static PHRASE_VALUES: &[(&str, f64)] = &[
    ("not at all", 0.0),
    ("never", 0.0),
    ("none", 0.0),
    ("a little bit", 1.0),
    ("slight", 1.0),
    ("rarely", 1.0),
    ("mild", 1.0),
    ("somewhat", 2.0),
    ("sometimes", 2.0),
    ("occasionally", 2.0),
    ("moderate", 2.0),
    ("quite a bit", 3.0),
    ("often", 3.0),
    ("marked", 3.0),
    ("very much", 4.0),
    ("always", 4.0),
    ("severe", 4.0),
    ("extreme", 4.0),
];

/// Convert one raw token to the 0–4 base scale, best effort.
///
/// Numeric tokens are used as-is. Text is trimmed and parsed as a number
/// first; only unparseable text falls back to the phrase table. Empty,
/// missing, and unmatched tokens produce `None`.
pub fn base_value(token: &AnswerToken) -> Option<f64> {
    match token {
        AnswerToken::Number(n) => Some(*n),
        AnswerToken::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            if let Ok(n) = trimmed.parse::<f64>() {
                return Some(n);
            }
            let lowered = trimmed.to_lowercase();
            PHRASE_VALUES
                .iter()
                .find(|(phrase, _)| lowered.contains(phrase))
                .map(|(_, value)| *value)
        }
        AnswerToken::Missing | AnswerToken::Other(_) => None,
    }
}

/// Map one token onto the domain's answer scale.
///
/// `reverse` is the per-question reverse-keying flag from configuration;
/// it only affects the PROMIS mapping.
pub fn normalize(token: &AnswerToken, mapping: AnswerMapping, reverse: bool) -> Option<f64> {
    let base = base_value(token)?;
    let value = match mapping {
        AnswerMapping::Promis => {
            // Shift 0–4 onto the 1–5 PROMIS Likert scale.
            let shifted = base + 1.0;
            if reverse { 6.0 - shifted } else { shifted }
        }
        AnswerMapping::Phq15 => {
            // Collapse 0–4 onto PHQ-15's 0–2 scale.
            if base < 1.0 {
                0.0
            } else if base < 2.0 {
                1.0
            } else {
                2.0
            }
        }
        AnswerMapping::Default => base,
    };
    Some(value)
}
