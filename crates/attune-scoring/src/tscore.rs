//! Raw-score to T-score conversion tables.
//!
//! Fixed published lookup tables for the PROMIS short forms the survey
//! carries. T-scores are population-normed: mean 50, SD 10, higher = more
//! severe. A prorated raw total outside a table's key range has no defined
//! T-score and yields no score — the tables are never extrapolated.

use crate::config::TScoreType;

/// PROMIS Emotional Distress – Depression 8a (raw 8–40).
static DEPRESSION: &[(u32, f64)] = &[
    (8, 37.1),
    (9, 43.3),
    (10, 46.2),
    (11, 48.2),
    (12, 49.8),
    (13, 51.2),
    (14, 52.3),
    (15, 53.4),
    (16, 54.3),
    (17, 55.3),
    (18, 56.2),
    (19, 57.1),
    (20, 57.9),
    (21, 58.8),
    (22, 59.7),
    (23, 60.7),
    (24, 61.6),
    (25, 62.5),
    (26, 63.5),
    (27, 64.4),
    (28, 65.4),
    (29, 66.4),
    (30, 67.4),
    (31, 68.3),
    (32, 69.3),
    (33, 70.4),
    (34, 71.4),
    (35, 72.5),
    (36, 73.6),
    (37, 74.8),
    (38, 76.2),
    (39, 77.9),
    (40, 81.1),
];

/// PROMIS Emotional Distress – Anxiety 8a (raw 8–40).
static ANXIETY: &[(u32, f64)] = &[
    (8, 37.1),
    (9, 43.2),
    (10, 45.9),
    (11, 47.8),
    (12, 49.4),
    (13, 50.8),
    (14, 52.1),
    (15, 53.2),
    (16, 54.3),
    (17, 55.4),
    (18, 56.4),
    (19, 57.4),
    (20, 58.4),
    (21, 59.4),
    (22, 60.4),
    (23, 61.4),
    (24, 62.4),
    (25, 63.4),
    (26, 64.4),
    (27, 65.4),
    (28, 66.4),
    (29, 67.4),
    (30, 68.4),
    (31, 69.4),
    (32, 70.5),
    (33, 71.6),
    (34, 72.7),
    (35, 73.8),
    (36, 75.1),
    (37, 76.4),
    (38, 77.9),
    (39, 79.6),
    (40, 83.1),
];

/// PROMIS Emotional Distress – Anger 5a (raw 5–25).
static ANGER: &[(u32, f64)] = &[
    (5, 32.9),
    (6, 38.1),
    (7, 41.3),
    (8, 44.0),
    (9, 46.3),
    (10, 48.4),
    (11, 50.5),
    (12, 52.6),
    (13, 54.7),
    (14, 56.7),
    (15, 58.8),
    (16, 60.8),
    (17, 62.9),
    (18, 65.0),
    (19, 67.2),
    (20, 69.4),
    (21, 71.7),
    (22, 74.1),
    (23, 76.8),
    (24, 79.7),
    (25, 83.3),
];

/// PROMIS Sleep Disturbance 8a (raw 8–40).
static SLEEP: &[(u32, f64)] = &[
    (8, 28.9),
    (9, 33.1),
    (10, 35.9),
    (11, 38.0),
    (12, 39.8),
    (13, 41.4),
    (14, 42.9),
    (15, 44.2),
    (16, 45.5),
    (17, 46.7),
    (18, 47.9),
    (19, 49.0),
    (20, 50.1),
    (21, 51.2),
    (22, 52.2),
    (23, 53.3),
    (24, 54.3),
    (25, 55.3),
    (26, 56.3),
    (27, 57.3),
    (28, 58.3),
    (29, 59.4),
    (30, 60.4),
    (31, 61.5),
    (32, 62.6),
    (33, 63.7),
    (34, 64.9),
    (35, 66.1),
    (36, 67.5),
    (37, 69.0),
    (38, 70.8),
    (39, 73.0),
    (40, 76.5),
];

/// Look up the T-score for an integer raw total, if the table defines one.
pub fn t_score(t_score_type: TScoreType, raw: i64) -> Option<f64> {
    let table = match t_score_type {
        TScoreType::Depression => DEPRESSION,
        TScoreType::Anxiety => ANXIETY,
        TScoreType::Anger => ANGER,
        TScoreType::Sleep => SLEEP,
        TScoreType::None => return None,
    };

    let raw = u32::try_from(raw).ok()?;
    table.iter().find(|(r, _)| *r == raw).map(|(_, t)| *t)
}
