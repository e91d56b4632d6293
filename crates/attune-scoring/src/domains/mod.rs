//! The fixed domain configuration registry.
//!
//! One module per wellness domain, each mirroring the standardized
//! instrument it is drawn from. Registry order is a hard contract: report
//! output and the narrative collaborator both align to it.

pub mod anger;
pub mod anxiety;
pub mod depression;
pub mod sleep;
pub mod somatic;
pub mod stress;
pub mod suicidal_ideation;

use std::sync::LazyLock;

use attune_core::models::report::ReferenceInterval;

use crate::config::{DomainConfig, QuestionRef};

/// All configured domains, in report order. Built once per process and
/// never written afterwards.
pub fn registry() -> &'static [DomainConfig] {
    static REGISTRY: LazyLock<Vec<DomainConfig>> = LazyLock::new(|| {
        vec![
            depression::config(),
            anxiety::config(),
            anger::config(),
            sleep::config(),
            somatic::config(),
            stress::config(),
            suicidal_ideation::config(),
        ]
    });
    &REGISTRY
}

/// Look up a domain by display name, case-insensitive.
pub fn get_domain(name: &str) -> Option<&'static DomainConfig> {
    registry().iter().find(|d| d.name.eq_ignore_ascii_case(name))
}

pub(crate) fn core(id: &str) -> QuestionRef {
    QuestionRef {
        id: id.to_string(),
        is_core: true,
        reverse: false,
    }
}

pub(crate) fn core_reversed(id: &str) -> QuestionRef {
    QuestionRef {
        id: id.to_string(),
        is_core: true,
        reverse: true,
    }
}

pub(crate) fn screener(id: &str) -> QuestionRef {
    QuestionRef {
        id: id.to_string(),
        is_core: false,
        reverse: false,
    }
}

pub(crate) fn interval(label: &str, min: f64, max: Option<f64>, color: &str) -> ReferenceInterval {
    ReferenceInterval {
        label: label.to_string(),
        min,
        max,
        color: color.to_string(),
    }
}

/// Severity bands shared by the four T-scored PROMIS domains.
pub(crate) fn t_score_bands() -> Vec<ReferenceInterval> {
    vec![
        interval("None to Slight", 0.0, Some(54.9), "#4caf50"),
        interval("Mild", 55.0, Some(59.9), "#ffc107"),
        interval("Moderate", 60.0, Some(69.9), "#ff9800"),
        interval("Severe", 70.0, None, "#f44336"),
    ]
}
