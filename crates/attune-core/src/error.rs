use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("expected {expected} insight entries, got {actual}")]
    InsightCountMismatch { expected: usize, actual: usize },
}
