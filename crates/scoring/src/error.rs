use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Not found")]
    NotFound,

    #[error("Unknown category: '{0}'. Available: men, women")]
    UnknownCategory(String),

    #[error("Invalid snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScoringError>;

impl ScoringError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ScoringError::NotFound)
    }
}
