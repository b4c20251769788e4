use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Validation error: {0}")]
    Validation(String),
}
