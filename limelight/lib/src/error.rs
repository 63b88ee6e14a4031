use thiserror::Error;

/// Errors produced while preparing a highlighted rendering.
#[derive(Debug, Error)]
pub enum HighlightError {
    /// The scope expression was rejected by the selector parser.
    #[error("Invalid CSS selector `{0}`")]
    InvalidSelector(String),
}

pub type Result<T> = std::result::Result<T, HighlightError>;
